// SPDX-License-Identifier: MPL-2.0
//! Notification state ownership and lifecycle management.
//!
//! The `Provider` owns the list of active notifications and is the only
//! place where it is mutated. All operations are synchronous and meant to
//! be called from the application's single update loop; asynchronous
//! callers go through a [`Handle`](super::Handle) whose commands are
//! drained by [`Provider::poll`].

use super::handle::{Command, Handle};
use super::notification::{
    AutoDismiss, Kind, Notification, NotificationId, Options, Patch, Position,
};
use crate::config::defaults::{DEFAULT_DURATION_MS, DEFAULT_MAX_NOTIFICATIONS};
use crate::diagnostics::DiagnosticsHandle;
use std::time::Instant;
use tokio::sync::mpsc;

/// Runtime configuration of a [`Provider`], usually produced by
/// [`Config::resolve`](crate::config::Config::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Active-list capacity; the oldest records are truncated first.
    pub max_notifications: usize,
    /// Duration applied to notifications created without one.
    pub default_duration: AutoDismiss,
    /// Anchor applied to notifications created without one.
    pub default_position: Position,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
            default_duration: AutoDismiss::after_millis(DEFAULT_DURATION_MS),
            default_position: Position::default(),
        }
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Begin the exit transition for a specific notification.
    Dismiss(NotificationId),
    /// Periodic tick driving countdowns, exit transitions, and pending
    /// handle commands.
    Tick(Instant),
}

/// Owns the active notification list and exposes every mutation on it.
#[derive(Debug)]
pub struct Provider {
    config: ProviderConfig,
    notifications: Vec<Notification>,
    command_tx: mpsc::UnboundedSender<Command>,
    command_rx: mpsc::UnboundedReceiver<Command>,
    /// Optional diagnostics handle mirroring warning/error notifications.
    diagnostics: Option<DiagnosticsHandle>,
    /// Time of the last processed tick, used by the view layer so
    /// progress rendering stays in step with the tick cadence.
    last_tick: Instant,
}

impl Default for Provider {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

impl Provider {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        Self {
            config,
            notifications: Vec::new(),
            command_tx,
            command_rx,
            diagnostics: None,
            last_tick: Instant::now(),
        }
    }

    /// Mints a cheap, cloneable handle bound to this provider. Handles
    /// fail fast once the provider is dropped.
    #[must_use]
    pub fn handle(&self) -> Handle {
        Handle::new(self.command_tx.clone())
    }

    /// Sets the diagnostics handle; warning, error, and violation
    /// notifications are mirrored into it as events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Creates a notification, filling unset fields from the configured
    /// defaults, and returns its id. When the active list exceeds
    /// capacity the oldest records are truncated from the front.
    pub fn create(&mut self, options: Options) -> NotificationId {
        let id = NotificationId::new();
        self.insert(id, options);
        id
    }

    pub fn success(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.create(options.kind(Kind::Success).message(message))
    }

    pub fn error(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.create(options.kind(Kind::Error).message(message))
    }

    pub fn warning(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.create(options.kind(Kind::Warning).message(message))
    }

    pub fn violation(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.create(options.kind(Kind::Violation).message(message))
    }

    pub fn info(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        self.create(options.kind(Kind::Info).message(message))
    }

    /// Removes a notification immediately, skipping the exit transition.
    ///
    /// Returns `true` if the notification was found; removing an absent
    /// id is a harmless no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(index) = self.notifications.iter().position(|n| n.id() == id) {
            self.notifications.remove(index);
            return true;
        }
        false
    }

    /// Begins the exit transition for a notification (the manual close
    /// path); the record is removed once the transition elapses. No-op
    /// for absent ids.
    pub fn dismiss(&mut self, id: NotificationId) {
        let now = Instant::now();
        if let Some(n) = self.get_mut(id) {
            n.begin_exit(now);
        }
    }

    /// Merges a partial update into the notification with the given id.
    ///
    /// Returns `true` if the notification was found; updating an absent
    /// id is a harmless no-op.
    pub fn update(&mut self, id: NotificationId, patch: Patch) -> bool {
        match self.get_mut(id) {
            Some(n) => {
                n.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Removes every active notification immediately.
    pub fn clear_all(&mut self) {
        self.notifications.clear();
    }

    /// Advances all per-record timers: expired visible records start
    /// their exit transition, and finished exits are removed.
    ///
    /// Should be called from a fine-grained tick subscription (50 ms)
    /// while notifications are active.
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = now;
        for n in &mut self.notifications {
            if !n.is_exiting() {
                if let Some(deadline) = n.deadline() {
                    if now >= deadline {
                        n.begin_exit(now);
                    }
                }
            }
        }
        self.notifications.retain(|n| !n.exit_finished(now));
    }

    /// Drains pending handle commands into the active list. Serialized
    /// with every other mutation by virtue of running in the single
    /// update loop.
    pub fn poll(&mut self) {
        while let Ok(command) = self.command_rx.try_recv() {
            match command {
                Command::Create { id, options } => self.insert(id, *options),
                Command::Remove(id) => {
                    self.remove(id);
                }
                Command::Dismiss(id) => self.dismiss(id),
                Command::Update(id, patch) => {
                    self.update(id, patch);
                }
                Command::ClearAll => self.clear_all(),
            }
        }
    }

    /// Handles a notification message emitted by the widgets or the tick
    /// subscription.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
            Message::Tick(now) => {
                self.poll();
                self.tick(now);
            }
        }
    }

    /// Returns the active notifications in insertion order.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    /// Time of the last processed tick.
    #[must_use]
    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id() == id)
    }

    fn insert(&mut self, id: NotificationId, options: Options) {
        let notification = Notification::from_options(
            id,
            options,
            self.config.default_duration,
            self.config.default_position,
        );

        if let Some(handle) = &self.diagnostics {
            match notification.kind() {
                Kind::Warning => handle.log_warning(notification.message()),
                Kind::Error | Kind::Violation => handle.log_error(notification.message()),
                Kind::Success | Kind::Info => {}
            }
        }

        self.notifications.push(notification);
        // Truncate oldest first when over capacity.
        while self.notifications.len() > self.config.max_notifications {
            self.notifications.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn small_provider(max: usize) -> Provider {
        Provider::new(ProviderConfig {
            max_notifications: max,
            ..ProviderConfig::default()
        })
    }

    #[test]
    fn new_provider_is_empty() {
        let provider = Provider::default();
        assert_eq!(provider.len(), 0);
        assert!(!provider.has_notifications());
    }

    #[test]
    fn create_returns_id_of_inserted_record() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new().message("hello"));

        assert_eq!(provider.len(), 1);
        let n = provider.get(id).expect("record should exist");
        assert_eq!(n.message(), "hello");
    }

    #[test]
    fn create_never_reuses_an_active_id() {
        let mut provider = Provider::default();
        let mut seen = Vec::new();
        for _ in 0..10 {
            let id = provider.create(Options::new());
            assert!(!seen.contains(&id));
            seen.push(id);
        }
    }

    #[test]
    fn capacity_truncates_oldest_first() {
        let mut provider = small_provider(2);
        provider.create(Options::new().message("first"));
        let second = provider.create(Options::new().message("second"));
        let third = provider.create(Options::new().message("third"));

        assert_eq!(provider.len(), 2);
        let messages: Vec<_> = provider.notifications().map(|n| n.message()).collect();
        assert_eq!(messages, ["second", "third"]);
        assert!(provider.get(second).is_some());
        assert!(provider.get(third).is_some());
    }

    #[test]
    fn capacity_holds_for_any_create_sequence() {
        let mut provider = small_provider(5);
        for i in 0..25 {
            provider.create(Options::new().message(format!("n{i}")));
            assert!(provider.len() <= 5);
        }
        let messages: Vec<_> = provider.notifications().map(|n| n.message()).collect();
        assert_eq!(messages, ["n20", "n21", "n22", "n23", "n24"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new());

        assert!(provider.remove(id));
        assert!(!provider.remove(id));
        assert_eq!(provider.len(), 0);
    }

    #[test]
    fn update_merges_partial_fields() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new().kind(Kind::Info).message("loading"));

        let updated = provider.update(id, Patch::new().kind(Kind::Success).message("done"));
        assert!(updated);

        let n = provider.get(id).unwrap();
        assert_eq!(n.kind(), Kind::Success);
        assert_eq!(n.message(), "done");
        assert!(n.show_close());
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new());
        provider.remove(id);

        assert!(!provider.update(id, Patch::new().message("ghost")));
    }

    #[test]
    fn shorthand_creators_set_kind() {
        let mut provider = Provider::default();
        let cases: [(NotificationId, Kind); 5] = [
            (provider.success("s", Options::new()), Kind::Success),
            (provider.error("e", Options::new()), Kind::Error),
            (provider.warning("w", Options::new()), Kind::Warning),
            (provider.violation("v", Options::new()), Kind::Violation),
            (provider.info("i", Options::new()), Kind::Info),
        ];
        for (id, kind) in cases {
            assert_eq!(provider.get(id).unwrap().kind(), kind);
        }
    }

    #[test]
    fn clear_all_removes_everything() {
        let mut provider = Provider::default();
        for _ in 0..3 {
            provider.create(Options::new());
        }
        provider.clear_all();
        assert!(provider.is_empty());
    }

    #[test]
    fn tick_expires_timed_records_through_exit_transition() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new().duration(AutoDismiss::after_millis(1000)));
        let start = provider.get(id).unwrap().created_at();

        // Before the deadline nothing happens.
        provider.tick(start + Duration::from_millis(500));
        assert!(!provider.get(id).unwrap().is_exiting());

        // Past the deadline the card starts exiting but is still listed.
        provider.tick(start + Duration::from_millis(1100));
        assert!(provider.get(id).unwrap().is_exiting());

        // Once the exit transition elapses the record is gone.
        provider.tick(start + Duration::from_millis(1400));
        assert!(provider.get(id).is_none());
    }

    #[test]
    fn persistent_records_survive_ticks() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new().persistent());
        let start = provider.get(id).unwrap().created_at();

        provider.tick(start + Duration::from_secs(3600));
        assert!(provider.get(id).is_some());
    }

    #[test]
    fn dismiss_plays_exit_then_removes() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new().persistent());

        provider.dismiss(id);
        assert!(provider.get(id).unwrap().is_exiting());

        provider.tick(Instant::now() + Duration::from_millis(300));
        assert!(provider.get(id).is_none());
    }

    #[test]
    fn dismiss_missing_id_is_noop() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new());
        provider.remove(id);
        provider.dismiss(id);
        assert!(provider.is_empty());
    }

    #[test]
    fn handle_message_dismiss_and_tick() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new().persistent());

        provider.handle_message(Message::Dismiss(id));
        assert!(provider.get(id).unwrap().is_exiting());

        provider.handle_message(Message::Tick(Instant::now() + Duration::from_millis(300)));
        assert!(provider.is_empty());
    }

    #[test]
    fn diagnostics_receive_error_and_warning_creations() {
        use crate::diagnostics::DiagnosticsCollector;

        let mut collector = DiagnosticsCollector::new(16);
        let mut provider = Provider::default();
        provider.set_diagnostics(collector.handle());

        provider.error("boom", Options::new());
        provider.warning("careful", Options::new());
        provider.violation("not allowed", Options::new());
        provider.success("fine", Options::new());

        collector.process_pending();
        assert_eq!(collector.len(), 3);
    }
}
