// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record together with the
//! supporting types used to create (`Options`) and mutate (`Patch`) it.

use crate::config::defaults::EXIT_TRANSITION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Classification of a notification, determining its visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    /// Policy or validation violations, visually close to errors.
    Violation,
    #[default]
    Info,
}

impl Kind {
    pub const ALL: [Kind; 5] = [
        Kind::Success,
        Kind::Error,
        Kind::Warning,
        Kind::Violation,
        Kind::Info,
    ];

    /// Parses a kind name, returning `None` for unknown names so callers
    /// can fall back to the default kind.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "success" => Some(Kind::Success),
            "error" => Some(Kind::Error),
            "warning" => Some(Kind::Warning),
            "violation" => Some(Kind::Violation),
            "info" => Some(Kind::Info),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Violation => "violation",
            Kind::Info => "info",
        }
    }

    /// Returns the background color for this kind.
    #[must_use]
    pub fn background(&self) -> Color {
        match self {
            Kind::Success => palette::toast::SUCCESS_BG,
            Kind::Error => palette::toast::ERROR_BG,
            Kind::Warning => palette::toast::WARNING_BG,
            Kind::Violation => palette::toast::VIOLATION_BG,
            Kind::Info => palette::toast::INFO_BG,
        }
    }

    /// Returns the text color for this kind.
    #[must_use]
    pub fn text(&self) -> Color {
        match self {
            Kind::Success => palette::toast::SUCCESS_TEXT,
            Kind::Error => palette::toast::ERROR_TEXT,
            Kind::Warning => palette::toast::WARNING_TEXT,
            Kind::Violation => palette::toast::VIOLATION_TEXT,
            Kind::Info => palette::toast::INFO_TEXT,
        }
    }

    /// Returns the border color for this kind.
    #[must_use]
    pub fn border(&self) -> Color {
        match self {
            Kind::Success => palette::toast::SUCCESS_BORDER,
            Kind::Error => palette::toast::ERROR_BORDER,
            Kind::Warning => palette::toast::WARNING_BORDER,
            Kind::Violation => palette::toast::VIOLATION_BORDER,
            Kind::Info => palette::toast::INFO_BORDER,
        }
    }
}

/// One of the six fixed screen anchors where a stack of notifications renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Parses a position name (`"top-right"`, `"bottom-center"`, ...),
    /// returning `None` for unknown names so callers can fall back to the
    /// configured default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top-left" => Some(Position::TopLeft),
            "top-center" => Some(Position::TopCenter),
            "top-right" => Some(Position::TopRight),
            "bottom-left" => Some(Position::BottomLeft),
            "bottom-center" => Some(Position::BottomCenter),
            "bottom-right" => Some(Position::BottomRight),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

/// Auto-dismiss behavior requested for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDismiss {
    /// Dismiss automatically once the given span has elapsed.
    After(Duration),
    /// Persistent: the notification stays until closed or removed.
    Never,
}

impl AutoDismiss {
    #[must_use]
    pub fn after_millis(ms: u64) -> Self {
        AutoDismiss::After(Duration::from_millis(ms))
    }

    fn as_duration(self) -> Option<Duration> {
        match self {
            AutoDismiss::After(duration) => Some(duration),
            AutoDismiss::Never => None,
        }
    }
}

/// Per-notification color overrides layered on top of the kind's palette.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverride {
    pub background: Option<Color>,
    pub text: Option<Color>,
    pub border: Option<Color>,
}

/// Lifecycle phase of a card: `Visible` until closed or expired, then
/// `Exiting` while the outward transition plays, then removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Exiting { since: Instant },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    /// Auto-dismiss span; `None` means the notification is persistent.
    duration: Option<Duration>,
    show_close: bool,
    style: Option<StyleOverride>,
    position: Position,
    /// Start of the countdown. Reset when the duration is patched.
    created_at: Instant,
    phase: Phase,
}

/// Optional fields supplied when creating a notification. Unset fields
/// are filled from the provider's configured defaults.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub kind: Option<Kind>,
    pub message: Option<String>,
    pub duration: Option<AutoDismiss>,
    pub show_close: Option<bool>,
    pub style: Option<StyleOverride>,
    pub position: Option<Position>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: AutoDismiss) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Shorthand for a notification that never auto-dismisses.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(AutoDismiss::Never)
    }

    #[must_use]
    pub fn show_close(mut self, show_close: bool) -> Self {
        self.show_close = Some(show_close);
        self
    }

    #[must_use]
    pub fn style(mut self, style: StyleOverride) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Partial update merged into an existing notification by id. Unset
/// fields leave the record unchanged.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    pub kind: Option<Kind>,
    pub message: Option<String>,
    pub duration: Option<AutoDismiss>,
    pub show_close: Option<bool>,
    pub style: Option<StyleOverride>,
    pub position: Option<Position>,
}

impl Patch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: AutoDismiss) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn show_close(mut self, show_close: bool) -> Self {
        self.show_close = Some(show_close);
        self
    }

    #[must_use]
    pub fn style(mut self, style: StyleOverride) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Fallback message when none is supplied at creation.
const DEFAULT_MESSAGE: &str = "Notification";

impl Notification {
    /// Builds a record from creation options, filling unset fields from
    /// the given defaults. All defaults are resolved here, at creation
    /// time, so the record carries concrete values from then on.
    pub(crate) fn from_options(
        id: NotificationId,
        options: Options,
        default_duration: AutoDismiss,
        default_position: Position,
    ) -> Self {
        Self {
            id,
            kind: options.kind.unwrap_or_default(),
            message: options
                .message
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            duration: options
                .duration
                .unwrap_or(default_duration)
                .as_duration(),
            show_close: options.show_close.unwrap_or(true),
            style: options.style,
            position: options.position.unwrap_or(default_position),
            created_at: Instant::now(),
            phase: Phase::Visible,
        }
    }

    /// Merges a partial update into this record.
    ///
    /// Patching the duration restarts the countdown and returns an
    /// exiting card to `Visible`, mirroring how the promise helper
    /// re-arms the timer when it transitions a loading record.
    pub(crate) fn apply(&mut self, patch: Patch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration.as_duration();
            self.created_at = Instant::now();
            self.phase = Phase::Visible;
        }
        if let Some(show_close) = patch.show_close {
            self.show_close = show_close;
        }
        if let Some(style) = patch.style {
            self.style = Some(style);
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
    }

    /// Begins the exit transition. No-op if the card is already exiting.
    pub(crate) fn begin_exit(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Visible) {
            self.phase = Phase::Exiting { since: now };
        }
    }

    /// Returns whether the exit transition has finished and the record
    /// should be removed from the active list.
    pub(crate) fn exit_finished(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Exiting { since } => {
                now.duration_since(since) >= Duration::from_millis(EXIT_TRANSITION_MS)
            }
            Phase::Visible => false,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the auto-dismiss span, or `None` for persistent records.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn show_close(&self) -> bool {
        self.show_close
    }

    #[must_use]
    pub fn style(&self) -> Option<StyleOverride> {
        self.style
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Moment at which the countdown elapses, or `None` for persistent
    /// records.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.duration.map(|d| self.created_at + d)
    }

    /// Remaining-time fraction in `0.0..=1.0` for the progress indicator,
    /// or `None` for persistent records.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let duration = self.duration?;
        if duration.is_zero() {
            return Some(0.0);
        }
        let remaining = duration.saturating_sub(now.duration_since(self.created_at));
        Some((remaining.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0))
    }

    /// Opacity of the card: fades from 1 to 0 across the exit transition.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Visible => 1.0,
            Phase::Exiting { since } => {
                let elapsed = now.duration_since(since).as_secs_f32();
                let total = Duration::from_millis(EXIT_TRANSITION_MS).as_secs_f32();
                (1.0 - elapsed / total).clamp(0.0, 1.0)
            }
        }
    }
}
