// SPDX-License-Identifier: MPL-2.0
//! Demo application state and orchestration for the notification system.
//!
//! The `App` struct wires the provider, its handle, and the diagnostics
//! collector into a small Iced program: buttons produce notifications of
//! every kind, a simulated save exercises the promise helper, and the
//! toast overlay is stacked over the content. This file intentionally
//! keeps policy decisions (tick cadence, demo task behavior) close to
//! the main update loop so it is easy to audit user-facing behavior.

use crate::config;
use crate::config::defaults::{DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, TICK_INTERVAL_MS};
use crate::diagnostics::DiagnosticsCollector;
use crate::notifications::{
    self, Handle, Kind, Options, Position, PromiseMessages, Provider,
};
use crate::ui::container;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{time, Element, Length, Subscription, Task, Theme};
use std::time::Duration;

/// Root demo application state.
pub struct App {
    provider: Provider,
    handle: Handle,
    diagnostics: DiagnosticsCollector,
    /// Anchor applied to the next demo notification.
    position: Position,
    /// Whether the simulated save task is in flight.
    task_running: bool,
    /// Counter alternating the simulated task between success and failure.
    task_counter: u32,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Produce a notification of the given kind at the current anchor.
    Notify(Kind),
    /// Cycle the anchor used for the next notifications.
    CyclePosition,
    /// Start the simulated save driven through the promise helper.
    RunTask,
    /// The simulated save settled with the given outcome.
    TaskFinished(Result<String, String>),
    ClearAll,
    Notification(notifications::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional override for the active-list capacity.
    pub max: Option<usize>,
    /// Optional default anchor name (e.g. `bottom-center`). Unknown
    /// names fall back to the configured default.
    pub position: Option<String>,
}

impl App {
    #[must_use]
    pub fn new(flags: &Flags) -> Self {
        let mut file_config = config::load().unwrap_or_default();
        if let Some(max) = flags.max {
            file_config.max_notifications = Some(max);
        }
        if let Some(position) = &flags.position {
            file_config.default_position = Some(position.clone());
        }

        let resolved = file_config.resolve();
        let diagnostics = DiagnosticsCollector::new(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
        let mut provider = Provider::new(resolved);
        provider.set_diagnostics(diagnostics.handle());
        let handle = provider.handle();
        let position = resolved.default_position;

        Self {
            provider,
            handle,
            diagnostics,
            position,
            task_running: false,
            task_counter: 0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Apply queued handle commands before the message itself so the
        // promise helper's updates are never starved.
        self.provider.poll();

        match message {
            Message::Notify(kind) => {
                let options = Options::new().position(self.position);
                let label = demo_message(kind);
                match kind {
                    Kind::Success => self.provider.success(label, options),
                    Kind::Error => self.provider.error(label, options),
                    Kind::Warning => self.provider.warning(label, options),
                    Kind::Violation => self.provider.violation(label, options),
                    Kind::Info => self.provider.info(label, options),
                };
                Task::none()
            }
            Message::CyclePosition => {
                self.position = next_position(self.position);
                Task::none()
            }
            Message::RunTask => {
                self.task_running = true;
                self.task_counter += 1;
                let succeed = self.task_counter % 2 == 1;
                let handle = self.handle.clone();
                let options = Options::new().position(self.position);

                Task::perform(
                    async move {
                        let outcome = handle
                            .promise(
                                simulated_save(succeed),
                                PromiseMessages::new()
                                    .loading("Saving document...")
                                    .success("Document saved"),
                                options,
                            )
                            .await;
                        match outcome {
                            Ok(result) => result,
                            Err(err) => Err(err.to_string()),
                        }
                    },
                    Message::TaskFinished,
                )
            }
            Message::TaskFinished(_) => {
                self.task_running = false;
                self.provider.poll();
                Task::none()
            }
            Message::ClearAll => {
                self.provider.clear_all();
                Task::none()
            }
            Message::Notification(message) => {
                self.provider.handle_message(message);
                self.diagnostics.process_pending();
                Task::none()
            }
        }
    }

    /// Fine-grained tick while notifications (or the demo task) are
    /// active; idle otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.provider.has_notifications() || self.task_running {
            time::every(Duration::from_millis(TICK_INTERVAL_MS))
                .map(|instant| Message::Notification(notifications::Message::Tick(instant)))
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let kind_buttons = Kind::ALL.into_iter().fold(Row::new().spacing(8), |row, kind| {
            row.push(button(text(kind.name())).on_press(Message::Notify(kind)))
        });

        let actions = Row::new()
            .spacing(8)
            .push(button(text("save (promise)")).on_press(Message::RunTask))
            .push(button(text("clear all")).on_press(Message::ClearAll))
            .push(
                button(text(format!("anchor: {}", self.position.name())))
                    .on_press(Message::CyclePosition),
            );

        let content = Column::new()
            .spacing(16)
            .padding(24)
            .push(text("iced_toasts demo").size(24))
            .push(kind_buttons)
            .push(actions)
            .push(text(format!(
                "{} active, {} diagnostic events",
                self.provider.len(),
                self.diagnostics.len()
            )));

        let base = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill);

        Stack::with_children(vec![
            base.into(),
            container::view(&self.provider).map(Message::Notification),
        ])
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn demo_message(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "Image saved successfully",
        Kind::Error => "Could not open the file",
        Kind::Warning => "Disk space is running low",
        Kind::Violation => "File name contains forbidden characters",
        Kind::Info => "A new version is available",
    }
}

fn next_position(position: Position) -> Position {
    let index = Position::ALL
        .iter()
        .position(|&p| p == position)
        .unwrap_or(0);
    Position::ALL[(index + 1) % Position::ALL.len()]
}

async fn simulated_save(succeed: bool) -> Result<String, String> {
    tokio::time::sleep(Duration::from_millis(1500)).await;
    if succeed {
        Ok("report.pdf".to_string())
    } else {
        Err("permission denied".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_adds_a_record_of_the_requested_kind() {
        let mut app = App::new(&Flags::default());
        let _ = app.update(Message::Notify(Kind::Warning));

        assert_eq!(app.provider.len(), 1);
        let n = app.provider.notifications().next().unwrap();
        assert_eq!(n.kind(), Kind::Warning);
    }

    #[test]
    fn clear_all_empties_the_provider() {
        let mut app = App::new(&Flags::default());
        let _ = app.update(Message::Notify(Kind::Info));
        let _ = app.update(Message::Notify(Kind::Success));
        let _ = app.update(Message::ClearAll);

        assert!(app.provider.is_empty());
    }

    #[test]
    fn cycle_position_walks_all_six_anchors() {
        let mut app = App::new(&Flags::default());
        let start = app.position;
        let mut seen = vec![start];
        for _ in 0..5 {
            let _ = app.update(Message::CyclePosition);
            assert!(!seen.contains(&app.position));
            seen.push(app.position);
        }

        let _ = app.update(Message::CyclePosition);
        assert_eq!(app.position, start);
    }

    #[test]
    fn task_finished_clears_the_running_flag() {
        let mut app = App::new(&Flags::default());
        app.task_running = true;
        let _ = app.update(Message::TaskFinished(Ok("report.pdf".to_string())));
        assert!(!app.task_running);
    }

    #[test]
    fn unknown_position_flag_falls_back_to_default() {
        let app = App::new(&Flags {
            max: None,
            position: Some("middle".to_string()),
        });
        assert_eq!(app.position, Position::TopRight);
    }

    #[test]
    fn position_flag_overrides_default_anchor() {
        let app = App::new(&Flags {
            max: None,
            position: Some("bottom-left".to_string()),
        });
        assert_eq!(app.position, Position::BottomLeft);
    }
}
