// SPDX-License-Identifier: MPL-2.0
//! Explicit capability handle for the notification API.
//!
//! A `Handle` replaces ambient context lookup: components that need to
//! produce notifications receive a clone of it. Operations are queued on
//! an unbounded channel and applied by [`Provider::poll`](super::Provider::poll)
//! inside the single update loop, so no locking is involved. Every
//! operation fails fast with [`Error::ProviderClosed`] once the provider
//! has been dropped.

use super::notification::{AutoDismiss, Kind, NotificationId, Options, Patch};
use crate::config::defaults::{PROMISE_ERROR_DURATION_MS, PROMISE_SUCCESS_DURATION_MS};
use crate::error::{Error, Result};
use std::fmt;
use std::future::Future;
use tokio::sync::mpsc;

/// Operations queued from handles towards the owning provider.
#[derive(Debug)]
pub(crate) enum Command {
    Create {
        id: NotificationId,
        options: Box<Options>,
    },
    Remove(NotificationId),
    Dismiss(NotificationId),
    Update(NotificationId, Patch),
    ClearAll,
}

/// Messages shown by [`Handle::promise`] across the operation's lifecycle.
#[derive(Debug, Clone, Default)]
pub struct PromiseMessages {
    /// Shown while the operation is pending. Defaults to "Loading...".
    pub loading: Option<String>,
    /// Shown when the operation resolves. Defaults to "Success".
    pub success: Option<String>,
    /// Shown when the operation fails. Defaults to the error's own text.
    pub error: Option<String>,
}

impl PromiseMessages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn loading(mut self, message: impl Into<String>) -> Self {
        self.loading = Some(message.into());
        self
    }

    #[must_use]
    pub fn success(mut self, message: impl Into<String>) -> Self {
        self.success = Some(message.into());
        self
    }

    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
const DEFAULT_SUCCESS_MESSAGE: &str = "Success";
const DEFAULT_ERROR_MESSAGE: &str = "Failed";

/// Cheap-to-clone handle exposing the notification API away from the
/// provider, including across tasks.
#[derive(Clone, Debug)]
pub struct Handle {
    commands: mpsc::UnboundedSender<Command>,
}

impl Handle {
    pub(crate) fn new(commands: mpsc::UnboundedSender<Command>) -> Self {
        Self { commands }
    }

    /// Queues creation of a notification and returns its id immediately.
    /// The record becomes visible once the provider drains its commands.
    pub fn create(&self, options: Options) -> Result<NotificationId> {
        let id = NotificationId::new();
        self.send(Command::Create {
            id,
            options: Box::new(options),
        })?;
        Ok(id)
    }

    pub fn success(&self, message: impl Into<String>, options: Options) -> Result<NotificationId> {
        self.create(options.kind(Kind::Success).message(message))
    }

    pub fn error(&self, message: impl Into<String>, options: Options) -> Result<NotificationId> {
        self.create(options.kind(Kind::Error).message(message))
    }

    pub fn warning(&self, message: impl Into<String>, options: Options) -> Result<NotificationId> {
        self.create(options.kind(Kind::Warning).message(message))
    }

    pub fn violation(
        &self,
        message: impl Into<String>,
        options: Options,
    ) -> Result<NotificationId> {
        self.create(options.kind(Kind::Violation).message(message))
    }

    pub fn info(&self, message: impl Into<String>, options: Options) -> Result<NotificationId> {
        self.create(options.kind(Kind::Info).message(message))
    }

    /// Queues immediate removal of a notification. A no-op for ids that
    /// are no longer active.
    pub fn remove(&self, id: NotificationId) -> Result<()> {
        self.send(Command::Remove(id))
    }

    /// Queues a graceful dismissal (exit transition, then removal).
    pub fn dismiss(&self, id: NotificationId) -> Result<()> {
        self.send(Command::Dismiss(id))
    }

    /// Queues a partial update. A no-op for ids that are no longer active.
    pub fn update(&self, id: NotificationId, patch: Patch) -> Result<()> {
        self.send(Command::Update(id, patch))
    }

    /// Queues removal of every active notification.
    pub fn clear_all(&self) -> Result<()> {
        self.send(Command::ClearAll)
    }

    /// Drives one notification through the lifecycle of an asynchronous
    /// operation: a persistent, non-closable loading record is shown
    /// immediately, then updated to a success or error presentation once
    /// the operation settles.
    ///
    /// The operation's own outcome is always surfaced unchanged as the
    /// inner `Result`. The outer error is the fail-fast provider-scope
    /// check at creation time; updates that race a provider shutdown are
    /// harmless no-ops.
    pub async fn promise<F, T, E>(
        &self,
        operation: F,
        messages: PromiseMessages,
        options: Options,
    ) -> Result<std::result::Result<T, E>>
    where
        F: Future<Output = std::result::Result<T, E>>,
        E: fmt::Display,
    {
        let loading = messages
            .loading
            .unwrap_or_else(|| DEFAULT_LOADING_MESSAGE.to_string());
        let id = self.create(
            options
                .kind(Kind::Info)
                .message(loading)
                .duration(AutoDismiss::Never)
                .show_close(false),
        )?;

        match operation.await {
            Ok(value) => {
                let message = messages
                    .success
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                let _ = self.update(
                    id,
                    Patch::new()
                        .kind(Kind::Success)
                        .message(message)
                        .duration(AutoDismiss::after_millis(PROMISE_SUCCESS_DURATION_MS))
                        .show_close(true),
                );
                Ok(Ok(value))
            }
            Err(err) => {
                let message = messages.error.unwrap_or_else(|| {
                    let text = err.to_string();
                    if text.is_empty() {
                        DEFAULT_ERROR_MESSAGE.to_string()
                    } else {
                        text
                    }
                });
                let _ = self.update(
                    id,
                    Patch::new()
                        .kind(Kind::Error)
                        .message(message)
                        .duration(AutoDismiss::after_millis(PROMISE_ERROR_DURATION_MS))
                        .show_close(true),
                );
                Ok(Err(err))
            }
        }
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::ProviderClosed)
    }
}
