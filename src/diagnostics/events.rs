// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Warning and error notifications are mirrored into these events so an
//! application can inspect what went wrong after the toasts are gone.

use std::time::Instant;

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A warning notification was shown.
    Warning { message: String },
    /// An error or violation notification was shown.
    Error { message: String },
}

/// A single captured diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
