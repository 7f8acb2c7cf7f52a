// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting notification warning/error events.
//!
//! This module provides infrastructure for capturing diagnostic events
//! emitted by the notification provider and storing them in a
//! memory-bounded circular buffer for later inspection.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped warning/error event
//! - [`DiagnosticsCollector`]: Owner of the buffer, drained on UI ticks
//! - [`DiagnosticsHandle`]: Cheap-clone sender attached to the provider

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
