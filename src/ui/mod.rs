// SPDX-License-Identifier: MPL-2.0
//! User interface components for rendering notifications.
//!
//! This module follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern: the widgets here are pure views
//! over the provider's state and emit [`Message`](crate::notifications::Message)
//! values back into the update loop.
//!
//! # Components
//!
//! - [`toast`] - Card widget rendering one notification
//! - [`container`] - Anchored overlay grouping cards by screen position
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod container;
pub mod design_tokens;
pub mod toast;
