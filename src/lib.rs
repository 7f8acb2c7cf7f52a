// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification widget system built with the Iced
//! GUI framework.
//!
//! A [`notifications::Provider`] owns the transient notification state, the
//! widgets in [`ui`] position and render the cards, and a cloneable
//! [`notifications::Handle`] exposes the creation/removal/update API —
//! including a promise helper that drives one notification through the
//! lifecycle of an asynchronous operation.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod ui;
