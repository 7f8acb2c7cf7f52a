// SPDX-License-Identifier: MPL-2.0
//! Toast notification state management.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, errors, etc.) without blocking interaction, following
//! toast/snackbar UX patterns.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` record with kinds, positions,
//!   creation options, and partial updates
//! - [`provider`] - `Provider` owning the active list and its lifecycle
//! - [`handle`] - Cloneable `Handle` capability and the promise helper
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::notifications::{Options, Provider, ProviderConfig};
//!
//! // Create a provider from resolved configuration
//! let mut provider = Provider::new(ProviderConfig::default());
//!
//! // Push a notification
//! provider.success("Image saved successfully", Options::new());
//!
//! // In your view function, render the overlay
//! let overlay = iced_toasts::ui::container::view(&provider).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Defaults: 5 s auto-dismiss, top-right anchor, at most 5 active cards
//!   (oldest truncated first)
//! - Promise-bound records: persistent while loading, 2.5 s on success,
//!   5 s on failure
//! - Timers run off a single 50 ms tick subscription; a removed record
//!   simply stops participating, so no callback outlives it

mod handle;
mod notification;
mod provider;

pub use handle::{Handle, PromiseMessages};
pub use notification::{
    AutoDismiss, Kind, Notification, NotificationId, Options, Patch, Phase, Position,
    StyleOverride,
};
pub use provider::{Message, Provider, ProviderConfig};
