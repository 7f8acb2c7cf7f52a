// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the notification system. Constants are organized by category.
//!
//! # Categories
//!
//! - **Capacity**: Active-list bounds
//! - **Durations**: Auto-dismiss timings
//! - **Animation**: Tick cadence and exit transition length
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of simultaneously active notifications.
/// The oldest records are truncated first when the limit is exceeded.
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 5;

/// Upper bound accepted from configuration files.
pub const MAX_MAX_NOTIFICATIONS: usize = 50;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default auto-dismiss duration for a new notification (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Auto-dismiss duration applied when a promise-bound notification
/// transitions to its success presentation.
pub const PROMISE_SUCCESS_DURATION_MS: u64 = 2500;

/// Auto-dismiss duration applied when a promise-bound notification
/// transitions to its error presentation.
pub const PROMISE_ERROR_DURATION_MS: u64 = 5000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Cadence of the tick subscription driving countdowns and the
/// progress indicator (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

/// Length of the outward exit transition played before a card is
/// removed from the active list (in milliseconds).
pub const EXIT_TRANSITION_MS: u64 = 250;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Capacity of the in-memory diagnostics event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Capacity validation
    assert!(DEFAULT_MAX_NOTIFICATIONS > 0);
    assert!(MAX_MAX_NOTIFICATIONS >= DEFAULT_MAX_NOTIFICATIONS);

    // Duration validation
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(PROMISE_SUCCESS_DURATION_MS > 0);
    assert!(PROMISE_ERROR_DURATION_MS >= PROMISE_SUCCESS_DURATION_MS);

    // Animation validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(EXIT_TRANSITION_MS > TICK_INTERVAL_MS);

    // Diagnostics validation
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_NOTIFICATIONS, 5);
        assert!(DEFAULT_MAX_NOTIFICATIONS <= MAX_MAX_NOTIFICATIONS);
    }

    #[test]
    fn duration_defaults_are_valid() {
        assert_eq!(DEFAULT_DURATION_MS, 5000);
        assert_eq!(PROMISE_SUCCESS_DURATION_MS, 2500);
        assert_eq!(PROMISE_ERROR_DURATION_MS, 5000);
    }

    #[test]
    fn tick_is_finer_grained_than_exit_transition() {
        assert!(TICK_INTERVAL_MS < EXIT_TRANSITION_MS);
    }
}
