// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Grid**: Column count and thumbnail size bounds
//! - **Notifications**: Toast lifetimes and visible count

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of cards per row.
pub const DEFAULT_COLUMNS: u16 = 3;

/// Minimum number of cards per row.
pub const MIN_COLUMNS: u16 = 1;

/// Maximum number of cards per row.
pub const MAX_COLUMNS: u16 = 6;

/// Default thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 200.0;

/// Minimum thumbnail height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 80.0;

/// Maximum thumbnail height.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 480.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of success and info toasts (in milliseconds).
pub const TOAST_SHORT_MS: u64 = 3_000;

/// Lifetime of warning toasts (in milliseconds).
pub const TOAST_LONG_MS: u64 = 5_000;

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_COLUMNS > 0);
    assert!(MAX_COLUMNS >= MIN_COLUMNS);
    assert!(DEFAULT_COLUMNS >= MIN_COLUMNS);
    assert!(DEFAULT_COLUMNS <= MAX_COLUMNS);

    assert!(MIN_THUMBNAIL_HEIGHT > 0.0);
    assert!(MAX_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);

    assert!(TOAST_LONG_MS > TOAST_SHORT_MS);
    assert!(MAX_VISIBLE_TOASTS > 0);
};
