// SPDX-License-Identifier: GPL-3.0-only

//! Centralized engine settings and constants.

/// Crate identifier used for the default log directive.
pub const APP_ID: &str = "softkeys";

/// Default locale used when no other locale is registered.
pub const DEFAULT_LOCALE: &str = "en";

/// Phone row height in portrait orientation, in points.
pub const PHONE_PORTRAIT_ROW_HEIGHT: f32 = 54.0;

/// Phone row height in landscape orientation, in points.
pub const PHONE_LANDSCAPE_ROW_HEIGHT: f32 = 40.0;

/// Tablet row height in portrait orientation, in points.
pub const TABLET_PORTRAIT_ROW_HEIGHT: f32 = 64.0;

/// Tablet row height in landscape orientation, in points.
pub const TABLET_LANDSCAPE_ROW_HEIGHT: f32 = 86.0;

/// Phone key insets (top, bottom, leading, trailing) in portrait.
pub const PHONE_PORTRAIT_INSETS: (f32, f32, f32, f32) = (6.0, 6.0, 3.0, 3.0);

/// Phone key insets in landscape.
pub const PHONE_LANDSCAPE_INSETS: (f32, f32, f32, f32) = (4.0, 4.0, 3.0, 3.0);

/// Tablet key insets in portrait.
pub const TABLET_PORTRAIT_INSETS: (f32, f32, f32, f32) = (4.0, 4.0, 6.0, 6.0);

/// Tablet key insets in landscape.
pub const TABLET_LANDSCAPE_INSETS: (f32, f32, f32, f32) = (7.0, 7.0, 7.0, 7.0);

/// First-row item count that identifies the 11-11-7 alphabetic shape.
pub const EXPANDED_ROW_ITEM_COUNT: usize = 11;

/// Input reference count used when a layout has no input rows.
pub const DEFAULT_INPUT_REFERENCE_COUNT: usize = 10;

/// Window in milliseconds within which two shift taps count as a double tap.
pub const SHIFT_DOUBLE_TAP_MS: u64 = 500;
