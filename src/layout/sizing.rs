// SPDX-License-Identifier: GPL-3.0-only

//! Render-time width resolution.
//!
//! A [`KeyboardLayout`] stores symbolic width policies because the layout is
//! built before anyone knows how wide the keyboard will be. Once a renderer
//! knows the total width, the functions here turn every policy in a row into
//! points.
//!
//! # Resolution Rules
//!
//! - **Input**: the input key width, i.e. total width divided by the layout's
//!   input reference count.
//! - **Percentage(p)**: `p` times the total width.
//! - **InputPercentage(p)**: `p` times the input key width.
//! - **Points(n)**: exactly `n`.
//! - **Available**: what is left of the row after every other item, shared
//!   equally by all available items. Never negative.

use crate::layout::context::KeyboardContext;
use crate::layout::types::{KeyboardLayout, LayoutItem, LayoutItemWidth};

/// Resolves a width policy that does not depend on its neighbours.
///
/// Returns `None` for [`LayoutItemWidth::Available`], which needs the whole
/// row to resolve.
#[must_use]
pub fn resolve_fixed_width(width: &LayoutItemWidth, total_width: f32, input_width: f32) -> Option<f32> {
    let result = match width {
        LayoutItemWidth::Available => return None,
        LayoutItemWidth::Input => input_width,
        LayoutItemWidth::Percentage(fraction) => total_width * fraction,
        LayoutItemWidth::InputPercentage(fraction) => input_width * fraction,
        LayoutItemWidth::Points(points) => *points,
    };

    Some(result.max(0.0))
}

/// Resolves every item in a row to a width in points.
///
/// Available items split the remaining space equally. If fixed items already
/// overflow the row, available items get zero.
///
/// # Example
///
/// ```rust,ignore
/// // 10 input keys at 32pt on a 320pt keyboard: row of 7 input keys plus
/// // two available keys leaves (320 - 224) / 2 = 48pt for each flexible key.
/// ```
#[must_use]
pub fn resolve_row_widths(row: &[LayoutItem], total_width: f32, input_width: f32) -> Vec<f32> {
    let fixed: Vec<Option<f32>> = row
        .iter()
        .map(|item| resolve_fixed_width(&item.width, total_width, input_width))
        .collect();

    let used: f32 = fixed.iter().flatten().sum();
    let available_count = fixed.iter().filter(|w| w.is_none()).count();

    let available_width = if available_count == 0 {
        0.0
    } else {
        ((total_width - used) / available_count as f32).max(0.0)
    };

    fixed
        .into_iter()
        .map(|w| w.unwrap_or(available_width))
        .collect()
}

/// Resolves the widths of every row in a layout.
#[must_use]
pub fn resolve_layout_widths(layout: &KeyboardLayout, total_width: f32) -> Vec<Vec<f32>> {
    let input_width = layout.input_width(total_width);
    layout
        .rows
        .iter()
        .map(|row| resolve_row_widths(row, total_width, input_width))
        .collect()
}

/// Resolves a layout against the screen width of the context it was built for.
///
/// For renderers that span the full screen width and need widths before
/// their own layout pass.
#[must_use]
pub fn resolve_context_widths(layout: &KeyboardLayout, context: &KeyboardContext) -> Vec<Vec<f32>> {
    resolve_layout_widths(layout, context.screen_width)
}

// ============================================================================
// Tests
// ============================================================================
