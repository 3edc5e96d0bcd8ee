// SPDX-License-Identifier: GPL-3.0-only

//! Geometry rules shared by the layout providers.
//!
//! This module holds the standard row heights and insets per device class
//! and orientation, the standard width policy, and the rules that pick the
//! synthesized system keys (shift, mode switches, primary key).

use crate::app_settings;
use crate::input::ShiftState;
use crate::layout::context::{DeviceClass, KeyboardContext, Orientation};
use crate::layout::types::{Insets, KeyboardAction, KeyboardType, LayoutItemWidth, PrimaryAction};
use serde::{Deserialize, Serialize};

/// Height and insets for one device class in one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowGeometry {
    pub row_height: f32,
    pub insets: Insets,
}

/// Row geometry per orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceGeometry {
    pub portrait: RowGeometry,
    pub landscape: RowGeometry,
}

impl DeviceGeometry {
    #[must_use]
    pub fn for_orientation(&self, orientation: Orientation) -> RowGeometry {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }

    pub fn for_orientation_mut(&mut self, orientation: Orientation) -> &mut RowGeometry {
        match orientation {
            Orientation::Portrait => &mut self.portrait,
            Orientation::Landscape => &mut self.landscape,
        }
    }
}

/// Standard geometry for every device class and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    pub phone: DeviceGeometry,
    pub tablet: DeviceGeometry,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            phone: DeviceGeometry {
                portrait: RowGeometry {
                    row_height: app_settings::PHONE_PORTRAIT_ROW_HEIGHT,
                    insets: Insets::from_tuple(app_settings::PHONE_PORTRAIT_INSETS),
                },
                landscape: RowGeometry {
                    row_height: app_settings::PHONE_LANDSCAPE_ROW_HEIGHT,
                    insets: Insets::from_tuple(app_settings::PHONE_LANDSCAPE_INSETS),
                },
            },
            tablet: DeviceGeometry {
                portrait: RowGeometry {
                    row_height: app_settings::TABLET_PORTRAIT_ROW_HEIGHT,
                    insets: Insets::from_tuple(app_settings::TABLET_PORTRAIT_INSETS),
                },
                landscape: RowGeometry {
                    row_height: app_settings::TABLET_LANDSCAPE_ROW_HEIGHT,
                    insets: Insets::from_tuple(app_settings::TABLET_LANDSCAPE_INSETS),
                },
            },
        }
    }
}

impl GeometryConfig {
    #[must_use]
    pub fn device(&self, device: DeviceClass) -> &DeviceGeometry {
        match device {
            DeviceClass::Phone => &self.phone,
            DeviceClass::Tablet => &self.tablet,
        }
    }

    pub fn device_mut(&mut self, device: DeviceClass) -> &mut DeviceGeometry {
        match device {
            DeviceClass::Phone => &mut self.phone,
            DeviceClass::Tablet => &mut self.tablet,
        }
    }

    /// Geometry that applies to `context`.
    #[must_use]
    pub fn for_context(&self, context: &KeyboardContext) -> RowGeometry {
        self.device(context.device)
            .for_orientation(context.orientation)
    }
}

/// Standard width policy: input width for characters, available for the rest.
///
/// Character keys stay aligned across rows of different lengths while system
/// keys flex into whatever space remains.
#[must_use]
pub fn standard_item_width(action: &KeyboardAction) -> LayoutItemWidth {
    if action.is_character() {
        LayoutItemWidth::Input
    } else {
        LayoutItemWidth::Available
    }
}

/// Primary key for the host's declared return key intent.
#[must_use]
pub fn primary_action(context: &KeyboardContext) -> KeyboardAction {
    KeyboardAction::Primary(PrimaryAction::from_return_key(context.return_key_type))
}

/// Shift key reflecting the context's current casing.
#[must_use]
pub fn shift_action(context: &KeyboardContext) -> KeyboardAction {
    KeyboardAction::Shift(
        context
            .resolved_shift_state()
            .unwrap_or(ShiftState::Lowercased),
    )
}

/// Mode switch placed on the bottom input row.
///
/// Numeric switches to symbolic and symbolic to numeric. Alphabetic has no
/// switch here since shift takes the slot.
#[must_use]
pub fn bottom_input_row_switch_action(context: &KeyboardContext) -> Option<KeyboardAction> {
    match context.keyboard_type {
        KeyboardType::Numeric => Some(KeyboardAction::KeyboardType(KeyboardType::Symbolic)),
        KeyboardType::Symbolic => Some(KeyboardAction::KeyboardType(KeyboardType::Numeric)),
        _ => None,
    }
}

/// Leading action of the bottom input row: shift for letters, otherwise the
/// numeric/symbolic switch.
#[must_use]
pub fn bottom_input_row_leading_action(context: &KeyboardContext) -> Option<KeyboardAction> {
    match context.keyboard_type {
        KeyboardType::Alphabetic(_) => Some(shift_action(context)),
        _ => bottom_input_row_switch_action(context),
    }
}

/// Mode switch placed at the start of the bottom row.
///
/// Letters switch to numeric. Every other keyboard switches back to
/// alphabetic in its automatic casing.
#[must_use]
pub fn bottom_row_switch_action(context: &KeyboardContext) -> KeyboardAction {
    let target = match context.keyboard_type {
        KeyboardType::Alphabetic(_) | KeyboardType::Email => KeyboardType::Numeric,
        KeyboardType::Numeric
        | KeyboardType::Symbolic
        | KeyboardType::Emoji
        | KeyboardType::Images
        | KeyboardType::Custom(_) => KeyboardType::Alphabetic(ShiftState::Auto),
    };
    KeyboardAction::KeyboardType(target)
}

// ============================================================================
// Tests
// ============================================================================
