// SPDX-License-Identifier: GPL-3.0-only

//! Context descriptor for layout requests.
//!
//! A [`KeyboardContext`] is an immutable snapshot of everything layout
//! derivation depends on. The engine reads it and never keeps it.

use crate::app_settings;
use crate::input::ShiftState;
use crate::layout::types::{KeyboardType, ReturnKeyType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Device class, which picks the layout provider and the row variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    #[default]
    Phone,
    Tablet,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Phone => write!(f, "phone"),
            DeviceClass::Tablet => write!(f, "tablet"),
        }
    }
}

/// Screen orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Conditions a keyboard layout is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardContext {
    /// Keyboard type, including the shift state for alphabetic keyboards
    pub keyboard_type: KeyboardType,
    pub device: DeviceClass,
    /// Locale identifier, e.g. "en" or "sv"
    pub locale: String,
    pub orientation: Orientation,
    /// Screen width in points. Layout derivation does not depend on it. It is
    /// the default total width for render-time sizing, see
    /// [`crate::layout::sizing::resolve_context_widths`].
    pub screen_width: f32,
    /// Return key intent declared by the text host
    #[serde(default)]
    pub return_key_type: ReturnKeyType,
    /// Host requests a capital for the next character
    #[serde(default)]
    pub auto_capitalize: bool,
    /// More than one locale is enabled, so a locale switch key is shown
    #[serde(default)]
    pub has_multiple_locales: bool,
    /// Dictation is available, so a dictation key is shown
    #[serde(default)]
    pub has_dictation: bool,
}

impl Default for KeyboardContext {
    fn default() -> Self {
        Self {
            keyboard_type: KeyboardType::default(),
            device: DeviceClass::Phone,
            locale: app_settings::DEFAULT_LOCALE.to_string(),
            orientation: Orientation::Portrait,
            screen_width: 390.0,
            return_key_type: ReturnKeyType::Default,
            auto_capitalize: false,
            has_multiple_locales: false,
            has_dictation: false,
        }
    }
}

impl KeyboardContext {
    /// Creates a context for the given keyboard type on a phone.
    #[must_use]
    pub fn new(keyboard_type: KeyboardType) -> Self {
        Self {
            keyboard_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    #[must_use]
    pub fn with_device(mut self, device: DeviceClass) -> Self {
        self.device = device;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets orientation and screen width together, since they change together.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation, screen_width: f32) -> Self {
        self.orientation = orientation;
        self.screen_width = screen_width;
        self
    }

    #[must_use]
    pub fn with_return_key_type(mut self, return_key_type: ReturnKeyType) -> Self {
        self.return_key_type = return_key_type;
        self
    }

    #[must_use]
    pub fn with_auto_capitalize(mut self, auto_capitalize: bool) -> Self {
        self.auto_capitalize = auto_capitalize;
        self
    }

    #[must_use]
    pub fn with_multiple_locales(mut self, has_multiple_locales: bool) -> Self {
        self.has_multiple_locales = has_multiple_locales;
        self
    }

    #[must_use]
    pub fn with_dictation(mut self, has_dictation: bool) -> Self {
        self.has_dictation = has_dictation;
        self
    }

    /// Shift state for alphabetic keyboards, `None` for every other type.
    #[must_use]
    pub fn shift_state(&self) -> Option<ShiftState> {
        match self.keyboard_type {
            KeyboardType::Alphabetic(state) => Some(state),
            _ => None,
        }
    }

    /// Shift state with `Auto` resolved through the host's request.
    #[must_use]
    pub fn resolved_shift_state(&self) -> Option<ShiftState> {
        self.shift_state()
            .map(|state| state.resolved(self.auto_capitalize))
    }

    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }
}

// ============================================================================
// Tests
// ============================================================================
