// SPDX-License-Identifier: GPL-3.0-only

//! Input set model: the raw character rows for each keyboard mode.
//!
//! An [`InputSet`] holds the rows of character pairs for one mode on one
//! device class. Providers hand out input sets per mode and device, and are
//! built once per locale. Nothing here is mutated after construction.

use crate::app_settings;
use crate::layout::context::DeviceClass;
use crate::layout::types::{ConfigurationError, KeyboardType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Picks the phone or tablet candidate for a device class.
pub fn device_variant<T>(device: DeviceClass, phone: T, tablet: T) -> T {
    match device {
        DeviceClass::Phone => phone,
        DeviceClass::Tablet => tablet,
    }
}

/// Input mode with its own input set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    Alphabetic,
    Numeric,
    Symbolic,
}

impl InputMode {
    /// Mode whose rows a keyboard type draws from.
    ///
    /// Email keyboards use the alphabetic rows. Emoji, images and custom
    /// keyboards have no input set.
    #[must_use]
    pub fn for_keyboard_type(keyboard_type: &KeyboardType) -> Option<Self> {
        match keyboard_type {
            KeyboardType::Alphabetic(_) | KeyboardType::Email => Some(InputMode::Alphabetic),
            KeyboardType::Numeric => Some(InputMode::Numeric),
            KeyboardType::Symbolic => Some(InputMode::Symbolic),
            KeyboardType::Emoji | KeyboardType::Images | KeyboardType::Custom(_) => None,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Alphabetic => write!(f, "alphabetic"),
            InputMode::Numeric => write!(f, "numeric"),
            InputMode::Symbolic => write!(f, "symbolic"),
        }
    }
}

/// A character with its lowercase and uppercase forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputSetItem {
    pub lowercase: String,
    pub uppercase: String,
}

impl InputSetItem {
    /// Creates an item whose uppercase form is derived from the lowercase one.
    pub fn new(lowercase: impl Into<String>) -> Self {
        let lowercase = lowercase.into();
        let uppercase = lowercase.to_uppercase();
        Self {
            lowercase,
            uppercase,
        }
    }

    /// Creates an item with an explicit uppercase form, e.g. `,` and `!`.
    pub fn pair(lowercase: impl Into<String>, uppercase: impl Into<String>) -> Self {
        Self {
            lowercase: lowercase.into(),
            uppercase: uppercase.into(),
        }
    }

    /// Form to render for the given casing.
    #[must_use]
    pub fn character(&self, uppercase: bool) -> &str {
        if uppercase {
            &self.uppercase
        } else {
            &self.lowercase
        }
    }
}

/// One row of input items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputSetRow {
    pub items: Vec<InputSetItem>,
}

impl InputSetRow {
    pub fn new(items: Vec<InputSetItem>) -> Self {
        Self { items }
    }

    /// Creates a row with one item per character of `chars`.
    #[must_use]
    pub fn from_chars(chars: &str) -> Self {
        Self {
            items: chars
                .chars()
                .map(|c| InputSetItem::new(c.to_string()))
                .collect(),
        }
    }

    /// Creates a row from whichever character string fits the device.
    #[must_use]
    pub fn for_device(device: DeviceClass, phone: &str, tablet: &str) -> Self {
        Self::from_chars(device_variant(device, phone, tablet))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Character layout shape of an alphabetic input set.
///
/// The shape is declared by whoever builds the input set. It is not inferred
/// from row lengths, because an unrelated locale can have 11 keys in its first
/// row too. [`RowShape::detect`] exists only to flag declarations that look
/// inconsistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowShape {
    /// 10-9-7 rows, as in English QWERTY
    #[default]
    Standard,
    /// 11-11-7 rows, as in Swedish or Norwegian
    Expanded,
}

impl RowShape {
    /// Shape suggested by the first row's length.
    #[must_use]
    pub fn detect(rows: &[InputSetRow]) -> Self {
        match rows.first() {
            Some(row) if row.len() == app_settings::EXPANDED_ROW_ITEM_COUNT => RowShape::Expanded,
            _ => RowShape::Standard,
        }
    }
}

/// Rows of input items for one mode and one device class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSet {
    pub rows: Vec<InputSetRow>,
    #[serde(default)]
    pub shape: RowShape,
}

impl InputSet {
    /// Creates a standard-shape input set.
    pub fn new(rows: Vec<InputSetRow>) -> Self {
        Self {
            rows,
            shape: RowShape::Standard,
        }
    }

    /// Creates a standard-shape input set from one string per row.
    #[must_use]
    pub fn from_strs(rows: &[&str]) -> Self {
        Self::new(rows.iter().map(|row| InputSetRow::from_chars(row)).collect())
    }

    #[must_use]
    pub fn with_shape(mut self, shape: RowShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    #[must_use]
    pub fn widest_row_len(&self) -> usize {
        self.rows.iter().map(InputSetRow::len).max().unwrap_or(0)
    }
}

/// Input sets for every mode on one device class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInputSets {
    #[serde(default)]
    pub alphabetic: InputSet,
    #[serde(default)]
    pub numeric: InputSet,
    #[serde(default)]
    pub symbolic: InputSet,
}

impl DeviceInputSets {
    #[must_use]
    pub fn get(&self, mode: InputMode) -> &InputSet {
        match mode {
            InputMode::Alphabetic => &self.alphabetic,
            InputMode::Numeric => &self.numeric,
            InputMode::Symbolic => &self.symbolic,
        }
    }
}

/// Source of input sets for a locale.
pub trait InputSetProvider: fmt::Debug {
    /// Locale the input sets belong to.
    fn locale(&self) -> &str;

    /// Input set for a mode on a device class.
    ///
    /// Fails with [`ConfigurationError`] when the mode has no rows.
    fn input_set(&self, mode: InputMode, device: DeviceClass) -> Result<&InputSet, ConfigurationError>;
}

/// Provider backed by a fixed table of phone and tablet input sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleInputSetProvider {
    pub locale: String,
    pub phone: DeviceInputSets,
    pub tablet: DeviceInputSets,
}

impl LocaleInputSetProvider {
    pub fn new(locale: impl Into<String>, phone: DeviceInputSets, tablet: DeviceInputSets) -> Self {
        Self {
            locale: locale.into(),
            phone,
            tablet,
        }
    }

    /// Built-in English QWERTY input sets.
    #[must_use]
    pub fn english() -> Self {
        Self::new(
            "en",
            DeviceInputSets {
                alphabetic: InputSet::from_strs(&["qwertyuiop", "asdfghjkl", "zxcvbnm"]),
                numeric: standard_numeric(DeviceClass::Phone),
                symbolic: standard_symbolic(DeviceClass::Phone),
            },
            DeviceInputSets {
                alphabetic: tablet_alphabetic(&["qwertyuiop", "asdfghjkl", "zxcvbnm"], RowShape::Standard),
                numeric: standard_numeric(DeviceClass::Tablet),
                symbolic: standard_symbolic(DeviceClass::Tablet),
            },
        )
    }

    /// Built-in Swedish input sets, with the 11-11-7 alphabetic shape.
    #[must_use]
    pub fn swedish() -> Self {
        let letters = ["qwertyuiopå", "asdfghjklöä", "zxcvbnm"];
        Self::new(
            "sv",
            DeviceInputSets {
                alphabetic: InputSet::from_strs(&letters).with_shape(RowShape::Expanded),
                numeric: standard_numeric(DeviceClass::Phone),
                symbolic: standard_symbolic(DeviceClass::Phone),
            },
            DeviceInputSets {
                alphabetic: tablet_alphabetic(&letters, RowShape::Expanded),
                numeric: standard_numeric(DeviceClass::Tablet),
                symbolic: standard_symbolic(DeviceClass::Tablet),
            },
        )
    }

    #[must_use]
    pub fn device_sets(&self, device: DeviceClass) -> &DeviceInputSets {
        device_variant(device, &self.phone, &self.tablet)
    }
}

impl Default for LocaleInputSetProvider {
    fn default() -> Self {
        Self::english()
    }
}

impl InputSetProvider for LocaleInputSetProvider {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn input_set(&self, mode: InputMode, device: DeviceClass) -> Result<&InputSet, ConfigurationError> {
        let set = self.device_sets(device).get(mode);
        if set.is_empty() {
            return Err(ConfigurationError::missing_rows(&self.locale, mode.to_string()));
        }
        Ok(set)
    }
}

/// Tablet letters get a trailing `,` / `.` pair on the last row, shifting
/// to `!` / `?`.
fn tablet_alphabetic(letters: &[&str], shape: RowShape) -> InputSet {
    let mut set = InputSet::from_strs(letters).with_shape(shape);
    if let Some(last) = set.rows.last_mut() {
        last.items.push(InputSetItem::pair(",", "!"));
        last.items.push(InputSetItem::pair(".", "?"));
    }
    set
}

fn standard_numeric(device: DeviceClass) -> InputSet {
    InputSet::new(vec![
        InputSetRow::from_chars("1234567890"),
        InputSetRow::for_device(device, "-/:;()$&@\"", "@#$&*()'\""),
        InputSetRow::for_device(device, ".,?!'", "%-+=/;:!?"),
    ])
}

fn standard_symbolic(device: DeviceClass) -> InputSet {
    InputSet::new(vec![
        InputSetRow::for_device(device, "[]{}#%^*+=", "1234567890"),
        InputSetRow::for_device(device, "_\\|~<>€£¥•", "€£¥_^[]{}"),
        InputSetRow::for_device(device, ".,?!'", "§|~…\\<>!?"),
    ])
}

// ============================================================================
// Tests
// ============================================================================
