// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for the keyboard layout engine.
//!
//! This module defines the actions a key can perform, the keyboard types that
//! select an input set, the symbolic width policies and the final
//! [`KeyboardLayout`] value handed to a renderer.

use crate::input::ShiftState;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Error Handling Types
// ============================================================================

/// A keyboard mode has no registered input rows.
///
/// Layout derivation never propagates this error. Callers recover by treating
/// the mode as an empty grid, which still yields a system-keys-only layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    /// Locale of the provider that was asked
    pub locale: String,
    /// Mode that had no rows (e.g. "symbolic")
    pub mode: String,
    /// Optional suggestion for fixing the configuration
    pub suggestion: Option<String>,
}

impl ConfigurationError {
    /// Creates an error for a mode with no registered rows.
    pub fn missing_rows(locale: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            mode: mode.into(),
            suggestion: Some("Register rows for this mode in the locale's input sets".into()),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No input rows registered for {} mode in locale '{}'",
            self.mode, self.locale
        )?;
        if let Some(hint) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigurationError {}

// ============================================================================
// Actions
// ============================================================================

/// Intent declared by the text host for its return key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKeyType {
    /// No specific intent
    #[default]
    Default,
    /// Finish editing
    Done,
    /// Navigate or submit
    Go,
    /// Run a search
    Search,
}

/// Sub-kind of the primary (return) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAction {
    Done,
    Go,
    Search,
    Ok,
    Newline,
    Generic,
}

impl PrimaryAction {
    /// Maps the host's declared return key intent to a primary action.
    ///
    /// Hosts that declare no intent get a plain newline.
    #[must_use]
    pub fn from_return_key(return_key: ReturnKeyType) -> Self {
        match return_key {
            ReturnKeyType::Default => PrimaryAction::Newline,
            ReturnKeyType::Done => PrimaryAction::Done,
            ReturnKeyType::Go => PrimaryAction::Go,
            ReturnKeyType::Search => PrimaryAction::Search,
        }
    }
}

/// Keyboard type, which selects the input set and the system keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum KeyboardType {
    /// Letters, with the casing carried along
    Alphabetic(ShiftState),
    /// Digits and common punctuation
    Numeric,
    /// Less common symbols
    Symbolic,
    Emoji,
    Images,
    /// Letters tuned for address entry
    Email,
    /// A keyboard whose rows come from a named custom provider
    Custom(String),
}

impl Default for KeyboardType {
    fn default() -> Self {
        KeyboardType::Alphabetic(ShiftState::Auto)
    }
}

impl KeyboardType {
    /// Returns `true` for alphabetic keyboards, regardless of casing.
    #[must_use]
    pub fn is_alphabetic(&self) -> bool {
        matches!(self, KeyboardType::Alphabetic(_))
    }
}

impl fmt::Display for KeyboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyboardType::Alphabetic(state) => write!(f, "alphabetic({:?})", state),
            KeyboardType::Numeric => write!(f, "numeric"),
            KeyboardType::Symbolic => write!(f, "symbolic"),
            KeyboardType::Emoji => write!(f, "emoji"),
            KeyboardType::Images => write!(f, "images"),
            KeyboardType::Email => write!(f, "email"),
            KeyboardType::Custom(name) => write!(f, "custom({})", name),
        }
    }
}

/// Action performed by a key.
///
/// Equality compares variant and payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum KeyboardAction {
    /// Insert text
    Character(String),
    Backspace,
    /// Shift key, showing the state it currently reflects
    Shift(ShiftState),
    Space,
    /// Return / primary key
    Primary(PrimaryAction),
    /// Switch to another keyboard type
    KeyboardType(KeyboardType),
    /// Cycle to the next locale or input method
    LocaleSwitch,
    Dictation,
    /// Placeholder that takes space but does nothing
    None,
    Settings,
    Tab,
    DismissKeyboard,
    MoveCursorBackward,
    MoveCursorForward,
}

impl KeyboardAction {
    /// Returns `true` for character input actions.
    #[must_use]
    pub fn is_character(&self) -> bool {
        matches!(self, KeyboardAction::Character(_))
    }

    /// Text inserted by a character action.
    #[must_use]
    pub fn character(&self) -> Option<&str> {
        match self {
            KeyboardAction::Character(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for KeyboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyboardAction::Character(text) => write!(f, "'{}'", text),
            KeyboardAction::Shift(state) => write!(f, "shift({:?})", state),
            KeyboardAction::Primary(kind) => write!(f, "primary({:?})", kind),
            KeyboardAction::KeyboardType(kind) => write!(f, "switch({})", kind),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Rows of actions before geometry is applied.
pub type ActionGrid = Vec<Vec<KeyboardAction>>;

// ============================================================================
// Geometry
// ============================================================================

/// Symbolic width policy for a layout item.
///
/// The engine stores the policy. A renderer resolves it to points once it
/// knows the keyboard width, see [`crate::layout::sizing`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LayoutItemWidth {
    /// Share what is left of the row after all other items
    Available,
    /// Same width as a standard input key
    Input,
    /// Fraction of the total keyboard width (0.0..=1.0)
    Percentage(f32),
    /// Fraction of the input key width
    InputPercentage(f32),
    /// Fixed width in points
    Points(f32),
}

/// Edge insets around a key, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
    pub leading: f32,
    pub trailing: f32,
}

impl Insets {
    /// Creates insets from explicit edges.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    /// Creates insets from a `(top, bottom, leading, trailing)` tuple.
    #[must_use]
    pub const fn from_tuple(edges: (f32, f32, f32, f32)) -> Self {
        Self::new(edges.0, edges.1, edges.2, edges.3)
    }

    /// Sum of leading and trailing insets.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Returns `true` if no edge is negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.top >= 0.0 && self.bottom >= 0.0 && self.leading >= 0.0 && self.trailing >= 0.0
    }
}

/// A sized, inset action in a layout row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub action: KeyboardAction,
    pub width: LayoutItemWidth,
    /// Height in points, including insets
    pub height: f32,
    pub insets: Insets,
}

/// The complete layout for one context snapshot.
///
/// Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    /// Rows of items, top to bottom
    pub rows: Vec<Vec<LayoutItem>>,
    /// Standard row height for this context
    pub ideal_item_height: f32,
    /// Standard insets for this context
    pub ideal_item_insets: Insets,
    /// Number of input keys that share the keyboard width to define the
    /// input key width (the widest input row)
    pub input_reference_count: usize,
}

impl KeyboardLayout {
    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the layout has no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Iterates over every action, row by row.
    pub fn actions(&self) -> impl Iterator<Item = &KeyboardAction> {
        self.rows.iter().flatten().map(|item| &item.action)
    }

    /// Finds the first item carrying `action`.
    #[must_use]
    pub fn find(&self, action: &KeyboardAction) -> Option<&LayoutItem> {
        self.rows.iter().flatten().find(|item| &item.action == action)
    }

    /// The last item of the last row, which is the primary key on phones.
    #[must_use]
    pub fn bottom_trailing_item(&self) -> Option<&LayoutItem> {
        self.rows.last().and_then(|row| row.last())
    }

    /// Width of one input key for a keyboard `total_width` points wide.
    #[must_use]
    pub fn input_width(&self, total_width: f32) -> f32 {
        if self.input_reference_count == 0 || total_width <= 0.0 {
            return 0.0;
        }
        total_width / self.input_reference_count as f32
    }

    /// Total height of the layout, summing the tallest item per row.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.rows
            .iter()
            .map(|row| row.iter().map(|item| item.height).fold(0.0_f32, f32::max))
            .sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
