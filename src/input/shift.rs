// SPDX-License-Identifier: GPL-3.0-only

//! Shift state management for alphabetic input.
//!
//! The shift key on a soft keyboard has three user-visible states plus an
//! automatic default:
//!
//! - **Lowercased**: characters render and emit in lowercase
//! - **Uppercased**: the next character is uppercase, then shift reverts
//! - **Caps locked**: every character is uppercase until shift is tapped again
//! - **Auto**: the keyboard's default casing, decided by the text host's
//!   autocapitalization request
//!
//! # Example
//!
//! ```rust,ignore
//! use softkeys::input::{ShiftState, ShiftTracker};
//!
//! let mut tracker = ShiftTracker::new(ShiftState::Lowercased);
//!
//! tracker.tap(0, false);
//! assert_eq!(tracker.state(), ShiftState::Uppercased);
//!
//! // Typing a character reverts a non-locked uppercase
//! tracker.character_typed();
//! assert_eq!(tracker.state(), ShiftState::Lowercased);
//! ```

use crate::app_settings;
use serde::{Deserialize, Serialize};

/// Casing applied to alphabetic character keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftState {
    /// Resolved from the host's autocapitalization request.
    #[default]
    Auto,
    /// Lowercase characters.
    Lowercased,
    /// Uppercase for the next character only.
    Uppercased,
    /// Uppercase until explicitly released.
    CapsLocked,
}

impl ShiftState {
    /// Resolves `Auto` into a concrete state.
    ///
    /// `auto_capitalize` is the host's request that the next character be
    /// capitalized (e.g. at the start of a sentence).
    #[must_use]
    pub fn resolved(self, auto_capitalize: bool) -> Self {
        match self {
            ShiftState::Auto if auto_capitalize => ShiftState::Uppercased,
            ShiftState::Auto => ShiftState::Lowercased,
            other => other,
        }
    }

    /// Returns `true` if characters should use their uppercase form.
    #[must_use]
    pub fn is_uppercase(self, auto_capitalize: bool) -> bool {
        matches!(
            self.resolved(auto_capitalize),
            ShiftState::Uppercased | ShiftState::CapsLocked
        )
    }

    /// State after a single tap on shift.
    ///
    /// Lowercased goes to uppercased. Uppercased and caps locked both go back
    /// to lowercased. `Auto` must be resolved first, so it is treated as
    /// lowercased here.
    #[must_use]
    pub fn tapped(self) -> Self {
        match self {
            ShiftState::Auto | ShiftState::Lowercased => ShiftState::Uppercased,
            ShiftState::Uppercased | ShiftState::CapsLocked => ShiftState::Lowercased,
        }
    }

    /// State after a double tap on shift. Always caps locked.
    #[must_use]
    pub fn double_tapped(self) -> Self {
        ShiftState::CapsLocked
    }

    /// State after a character has been typed.
    ///
    /// A non-locked uppercase reverts to lowercase. Every other state is
    /// unchanged.
    #[must_use]
    pub fn after_character_input(self) -> Self {
        match self {
            ShiftState::Uppercased => ShiftState::Lowercased,
            other => other,
        }
    }
}

/// Tracks shift taps over time and applies the transition rules.
///
/// Timestamps are supplied by the caller in milliseconds, so the tracker
/// has no clock of its own.
#[derive(Debug, Clone)]
pub struct ShiftTracker {
    state: ShiftState,
    last_tap_ms: Option<u64>,
    double_tap_window_ms: u64,
}

impl Default for ShiftTracker {
    fn default() -> Self {
        Self::new(ShiftState::default())
    }
}

impl ShiftTracker {
    /// Creates a tracker in the given state with the default double tap window.
    #[must_use]
    pub fn new(state: ShiftState) -> Self {
        Self {
            state,
            last_tap_ms: None,
            double_tap_window_ms: app_settings::SHIFT_DOUBLE_TAP_MS,
        }
    }

    /// Overrides the double tap window.
    #[must_use]
    pub fn with_double_tap_window(mut self, window_ms: u64) -> Self {
        self.double_tap_window_ms = window_ms;
        self
    }

    /// Current shift state.
    #[must_use]
    pub fn state(&self) -> ShiftState {
        self.state
    }

    /// Registers a shift tap at `now_ms` and returns the new state.
    ///
    /// A second tap within the double tap window locks caps, unless the first
    /// tap already released a lock.
    pub fn tap(&mut self, now_ms: u64, auto_capitalize: bool) -> ShiftState {
        let current = self.state.resolved(auto_capitalize);
        let is_double_tap = self
            .last_tap_ms
            .is_some_and(|last| now_ms.saturating_sub(last) <= self.double_tap_window_ms);

        if is_double_tap && current == ShiftState::Uppercased {
            self.state = current.double_tapped();
            self.last_tap_ms = None;
        } else {
            self.state = current.tapped();
            self.last_tap_ms = Some(now_ms);
        }

        tracing::debug!("Shift tapped at {}ms: {:?}", now_ms, self.state);
        self.state
    }

    /// Locks caps explicitly.
    pub fn lock(&mut self) {
        self.state = ShiftState::CapsLocked;
        self.last_tap_ms = None;
    }

    /// Applies the post-character rule and returns the new state.
    pub fn character_typed(&mut self) -> ShiftState {
        self.state = self.state.after_character_input();
        self.last_tap_ms = None;
        self.state
    }

    /// Resets to the automatic default.
    pub fn reset(&mut self) {
        self.state = ShiftState::Auto;
        self.last_tap_ms = None;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
