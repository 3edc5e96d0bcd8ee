// SPDX-License-Identifier: GPL-3.0-only

//! Input state for the layout engine.
//!
//! Currently this is the shift state: the casing alphabetic keyboards render
//! with, and the rules for moving between casings as the user taps shift and
//! types characters. See [`shift`].

pub mod shift;

pub use shift::{ShiftState, ShiftTracker};
