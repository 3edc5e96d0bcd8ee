// SPDX-License-Identifier: GPL-3.0-only

//! Action matrix builder.
//!
//! Turns input set rows into a grid of character actions. Row and column
//! positions are kept exactly as the input set has them; system keys are
//! added later by the layout providers.

use crate::layout::context::KeyboardContext;
use crate::layout::input_set::{InputMode, InputSet, InputSetProvider};
use crate::layout::types::{ActionGrid, KeyboardAction, KeyboardType};

/// Builds character action grids from input sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionMatrixBuilder;

impl ActionMatrixBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the character grid for `context` from an input set.
    ///
    /// Alphabetic keyboards render the form matching the shift state.
    /// Numeric, symbolic and email keyboards always render the lowercase
    /// form. Emoji, images and custom keyboards yield an empty grid, since
    /// their rows come from elsewhere.
    #[must_use]
    pub fn build_actions(&self, context: &KeyboardContext, input_set: &InputSet) -> ActionGrid {
        let uppercase = match &context.keyboard_type {
            KeyboardType::Alphabetic(state) => state.is_uppercase(context.auto_capitalize),
            KeyboardType::Numeric | KeyboardType::Symbolic | KeyboardType::Email => false,
            KeyboardType::Emoji | KeyboardType::Images | KeyboardType::Custom(_) => {
                return ActionGrid::new();
            }
        };

        input_set
            .rows
            .iter()
            .map(|row| {
                row.items
                    .iter()
                    .map(|item| KeyboardAction::Character(item.character(uppercase).to_string()))
                    .collect()
            })
            .collect()
    }

    /// Looks up the input set for `context` and builds its grid.
    ///
    /// A mode with no registered rows degrades to an empty grid.
    #[must_use]
    pub fn build_for_context(
        &self,
        context: &KeyboardContext,
        provider: &dyn InputSetProvider,
    ) -> ActionGrid {
        input_set_for_context(context, provider)
            .map(|input_set| self.build_actions(context, input_set))
            .unwrap_or_default()
    }
}

/// Input set a context draws its rows from, if any.
///
/// Missing rows are logged and reported as `None`.
pub fn input_set_for_context<'a>(
    context: &KeyboardContext,
    provider: &'a dyn InputSetProvider,
) -> Option<&'a InputSet> {
    let Some(mode) = InputMode::for_keyboard_type(&context.keyboard_type) else {
        tracing::debug!(
            "No input set for {} keyboard, building empty grid",
            context.keyboard_type
        );
        return None;
    };

    match provider.input_set(mode, context.device) {
        Ok(input_set) => Some(input_set),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
