// SPDX-License-Identifier: GPL-3.0-only

//! Layout providers: the geometry resolvers for each device class.
//!
//! A [`LayoutProvider`] turns a character grid into a complete
//! [`KeyboardLayout`]. It adds the system keys (shift, backspace, mode
//! switches, space, primary key) and gives every action a width policy,
//! height and insets.
//!
//! Width, height and insets go through overridable hooks with the standard
//! behavior as default, so a provider can e.g. make its return key taller
//! without reimplementing the rest.
//!
//! # Phone
//!
//! ```text
//! q w e r t y u i o p
//!  a s d f g h j k l
//! ⇧ z x c v b n m ⌫
//! 123 [🌐] [🎤] space return
//! ```
//!
//! # Tablet
//!
//! ```text
//! q w e r t y u i o p ⌫
//!  a s d f g h j k l return
//! ⇧ z x c v b n m , . ⇧
//! 123 [🌐] [🎤] space 123 dismiss
//! ```
//!
//! On tablets with the 11-11-7 row shape the middle row is too long for the
//! return key, so it moves to the end of the lower row in place of the
//! trailing shift.

use crate::app_settings;
use crate::layout::actions::{input_set_for_context, ActionMatrixBuilder};
use crate::layout::context::{DeviceClass, KeyboardContext};
use crate::layout::geometry::{
    bottom_input_row_leading_action, bottom_row_switch_action, primary_action,
    standard_item_width, DeviceGeometry, GeometryConfig, RowGeometry,
};
use crate::layout::input_set::{InputSetProvider, RowShape};
use crate::layout::types::{
    ActionGrid, Insets, KeyboardAction, KeyboardLayout, KeyboardType, LayoutItem, LayoutItemWidth,
};
use std::fmt;

/// Capability to build and size a keyboard layout.
pub trait LayoutProvider: fmt::Debug {
    /// Adds system keys to the character grid.
    ///
    /// `input_rows` is the grid from the action matrix builder and may be
    /// empty. `shape` is the declared row shape of its input set.
    fn actions(&self, context: &KeyboardContext, input_rows: ActionGrid, shape: RowShape) -> ActionGrid;

    /// Standard row height and insets for `context`.
    fn row_geometry(&self, context: &KeyboardContext) -> RowGeometry;

    /// Width policy for the action at `row`, `column`.
    fn item_width(
        &self,
        action: &KeyboardAction,
        _context: &KeyboardContext,
        _row: usize,
        _column: usize,
    ) -> LayoutItemWidth {
        standard_item_width(action)
    }

    /// Height for the action at `row`, `column`.
    fn item_height(
        &self,
        _action: &KeyboardAction,
        context: &KeyboardContext,
        _row: usize,
        _column: usize,
    ) -> f32 {
        self.row_geometry(context).row_height
    }

    /// Insets for the action at `row`, `column`.
    fn item_insets(
        &self,
        _action: &KeyboardAction,
        context: &KeyboardContext,
        _row: usize,
        _column: usize,
    ) -> Insets {
        self.row_geometry(context).insets
    }

    /// Number of input key widths that span the keyboard.
    ///
    /// `rows` are the complete rows returned by [`LayoutProvider::actions`].
    /// A row that mixes input keys with system keys counts one extra slot, so
    /// its flexible keys keep at least one input width between them.
    fn input_reference_count(&self, rows: &ActionGrid) -> usize {
        rows.iter()
            .map(|row| {
                let characters = row.iter().filter(|action| action.is_character()).count();
                let has_system_keys = characters < row.len();
                if characters > 0 && has_system_keys {
                    characters + 1
                } else {
                    characters
                }
            })
            .max()
            .filter(|count| *count > 0)
            .unwrap_or(app_settings::DEFAULT_INPUT_REFERENCE_COUNT)
    }

    /// Resolves a character grid into a complete layout.
    fn resolve_layout(
        &self,
        context: &KeyboardContext,
        input_rows: ActionGrid,
        shape: RowShape,
    ) -> KeyboardLayout {
        let geometry = self.row_geometry(context);
        let actions = self.actions(context, input_rows, shape);
        let input_reference_count = self.input_reference_count(&actions);

        let rows = actions
            .into_iter()
            .enumerate()
            .map(|(row, actions)| {
                actions
                    .into_iter()
                    .enumerate()
                    .map(|(column, action)| LayoutItem {
                        width: self.item_width(&action, context, row, column),
                        height: self.item_height(&action, context, row, column),
                        insets: self.item_insets(&action, context, row, column),
                        action,
                    })
                    .collect()
            })
            .collect();

        KeyboardLayout {
            rows,
            ideal_item_height: geometry.row_height,
            ideal_item_insets: geometry.insets,
            input_reference_count,
        }
    }

    /// Builds the layout for `context` from the given input sets.
    fn keyboard_layout(
        &self,
        context: &KeyboardContext,
        input_sets: &dyn InputSetProvider,
    ) -> KeyboardLayout {
        let (input_rows, shape) = match input_set_for_context(context, input_sets) {
            Some(input_set) => (
                ActionMatrixBuilder::new().build_actions(context, input_set),
                input_set.shape,
            ),
            None => (ActionGrid::new(), RowShape::Standard),
        };

        self.resolve_layout(context, input_rows, shape)
    }
}

/// Optional bottom row keys that come from the context.
fn bottom_row_extras(context: &KeyboardContext) -> Vec<KeyboardAction> {
    let mut extras = Vec::new();
    if context.has_multiple_locales {
        extras.push(KeyboardAction::LocaleSwitch);
    }
    if context.has_dictation {
        extras.push(KeyboardAction::Dictation);
    }
    extras
}

/// The space bar, flanked by `@` and `.` on email keyboards.
fn space_group(context: &KeyboardContext) -> Vec<KeyboardAction> {
    if context.keyboard_type == KeyboardType::Email {
        vec![
            KeyboardAction::Character("@".into()),
            KeyboardAction::Space,
            KeyboardAction::Character(".".into()),
        ]
    } else {
        vec![KeyboardAction::Space]
    }
}

/// Layout provider for phones.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneLayoutProvider {
    geometry: DeviceGeometry,
}

impl Default for PhoneLayoutProvider {
    fn default() -> Self {
        Self::new(&GeometryConfig::default())
    }
}

impl PhoneLayoutProvider {
    pub fn new(config: &GeometryConfig) -> Self {
        Self {
            geometry: *config.device(DeviceClass::Phone),
        }
    }

    fn bottom_row(&self, context: &KeyboardContext) -> Vec<KeyboardAction> {
        let mut row = vec![bottom_row_switch_action(context)];
        row.extend(bottom_row_extras(context));
        row.extend(space_group(context));
        row.push(primary_action(context));
        row
    }
}

impl LayoutProvider for PhoneLayoutProvider {
    fn actions(&self, context: &KeyboardContext, input_rows: ActionGrid, _shape: RowShape) -> ActionGrid {
        let mut rows = input_rows;
        if rows.is_empty() {
            rows.push(Vec::new());
        }

        if let Some(lower) = rows.last_mut() {
            if let Some(leading) = bottom_input_row_leading_action(context) {
                lower.insert(0, leading);
            }
            lower.push(KeyboardAction::Backspace);
        }

        rows.push(self.bottom_row(context));
        rows
    }

    fn row_geometry(&self, context: &KeyboardContext) -> RowGeometry {
        self.geometry.for_orientation(context.orientation)
    }
}

/// Layout provider for tablets.
#[derive(Debug, Clone, PartialEq)]
pub struct TabletLayoutProvider {
    geometry: DeviceGeometry,
}

impl Default for TabletLayoutProvider {
    fn default() -> Self {
        Self::new(&GeometryConfig::default())
    }
}

impl TabletLayoutProvider {
    pub fn new(config: &GeometryConfig) -> Self {
        Self {
            geometry: *config.device(DeviceClass::Tablet),
        }
    }

    fn bottom_row(&self, context: &KeyboardContext, include_primary: bool) -> Vec<KeyboardAction> {
        let switch = bottom_row_switch_action(context);

        let mut row = vec![switch.clone()];
        row.extend(bottom_row_extras(context));
        row.extend(space_group(context));
        row.push(switch);
        if include_primary {
            row.push(primary_action(context));
        }
        row.push(KeyboardAction::DismissKeyboard);
        row
    }
}

impl LayoutProvider for TabletLayoutProvider {
    fn actions(&self, context: &KeyboardContext, input_rows: ActionGrid, shape: RowShape) -> ActionGrid {
        let mut rows = input_rows;
        if rows.is_empty() {
            rows.push(Vec::new());
        }

        let count = rows.len();
        let lower_index = count - 1;
        let leading = bottom_input_row_leading_action(context);
        let expanded = shape == RowShape::Expanded && context.keyboard_type.is_alphabetic();

        // Row that ends with the primary key, if the input rows have room for it
        let primary_index = match count {
            0..=2 => None,
            _ if expanded => Some(lower_index),
            _ => Some(count - 2),
        };

        rows[0].push(KeyboardAction::Backspace);

        if let Some(index) = primary_index {
            if index != lower_index {
                rows[index].push(primary_action(context));
            }
        }

        if lower_index > 0 {
            let lower = &mut rows[lower_index];
            if let Some(action) = &leading {
                lower.insert(0, action.clone());
            }
            if primary_index == Some(lower_index) {
                lower.push(primary_action(context));
            } else if let Some(action) = leading {
                lower.push(action);
            }
        } else if let Some(action) = leading {
            rows[0].insert(0, action);
        }

        rows.push(self.bottom_row(context, primary_index.is_none()));
        rows
    }

    fn row_geometry(&self, context: &KeyboardContext) -> RowGeometry {
        self.geometry.for_orientation(context.orientation)
    }
}

/// Provider for custom keyboards with fixed rows.
///
/// Ignores input sets entirely and lays out its own rows with the standard
/// width policy and the geometry of the context's device class.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLayoutProvider {
    rows: ActionGrid,
    geometry: GeometryConfig,
}

impl StaticLayoutProvider {
    pub fn new(rows: ActionGrid) -> Self {
        Self {
            rows,
            geometry: GeometryConfig::default(),
        }
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = geometry;
        self
    }
}

impl LayoutProvider for StaticLayoutProvider {
    fn actions(&self, _context: &KeyboardContext, _input_rows: ActionGrid, _shape: RowShape) -> ActionGrid {
        self.rows.clone()
    }

    fn row_geometry(&self, context: &KeyboardContext) -> RowGeometry {
        self.geometry.for_context(context)
    }

    fn keyboard_layout(
        &self,
        context: &KeyboardContext,
        _input_sets: &dyn InputSetProvider,
    ) -> KeyboardLayout {
        self.resolve_layout(context, ActionGrid::new(), RowShape::Standard)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ShiftState;
    use crate::layout::context::Orientation;
    use crate::layout::input_set::{DeviceInputSets, InputSet, LocaleInputSetProvider};
    use crate::layout::types::{PrimaryAction, ReturnKeyType};

    fn chars(grid_row: &[LayoutItem]) -> Vec<String> {
        grid_row
            .iter()
            .filter_map(|item| item.action.character().map(str::to_string))
            .collect()
    }

    fn actions(row: &[LayoutItem]) -> Vec<KeyboardAction> {
        row.iter().map(|item| item.action.clone()).collect()
    }

    /// Test 1: Phone alphabetic layout has shift, backspace and a bottom row
    #[test]
    fn test_phone_alphabetic_layout() {
        let provider = PhoneLayoutProvider::default();
        let ctx = KeyboardContext::new(KeyboardType::Alphabetic(ShiftState::Lowercased));
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());

        assert_eq!(layout.row_count(), 4);
        assert_eq!(layout.rows[0].len(), 10);
        assert_eq!(layout.rows[1].len(), 9);

        let lower = actions(&layout.rows[2]);
        assert_eq!(lower.first(), Some(&KeyboardAction::Shift(ShiftState::Lowercased)));
        assert_eq!(lower.last(), Some(&KeyboardAction::Backspace));
        assert_eq!(lower.len(), 9);

        assert_eq!(
            actions(&layout.rows[3]),
            vec![
                KeyboardAction::KeyboardType(KeyboardType::Numeric),
                KeyboardAction::Space,
                KeyboardAction::Primary(PrimaryAction::Newline),
            ]
        );
        assert_eq!(layout.input_reference_count, 10);
    }

    /// Test 2: Width policy invariant across a whole layout
    #[test]
    fn test_width_policy_invariant() {
        let input_sets = LocaleInputSetProvider::english();
        let phone = PhoneLayoutProvider::default();
        let tablet = TabletLayoutProvider::default();

        for keyboard_type in [
            KeyboardType::Alphabetic(ShiftState::Uppercased),
            KeyboardType::Numeric,
            KeyboardType::Symbolic,
            KeyboardType::Email,
        ] {
            let ctx = KeyboardContext::new(keyboard_type)
                .with_multiple_locales(true)
                .with_dictation(true);
            let providers: [&dyn LayoutProvider; 2] = [&phone, &tablet];
            for provider in providers {
                let layout = provider.keyboard_layout(&ctx, &input_sets);
                for item in layout.rows.iter().flatten() {
                    let expected = if item.action.is_character() {
                        LayoutItemWidth::Input
                    } else {
                        LayoutItemWidth::Available
                    };
                    assert_eq!(item.width, expected, "{} in {:?}", item.action, provider);
                }
            }
        }
    }

    /// Test 3: Numeric phone layout switches to symbolic and resolves search
    #[test]
    fn test_phone_numeric_search() {
        let provider = PhoneLayoutProvider::default();
        let ctx = KeyboardContext::new(KeyboardType::Numeric)
            .with_return_key_type(ReturnKeyType::Search);
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());

        assert_eq!(
            layout.rows[2].first().map(|item| &item.action),
            Some(&KeyboardAction::KeyboardType(KeyboardType::Symbolic))
        );
        assert_eq!(
            layout.bottom_trailing_item().map(|item| &item.action),
            Some(&KeyboardAction::Primary(PrimaryAction::Search))
        );
        assert_eq!(
            layout.rows[3].first().map(|item| &item.action),
            Some(&KeyboardAction::KeyboardType(KeyboardType::Alphabetic(
                ShiftState::Auto
            )))
        );
    }

    /// Test 4: Empty symbolic rows still produce a system-keys scaffold
    #[test]
    fn test_empty_input_degrades_to_scaffold() {
        let input_sets = LocaleInputSetProvider::new(
            "xx",
            DeviceInputSets {
                alphabetic: InputSet::from_strs(&["abc"]),
                ..DeviceInputSets::default()
            },
            DeviceInputSets::default(),
        );
        let provider = PhoneLayoutProvider::default();
        let ctx = KeyboardContext::new(KeyboardType::Symbolic);
        let layout = provider.keyboard_layout(&ctx, &input_sets);

        assert!(!layout.is_empty());
        assert_eq!(layout.row_count(), 2);
        assert!(layout.find(&KeyboardAction::Space).is_some());
        assert!(layout.find(&KeyboardAction::Backspace).is_some());
        assert!(layout
            .find(&KeyboardAction::KeyboardType(KeyboardType::Numeric))
            .is_some());
        assert!(layout
            .find(&KeyboardAction::Primary(PrimaryAction::Newline))
            .is_some());
        assert_eq!(
            layout.input_reference_count,
            app_settings::DEFAULT_INPUT_REFERENCE_COUNT
        );
    }

    /// Test 5: Tablet standard shape puts return on the middle row
    #[test]
    fn test_tablet_standard_shape() {
        let provider = TabletLayoutProvider::default();
        let ctx = KeyboardContext::new(KeyboardType::Alphabetic(ShiftState::Lowercased))
            .with_device(DeviceClass::Tablet)
            .with_return_key_type(ReturnKeyType::Go);
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());

        assert_eq!(layout.row_count(), 4);
        assert_eq!(
            layout.rows[0].last().map(|i| &i.action),
            Some(&KeyboardAction::Backspace)
        );
        assert_eq!(
            layout.rows[1].last().map(|i| &i.action),
            Some(&KeyboardAction::Primary(PrimaryAction::Go))
        );

        let lower = actions(&layout.rows[2]);
        assert_eq!(lower.first(), Some(&KeyboardAction::Shift(ShiftState::Lowercased)));
        assert_eq!(lower.last(), Some(&KeyboardAction::Shift(ShiftState::Lowercased)));
        assert_eq!(chars(&layout.rows[2]), vec!["z", "x", "c", "v", "b", "n", "m", ",", "."]);

        assert_eq!(
            layout.rows[3].last().map(|i| &i.action),
            Some(&KeyboardAction::DismissKeyboard)
        );
        assert!(!actions(&layout.rows[3]).contains(&KeyboardAction::Primary(PrimaryAction::Go)));
    }

    /// Test 6: Tablet expanded shape moves return to the lower row
    #[test]
    fn test_tablet_expanded_shape() {
        let provider = TabletLayoutProvider::default();
        let ctx = KeyboardContext::new(KeyboardType::Alphabetic(ShiftState::Lowercased))
            .with_device(DeviceClass::Tablet)
            .with_locale("sv");
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::swedish());

        assert_eq!(layout.rows[1].len(), 11, "Middle row keeps only its letters");
        let lower = actions(&layout.rows[2]);
        assert_eq!(lower.first(), Some(&KeyboardAction::Shift(ShiftState::Lowercased)));
        assert_eq!(
            lower.last(),
            Some(&KeyboardAction::Primary(PrimaryAction::Newline))
        );
        assert_eq!(layout.input_reference_count, 12, "Eleven letters plus backspace");
    }

    /// Test 7: Tablet numeric layout uses switches on both sides
    #[test]
    fn test_tablet_numeric_switches() {
        let provider = TabletLayoutProvider::default();
        let ctx = KeyboardContext::new(KeyboardType::Numeric).with_device(DeviceClass::Tablet);
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());

        let symbolic = KeyboardAction::KeyboardType(KeyboardType::Symbolic);
        let lower = actions(&layout.rows[2]);
        assert_eq!(lower.first(), Some(&symbolic));
        assert_eq!(lower.last(), Some(&symbolic));

        let alphabetic = KeyboardAction::KeyboardType(KeyboardType::Alphabetic(ShiftState::Auto));
        let bottom = actions(&layout.rows[3]);
        assert_eq!(bottom.iter().filter(|a| **a == alphabetic).count(), 2);
    }

    /// Test 8: Tablet with no input rows still places every system key
    #[test]
    fn test_tablet_empty_input() {
        let provider = TabletLayoutProvider::default();
        let ctx = KeyboardContext::new(KeyboardType::Emoji).with_device(DeviceClass::Tablet);
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());

        assert_eq!(layout.row_count(), 2);
        assert_eq!(actions(&layout.rows[0]), vec![KeyboardAction::Backspace]);
        assert!(layout
            .find(&KeyboardAction::Primary(PrimaryAction::Newline))
            .is_some());
    }

    /// Test 9: Email bottom row flanks space with @ and .
    #[test]
    fn test_email_bottom_row() {
        let provider = PhoneLayoutProvider::default();
        let ctx = KeyboardContext::new(KeyboardType::Email).with_multiple_locales(true);
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());

        assert_eq!(
            actions(&layout.rows[3]),
            vec![
                KeyboardAction::KeyboardType(KeyboardType::Numeric),
                KeyboardAction::LocaleSwitch,
                KeyboardAction::Character("@".into()),
                KeyboardAction::Space,
                KeyboardAction::Character(".".into()),
                KeyboardAction::Primary(PrimaryAction::Newline),
            ]
        );
        // Email letters are lowercase and the lower row has no shift
        assert_eq!(layout.rows[2].first().map(|i| &i.action), Some(&KeyboardAction::Character("z".into())));
    }

    /// Test 10: Height and insets follow orientation
    #[test]
    fn test_geometry_follows_orientation() {
        let provider = PhoneLayoutProvider::default();
        let ctx = KeyboardContext::default().with_orientation(Orientation::Landscape, 844.0);
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());

        assert_eq!(layout.ideal_item_height, app_settings::PHONE_LANDSCAPE_ROW_HEIGHT);
        assert!(layout
            .rows
            .iter()
            .flatten()
            .all(|item| item.height == app_settings::PHONE_LANDSCAPE_ROW_HEIGHT));
    }

    /// Test 11: Overriding a hook changes only that item
    #[test]
    fn test_height_override_hook() {
        #[derive(Debug)]
        struct TallReturn(PhoneLayoutProvider);

        impl LayoutProvider for TallReturn {
            fn actions(&self, context: &KeyboardContext, input_rows: ActionGrid, shape: RowShape) -> ActionGrid {
                self.0.actions(context, input_rows, shape)
            }

            fn row_geometry(&self, context: &KeyboardContext) -> RowGeometry {
                self.0.row_geometry(context)
            }

            fn item_height(&self, action: &KeyboardAction, context: &KeyboardContext, _row: usize, _column: usize) -> f32 {
                let base = self.row_geometry(context).row_height;
                if matches!(action, KeyboardAction::Primary(_)) {
                    base * 2.0
                } else {
                    base
                }
            }
        }

        let provider = TallReturn(PhoneLayoutProvider::default());
        let layout = provider.keyboard_layout(&KeyboardContext::default(), &LocaleInputSetProvider::english());

        let primary = layout.bottom_trailing_item().unwrap();
        assert_eq!(primary.height, app_settings::PHONE_PORTRAIT_ROW_HEIGHT * 2.0);
        assert_eq!(layout.rows[0][0].height, app_settings::PHONE_PORTRAIT_ROW_HEIGHT);
    }

    /// Test 12: Static provider lays out its own rows
    #[test]
    fn test_static_provider() {
        let rows = vec![
            "0123456789abcdef"
                .chars()
                .map(|c| KeyboardAction::Character(c.to_string()))
                .collect(),
            vec![KeyboardAction::Backspace, KeyboardAction::Primary(PrimaryAction::Done)],
        ];
        let provider = StaticLayoutProvider::new(rows);
        let ctx = KeyboardContext::new(KeyboardType::Custom("hex".into()));
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());

        assert_eq!(layout.row_count(), 2);
        assert_eq!(layout.input_reference_count, 16);
        assert_eq!(layout.rows[1][0].width, LayoutItemWidth::Available);
    }

    /// Test 13: Tablet rows leave room for their flexible keys
    ///
    /// The top row carries every letter plus backspace, so the reference
    /// count must include the backspace slot or it resolves to nothing.
    #[test]
    fn test_tablet_flexible_keys_keep_width() {
        use crate::layout::sizing::resolve_layout_widths;

        let provider = TabletLayoutProvider::default();
        for input_sets in [LocaleInputSetProvider::english(), LocaleInputSetProvider::swedish()] {
            for keyboard_type in [
                KeyboardType::Alphabetic(ShiftState::Lowercased),
                KeyboardType::Numeric,
                KeyboardType::Symbolic,
                KeyboardType::Email,
            ] {
                let ctx = KeyboardContext::new(keyboard_type.clone()).with_device(DeviceClass::Tablet);
                let layout = provider.keyboard_layout(&ctx, &input_sets);
                let widths = resolve_layout_widths(&layout, 820.0);

                for (row, row_widths) in layout.rows.iter().zip(&widths) {
                    for (item, width) in row.iter().zip(row_widths) {
                        assert!(
                            *width > 0.0,
                            "{} has no width on {} for '{}'",
                            item.action,
                            keyboard_type,
                            input_sets.locale
                        );
                    }
                }
            }
        }

        let ctx = KeyboardContext::new(KeyboardType::Alphabetic(ShiftState::Lowercased))
            .with_device(DeviceClass::Tablet);
        let layout = provider.keyboard_layout(&ctx, &LocaleInputSetProvider::english());
        assert_eq!(layout.input_reference_count, 11);
        let widths = resolve_layout_widths(&layout, 880.0);
        assert_eq!(widths[0][10], 80.0, "Backspace gets the slot left after ten letters");
    }
}
