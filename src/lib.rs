// SPDX-License-Identifier: GPL-3.0-only

//! Softkeys - keyboard layout derivation for on-screen software keyboards
//!
//! This crate computes what a soft keyboard should show: which keys, in which
//! rows, with which width policy, height and insets. It does not render,
//! recognize gestures or insert text; those belong to the host.
//!
//! # Architecture
//!
//! Layout derivation is a pure, synchronous function of two inputs:
//!
//! 1. **Context** (`layout::KeyboardContext`): keyboard type and shift state,
//!    device class, locale, orientation and the host's return key intent.
//!
//! 2. **Input sets** (`layout::InputSetProvider`): the character rows of each
//!    mode for a locale, registered once during setup.
//!
//! A `layout::LayoutRegistry` owns the providers and turns a context into a
//! `layout::KeyboardLayout`, rebuilt from scratch whenever the context changes.
//!
//! # Modules
//!
//! - `app_settings`: Centralized constants (row heights, insets, defaults)
//! - `config`: JSON engine configuration with permissive validation
//! - `input`: Shift state and its transition rules
//! - `layout`: Input sets, action grids, geometry and the provider registry

pub mod app_settings;
pub mod config;
pub mod input;
pub mod layout;

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use crate::input::{ShiftState, ShiftTracker};
    use crate::layout::sizing::{resolve_context_widths, resolve_layout_widths};
    use crate::layout::{
        DeviceClass, DeviceInputSets, InputMode, InputSet, InputSetItem, InputSetProvider,
        InputSetRow, KeyboardAction, KeyboardContext, KeyboardLayout, KeyboardType,
        LayoutItemWidth, LayoutRegistry, LocaleInputSetProvider, Orientation, PrimaryAction,
        ReturnKeyType,
    };

    const SHIFT_STATES: [ShiftState; 4] = [
        ShiftState::Auto,
        ShiftState::Lowercased,
        ShiftState::Uppercased,
        ShiftState::CapsLocked,
    ];

    const DEVICES: [DeviceClass; 2] = [DeviceClass::Phone, DeviceClass::Tablet];

    fn character_rows(layout: &KeyboardLayout) -> Vec<Vec<String>> {
        layout
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|item| item.action.character().map(str::to_string))
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect()
    }

    fn expected_rows(set: &InputSet, uppercase: bool) -> Vec<Vec<String>> {
        set.rows
            .iter()
            .map(|row| {
                row.items
                    .iter()
                    .map(|item| item.character(uppercase).to_string())
                    .collect()
            })
            .collect()
    }

    /// Integration Test 1: Alphabetic labels follow the shift state
    ///
    /// For every shift state, device and built-in locale, each character key
    /// renders the member of its source pair selected by the shift state.
    #[test]
    fn test_alphabetic_labels_follow_shift_state() {
        for input_sets in [LocaleInputSetProvider::english(), LocaleInputSetProvider::swedish()] {
            let mut registry = LayoutRegistry::new();
            registry.register(input_sets.clone());

            for device in DEVICES {
                let set = input_sets.input_set(InputMode::Alphabetic, device).unwrap();
                for state in SHIFT_STATES {
                    for auto_capitalize in [false, true] {
                        let ctx = KeyboardContext::new(KeyboardType::Alphabetic(state))
                            .with_device(device)
                            .with_auto_capitalize(auto_capitalize);
                        let layout = registry.keyboard_layout(&ctx);

                        assert_eq!(
                            character_rows(&layout),
                            expected_rows(set, state.is_uppercase(auto_capitalize)),
                            "{:?} on {} for '{}'",
                            state,
                            device,
                            input_sets.locale
                        );
                    }
                }
            }
        }
    }

    /// Integration Test 2: Numeric and symbolic labels ignore shift
    #[test]
    fn test_numeric_symbolic_use_lowercase_slot() {
        let input_sets = LocaleInputSetProvider::new(
            "xx",
            DeviceInputSets {
                numeric: InputSet::new(vec![InputSetRow::new(vec![InputSetItem::pair("1", "!")])]),
                symbolic: InputSet::new(vec![InputSetRow::new(vec![InputSetItem::pair("[", "{")])]),
                ..DeviceInputSets::default()
            },
            DeviceInputSets::default(),
        );
        let mut registry = LayoutRegistry::new();
        registry.register(input_sets);

        let numeric = registry.keyboard_layout(
            &KeyboardContext::new(KeyboardType::Numeric).with_auto_capitalize(true),
        );
        assert_eq!(character_rows(&numeric), vec![vec!["1".to_string()]]);

        let symbolic = registry.keyboard_layout(&KeyboardContext::new(KeyboardType::Symbolic));
        assert_eq!(character_rows(&symbolic), vec![vec!["[".to_string()]]);
    }

    /// Integration Test 3: Grid shape mirrors the input set
    #[test]
    fn test_grid_shape_mirrors_input_set() {
        let input_sets = LocaleInputSetProvider::english();
        let registry = LayoutRegistry::new();

        for device in DEVICES {
            for (mode, keyboard_type) in [
                (InputMode::Alphabetic, KeyboardType::Alphabetic(ShiftState::Lowercased)),
                (InputMode::Numeric, KeyboardType::Numeric),
                (InputMode::Symbolic, KeyboardType::Symbolic),
            ] {
                let set = input_sets.input_set(mode, device).unwrap();
                let ctx = KeyboardContext::new(keyboard_type).with_device(device);
                let layout = registry.keyboard_layout(&ctx);

                let counts: Vec<usize> = character_rows(&layout).iter().map(Vec::len).collect();
                let expected: Vec<usize> = set.rows.iter().map(InputSetRow::len).collect();
                assert_eq!(counts, expected, "{} on {}", mode, device);
                assert_eq!(layout.row_count(), set.rows.len() + 1);
            }
        }
    }

    /// Integration Test 4: Example from the layout contract
    ///
    /// Rows [[q, Q], [w, W]], [[a, A]] with uppercased shift render Q and W
    /// with input width.
    #[test]
    fn test_uppercased_example() {
        let rows = InputSet::new(vec![
            InputSetRow::new(vec![InputSetItem::pair("q", "Q"), InputSetItem::pair("w", "W")]),
            InputSetRow::new(vec![InputSetItem::pair("a", "A")]),
        ]);
        let mut registry = LayoutRegistry::new();
        registry.register(LocaleInputSetProvider::new(
            "qa",
            DeviceInputSets {
                alphabetic: rows,
                ..DeviceInputSets::default()
            },
            DeviceInputSets::default(),
        ));

        let ctx = KeyboardContext::new(KeyboardType::Alphabetic(ShiftState::Uppercased));
        let layout = registry.keyboard_layout(&ctx);

        let first_row: Vec<(&KeyboardAction, LayoutItemWidth)> = layout.rows[0]
            .iter()
            .map(|item| (&item.action, item.width))
            .collect();
        assert_eq!(
            first_row,
            vec![
                (&KeyboardAction::Character("Q".into()), LayoutItemWidth::Input),
                (&KeyboardAction::Character("W".into()), LayoutItemWidth::Input),
            ]
        );
    }

    /// Integration Test 5: Numeric search keyboard resolves the search key
    #[test]
    fn test_numeric_search_primary() {
        let registry = LayoutRegistry::new();
        let ctx = KeyboardContext::new(KeyboardType::Numeric)
            .with_return_key_type(ReturnKeyType::Search);
        let layout = registry.keyboard_layout(&ctx);

        assert_eq!(
            layout.bottom_trailing_item().map(|item| &item.action),
            Some(&KeyboardAction::Primary(PrimaryAction::Search))
        );
    }

    /// Integration Test 6: Empty symbolic rows still give a scaffold
    #[test]
    fn test_empty_symbolic_scaffold() {
        let mut registry = LayoutRegistry::new();
        registry.register(LocaleInputSetProvider::new(
            "xx",
            DeviceInputSets {
                alphabetic: InputSet::from_strs(&["qwerty"]),
                ..DeviceInputSets::default()
            },
            DeviceInputSets {
                alphabetic: InputSet::from_strs(&["qwerty"]),
                ..DeviceInputSets::default()
            },
        ));

        for device in DEVICES {
            let ctx = KeyboardContext::new(KeyboardType::Symbolic).with_device(device);
            let layout = registry.keyboard_layout(&ctx);

            assert!(!layout.is_empty());
            assert!(layout.find(&KeyboardAction::Space).is_some());
            assert!(layout.find(&KeyboardAction::Backspace).is_some());
            assert!(layout
                .find(&KeyboardAction::KeyboardType(KeyboardType::Numeric))
                .is_some());
            assert!(layout
                .actions()
                .any(|action| matches!(action, KeyboardAction::Primary(_))));
        }
    }

    /// Integration Test 7: Width policy invariant and render-time sizing
    ///
    /// Every row of a phone layout resolves to exactly the keyboard width,
    /// since every row has at least one flexible key.
    #[test]
    fn test_width_policy_and_sizing() {
        let registry = LayoutRegistry::new();
        let ctx = KeyboardContext::new(KeyboardType::Alphabetic(ShiftState::Lowercased))
            .with_orientation(Orientation::Landscape, 844.0)
            .with_multiple_locales(true);
        let layout = registry.keyboard_layout(&ctx);

        for item in layout.rows.iter().flatten() {
            assert_eq!(
                item.width == LayoutItemWidth::Input,
                item.action.is_character(),
                "{}",
                item.action
            );
        }

        let widths = resolve_layout_widths(&layout, ctx.screen_width);
        let input_width = ctx.screen_width / 10.0;
        assert!(widths[0].iter().all(|w| (w - input_width).abs() < 1e-3));
        for row in &widths[2..] {
            let total: f32 = row.iter().sum();
            assert!((total - ctx.screen_width).abs() < 1e-2, "row total {}", total);
        }
    }

    /// Integration Test 8: Shift tracking drives relayout
    ///
    /// A shift tap followed by a character reverts to lowercase, and each
    /// state yields a freshly built layout.
    #[test]
    fn test_shift_tracking_relayout() {
        let registry = LayoutRegistry::new();
        let mut tracker = ShiftTracker::new(ShiftState::Lowercased);

        let layout_for = |state: ShiftState| {
            registry.keyboard_layout(&KeyboardContext::new(KeyboardType::Alphabetic(state)))
        };

        let state = tracker.tap(0, false);
        assert_eq!(
            layout_for(state).rows[0][0].action,
            KeyboardAction::Character("Q".into())
        );

        let state = tracker.character_typed();
        assert_eq!(
            layout_for(state).rows[0][0].action,
            KeyboardAction::Character("q".into())
        );
        assert_eq!(layout_for(state), layout_for(state), "Layouts are idempotent");
    }

    /// Integration Test 9: Tablet rows fill the keyboard in both orientations
    ///
    /// Every key resolves to a positive width. Rows with a flexible key span
    /// the full width, rows of input keys only fit within it.
    #[test]
    fn test_tablet_sizing_fills_rows() {
        for input_sets in [LocaleInputSetProvider::english(), LocaleInputSetProvider::swedish()] {
            let mut registry = LayoutRegistry::new();
            registry.register(input_sets.clone());

            for (orientation, width) in [(Orientation::Portrait, 820.0), (Orientation::Landscape, 1180.0)] {
                for keyboard_type in [
                    KeyboardType::Alphabetic(ShiftState::Uppercased),
                    KeyboardType::Numeric,
                    KeyboardType::Symbolic,
                    KeyboardType::Email,
                ] {
                    let ctx = KeyboardContext::new(keyboard_type)
                        .with_device(DeviceClass::Tablet)
                        .with_orientation(orientation, width)
                        .with_multiple_locales(true)
                        .with_dictation(true);
                    let layout = registry.keyboard_layout(&ctx);
                    let widths = resolve_context_widths(&layout, &ctx);
                    let label = format!("{} {:?} '{}'", ctx.keyboard_type, orientation, input_sets.locale);

                    for (row, row_widths) in layout.rows.iter().zip(&widths) {
                        assert!(row_widths.iter().all(|w| *w > 0.0), "{}: {:?}", label, row_widths);

                        let total: f32 = row_widths.iter().sum();
                        if row.iter().any(|item| item.width == LayoutItemWidth::Available) {
                            assert!((total - width).abs() < 1e-2, "{}: row total {}", label, total);
                        } else {
                            assert!(total <= width + 1e-2, "{}: row total {}", label, total);
                        }
                    }
                }
            }
        }
    }
}
