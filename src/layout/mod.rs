// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout derivation engine.
//!
//! This module turns a context snapshot and a locale's input sets into a
//! [`KeyboardLayout`]: rows of actions, each with a symbolic width policy,
//! a height and insets. Rendering is left to the caller.
//!
//! # Pipeline
//!
//! 1. [`InputSetProvider`] hands out the character rows for the context's
//!    mode and device class.
//! 2. [`ActionMatrixBuilder`] turns them into character actions, cased by the
//!    shift state.
//! 3. A [`LayoutProvider`] (phone, tablet or custom) adds the system keys and
//!    resolves geometry.
//! 4. [`LayoutRegistry`] picks the providers for a request.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use softkeys::input::ShiftState;
//! use softkeys::layout::{KeyboardContext, KeyboardType, LayoutRegistry, ReturnKeyType};
//!
//! let registry = LayoutRegistry::new();
//! let context = KeyboardContext::new(KeyboardType::Alphabetic(ShiftState::Uppercased))
//!     .with_return_key_type(ReturnKeyType::Search);
//!
//! let layout = registry.keyboard_layout(&context);
//! for row in &layout.rows {
//!     for item in row {
//!         println!("{} {:?}", item.action, item.width);
//!     }
//! }
//!
//! // Once the renderer knows the keyboard width:
//! let widths = softkeys::layout::sizing::resolve_layout_widths(&layout, 390.0);
//! ```
//!
//! Layout derivation never fails. Missing input rows, unknown locales and
//! unregistered custom keyboards all degrade to a layout with fewer keys.

// Sub-modules
pub mod actions;
pub mod context;
pub mod geometry;
pub mod input_set;
pub mod provider;
pub mod registry;
pub mod sizing;
pub mod types;

// Re-export public API - Data structures
pub use types::{
    ActionGrid, ConfigurationError, Insets, KeyboardAction, KeyboardLayout, KeyboardType,
    LayoutItem, LayoutItemWidth, PrimaryAction, ReturnKeyType,
};

// Re-export public API - Context and input sets
pub use context::{DeviceClass, KeyboardContext, Orientation};
pub use input_set::{
    device_variant, DeviceInputSets, InputMode, InputSet, InputSetItem, InputSetProvider,
    InputSetRow, LocaleInputSetProvider, RowShape,
};

// Re-export public API - Builders and providers
pub use actions::ActionMatrixBuilder;
pub use geometry::{GeometryConfig, RowGeometry};
pub use provider::{LayoutProvider, PhoneLayoutProvider, StaticLayoutProvider, TabletLayoutProvider};
pub use registry::LayoutRegistry;
