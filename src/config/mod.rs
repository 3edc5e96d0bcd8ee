// SPDX-License-Identifier: GPL-3.0-only

//! Engine configuration loaded from JSON.
//!
//! A configuration overrides the standard row geometry and registers input
//! sets for additional locales.
//!
//! # Example
//!
//! ```json
//! {
//!     "default_locale": "sv",
//!     "geometry": {
//!         "phone": { "portrait": { "row_height": 50.0 } }
//!     },
//!     "locales": [
//!         {
//!             "locale": "sv",
//!             "row_shape": "expanded",
//!             "phone": {
//!                 "alphabetic": ["qwertyuiopå", "asdfghjklöä", "zxcvbnm"],
//!                 "numeric": ["1234567890", "-/:;()kr&@\"", ".,?!'"],
//!                 "symbolic": ["[]{}#%^*+=", "_\\|~<>€$£•", ".,?!'"]
//!             },
//!             "tablet": {
//!                 "alphabetic": ["qwertyuiopå", "asdfghjklöä", ["z", "x", "c", "v", "b", "n", "m", [",", "!"], [".", "?"]]]
//!             }
//!         }
//!     ]
//! }
//! ```
//!
//! Rows are written either as a string (one key per character, uppercase
//! derived) or as a list whose entries are a single string or an explicit
//! `[lower, upper]` pair.
//!
//! Loading is permissive: non-fatal issues are returned as warnings in the
//! [`LoadedConfig`], while structural problems fail with
//! [`ConfigError::Invalid`].

pub mod error;
pub mod validation;

pub use error::{ConfigError, Severity, ValidationIssue};
pub use validation::validate_config;

use crate::layout::context::{DeviceClass, Orientation};
use crate::layout::geometry::GeometryConfig;
use crate::layout::input_set::{
    DeviceInputSets, InputMode, InputSet, InputSetItem, InputSetRow, LocaleInputSetProvider, RowShape,
};
use crate::layout::registry::LayoutRegistry;
use crate::layout::types::Insets;
use serde::{Deserialize, Serialize};
use std::fs;

/// One key of a configured row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    /// Lowercase form, uppercase derived
    Single(String),
    /// Explicit `[lower, upper]` forms
    Pair([String; 2]),
}

impl ItemSpec {
    fn to_item(&self) -> InputSetItem {
        match self {
            ItemSpec::Single(lower) => InputSetItem::new(lower.clone()),
            ItemSpec::Pair([lower, upper]) => InputSetItem::pair(lower.clone(), upper.clone()),
        }
    }
}

/// One configured row of a mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowSpec {
    /// One key per character
    Chars(String),
    /// Explicit keys
    Items(Vec<ItemSpec>),
}

impl RowSpec {
    #[must_use]
    pub fn to_row(&self) -> InputSetRow {
        match self {
            RowSpec::Chars(chars) => InputSetRow::from_chars(chars),
            RowSpec::Items(items) => InputSetRow::new(items.iter().map(ItemSpec::to_item).collect()),
        }
    }
}

/// Rows for every mode on one device class. Omitted modes are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRowsConfig {
    #[serde(default)]
    pub alphabetic: Vec<RowSpec>,
    #[serde(default)]
    pub numeric: Vec<RowSpec>,
    #[serde(default)]
    pub symbolic: Vec<RowSpec>,
}

impl DeviceRowsConfig {
    #[must_use]
    pub fn rows(&self, mode: InputMode) -> &[RowSpec] {
        match mode {
            InputMode::Alphabetic => &self.alphabetic,
            InputMode::Numeric => &self.numeric,
            InputMode::Symbolic => &self.symbolic,
        }
    }

    fn to_input_sets(&self, shape: RowShape) -> DeviceInputSets {
        let set = |rows: &[RowSpec]| InputSet::new(rows.iter().map(RowSpec::to_row).collect());
        DeviceInputSets {
            alphabetic: set(&self.alphabetic).with_shape(shape),
            numeric: set(&self.numeric),
            symbolic: set(&self.symbolic),
        }
    }
}

/// Input sets for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub locale: String,
    /// Declared shape of the alphabetic rows
    #[serde(default)]
    pub row_shape: RowShape,
    #[serde(default)]
    pub phone: DeviceRowsConfig,
    #[serde(default)]
    pub tablet: DeviceRowsConfig,
}

impl LocaleConfig {
    #[must_use]
    pub fn device(&self, device: DeviceClass) -> &DeviceRowsConfig {
        match device {
            DeviceClass::Phone => &self.phone,
            DeviceClass::Tablet => &self.tablet,
        }
    }

    /// Builds the input set provider for this locale.
    #[must_use]
    pub fn to_provider(&self) -> LocaleInputSetProvider {
        LocaleInputSetProvider::new(
            self.locale.clone(),
            self.phone.to_input_sets(self.row_shape),
            self.tablet.to_input_sets(self.row_shape),
        )
    }
}

/// Partial override of one orientation's geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RowGeometryOverride {
    pub row_height: Option<f32>,
    pub insets: Option<Insets>,
}

/// Partial override of one device class's geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceGeometryOverride {
    pub portrait: Option<RowGeometryOverride>,
    pub landscape: Option<RowGeometryOverride>,
}

impl DeviceGeometryOverride {
    #[must_use]
    pub fn orientation(&self, orientation: Orientation) -> Option<&RowGeometryOverride> {
        match orientation {
            Orientation::Portrait => self.portrait.as_ref(),
            Orientation::Landscape => self.landscape.as_ref(),
        }
    }
}

/// Geometry overrides on top of the standard geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryOverrides {
    pub phone: Option<DeviceGeometryOverride>,
    pub tablet: Option<DeviceGeometryOverride>,
}

impl GeometryOverrides {
    #[must_use]
    pub fn device(&self, device: DeviceClass) -> Option<&DeviceGeometryOverride> {
        match device {
            DeviceClass::Phone => self.phone.as_ref(),
            DeviceClass::Tablet => self.tablet.as_ref(),
        }
    }

    /// Applies the overrides to the standard geometry.
    #[must_use]
    pub fn apply(&self, mut base: GeometryConfig) -> GeometryConfig {
        for device in [DeviceClass::Phone, DeviceClass::Tablet] {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let Some(entry) = self.device(device).and_then(|d| d.orientation(orientation)) else {
                    continue;
                };
                let target = base.device_mut(device).for_orientation_mut(orientation);
                if let Some(row_height) = entry.row_height {
                    target.row_height = row_height;
                }
                if let Some(insets) = entry.insets {
                    target.insets = insets;
                }
            }
        }
        base
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Locale whose input sets become the active provider
    #[serde(default)]
    pub default_locale: Option<String>,
    #[serde(default)]
    pub geometry: GeometryOverrides,
    #[serde(default)]
    pub locales: Vec<LocaleConfig>,
}

impl EngineConfig {
    /// Standard geometry with this configuration's overrides applied.
    #[must_use]
    pub fn geometry_config(&self) -> GeometryConfig {
        self.geometry.apply(GeometryConfig::default())
    }

    #[must_use]
    pub fn locale(&self, locale: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.locale == locale)
    }

    /// Builds a registry with every configured locale registered.
    ///
    /// The default locale, if configured, also becomes the active provider.
    /// Otherwise the built-in English input sets stay active.
    #[must_use]
    pub fn into_registry(self) -> LayoutRegistry {
        let mut registry = LayoutRegistry::with_geometry(&self.geometry_config());

        for locale in &self.locales {
            registry.register_locale(locale.to_provider());
        }

        if let Some(default) = self.default_locale.as_deref().and_then(|l| self.locale(l)) {
            registry.register(default.to_provider());
        }

        registry
    }
}

/// A validated configuration and its non-fatal issues.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: EngineConfig,
    pub warnings: Vec<ValidationIssue>,
}

impl LoadedConfig {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Builds the registry, dropping the warnings.
    #[must_use]
    pub fn into_registry(self) -> LayoutRegistry {
        self.config.into_registry()
    }
}

/// Loads and validates an engine configuration from a JSON file.
///
/// Warnings are logged and returned alongside the configuration.
pub fn load_config_file(path: &str) -> Result<LoadedConfig, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;

    let loaded = load_config_from_str(&json).map_err(|e| e.in_file(path))?;
    for warning in &loaded.warnings {
        tracing::warn!("{}: {}", path, warning);
    }
    Ok(loaded)
}

/// Loads and validates an engine configuration from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<LoadedConfig, ConfigError> {
    let config: EngineConfig = serde_json::from_str(json).map_err(ConfigError::syntax)?;
    validate_config(config)
}

// ============================================================================
// Tests
// ============================================================================
