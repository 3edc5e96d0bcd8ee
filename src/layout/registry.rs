// SPDX-License-Identifier: GPL-3.0-only

//! Layout provider registry.
//!
//! The registry owns the active input set provider, optional per-locale
//! input set providers, one layout provider per device class and named
//! providers for custom keyboard types. It is the single entry point for
//! layout requests:
//!
//! ```rust,ignore
//! use softkeys::layout::{KeyboardContext, KeyboardType, LayoutRegistry};
//!
//! let registry = LayoutRegistry::new();
//! let layout = registry.keyboard_layout(&KeyboardContext::new(KeyboardType::Numeric));
//! ```
//!
//! Registration is expected during setup. Every call replaces what was
//! registered before (last write wins).

use crate::layout::context::{DeviceClass, KeyboardContext};
use crate::layout::geometry::GeometryConfig;
use crate::layout::input_set::{InputSetProvider, LocaleInputSetProvider};
use crate::layout::provider::{LayoutProvider, PhoneLayoutProvider, TabletLayoutProvider};
use crate::layout::types::{KeyboardLayout, KeyboardType};
use std::collections::HashMap;
use std::fmt;

/// Registry of input set and layout providers.
pub struct LayoutRegistry {
    input_sets: Box<dyn InputSetProvider>,
    locale_input_sets: HashMap<String, Box<dyn InputSetProvider>>,
    phone: Box<dyn LayoutProvider>,
    tablet: Box<dyn LayoutProvider>,
    custom: HashMap<String, Box<dyn LayoutProvider>>,
}

impl fmt::Debug for LayoutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut locales: Vec<&String> = self.locale_input_sets.keys().collect();
        locales.sort();
        let mut custom: Vec<&String> = self.custom.keys().collect();
        custom.sort();

        f.debug_struct("LayoutRegistry")
            .field("active_locale", &self.input_sets.locale())
            .field("locales", &locales)
            .field("phone", &self.phone)
            .field("tablet", &self.tablet)
            .field("custom", &custom)
            .finish()
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutRegistry {
    /// Creates a registry with the built-in English input sets and the
    /// standard phone and tablet providers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_geometry(&GeometryConfig::default())
    }

    /// Creates a registry whose standard providers use `geometry`.
    #[must_use]
    pub fn with_geometry(geometry: &GeometryConfig) -> Self {
        Self {
            input_sets: Box::new(LocaleInputSetProvider::english()),
            locale_input_sets: HashMap::new(),
            phone: Box::new(PhoneLayoutProvider::new(geometry)),
            tablet: Box::new(TabletLayoutProvider::new(geometry)),
            custom: HashMap::new(),
        }
    }

    /// Replaces the active input set provider used for every locale without
    /// a locale-specific provider.
    pub fn register(&mut self, provider: impl InputSetProvider + 'static) {
        tracing::info!("Registered active input set provider for '{}'", provider.locale());
        self.input_sets = Box::new(provider);
    }

    /// Registers an input set provider for its own locale.
    pub fn register_locale(&mut self, provider: impl InputSetProvider + 'static) {
        let locale = provider.locale().to_string();
        tracing::info!("Registered input set provider for locale '{}'", locale);
        self.locale_input_sets.insert(locale, Box::new(provider));
    }

    /// Replaces the layout provider for a device class.
    pub fn register_layout_provider(
        &mut self,
        device: DeviceClass,
        provider: impl LayoutProvider + 'static,
    ) {
        tracing::info!("Registered {} layout provider: {:?}", device, provider);
        match device {
            DeviceClass::Phone => self.phone = Box::new(provider),
            DeviceClass::Tablet => self.tablet = Box::new(provider),
        }
    }

    /// Registers a layout provider for `KeyboardType::Custom(name)`.
    pub fn register_custom(&mut self, name: impl Into<String>, provider: impl LayoutProvider + 'static) {
        let name = name.into();
        tracing::info!("Registered custom layout provider '{}'", name);
        self.custom.insert(name, Box::new(provider));
    }

    /// Locales with a locale-specific provider, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locale_input_sets.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Input set provider for the context's locale.
    ///
    /// Tries the exact locale, then its language part ("sv" for "sv-SE"),
    /// then the active provider.
    #[must_use]
    pub fn input_set_provider(&self, context: &KeyboardContext) -> &dyn InputSetProvider {
        let language = context
            .locale
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or(context.locale.as_str());

        self.locale_input_sets
            .get(&context.locale)
            .or_else(|| self.locale_input_sets.get(language))
            .map(|provider| &**provider)
            .unwrap_or_else(|| {
                tracing::debug!(
                    "No input sets for locale '{}', using '{}'",
                    context.locale,
                    self.input_sets.locale()
                );
                &*self.input_sets
            })
    }

    /// Layout provider for the context.
    ///
    /// Custom keyboard types use their named provider when one is registered.
    /// Everything else dispatches on the device class.
    #[must_use]
    pub fn layout_provider(&self, context: &KeyboardContext) -> &dyn LayoutProvider {
        if let KeyboardType::Custom(name) = &context.keyboard_type {
            match self.custom.get(name) {
                Some(provider) => return &**provider,
                None => tracing::warn!(
                    "No custom layout provider '{}', falling back to {} provider",
                    name,
                    context.device
                ),
            }
        }

        match context.device {
            DeviceClass::Phone => &*self.phone,
            DeviceClass::Tablet => &*self.tablet,
        }
    }

    /// Builds the keyboard layout for `context`.
    #[must_use]
    pub fn keyboard_layout(&self, context: &KeyboardContext) -> KeyboardLayout {
        tracing::debug!(
            "Layout request: {} on {} ({:?}, locale '{}')",
            context.keyboard_type,
            context.device,
            context.orientation,
            context.locale
        );
        self.layout_provider(context)
            .keyboard_layout(context, self.input_set_provider(context))
    }
}

// ============================================================================
// Tests
// ============================================================================
