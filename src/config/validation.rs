// SPDX-License-Identifier: GPL-3.0-only

//! Validation rules for engine configurations.
//!
//! Validation is permissive. Anything the layout engine can degrade around
//! (an empty mode, a suspicious row shape) is a warning. Only values that
//! would produce nonsense geometry or ambiguous locale lookups are errors.

use crate::app_settings;
use crate::config::error::{ConfigError, ValidationIssue};
use crate::config::{DeviceRowsConfig, EngineConfig, GeometryOverrides, ItemSpec, LoadedConfig, RowSpec};
use crate::layout::context::{DeviceClass, Orientation};
use crate::layout::input_set::{InputMode, InputSetRow, RowShape};
use std::collections::HashSet;

/// Validates a configuration and returns it with warnings.
///
/// Fails with [`ConfigError::Invalid`] listing only the fatal issues.
pub fn validate_config(config: EngineConfig) -> Result<LoadedConfig, ConfigError> {
    let mut issues = Vec::new();

    validate_geometry(&config.geometry, &mut issues);
    validate_locales(&config, &mut issues);
    validate_default_locale(&config, &mut issues);

    let (errors, warnings): (Vec<_>, Vec<_>) =
        issues.into_iter().partition(ValidationIssue::is_error);

    if !errors.is_empty() {
        return Err(ConfigError::Invalid {
            path: None,
            issues: errors,
        });
    }

    Ok(collect_warnings(config, warnings))
}

/// Checks that overridden row heights are positive and insets non-negative.
pub fn validate_geometry(geometry: &GeometryOverrides, issues: &mut Vec<ValidationIssue>) {
    for device in [DeviceClass::Phone, DeviceClass::Tablet] {
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            let Some(entry) = geometry.device(device).and_then(|d| d.orientation(orientation)) else {
                continue;
            };
            let path = format!("geometry.{}.{}", device, orientation_name(orientation));

            if let Some(row_height) = entry.row_height {
                if !row_height.is_finite() || row_height <= 0.0 {
                    issues.push(
                        ValidationIssue::error(
                            format!("Row height must be positive, got {}", row_height),
                            format!("{}.row_height", path),
                        )
                        .with_suggestion("Use a height in points such as 54.0"),
                    );
                }
            }

            if let Some(insets) = entry.insets {
                if !insets.is_valid() {
                    issues.push(ValidationIssue::error(
                        "Insets must not be negative",
                        format!("{}.insets", path),
                    ));
                }
            }
        }
    }
}

/// Checks locale ids, row contents and declared row shapes.
pub fn validate_locales(config: &EngineConfig, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();

    for (index, locale) in config.locales.iter().enumerate() {
        let path = format!("locales[{}]", index);
        let first_issue = issues.len();

        if locale.locale.trim().is_empty() {
            issues.push(
                ValidationIssue::error("Locale id is empty", format!("{}.locale", path))
                    .with_suggestion("Use a locale identifier such as \"sv\" or \"en-GB\""),
            );
        } else if !seen.insert(locale.locale.as_str()) {
            issues.push(ValidationIssue::error(
                format!("Locale '{}' is defined more than once", locale.locale),
                format!("{}.locale", path),
            ));
        }

        for device in [DeviceClass::Phone, DeviceClass::Tablet] {
            let device_path = format!("{}.{}", path, device);
            let rows = locale.device(device);
            validate_device_rows(rows, &device_path, issues);
            validate_row_shape(rows, locale.row_shape, &path, &device_path, issues);
        }

        let tagged: Vec<ValidationIssue> = issues
            .drain(first_issue..)
            .map(|issue| issue.in_locale(&locale.locale))
            .collect();
        issues.extend(tagged);
    }
}

fn validate_device_rows(rows: &DeviceRowsConfig, path: &str, issues: &mut Vec<ValidationIssue>) {
    for mode in [InputMode::Alphabetic, InputMode::Numeric, InputMode::Symbolic] {
        let mode_path = format!("{}.{}", path, mode);
        let specs = rows.rows(mode);

        if specs.is_empty() {
            issues.push(
                ValidationIssue::warning(
                    format!("No {} rows, this mode will only show system keys", mode),
                    mode_path.clone(),
                )
                .with_suggestion(format!("Add {} rows for this device", mode)),
            );
            continue;
        }

        for (row_index, spec) in specs.iter().enumerate() {
            let row_path = format!("{}[{}]", mode_path, row_index);
            if spec.to_row().is_empty() {
                issues.push(ValidationIssue::warning("Row has no keys", row_path.clone()));
            }
            if let RowSpec::Items(items) = spec {
                for (item_index, item) in items.iter().enumerate() {
                    if item_is_blank(item) {
                        issues.push(ValidationIssue::warning(
                            "Key has no text",
                            format!("{}[{}]", row_path, item_index),
                        ));
                    }
                }
            }
        }
    }
}

fn item_is_blank(item: &ItemSpec) -> bool {
    match item {
        ItemSpec::Single(lower) => lower.is_empty(),
        ItemSpec::Pair([lower, upper]) => lower.is_empty() || upper.is_empty(),
    }
}

/// Flags declared shapes that disagree with the first alphabetic row.
fn validate_row_shape(
    rows: &DeviceRowsConfig,
    declared: RowShape,
    locale_path: &str,
    device_path: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    let alphabetic: Vec<InputSetRow> = rows.alphabetic.iter().map(RowSpec::to_row).collect();
    if alphabetic.is_empty() {
        return;
    }

    let suggested = RowShape::detect(&alphabetic);
    if suggested == declared {
        return;
    }

    let first_len = alphabetic[0].len();
    let issue = match declared {
        RowShape::Standard => ValidationIssue::warning(
            format!(
                "First alphabetic row has {} keys but the row shape is standard",
                first_len
            ),
            format!("{}.alphabetic[0]", device_path),
        )
        .with_suggestion(format!(
            "Set {}.row_shape to \"expanded\" if this is an 11-11-7 layout",
            locale_path
        )),
        RowShape::Expanded => ValidationIssue::warning(
            format!(
                "Row shape is expanded but the first alphabetic row has {} keys, not {}",
                first_len,
                app_settings::EXPANDED_ROW_ITEM_COUNT
            ),
            format!("{}.alphabetic[0]", device_path),
        ),
    };
    issues.push(issue);
}

/// Checks that the default locale can be resolved.
pub fn validate_default_locale(config: &EngineConfig, issues: &mut Vec<ValidationIssue>) {
    let Some(default) = config.default_locale.as_deref() else {
        return;
    };

    if config.locale(default).is_none() && default != app_settings::DEFAULT_LOCALE {
        issues.push(
            ValidationIssue::warning(
                format!(
                    "Default locale '{}' is not configured, the built-in '{}' input sets stay active",
                    default,
                    app_settings::DEFAULT_LOCALE
                ),
                "default_locale",
            )
            .with_suggestion("Add the locale to \"locales\" or remove \"default_locale\""),
        );
    }
}

/// Sorts warnings by field path and pairs them with the configuration.
pub fn collect_warnings(config: EngineConfig, mut warnings: Vec<ValidationIssue>) -> LoadedConfig {
    warnings.sort_by(|a, b| (a.severity, &a.field_path).cmp(&(b.severity, &b.field_path)));
    LoadedConfig { config, warnings }
}

fn orientation_name(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Portrait => "portrait",
        Orientation::Landscape => "landscape",
    }
}

// ============================================================================
// Tests
// ============================================================================
