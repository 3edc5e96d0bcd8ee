// SPDX-License-Identifier: GPL-3.0-only

//! Errors and validation issues for engine configuration loading.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The configuration cannot be used
    Error,
    /// The engine degrades around it
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One problem found in a configuration.
///
/// `field_path` points into the JSON document (e.g.
/// `locales[1].tablet.numeric[0]`). Issues inside a locale entry also name
/// the locale so hosts can report which keyboard is affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub field_path: String,
    pub locale: Option<String>,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    fn new(severity: Severity, message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self {
            severity,
            field_path: field_path.into(),
            locale: None,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn error(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self::new(Severity::Error, message, field_path)
    }

    pub fn warning(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message, field_path)
    }

    /// Names the locale the issue belongs to. Blank ids are not recorded.
    #[must_use]
    pub fn in_locale(mut self, locale: &str) -> Self {
        if !locale.trim().is_empty() {
            self.locale = Some(locale.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.severity, self.field_path)?;
        if let Some(locale) = &self.locale {
            write!(f, " (locale '{}')", locale)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " [hint: {}]", suggestion)?;
        }
        Ok(())
    }
}

/// Failure to load an engine configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the config format
    Syntax {
        path: Option<String>,
        line: usize,
        column: usize,
        source: serde_json::Error,
    },

    /// The document parsed but has fatal issues
    Invalid {
        path: Option<String>,
        issues: Vec<ValidationIssue>,
    },
}

impl ConfigError {
    pub(crate) fn syntax(source: serde_json::Error) -> Self {
        Self::Syntax {
            path: None,
            line: source.line(),
            column: source.column(),
            source,
        }
    }

    /// Records the file the configuration came from.
    #[must_use]
    pub(crate) fn in_file(mut self, file: &str) -> Self {
        match &mut self {
            Self::Read { .. } => {}
            Self::Syntax { path, .. } | Self::Invalid { path, .. } => {
                path.get_or_insert_with(|| file.to_string());
            }
        }
        self
    }

    /// Fatal issues, empty unless the configuration failed validation.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Invalid { issues, .. } => issues,
            _ => &[],
        }
    }

    /// Locales named by the fatal issues, deduplicated in order.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = Vec::new();
        for locale in self.issues().iter().filter_map(|i| i.locale.as_deref()) {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        locales
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read keyboard config '{}': {}", path, source)
            }
            Self::Syntax {
                path,
                line,
                column,
                source,
            } => {
                write!(f, "malformed keyboard config")?;
                if let Some(path) = path {
                    write!(f, " '{}'", path)?;
                }
                write!(f, " at {}:{}: {}", line, column, source)
            }
            Self::Invalid { path, issues } => {
                write!(f, "invalid keyboard config")?;
                if let Some(path) = path {
                    write!(f, " '{}'", path)?;
                }
                write!(f, " ({} error(s))", issues.len())?;
                for issue in issues {
                    write!(f, "\n  - {}", issue)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Syntax { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_position() {
        let source = serde_json::from_str::<serde_json::Value>("{\n  \"locales\":\n}").unwrap_err();
        let err = ConfigError::syntax(source).in_file("keyboard.json");

        match &err {
            ConfigError::Syntax { path, line, .. } => {
                assert_eq!(path.as_deref(), Some("keyboard.json"));
                assert_eq!(*line, 3);
            }
            other => panic!("Expected Syntax, got {:?}", other),
        }
        assert!(err.to_string().contains("'keyboard.json' at 3:"), "got: {}", err);
    }

    #[test]
    fn test_issue_display_names_locale() {
        let issue = ValidationIssue::warning("No numeric rows", "locales[0].tablet.numeric")
            .in_locale("sv")
            .with_suggestion("Add numeric rows");

        assert_eq!(
            issue.to_string(),
            "warning at locales[0].tablet.numeric (locale 'sv'): No numeric rows [hint: Add numeric rows]"
        );
        assert_eq!(ValidationIssue::error("Locale id is empty", "x").in_locale(" ").locale, None);
    }

    #[test]
    fn test_invalid_lists_issues_and_locales() {
        let err = ConfigError::Invalid {
            path: None,
            issues: vec![
                ValidationIssue::error("Duplicate", "locales[1].locale").in_locale("sv"),
                ValidationIssue::error("Row height must be positive", "geometry.phone.portrait"),
                ValidationIssue::error("Duplicate", "locales[2].locale").in_locale("sv"),
            ],
        }
        .in_file("keyboard.json");

        let text = err.to_string();
        assert!(text.starts_with("invalid keyboard config 'keyboard.json' (3 error(s))"));
        assert_eq!(text.lines().count(), 4);
        assert_eq!(err.locales(), vec!["sv"]);
        assert_eq!(err.issues().len(), 3);
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error;

        let err = ConfigError::Read {
            path: "nope.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.issues().is_empty());
        assert!(err.to_string().contains("nope.json"));
    }
}
