//! Validator options
//!
//! [`ValidatorOptions`] is the resolved, immutable configuration a
//! [`FormValidator`](crate::FormValidator) runs with. Callers supply an
//! [`OptionsOverrides`] (every key optional) which is shallow-merged over
//! the built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::validity::ValidityCheck;

/// Translation key used when a validator or category has no message of its own
pub const DEFAULT_ERROR_KEY: &str = "defaultError";

const DEFAULT_ERROR_TEXT: &str = "Field is invalid";

/// Resolved validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorOptions {
    /// Check a control as soon as it loses focus
    pub validate_immediately: bool,

    pub css_classes: CssClasses,

    /// Control `type`s exempt from validation
    pub form_fields_to_ignore: Vec<String>,

    /// Native categories to report, in reporting order
    pub validation_checks: Vec<ValidityCheck>,

    /// Message templates keyed by category name, plus `defaultError`
    pub translations: BTreeMap<String, String>,
}

/// Class names used by the rendered presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssClasses {
    /// Marker class of the error list inserted after an invalid control
    #[serde(default = "default_error_container")]
    pub error_container: String,
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            error_container: default_error_container(),
        }
    }
}

/// Caller-supplied configuration; omitted keys keep their default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsOverrides {
    #[serde(default)]
    pub validate_immediately: Option<bool>,

    #[serde(default)]
    pub css_classes: Option<CssClasses>,

    #[serde(default)]
    pub form_fields_to_ignore: Option<Vec<String>>,

    #[serde(default)]
    pub validation_checks: Option<Vec<ValidityCheck>>,

    #[serde(default)]
    pub translations: Option<BTreeMap<String, String>>,
}

// Default values
fn default_error_container() -> String {
    "errors".to_string()
}

fn default_fields_to_ignore() -> Vec<String> {
    ["file", "reset", "submit", "button"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn default_translations() -> BTreeMap<String, String> {
    [
        (DEFAULT_ERROR_KEY, DEFAULT_ERROR_TEXT),
        ("valueMissing", "Field cannot be empty"),
        ("badInput", "Value is not a ${type}"),
        ("patternMismatch", "Value does not match a pattern ${title}"),
        ("rangeOverflow", "Value is too big, maximum allowed is ${max}"),
        ("rangeUnderflow", "Value is too small, minimum allowed is ${min}"),
        ("stepMismatch", "Please select proper value"),
        ("tooLong", "Value is too long, maximum allowed is ${maxLength}"),
        ("tooShort", "Value is too short, minimum allowed is ${minLength}"),
        ("typeMismatch", "Bad value for ${type}"),
    ]
    .iter()
    .map(|(key, text)| (key.to_string(), text.to_string()))
    .collect()
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            validate_immediately: true,
            css_classes: CssClasses::default(),
            form_fields_to_ignore: default_fields_to_ignore(),
            validation_checks: ValidityCheck::ALL.to_vec(),
            translations: default_translations(),
        }
    }
}

impl ValidatorOptions {
    /// Shallow-merges `overrides` over the defaults
    ///
    /// A supplied key replaces the default wholesale: passing a
    /// `translations` map with a single entry drops every other default
    /// translation.
    pub fn resolve(overrides: OptionsOverrides) -> Self {
        let defaults = Self::default();

        Self {
            validate_immediately: overrides
                .validate_immediately
                .unwrap_or(defaults.validate_immediately),
            css_classes: overrides.css_classes.unwrap_or(defaults.css_classes),
            form_fields_to_ignore: overrides
                .form_fields_to_ignore
                .unwrap_or(defaults.form_fields_to_ignore),
            validation_checks: overrides
                .validation_checks
                .unwrap_or(defaults.validation_checks),
            translations: overrides.translations.unwrap_or(defaults.translations),
        }
    }

    /// Parses a JSON overrides document and resolves it
    pub fn from_json_str(content: &str) -> Result<Self> {
        let overrides: OptionsOverrides =
            serde_json::from_str(content).context("Failed to parse validator options JSON")?;
        Ok(Self::resolve(overrides))
    }

    /// Parses a TOML overrides document and resolves it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let overrides: OptionsOverrides =
            toml::from_str(content).context("Failed to parse validator options TOML")?;
        Ok(Self::resolve(overrides))
    }

    /// Marker class of the rendered error list
    pub fn error_container(&self) -> &str {
        &self.css_classes.error_container
    }

    pub fn is_ignored_type(&self, control_type: &str) -> bool {
        self.form_fields_to_ignore.iter().any(|t| t == control_type)
    }

    /// The `defaultError` template
    ///
    /// Falls back to the built-in text when an override replaced the
    /// translations without one.
    pub fn default_error(&self) -> &str {
        self.translations
            .get(DEFAULT_ERROR_KEY)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ERROR_TEXT)
    }

    /// Template for `key`, or the default error when there is none
    pub fn translation(&self, key: &str) -> &str {
        self.translations
            .get(key)
            .map(String::as_str)
            .unwrap_or_else(|| self.default_error())
    }
}
