//! Message catalog configuration.

use super::MessageKey;
use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Templates for default error messages, keyed by [`MessageKey::code`].
///
/// Templates use `{param}` placeholders. Codes without a template fall back
/// to the built-in English text.
///
/// ```json
/// {
///   "locale": "fr",
///   "templates": {
///     "required": "Ce champ est obligatoire",
///     "string.min_length": "Au moins {min} caractères"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCatalog {
    /// Locale tag of the templates.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Templates by message code.
    #[serde(default)]
    pub templates: HashMap<String, String>,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            templates: HashMap::new(),
        }
    }
}

impl MessageCatalog {
    /// Creates an empty catalog that renders the built-in text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Adds or replaces a template.
    #[must_use]
    pub fn with_template(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(code.into(), template.into());
        self
    }

    /// Parses a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Returns the template used for a key.
    #[must_use]
    pub fn template(&self, key: &MessageKey) -> &str {
        self.templates
            .get(key.code())
            .map_or_else(|| key.default_template(), String::as_str)
    }

    /// Renders the message for a key.
    #[must_use]
    pub fn render(&self, key: &MessageKey) -> String {
        let mut message = self.template(key).to_string();
        for (name, value) in key.params() {
            message = message.replace(&format!("{{{name}}}"), &value);
        }
        message
    }
}
