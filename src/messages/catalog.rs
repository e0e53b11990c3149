//! Message catalogs.
//!
//! A catalog maps message identifiers to templates with `{param}`
//! placeholders. The English catalog is embedded at compile time; hosts can
//! load their own from a YAML file.

use super::{Message, MessageKey, MessageParam, Translator};
use crate::error::{EnvCheckError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

const ENGLISH: &str = include_str!("../../resources/lang/en.yml");

/// A YAML-backed [`Translator`].
///
/// # Example
///
/// ```
/// use envcheck::messages::{Catalog, Message, MessageKey, Translator};
///
/// let catalog = Catalog::english().unwrap();
/// let msg = Message::new(MessageKey::MissingVarsList).with("list", "A, B");
/// assert_eq!(catalog.translate(&msg), "Missing environment variables: A, B");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: HashMap<String, String>,
}

impl Catalog {
    /// The bundled English catalog.
    pub fn english() -> Result<Self> {
        Self::from_yaml_str(ENGLISH, "en")
    }

    /// Parse a catalog from YAML text; `source_name` is used in errors.
    pub fn from_yaml_str(content: &str, source_name: &str) -> Result<Self> {
        let templates: HashMap<String, String> =
            serde_yaml::from_str(content).map_err(|e| EnvCheckError::CatalogParseError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { templates })
    }

    /// Load a catalog from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content, &path.display().to_string())
    }

    /// Return a copy of `self` with the templates of `other` taking priority.
    pub fn overlaid_with(mut self, other: Catalog) -> Self {
        self.templates.extend(other.templates);
        self
    }

    /// Template registered for `key`, if any.
    pub fn template(&self, key: MessageKey) -> Option<&str> {
        self.templates.get(key.as_str()).map(String::as_str)
    }

    /// Message keys with no template in this catalog.
    pub fn missing_keys(&self) -> Vec<MessageKey> {
        MessageKey::ALL
            .into_iter()
            .filter(|key| self.template(*key).is_none())
            .collect()
    }

    fn render_param(&self, param: &MessageParam) -> String {
        match param {
            MessageParam::Text(text) => text.clone(),
            MessageParam::List { items, separator } => items
                .iter()
                .map(|item| self.translate(item))
                .collect::<Vec<_>>()
                .join(separator),
        }
    }
}

impl Translator for Catalog {
    fn translate(&self, message: &Message) -> String {
        let Some(template) = self.template(message.key) else {
            warn!(key = message.key.as_str(), "no template for message");
            return message.key.as_str().to_string();
        };

        // Single pass, so substituted values are never scanned for placeholders
        let mut text = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match message.params.get(name) {
                        Some(param) => text.push_str(&self.render_param(param)),
                        None => {
                            text.push('{');
                            text.push_str(name);
                            text.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    text.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        text.push_str(rest);
        text
    }
}
