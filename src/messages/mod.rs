//! Message identifiers and parameters.
//!
//! Checks never produce final text. They return [`Message`] values (an
//! identifier plus named parameters) and a [`Translator`] renders them,
//! so hosts can localize every string envcheck shows.
//!
//! - [`catalog`] - YAML-backed translator with the bundled English catalog

pub mod catalog;

pub use catalog::Catalog;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Identifiers of every message a check can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Summary of a passing check.
    EveryVarHasBeenSet,
    /// Missing variables, with `list`.
    MissingVarsList,
    /// Missing variables, with `environment` and `list`.
    MissingVarsListInEnvironment,
    /// Summary of a presence failure.
    NotEveryVarHasBeenSet,
    /// One mismatch, with `name`, `actual` and `expected`.
    VarNotMatchingValue,
    /// Summary of a value-matching failure.
    VarsNotMatchingValues,
    /// Mismatched variables, with `environment` and `list`.
    VarsNotMatchingValuesList,
}

impl MessageKey {
    /// Every key, in catalog order.
    pub const ALL: [MessageKey; 7] = [
        Self::EveryVarHasBeenSet,
        Self::MissingVarsList,
        Self::MissingVarsListInEnvironment,
        Self::NotEveryVarHasBeenSet,
        Self::VarNotMatchingValue,
        Self::VarsNotMatchingValues,
        Self::VarsNotMatchingValuesList,
    ];

    /// The identifier used in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EveryVarHasBeenSet => "every_var_has_been_set",
            Self::MissingVarsList => "missing_vars_list",
            Self::MissingVarsListInEnvironment => "missing_vars_list_in_environment",
            Self::NotEveryVarHasBeenSet => "not_every_var_has_been_set",
            Self::VarNotMatchingValue => "var_not_matching_value",
            Self::VarsNotMatchingValues => "vars_not_matching_values",
            Self::VarsNotMatchingValuesList => "vars_not_matching_values_list",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageParam {
    /// Plain text, inserted as is.
    Text(String),
    /// Nested messages, each rendered then joined with `separator`.
    List {
        items: Vec<Message>,
        separator: String,
    },
}

impl From<&str> for MessageParam {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MessageParam {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A message identifier with its named parameters.
///
/// # Example
///
/// ```
/// use envcheck::messages::{Message, MessageKey};
///
/// let msg = Message::new(MessageKey::MissingVarsList).with("list", "A, B");
/// assert_eq!(msg.key, MessageKey::MissingVarsList);
/// assert_eq!(msg.text_param("list"), Some("A, B"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// The message identifier.
    pub key: MessageKey,
    /// Named parameters substituted into the template.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, MessageParam>,
}

impl Message {
    /// Create a message without parameters.
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<MessageParam>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Add a parameter made of nested messages joined by `separator`.
    pub fn with_list(
        self,
        name: impl Into<String>,
        items: Vec<Message>,
        separator: impl Into<String>,
    ) -> Self {
        self.with(
            name,
            MessageParam::List {
                items,
                separator: separator.into(),
            },
        )
    }

    /// A text parameter's value, if present.
    pub fn text_param(&self, name: &str) -> Option<&str> {
        match self.params.get(name)? {
            MessageParam::Text(s) => Some(s),
            MessageParam::List { .. } => None,
        }
    }
}

/// Renders messages into final text.
pub trait Translator {
    /// Render `message`, including nested messages in its parameters.
    fn translate(&self, message: &Message) -> String;
}
