//! Check results.

use crate::messages::{Message, MessageKey, Translator};
use serde::Serialize;

/// Outcome status of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Every requirement is satisfied.
    Ok,
    /// At least one requirement is not.
    Failed,
}

/// The structured result of one check run.
///
/// Messages are left untranslated; use [`CheckResult::render`] to turn the
/// result into text for a host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Pass or fail.
    pub status: Status,
    /// Names of the offending variables, in rule order. Empty when ok.
    pub meta: Vec<String>,
    /// Short summary of the outcome.
    pub short_summary: Message,
    /// Detailed message for notifications. `None` when ok.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_message: Option<Message>,
}

impl CheckResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            meta: Vec::new(),
            short_summary: Message::new(MessageKey::EveryVarHasBeenSet),
            notification_message: None,
        }
    }

    /// A failing result.
    pub fn failed(meta: Vec<String>, short_summary: Message, notification_message: Message) -> Self {
        Self {
            status: Status::Failed,
            meta,
            short_summary,
            notification_message: Some(notification_message),
        }
    }

    /// Whether the check passed.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Whether the check failed.
    pub fn has_failed(&self) -> bool {
        !self.is_ok()
    }

    /// Translate the messages into a [`RenderedResult`].
    pub fn render(&self, translator: &dyn Translator) -> RenderedResult {
        RenderedResult {
            ok: self.is_ok(),
            meta: self.meta.clone(),
            summary: translator.translate(&self.short_summary),
            message: self
                .notification_message
                .as_ref()
                .map(|m| translator.translate(m))
                .unwrap_or_default(),
        }
    }
}

/// A check result with its messages rendered, as handed to a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResult {
    /// Whether the check passed.
    pub ok: bool,
    /// Names of the offending variables.
    pub meta: Vec<String>,
    /// Short summary.
    pub summary: String,
    /// Detailed message; empty when ok.
    pub message: String,
}

impl RenderedResult {
    /// Whether the check failed.
    pub fn has_failed(&self) -> bool {
        !self.ok
    }
}
