//! Schema command implementation.
//!
//! The `envcheck schema` command prints the JSON Schema of the rules file,
//! for editor integration.

use std::io::Write;

use crate::config::json_schema;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let schema = serde_json::to_string_pretty(&json_schema()).map_err(anyhow::Error::from)?;
        writeln!(out, "{}", schema)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_pretty_schema() {
        let mut out = Vec::new();
        let result = SchemaCommand::new().execute(&mut out).unwrap();
        assert!(result.success);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.ends_with("}\n"));

        let schema: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(schema["properties"]["environments"].is_object());
    }
}
