//! Configuration loading.
//!
//! Rules can be declared in a YAML file (`.envcheck.yml` in the project
//! root by default) instead of builder calls.
//!
//! - [`loader`] - File discovery and parsing
//! - [`schema`] - The file format and its conversion into a check

pub mod loader;
pub mod schema;

pub use loader::{
    find_config, load_config, load_config_file, parse_config, LoadedConfig, CONFIG_FILE_NAMES,
};
pub use schema::{ChecksConfig, EnvironmentRules};

/// JSON Schema of the configuration file.
pub fn json_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(ChecksConfig)).unwrap_or_default()
}
