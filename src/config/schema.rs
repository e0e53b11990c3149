//! Configuration schema definitions for envcheck.
//!
//! This module contains the struct definitions that map to the YAML rules
//! file format.

use crate::check::EnvVars;
use crate::rules::{ExpectedValue, ValueRules};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure for `.envcheck.yml`.
///
/// # Example
///
/// ```
/// use envcheck::config::ChecksConfig;
///
/// let config: ChecksConfig = serde_yaml::from_str(r#"
/// require: [APP_KEY]
/// environments:
///   - for: [production]
///     require: [SENTRY_DSN]
/// "#).unwrap();
///
/// let check = config.to_check();
/// assert_eq!(check.rules().required_names_for("production"), ["SENTRY_DSN"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksConfig {
    /// Check name shown in reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Environment used when no --env flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_environment: Option<String>,

    /// Extra variable consulted first when detecting the environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_var: Option<String>,

    /// Message catalog overriding the bundled English one, relative to the
    /// config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<PathBuf>,

    /// Variables that must be set in every environment
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub require: Vec<String>,

    /// Variables that must hold the given values in every environment
    #[serde(rename = "match", skip_serializing_if = "ValueRules::is_empty")]
    #[schemars(with = "BTreeMap<String, ExpectedValue>")]
    pub match_values: ValueRules,

    /// Environment-specific rules, applied in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<EnvironmentRules>,
}

/// Rules for one or more named environments.
///
/// An environment keeps the first `require` and the first `match` it is
/// given; later entries naming the same environment do not replace them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentRules {
    /// Environment names these rules apply to
    #[serde(rename = "for")]
    pub environments: Vec<String>,

    /// Variables that must be set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require: Option<Vec<String>>,

    /// Variables that must hold the given values
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<BTreeMap<String, ExpectedValue>>")]
    pub match_values: Option<ValueRules>,
}

impl ChecksConfig {
    /// Build the check described by this configuration.
    ///
    /// Rules are registered in document order, so the first entry naming an
    /// environment wins.
    pub fn to_check(&self) -> EnvVars {
        let mut check = EnvVars::new()
            .require_vars(self.require.iter().cloned())
            .require_vars_match_values(self.match_values.clone());

        if let Some(name) = &self.name {
            check = check.named(name.clone());
        }

        for entry in &self.environments {
            if let Some(names) = &entry.require {
                check = check.require_vars_for_environments(&entry.environments, names.clone());
            }
            if let Some(values) = &entry.match_values {
                check = check
                    .require_vars_match_values_for_environments(&entry.environments, values.clone());
            }
        }
        check
    }
}
