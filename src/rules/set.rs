//! The rule set and its builder operations.

use super::value::ValueRules;
use std::collections::HashMap;
use tracing::debug;

/// Presence and value-matching requirements, global and per environment.
///
/// Global rules are replaced by each call (last call wins). Environment
/// rules are registered once per environment: a later registration for an
/// environment that already has one is ignored.
///
/// # Example
///
/// ```
/// use envcheck::rules::RuleSet;
///
/// let rules = RuleSet::new()
///     .require_vars(["APP_KEY"])
///     .require_vars_for_environment("production", ["SENTRY_DSN"])
///     .require_vars_for_environment("production", ["IGNORED"]);
///
/// assert_eq!(rules.required_names_for("production"), ["SENTRY_DSN"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    required_names: Vec<String>,
    required_names_by_environment: HashMap<String, Vec<String>>,
    required_values: ValueRules,
    required_values_by_environment: HashMap<String, ValueRules>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the given variables to be set, whatever the environment.
    pub fn require_vars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Require the given variables to be set in `environment`.
    pub fn require_vars_for_environment<I, S>(mut self, environment: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.required_names_by_environment.contains_key(environment) {
            debug!(
                environment,
                "presence rules already registered, ignoring new ones"
            );
            return self;
        }
        self.required_names_by_environment.insert(
            environment.to_string(),
            names.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Require the given variables to be set in each of `environments`.
    pub fn require_vars_for_environments<E, I, S>(mut self, environments: E, names: I) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        for environment in environments {
            self = self.require_vars_for_environment(environment.as_ref(), names.clone());
        }
        self
    }

    /// Require variables to hold the given values, whatever the environment.
    pub fn require_vars_match_values(mut self, values: impl Into<ValueRules>) -> Self {
        self.required_values = values.into();
        self
    }

    /// Require variables to hold the given values in `environment`.
    pub fn require_vars_match_values_for_environment(
        mut self,
        environment: &str,
        values: impl Into<ValueRules>,
    ) -> Self {
        if self.required_values_by_environment.contains_key(environment) {
            debug!(
                environment,
                "value rules already registered, ignoring new ones"
            );
            return self;
        }
        self.required_values_by_environment
            .insert(environment.to_string(), values.into());
        self
    }

    /// Require variables to hold the given values in each of `environments`.
    pub fn require_vars_match_values_for_environments<E>(
        mut self,
        environments: E,
        values: impl Into<ValueRules>,
    ) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let values = values.into();
        for environment in environments {
            self = self.require_vars_match_values_for_environment(
                environment.as_ref(),
                values.clone(),
            );
        }
        self
    }

    /// Global presence rules.
    pub fn required_names(&self) -> &[String] {
        &self.required_names
    }

    /// Presence rules registered for `environment` only.
    pub fn required_names_for(&self, environment: &str) -> &[String] {
        self.required_names_by_environment
            .get(environment)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Global value rules.
    pub fn required_values(&self) -> &ValueRules {
        &self.required_values
    }

    /// Value rules registered for `environment` only.
    pub fn required_values_for(&self, environment: &str) -> Option<&ValueRules> {
        self.required_values_by_environment.get(environment)
    }

    /// Whether no rule of any kind has been configured.
    pub fn is_empty(&self) -> bool {
        self.required_names.is_empty()
            && self.required_values.is_empty()
            && self.required_names_by_environment.values().all(Vec::is_empty)
            && self
                .required_values_by_environment
                .values()
                .all(ValueRules::is_empty)
    }

    /// Environments with at least one registered rule, sorted.
    pub fn environments(&self) -> Vec<&str> {
        let mut envs: Vec<&str> = self
            .required_names_by_environment
            .keys()
            .chain(self.required_values_by_environment.keys())
            .map(String::as_str)
            .collect();
        envs.sort_unstable();
        envs.dedup();
        envs
    }
}
