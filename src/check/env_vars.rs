//! The environment variables check.

use super::display::{PlainFormatter, ValueFormatter};
use super::evaluate::evaluate;
use super::result::CheckResult;
use super::{Check, CheckContext};
use crate::rules::{RuleSet, ValueRules};

/// Checks that required environment variables are set and hold their
/// expected values.
///
/// Wraps a [`RuleSet`] and exposes its builder operations, so a check can
/// be configured in one chain.
///
/// # Example
///
/// ```
/// use envcheck::check::{Check, CheckContext, EnvVars};
/// use envcheck::environment::MapEnv;
///
/// let check = EnvVars::new()
///     .require_vars(["APP_KEY"])
///     .require_vars_match_values_for_environment("production", [("APP_DEBUG", false)]);
///
/// let env = MapEnv::new().with("APP_KEY", "k").with("APP_DEBUG", "false");
/// let result = check.run(&CheckContext::new("production", &env));
/// assert!(result.is_ok());
/// ```
pub struct EnvVars {
    name: String,
    rules: RuleSet,
    formatter: Box<dyn ValueFormatter + Send + Sync>,
}

impl EnvVars {
    /// Default check name.
    pub const NAME: &'static str = "EnvVars";

    /// Create a check with no requirements.
    pub fn new() -> Self {
        Self {
            name: Self::NAME.to_string(),
            rules: RuleSet::new(),
            formatter: Box::new(PlainFormatter),
        }
    }

    /// Create a check from an existing rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            ..Self::new()
        }
    }

    /// Rename the check.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Use `formatter` to display values in mismatch messages.
    pub fn formatter(mut self, formatter: impl ValueFormatter + Send + Sync + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The configured rules.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// See [`RuleSet::require_vars`].
    pub fn require_vars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = self.rules.require_vars(names);
        self
    }

    /// See [`RuleSet::require_vars_for_environment`].
    pub fn require_vars_for_environment<I, S>(mut self, environment: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = self.rules.require_vars_for_environment(environment, names);
        self
    }

    /// See [`RuleSet::require_vars_for_environments`].
    pub fn require_vars_for_environments<E, I, S>(mut self, environments: E, names: I) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = self.rules.require_vars_for_environments(environments, names);
        self
    }

    /// See [`RuleSet::require_vars_match_values`].
    pub fn require_vars_match_values(mut self, values: impl Into<ValueRules>) -> Self {
        self.rules = self.rules.require_vars_match_values(values);
        self
    }

    /// See [`RuleSet::require_vars_match_values_for_environment`].
    pub fn require_vars_match_values_for_environment(
        mut self,
        environment: &str,
        values: impl Into<ValueRules>,
    ) -> Self {
        self.rules = self
            .rules
            .require_vars_match_values_for_environment(environment, values);
        self
    }

    /// See [`RuleSet::require_vars_match_values_for_environments`].
    pub fn require_vars_match_values_for_environments<E>(
        mut self,
        environments: E,
        values: impl Into<ValueRules>,
    ) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        self.rules = self
            .rules
            .require_vars_match_values_for_environments(environments, values);
        self
    }
}

impl Default for EnvVars {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnvVars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvVars")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl Check for EnvVars {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        evaluate(&self.rules, ctx.environment, ctx.env, self.formatter.as_ref())
    }
}
