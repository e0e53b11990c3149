//! Rule evaluation.
//!
//! Evaluation runs in two stages and stops at the first one that fails:
//!
//! 1. value matching (global rules merged with current-environment rules)
//! 2. presence (global names followed by current-environment names)

use super::display::ValueFormatter;
use super::result::CheckResult;
use crate::environment::EnvReader;
use crate::messages::{Message, MessageKey};
use crate::rules::{RuleSet, ValueRules};
use tracing::{debug, trace};

/// Separator between mismatch details in the notification message.
pub const DETAIL_SEPARATOR: &str = "; ";

/// Separator between missing names in the notification message.
pub const NAME_SEPARATOR: &str = ", ";

/// A presence requirement after merging, tagged with its scope.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedName<'a> {
    /// Variable name.
    pub name: &'a str,
    /// Whether the requirement came from environment-scoped rules.
    pub environment_scoped: bool,
}

/// Value rules in effect for `environment`.
pub fn merged_values(rules: &RuleSet, environment: &str) -> ValueRules {
    match rules.required_values_for(environment) {
        Some(env_values) => rules.required_values().merged_with(env_values),
        None => rules.required_values().clone(),
    }
}

/// Presence rules in effect for `environment`, global ones first.
pub fn merged_names<'a>(rules: &'a RuleSet, environment: &str) -> Vec<MergedName<'a>> {
    let global = rules.required_names().iter().map(|name| MergedName {
        name: name.as_str(),
        environment_scoped: false,
    });
    let scoped = rules
        .required_names_for(environment)
        .iter()
        .map(|name| MergedName {
            name: name.as_str(),
            environment_scoped: true,
        });
    global.chain(scoped).collect()
}

/// Evaluate `rules` against the variables visible through `env`.
///
/// Never fails: missing or mismatched variables produce a failed
/// [`CheckResult`].
///
/// # Example
///
/// ```
/// use envcheck::check::{evaluate, PlainFormatter};
/// use envcheck::environment::MapEnv;
/// use envcheck::rules::RuleSet;
///
/// let rules = RuleSet::new().require_vars(["ENV_VAR1", "ENV_VAR2"]);
/// let env = MapEnv::new().with("ENV_VAR1", "foo");
///
/// let result = evaluate(&rules, "production", &env, &PlainFormatter);
/// assert!(result.has_failed());
/// assert_eq!(result.meta, ["ENV_VAR2"]);
/// ```
pub fn evaluate(
    rules: &RuleSet,
    environment: &str,
    env: &dyn EnvReader,
    formatter: &dyn ValueFormatter,
) -> CheckResult {
    if let Some(result) = check_values(rules, environment, env, formatter) {
        return result;
    }
    if let Some(result) = check_presence(rules, environment, env) {
        return result;
    }
    debug!(environment, "all environment requirements satisfied");
    CheckResult::ok()
}

fn check_values(
    rules: &RuleSet,
    environment: &str,
    env: &dyn EnvReader,
    formatter: &dyn ValueFormatter,
) -> Option<CheckResult> {
    let values = merged_values(rules, environment);
    debug!(environment, count = values.len(), "checking variable values");

    let mut names = Vec::new();
    let mut details = Vec::new();
    for (name, expected) in values.iter() {
        let actual = env.var(name);
        if expected.matches(actual.as_deref()) {
            trace!(name, "value matches");
            continue;
        }
        debug!(name, "value does not match");
        names.push(name.to_string());
        details.push(
            Message::new(MessageKey::VarNotMatchingValue)
                .with("name", name)
                .with("actual", formatter.display_actual(actual.as_deref()))
                .with("expected", formatter.display_expected(expected)),
        );
    }

    if names.is_empty() {
        return None;
    }

    Some(CheckResult::failed(
        names,
        Message::new(MessageKey::VarsNotMatchingValues),
        Message::new(MessageKey::VarsNotMatchingValuesList)
            .with("environment", environment)
            .with_list("list", details, DETAIL_SEPARATOR),
    ))
}

fn check_presence(
    rules: &RuleSet,
    environment: &str,
    env: &dyn EnvReader,
) -> Option<CheckResult> {
    let required = merged_names(rules, environment);
    debug!(environment, count = required.len(), "checking variable presence");

    let missing: Vec<&MergedName<'_>> = required
        .iter()
        .filter(|req| env.var(req.name).is_none_or(|value| value.is_empty()))
        .collect();

    if missing.is_empty() {
        return None;
    }

    let names: Vec<String> = missing.iter().map(|m| m.name.to_string()).collect();
    let list = names.join(NAME_SEPARATOR);
    let message = if missing.iter().any(|m| m.environment_scoped) {
        Message::new(MessageKey::MissingVarsListInEnvironment)
            .with("environment", environment)
            .with("list", list)
    } else {
        Message::new(MessageKey::MissingVarsList).with("list", list)
    };
    debug!(missing = names.len(), "required variables are missing");

    Some(CheckResult::failed(
        names,
        Message::new(MessageKey::NotEveryVarHasBeenSet),
        message,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::display::PlainFormatter;
    use crate::check::result::Status;
    use crate::environment::MapEnv;
    use crate::messages::{Catalog, Translator};
    use crate::rules::ExpectedValue;

    const STAGING: &str = "staging";
    const PRODUCTION: &str = "production";
    const QA: &str = "qa";
    const ENVIRONMENTS: [&str; 3] = [PRODUCTION, STAGING, QA];

    fn run(rules: &RuleSet, environment: &str, env: &MapEnv) -> CheckResult {
        evaluate(rules, environment, env, &PlainFormatter)
    }

    fn message_text(result: &CheckResult) -> String {
        let catalog = Catalog::english().unwrap();
        result
            .notification_message
            .as_ref()
            .map(|m| catalog.translate(m))
            .unwrap_or_default()
    }

    #[test]
    fn empty_rule_set_is_ok_everywhere() {
        let env = MapEnv::new().with("ANYTHING", "x");
        for environment in ENVIRONMENTS {
            let result = run(&RuleSet::new(), environment, &env);
            assert_eq!(result, CheckResult::ok());
        }
    }

    #[test]
    fn empty_name_list_is_ok() {
        let rules = RuleSet::new().require_vars(Vec::<String>::new());
        assert!(run(&rules, STAGING, &MapEnv::new()).is_ok());
    }

    #[test]
    fn all_names_set_is_ok() {
        let rules = RuleSet::new().require_vars(["ENV_VAR1", "ENV_VAR2"]);
        let env = MapEnv::new().with("ENV_VAR1", "foo").with("ENV_VAR2", "bar");
        let result = run(&rules, STAGING, &env);
        assert!(result.is_ok());
        assert_eq!(result.short_summary.key, MessageKey::EveryVarHasBeenSet);
    }

    #[test]
    fn false_text_counts_as_present() {
        let rules = RuleSet::new().require_vars(["ENV_VAR1"]);
        let env = MapEnv::new().with("ENV_VAR1", "false");
        assert!(run(&rules, STAGING, &env).is_ok());
    }

    #[test]
    fn missing_global_var_fails_with_ordered_meta() {
        let rules = RuleSet::new().require_vars(["ENV_VAR1", "ENV_VAR2", "ENV_VAR3"]);
        let env = MapEnv::new().with("ENV_VAR2", "bar").with("ENV_VAR3", "");

        let result = run(&rules, STAGING, &env);

        assert_eq!(result.status, Status::Failed);
        assert_eq!(result.meta, ["ENV_VAR1", "ENV_VAR3"]);
        assert_eq!(result.short_summary.key, MessageKey::NotEveryVarHasBeenSet);
        assert_eq!(
            message_text(&result),
            "Missing environment variables: ENV_VAR1, ENV_VAR3"
        );
    }

    #[test]
    fn end_to_end_missing_second_var() {
        let rules = RuleSet::new().require_vars(["ENV_VAR1", "ENV_VAR2"]);
        let env = MapEnv::new().with("ENV_VAR1", "foo");

        let result = run(&rules, PRODUCTION, &env);

        assert!(result.has_failed());
        assert_eq!(result.meta, ["ENV_VAR2"]);
    }

    #[test]
    fn environment_presence_rules_apply_only_to_their_environment() {
        let rules = RuleSet::new().require_vars_for_environment(PRODUCTION, ["ENV_PROD_VAR1"]);
        let env = MapEnv::new();

        assert!(run(&rules, STAGING, &env).is_ok());

        let result = run(&rules, PRODUCTION, &env);
        assert!(result.has_failed());
        assert_eq!(result.meta, ["ENV_PROD_VAR1"]);
        assert_eq!(
            message_text(&result),
            "Missing environment variables in 'production' environment: ENV_PROD_VAR1"
        );
    }

    #[test]
    fn environment_presence_rules_pass_when_set() {
        let rules = RuleSet::new().require_vars_for_environment(PRODUCTION, ["ENV_PROD_VAR1"]);
        let env = MapEnv::new().with("ENV_PROD_VAR1", "some_value");
        assert!(run(&rules, PRODUCTION, &env).is_ok());
    }

    #[test]
    fn multiple_environments_share_presence_rules() {
        let rules = RuleSet::new().require_vars_for_environments(ENVIRONMENTS, ["VAR1", "VAR2"]);
        let partial = MapEnv::new().with("VAR2", "somevalue");
        let complete = MapEnv::new().with("VAR1", "a").with("VAR2", "b");

        for environment in ENVIRONMENTS {
            let result = run(&rules, environment, &partial);
            assert!(result.has_failed(), "{environment} should fail");
            assert_eq!(result.meta, ["VAR1"]);

            assert!(run(&rules, environment, &complete).is_ok());
        }
    }

    #[test]
    fn several_environments_can_be_configured() {
        let rules = RuleSet::new()
            .require_vars_for_environment(STAGING, ["VAR1"])
            .require_vars_for_environment(PRODUCTION, ["VAR2"]);
        let env = MapEnv::new().with("VAR1", "x");

        assert!(run(&rules, STAGING, &env).is_ok());
        assert_eq!(run(&rules, PRODUCTION, &env).meta, ["VAR2"]);
    }

    #[test]
    fn first_environment_registration_is_the_one_evaluated() {
        let rules = RuleSet::new()
            .require_vars_for_environment(PRODUCTION, ["A"])
            .require_vars_for_environment(PRODUCTION, ["B"]);

        let result = run(&rules, PRODUCTION, &MapEnv::new());
        assert_eq!(result.meta, ["A"]);
    }

    #[test]
    fn global_then_environment_names_with_duplicates() {
        let rules = RuleSet::new()
            .require_vars(["A", "B"])
            .require_vars_for_environment(QA, ["B", "C"]);

        let result = run(&rules, QA, &MapEnv::new());
        assert_eq!(result.meta, ["A", "B", "B", "C"]);
    }

    #[test]
    fn global_only_missing_uses_plain_template_even_with_env_rules() {
        let rules = RuleSet::new()
            .require_vars(["GLOBAL"])
            .require_vars_for_environment(QA, ["SCOPED"]);
        let env = MapEnv::new().with("SCOPED", "set");

        let result = run(&rules, QA, &env);
        let message = result.notification_message.unwrap();
        assert_eq!(message.key, MessageKey::MissingVarsList);
        assert_eq!(message.text_param("list"), Some("GLOBAL"));
    }

    #[test]
    fn value_mismatch_reports_detail() {
        let rules = RuleSet::new().require_vars_match_values([("VAR1", "foo"), ("VAR2", "bar")]);
        let env = MapEnv::new().with("VAR1", "foo").with("VAR2", "different");

        let result = run(&rules, STAGING, &env);

        assert!(result.has_failed());
        assert_eq!(result.meta, ["VAR2"]);
        assert_eq!(result.short_summary.key, MessageKey::VarsNotMatchingValues);
        assert!(message_text(&result).contains("VAR2 is set to 'different' instead of 'bar'"));
    }

    #[test]
    fn end_to_end_staging_value_mismatch() {
        let rules = RuleSet::new()
            .require_vars_match_values_for_environment(STAGING, [("VAR1", "expected value")]);
        let env = MapEnv::new().with("VAR1", "another value");

        let result = run(&rules, STAGING, &env);

        assert_eq!(result.meta, ["VAR1"]);
        assert_eq!(
            message_text(&result),
            "Some variables do not match their expected value in 'staging' environment: \
             VAR1 is set to 'another value' instead of 'expected value'"
        );
    }

    #[test]
    fn all_values_matching_is_ok() {
        let rules = RuleSet::new().require_vars_match_values(ValueRules::from([
            ("VAR1", ExpectedValue::from("Some value")),
            ("VAR2", ExpectedValue::from("42")),
            ("VAR3", ExpectedValue::from(false)),
        ]));
        let env = MapEnv::new()
            .with("VAR1", "Some value")
            .with("VAR2", "42")
            .with("VAR3", "false");

        assert!(run(&rules, STAGING, &env).is_ok());
    }

    #[test]
    fn mismatches_joined_in_rule_order() {
        let rules = RuleSet::new().require_vars_match_values([("B", "1"), ("A", "2")]);
        let env = MapEnv::new().with("A", "x");

        let result = run(&rules, QA, &env);

        assert_eq!(result.meta, ["B", "A"]);
        assert!(message_text(&result).ends_with(
            "B is set to 'null' instead of '1'; A is set to 'x' instead of '2'"
        ));
    }

    #[test]
    fn value_rules_for_other_environment_are_ignored() {
        let rules = RuleSet::new()
            .require_vars_match_values_for_environments([QA, PRODUCTION], [("VAR1", "bar")]);
        let env = MapEnv::new().with("VAR1", "different");

        assert!(run(&rules, STAGING, &env).is_ok());
        assert!(run(&rules, QA, &env).has_failed());
    }

    #[test]
    fn environment_value_overrides_global_value() {
        let rules = RuleSet::new()
            .require_vars_match_values([("VAR1", "foo")])
            .require_vars_match_values_for_environment(PRODUCTION, [("VAR1", "bar")]);
        let env = MapEnv::new().with("VAR1", "bar");

        assert!(run(&rules, PRODUCTION, &env).is_ok());

        let result = run(&rules, STAGING, &env);
        assert!(message_text(&result).contains("VAR1 is set to 'bar' instead of 'foo'"));
    }

    #[test]
    fn global_values_survive_environment_merge() {
        let rules = RuleSet::new()
            .require_vars_match_values([("KEEP", "1")])
            .require_vars_match_values_for_environment(PRODUCTION, [("EXTRA", "2")]);
        let env = MapEnv::new().with("EXTRA", "2");

        let result = run(&rules, PRODUCTION, &env);
        assert_eq!(result.meta, ["KEEP"]);
    }

    #[test]
    fn value_stage_short_circuits_presence_stage() {
        let rules = RuleSet::new()
            .require_vars(["MISSING"])
            .require_vars_match_values([("MODE", "on")]);
        let env = MapEnv::new().with("MODE", "off");

        let result = run(&rules, STAGING, &env);
        assert_eq!(result.meta, ["MODE"]);
        assert_eq!(result.short_summary.key, MessageKey::VarsNotMatchingValues);
    }

    #[test]
    fn presence_checked_after_values_match() {
        let rules = RuleSet::new()
            .require_vars(["MISSING"])
            .require_vars_match_values([("MODE", "on")]);
        let env = MapEnv::new().with("MODE", "on");

        let result = run(&rules, STAGING, &env);
        assert_eq!(result.meta, ["MISSING"]);
    }

    #[test]
    fn null_expected_value_matches_unset_variable() {
        let rules =
            RuleSet::new().require_vars_match_values([("DEBUG", ExpectedValue::Null)]);
        assert!(run(&rules, STAGING, &MapEnv::new()).is_ok());
        assert!(run(&rules, STAGING, &MapEnv::new().with("DEBUG", "1")).has_failed());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let rules = RuleSet::new()
            .require_vars(["A", "B"])
            .require_vars_match_values([("C", "x")]);
        let env = MapEnv::new().with("A", "1").with("C", "x");

        let first = run(&rules, STAGING, &env);
        let second = run(&rules, STAGING, &env);
        assert_eq!(first, second);
    }

    #[test]
    fn merged_names_tags_scope() {
        let rules = RuleSet::new()
            .require_vars(["G"])
            .require_vars_for_environment(QA, ["E"]);
        let merged = merged_names(&rules, QA);
        assert_eq!(
            merged,
            [
                MergedName {
                    name: "G",
                    environment_scoped: false
                },
                MergedName {
                    name: "E",
                    environment_scoped: true
                },
            ]
        );
    }

    #[test]
    fn custom_formatter_is_used() {
        struct Quoting;
        impl ValueFormatter for Quoting {
            fn display_expected(&self, value: &ExpectedValue) -> String {
                format!("<{}>", value.env_text())
            }
            fn display_actual(&self, value: Option<&str>) -> String {
                format!("<{}>", value.unwrap_or("unset"))
            }
        }

        let rules = RuleSet::new().require_vars_match_values([("V", "a")]);
        let result = evaluate(&rules, QA, &MapEnv::new(), &Quoting);
        assert!(message_text(&result).contains("V is set to '<unset>' instead of '<a>'"));
    }
}
