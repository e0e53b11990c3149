//! Health checks.
//!
//! A [`Check`] inspects the environment and returns a [`CheckResult`]. The
//! [`EnvVars`] check validates environment variables against a
//! [`RuleSet`](crate::rules::RuleSet).
//!
//! - [`display`] - Value formatting for mismatch messages
//! - [`env_vars`] - The environment variables check
//! - [`evaluate`] - Rule merging and evaluation
//! - [`result`] - Check results and their rendered form

pub mod display;
pub mod env_vars;
pub mod evaluate;
pub mod result;

pub use display::{PlainFormatter, ValueFormatter};
pub use env_vars::EnvVars;
pub use evaluate::{evaluate, merged_names, merged_values, MergedName};
pub use result::{CheckResult, RenderedResult, Status};

use crate::environment::EnvReader;

/// What a check can see while it runs.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    /// The current deployment environment name.
    pub environment: &'a str,
    /// Lookup for process environment variables.
    pub env: &'a dyn EnvReader,
}

impl<'a> CheckContext<'a> {
    /// Create a context.
    pub fn new(environment: &'a str, env: &'a dyn EnvReader) -> Self {
        Self { environment, env }
    }
}

impl std::fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// A health check run by a host.
pub trait Check {
    /// Name shown by the host.
    fn name(&self) -> &str;

    /// Run the check.
    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MapEnv;

    struct AlwaysOk;

    impl Check for AlwaysOk {
        fn name(&self) -> &str {
            "AlwaysOk"
        }

        fn run(&self, _ctx: &CheckContext<'_>) -> CheckResult {
            CheckResult::ok()
        }
    }

    #[test]
    fn checks_are_object_safe() {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(AlwaysOk),
            Box::new(EnvVars::new().require_vars(["NOPE"])),
        ];
        let env = MapEnv::new();
        let ctx = CheckContext::new("qa", &env);

        let failed: Vec<&str> = checks
            .iter()
            .filter(|c| c.run(&ctx).has_failed())
            .map(|c| c.name())
            .collect();
        assert_eq!(failed, ["EnvVars"]);
    }

    #[test]
    fn context_debug_hides_reader() {
        let env = MapEnv::new().with("SECRET", "value");
        let ctx = CheckContext::new("qa", &env);
        let debug = format!("{:?}", ctx);
        assert!(debug.contains("qa"));
        assert!(!debug.contains("value"));
    }
}
