//! Deployment environment detection.
//!
//! Reads the well-known variables applications use to publish the name of
//! the environment they run in.

/// Variables checked for an environment name, in priority order.
pub const ENVIRONMENT_VARS: &[&str] = &["APP_ENV", "ENVIRONMENT", "DEPLOY_ENV", "RUST_ENV"];

/// A detected environment from auto-detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedEnvironment {
    /// The environment name (e.g., "production", "staging").
    pub name: String,
    /// The environment variable that triggered detection.
    pub detected_via: String,
}

/// Detects the deployment environment from environment variables.
///
/// # Example
///
/// ```
/// use envcheck::environment::{EnvironmentDetector, MapEnv};
///
/// let env = MapEnv::new().with("APP_ENV", "staging");
/// let detected = EnvironmentDetector::new().detect_with(&env).unwrap();
/// assert_eq!(detected.name, "staging");
/// assert_eq!(detected.detected_via, "APP_ENV");
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentDetector {
    vars: Vec<String>,
}

impl EnvironmentDetector {
    /// Create a detector checking [`ENVIRONMENT_VARS`].
    pub fn new() -> Self {
        Self {
            vars: ENVIRONMENT_VARS.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Check `var` before the built-in variables.
    pub fn with_custom_var(mut self, var: impl Into<String>) -> Self {
        self.vars.insert(0, var.into());
        self
    }

    /// Detect from the process environment.
    pub fn detect(&self) -> Option<DetectedEnvironment> {
        self.detect_with(&super::SystemEnv)
    }

    /// Detect with a custom env var lookup (for testing).
    ///
    /// The first variable holding a non-blank value wins.
    pub fn detect_with(&self, env: &dyn super::EnvReader) -> Option<DetectedEnvironment> {
        self.vars.iter().find_map(|var| {
            let value = env.var(var)?;
            let name = value.trim();
            if name.is_empty() {
                return None;
            }
            Some(DetectedEnvironment {
                name: name.to_string(),
                detected_via: var.clone(),
            })
        })
    }
}

impl Default for EnvironmentDetector {
    fn default() -> Self {
        Self::new()
    }
}
