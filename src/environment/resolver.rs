//! Environment resolution.
//!
//! Resolves the active deployment environment using the priority chain:
//! 1. Explicit `--env` flag
//! 2. Config `default_environment`
//! 3. Auto-detection (`APP_ENV` and friends)
//! 4. Fallback to "production"

use super::detection::{DetectedEnvironment, EnvironmentDetector};
use super::reader::{EnvReader, SystemEnv};

/// Environment assumed when nothing else names one.
pub const FALLBACK_ENVIRONMENT: &str = "production";

/// How the environment was determined.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentSource {
    /// Explicitly set via `--env` flag.
    Flag,
    /// Set via config `default_environment`.
    ConfigDefault,
    /// Auto-detected from an environment variable.
    AutoDetected(String),
    /// Fallback to "production".
    Fallback,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--env flag"),
            Self::ConfigDefault => write!(f, "config default"),
            Self::AutoDetected(var) => write!(f, "detected via {}", var),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved environment with its name and how it was determined.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEnvironment {
    /// The environment name (e.g., "production", "staging").
    pub name: String,
    /// How this environment was determined.
    pub source: EnvironmentSource,
}

impl ResolvedEnvironment {
    /// Resolve the environment using the priority chain.
    ///
    /// # Example
    ///
    /// ```
    /// use envcheck::environment::{EnvironmentDetector, EnvironmentSource, ResolvedEnvironment};
    ///
    /// let detector = EnvironmentDetector::new();
    /// let resolved = ResolvedEnvironment::resolve(Some("staging"), None, &detector);
    /// assert_eq!(resolved.name, "staging");
    /// assert_eq!(resolved.source, EnvironmentSource::Flag);
    /// ```
    pub fn resolve(
        flag: Option<&str>,
        config_default: Option<&str>,
        detector: &EnvironmentDetector,
    ) -> Self {
        Self::resolve_with_reader(flag, config_default, detector, &SystemEnv)
    }

    /// Resolve, detecting through `env` instead of the process environment.
    pub fn resolve_with_reader(
        flag: Option<&str>,
        config_default: Option<&str>,
        detector: &EnvironmentDetector,
        env: &dyn EnvReader,
    ) -> Self {
        // Skip detection entirely when a higher priority source is present
        let detected = if flag.is_none() && config_default.is_none() {
            detector.detect_with(env)
        } else {
            None
        };
        Self::resolve_with_detection(flag, config_default, detected)
    }

    /// Resolve with a pre-computed detection result (for testing).
    pub fn resolve_with_detection(
        flag: Option<&str>,
        config_default: Option<&str>,
        detected: Option<DetectedEnvironment>,
    ) -> Self {
        let (name, source) = match (flag, config_default, detected) {
            (Some(name), _, _) => (name.to_string(), EnvironmentSource::Flag),
            (None, Some(name), _) => (name.to_string(), EnvironmentSource::ConfigDefault),
            (None, None, Some(env)) => (env.name, EnvironmentSource::AutoDetected(env.detected_via)),
            (None, None, None) => (FALLBACK_ENVIRONMENT.to_string(), EnvironmentSource::Fallback),
        };
        Self { name, source }
    }
}

impl std::fmt::Display for ResolvedEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.source)
    }
}
