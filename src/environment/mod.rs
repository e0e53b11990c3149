//! Environment lookup, detection and resolution.
//!
//! Two different things are called "environment" here:
//!
//! - process environment variables, read through an [`EnvReader`]
//! - the deployment environment (production, staging, qa...), resolved
//!   with the priority chain in [`resolver`]

pub mod detection;
pub mod reader;
pub mod resolver;

pub use detection::{DetectedEnvironment, EnvironmentDetector, ENVIRONMENT_VARS};
pub use reader::{EnvReader, MapEnv, SystemEnv};
pub use resolver::{EnvironmentSource, ResolvedEnvironment, FALLBACK_ENVIRONMENT};
