//! envcheck - Verify required environment variables before deploying.
//!
//! envcheck validates the process environment against declarative rules:
//! variables that must be set, and variables that must hold an exact value,
//! either everywhere or only in named deployment environments.
//!
//! # Modules
//!
//! - [`check`] - The [`EnvVars`](check::EnvVars) check and its evaluation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Rules file loading and parsing
//! - [`environment`] - Variable lookup, environment detection and resolution
//! - [`error`] - Error types and result aliases
//! - [`messages`] - Message identifiers and translation catalogs
//! - [`rules`] - Rule sets and expected values
//! - [`ui`] - Terminal styling and report output
//!
//! # Example
//!
//! ```
//! use envcheck::check::{Check, CheckContext, EnvVars};
//! use envcheck::environment::MapEnv;
//! use envcheck::messages::Catalog;
//!
//! let check = EnvVars::new()
//!     .require_vars(["APP_KEY"])
//!     .require_vars_for_environment("production", ["SENTRY_DSN"]);
//!
//! let env = MapEnv::new().with("APP_KEY", "secret");
//! let result = check.run(&CheckContext::new("production", &env));
//! assert!(result.has_failed());
//!
//! let rendered = result.render(&Catalog::english().unwrap());
//! assert_eq!(
//!     rendered.message,
//!     "Missing environment variables in 'production' environment: SENTRY_DSN"
//! );
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod messages;
pub mod rules;
pub mod ui;

pub use error::{EnvCheckError, Result};
