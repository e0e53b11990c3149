//! Check command implementation.
//!
//! The `envcheck check` command loads the rules file, resolves the current
//! deployment environment and validates the process environment against it.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::check::{Check, CheckContext};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, LoadedConfig};
use crate::environment::{EnvReader, EnvironmentDetector, ResolvedEnvironment, SystemEnv};
use crate::error::Result;
use crate::messages::Catalog;
use crate::ui::{EnvCheckTheme, HumanReport, JsonReport, OutputMode, Report, ReportFormatter};

use super::dispatcher::{Command, CommandResult};

/// Exit code for a failed check.
pub const EXIT_CHECK_FAILED: i32 = 1;

/// Exit code for a missing or unusable rules file.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    config_override: Option<PathBuf>,
    output_mode: OutputMode,
    use_color: bool,
    env: Box<dyn EnvReader>,
}

impl CheckCommand {
    /// Create a new check command reading the process environment.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config_override: None,
            output_mode: OutputMode::Normal,
            use_color: false,
            env: Box::new(SystemEnv),
        }
    }

    /// Load rules from this file instead of searching the project root.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Set the output verbosity.
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Enable or disable styled output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Read variables from `env` instead of the process environment.
    pub fn with_env(mut self, env: impl EnvReader + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    fn load(&self) -> Result<(LoadedConfig, Catalog)> {
        let loaded = load_config(&self.project_root, self.config_override.as_deref())?;
        let catalog = loaded.catalog()?;

        let missing = catalog.missing_keys();
        if !missing.is_empty() {
            let keys: Vec<&str> = missing.iter().map(|key| key.as_str()).collect();
            tracing::warn!("Message catalog has no template for: {}", keys.join(", "));
        }
        Ok((loaded, catalog))
    }

    fn report_error(&self, message: &str) {
        let theme = EnvCheckTheme::for_color(self.use_color);
        eprintln!("{}", theme.format_error(message));
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let (loaded, catalog) = match self.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                self.report_error(&format!("Error: {}", e));
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
        };
        let config = &loaded.config;

        let mut detector = EnvironmentDetector::new();
        if let Some(var) = &config.environment_var {
            detector = detector.with_custom_var(var.clone());
        }
        let environment = ResolvedEnvironment::resolve_with_reader(
            self.args.env.as_deref(),
            config.default_environment.as_deref(),
            &detector,
            self.env.as_ref(),
        );
        tracing::debug!("Checking against environment {}", environment);

        let check = config.to_check();
        let result = check.run(&CheckContext::new(&environment.name, self.env.as_ref()));
        let report = Report::new(check.name(), &environment, result.render(&catalog));

        if self.args.json {
            JsonReport.format(&report, out)?;
        } else if self.output_mode.shows_result() {
            HumanReport::new(self.use_color, self.output_mode.shows_context())
                .format(&report, out)?;
        }

        if result.has_failed() {
            tracing::debug!("Check failed for: {}", result.meta.join(", "));
            return Ok(CommandResult::failure(EXIT_CHECK_FAILED));
        }
        Ok(CommandResult::success())
    }
}
