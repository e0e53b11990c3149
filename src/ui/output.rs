//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the resolved environment along with the result.
    Verbose,
    /// Show the result.
    #[default]
    Normal,
    /// Show nothing; the exit code carries the outcome.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the global CLI flags; `quiet` wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows the check result.
    pub fn shows_result(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows how the environment was resolved.
    pub fn shows_context(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
