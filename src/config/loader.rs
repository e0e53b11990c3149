//! Configuration file discovery and loading.

use crate::config::schema::ChecksConfig;
use crate::error::{EnvCheckError, Result};
use crate::messages::Catalog;
use std::fs;
use std::path::{Path, PathBuf};

/// File names looked up in the project root, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".envcheck.yml", ".envcheck.yaml"];

/// A parsed configuration and the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Path of the loaded file.
    pub path: PathBuf,
    /// The parsed configuration.
    pub config: ChecksConfig,
}

impl LoadedConfig {
    /// Path of the translations file, resolved against the config directory.
    pub fn translations_path(&self) -> Option<PathBuf> {
        let translations = self.config.translations.as_ref()?;
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(translations))
    }

    /// The bundled English catalog, overlaid with the configured one if any.
    pub fn catalog(&self) -> Result<Catalog> {
        let english = Catalog::english()?;
        match self.translations_path() {
            Some(path) => Ok(english.overlaid_with(Catalog::from_file(&path)?)),
            None => Ok(english),
        }
    }
}

/// Find the config file in `project_root`.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ChecksConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvCheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ChecksConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ChecksConfig> {
    serde_yaml::from_str(content).map_err(|e| EnvCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided that file is loaded, otherwise the
/// project root is searched for [`CONFIG_FILE_NAMES`].
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LoadedConfig> {
    let path = match config_override {
        Some(path) => path.to_path_buf(),
        None => find_config(project_root).ok_or_else(|| EnvCheckError::ConfigNotFound {
            path: project_root.join(CONFIG_FILE_NAMES[0]),
        })?,
    };
    tracing::debug!("Loading config from {}", path.display());
    let config = load_config_file(&path)?;
    Ok(LoadedConfig { path, config })
}
