//! Environment variable lookup.
//!
//! Checks never touch `std::env` directly; they read through an
//! [`EnvReader`] so tests can supply a fixed table.

use std::collections::HashMap;

/// Looks up the current value of an environment variable.
pub trait EnvReader {
    /// Return the value of `name`, or `None` if it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the live process environment.
///
/// Values that are not valid UTF-8 are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvReader for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

/// An in-memory environment table.
///
/// # Example
///
/// ```
/// use envcheck::environment::{EnvReader, MapEnv};
///
/// let env = MapEnv::new().with("APP_KEY", "secret");
/// assert_eq!(env.var("APP_KEY").as_deref(), Some("secret"));
/// assert_eq!(env.var("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable.
    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvReader for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<T: EnvReader + ?Sized> EnvReader for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
