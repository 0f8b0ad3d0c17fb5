//! Environment accessors consulted while computing search candidates.

use std::collections::HashMap;
use std::fmt;

/// Source of environment variables for discovery.
///
/// A missing variable reads as the empty string. When `report_if_missing` is
/// set the absence is logged as a configuration issue; it is never an error.
pub trait Environment: fmt::Debug + Send + Sync {
    /// Returns the value of `name`, or an empty string when it is unset.
    fn get_env_var(&self, name: &str, report_if_missing: bool) -> String;
}

fn report_missing(name: &str) {
    tracing::warn!(variable = name, "environment variable is not set");
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get_env_var(&self, name: &str, report_if_missing: bool) -> String {
        match std::env::var(name) {
            Ok(value) => value,
            Err(std::env::VarError::NotPresent) => {
                if report_if_missing {
                    report_missing(name);
                }
                String::new()
            }
            Err(std::env::VarError::NotUnicode(raw)) => {
                tracing::warn!(variable = name, value = ?raw, "environment variable is not UTF-8");
                raw.to_string_lossy().into_owned()
            }
        }
    }
}

/// Environment backed by an in-memory map, fully controlled by the test.
///
/// # Examples
///
/// ```rust
/// use platform_shim::{Environment, SimulatedEnvironment};
///
/// let env = SimulatedEnvironment::default().with_var("HOME", "/home/u");
/// assert_eq!(env.get_env_var("HOME", true), "/home/u");
/// assert_eq!(env.get_env_var("XDG_CONFIG_HOME", false), "");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimulatedEnvironment {
    vars: HashMap<String, String>,
}

impl SimulatedEnvironment {
    /// Returns the environment with `name` set to `value`.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_var(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Unsets `name`. Removing an absent variable does nothing.
    pub fn remove_var(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl Environment for SimulatedEnvironment {
    fn get_env_var(&self, name: &str, report_if_missing: bool) -> String {
        if let Some(value) = self.vars.get(name) {
            return value.clone();
        }
        if report_if_missing {
            report_missing(name);
        }
        String::new()
    }
}
