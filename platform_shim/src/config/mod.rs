//! Compiled-in search constants and their optional file overrides.
//!
//! The POSIX loader appends a handful of directories fixed when it is built:
//! fallback XDG data and config directories plus the system configuration
//! directory. [`ShimConfig::default`] takes those from build-time variables
//! (falling back to the usual `/usr/share` and `/etc` locations) so that the
//! shim and the loader under test agree on them. They are never read from the
//! runtime environment.

use std::fs;
use std::io;

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{ShimError, ShimResult};

const fn build_constant(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(set) => set,
        None => default,
    }
}

const FALLBACK_DATA_DIRS: &str = build_constant(
    option_env!("PLATFORM_SHIM_FALLBACK_DATA_DIRS"),
    "/usr/local/share:/usr/share",
);
const FALLBACK_CONFIG_DIRS: &str =
    build_constant(option_env!("PLATFORM_SHIM_FALLBACK_CONFIG_DIRS"), "/etc/xdg");
const SYSCONFDIR: &str = build_constant(option_env!("PLATFORM_SHIM_SYSCONFDIR"), "/etc");
const EXTRA_SYSCONFDIR: &str =
    build_constant(option_env!("PLATFORM_SHIM_EXTRA_SYSCONFDIR"), "/etc");

/// Search constants and reporting flags used by the POSIX surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// Delimited list appended after the environment-derived prefixes.
    pub fallback_data_dirs: String,
    /// Delimited list appended after [`Self::fallback_data_dirs`].
    pub fallback_config_dirs: String,
    /// Primary system configuration directory; empty disables it.
    pub sysconfdir: String,
    /// Secondary system configuration directory, skipped when it equals
    /// [`Self::sysconfdir`].
    pub extra_sysconfdir: Option<String>,
    /// Log when `XDG_CONFIG_HOME` is unset. macOS never defines it.
    pub report_missing_xdg_config_home: bool,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            fallback_data_dirs: FALLBACK_DATA_DIRS.to_owned(),
            fallback_config_dirs: FALLBACK_CONFIG_DIRS.to_owned(),
            sysconfdir: SYSCONFDIR.to_owned(),
            extra_sysconfdir: Some(EXTRA_SYSCONFDIR.to_owned()),
            report_missing_xdg_config_home: !cfg!(target_os = "macos"),
        }
    }
}

impl ShimConfig {
    /// Layers the keys present in the TOML file at `path` over the defaults.
    ///
    /// Only `path` itself is read; a relative path is resolved against the
    /// current directory and never against its parents. A missing file leaves
    /// every default in place.
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::File`] when the file exists but cannot be read,
    /// and [`ShimError::Config`] when it cannot be parsed or a value has the
    /// wrong type.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use camino::Utf8Path;
    /// use platform_shim::ShimConfig;
    ///
    /// # fn run() -> platform_shim::ShimResult<()> {
    /// let config = ShimConfig::from_toml_file(Utf8Path::new("shim.toml"))?;
    /// assert!(!config.sysconfdir.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_toml_file(path: &Utf8Path) -> ShimResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        match fs::read_to_string(path) {
            Ok(data) => figment = figment.merge(Toml::string(&data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path, "no shim configuration file; using defaults");
            }
            Err(source) => {
                return Err(ShimError::File {
                    path: path.to_owned(),
                    source,
                });
            }
        }
        let config = figment.extract::<Self>().map_err(Box::new)?;
        tracing::debug!(path = %path, sysconfdir = %config.sysconfdir, "loaded shim configuration");
        Ok(config)
    }

    /// Secondary system configuration directory when it adds a new prefix.
    #[must_use]
    pub fn distinct_extra_sysconfdir(&self) -> Option<&str> {
        self.extra_sysconfdir
            .as_deref()
            .filter(|extra| !extra.is_empty() && *extra != self.sysconfdir)
    }
}

#[cfg(test)]
mod tests;
