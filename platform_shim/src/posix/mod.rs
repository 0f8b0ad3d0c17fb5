//! POSIX discovery surface: XDG-style search order with path redirection.
//!
//! The loader on these platforms walks a fixed list of directory prefixes
//! (the user's home, `XDG_CONFIG_HOME`, `VK_LAYER_PATH` for explicit layers,
//! the compiled-in fallbacks and the system configuration directories) and
//! reads `<prefix>/vulkan/<category>.d` from the first one that exists.
//! [`PosixDiscoverySurface::redirect_category`] redirects every one of those
//! locations, so a test does not need to know which candidate wins.

use camino::{Utf8Path, Utf8PathBuf};

use crate::path_list::split_path_list;
use crate::{
    DiscoverySurface, Environment, ManifestCategory, ProcessEnvironment, RedirectionMap,
    ShimConfig, ShimResult, posix_category_name,
};

/// Simulated discovery surface for Linux, BSD and macOS loaders.
#[derive(Debug)]
pub struct PosixDiscoverySurface {
    env: Box<dyn Environment>,
    config: ShimConfig,
    redirects: RedirectionMap,
}

impl Default for PosixDiscoverySurface {
    fn default() -> Self {
        Self::new(ProcessEnvironment, ShimConfig::default())
    }
}

impl PosixDiscoverySurface {
    /// Creates a surface reading variables from `env`.
    #[must_use]
    pub fn new(env: impl Environment + 'static, config: ShimConfig) -> Self {
        Self {
            env: Box::new(env),
            config,
            redirects: RedirectionMap::new(),
        }
    }

    /// Replaces the environment consulted by later redirections.
    ///
    /// Redirections already registered are kept.
    pub fn set_environment(&mut self, env: impl Environment + 'static) {
        self.env = Box::new(env);
    }

    /// Search constants in effect.
    #[must_use]
    pub const fn config(&self) -> &ShimConfig {
        &self.config
    }

    /// Read-only view of the redirection tables.
    #[must_use]
    pub const fn redirects(&self) -> &RedirectionMap {
        &self.redirects
    }

    /// Points `virtual_path` at `real_path`, replacing any earlier target.
    pub fn redirect_path(&mut self, virtual_path: &Utf8Path, real_path: &Utf8Path) {
        self.redirects.redirect_path(virtual_path, real_path);
    }

    /// Drops the redirection for `virtual_path`, if any.
    pub fn remove_redirect(&mut self, virtual_path: &Utf8Path) {
        self.redirects.remove_redirect(virtual_path);
    }

    /// Whether `virtual_path` has been redirected.
    #[must_use]
    pub fn is_fake_path(&self, virtual_path: &Utf8Path) -> bool {
        self.redirects.is_fake_path(virtual_path)
    }

    /// Real path registered for `virtual_path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShimError::NotRedirected`] when `virtual_path` was
    /// never redirected.
    pub fn real_path_for(&self, virtual_path: &Utf8Path) -> ShimResult<&Utf8Path> {
        self.redirects.real_path_for(virtual_path)
    }

    /// Clears the existence mark on `path`.
    pub fn remove_known_path(&mut self, path: &Utf8Path) {
        self.redirects.remove_known_path(path);
    }

    /// Whether `path` is marked as existing.
    #[must_use]
    pub fn is_known_path(&self, path: &Utf8Path) -> bool {
        self.redirects.is_known_path(path)
    }

    /// Loads `real_path` whenever the loader opens a library named `filename`.
    pub fn redirect_dlopen_name(&mut self, filename: &str, real_path: &Utf8Path) {
        self.redirects.redirect_dlopen_name(filename, real_path);
    }

    /// Whether opening `filename` is redirected.
    #[must_use]
    pub fn is_dlopen_redirect_name(&self, filename: &str) -> bool {
        self.redirects.is_dlopen_redirect_name(filename)
    }

    /// Library to load in place of `filename`, if redirected.
    #[must_use]
    pub fn dlopen_target(&self, filename: &str) -> Option<&Utf8Path> {
        self.redirects.dlopen_target(filename)
    }

    /// Primary system-configuration location for `category`.
    ///
    /// This is the path [`DiscoverySurface::set_fake_path`] redirects.
    #[must_use]
    pub fn query_default_redirect_path(&self, category: ManifestCategory) -> Utf8PathBuf {
        vulkan_dir(&self.config.sysconfdir, category)
    }

    /// Every virtual location the loader searches for `category`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use camino::Utf8PathBuf;
    /// use platform_shim::{
    ///     ManifestCategory, PosixDiscoverySurface, ShimConfig, SimulatedEnvironment,
    /// };
    ///
    /// let env = SimulatedEnvironment::default().with_var("HOME", "/home/u");
    /// let shim = PosixDiscoverySurface::new(env, ShimConfig::default());
    /// let candidates = shim.search_candidates(ManifestCategory::Settings);
    /// assert_eq!(
    ///     candidates,
    ///     vec![Utf8PathBuf::from("/home/u/.local/share/vulkan/settings.d")],
    /// );
    /// ```
    #[must_use]
    pub fn search_candidates(&self, category: ManifestCategory) -> Vec<Utf8PathBuf> {
        let home = self.env.get_env_var("HOME", true);
        if category == ManifestCategory::Settings {
            return vec![
                Utf8PathBuf::from(home)
                    .join(".local/share/vulkan")
                    .join(posix_category_name(category)),
            ];
        }

        self.search_prefixes(&home, category)
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| vulkan_dir(prefix, category))
            .collect()
    }

    fn search_prefixes(&self, home: &str, category: ManifestCategory) -> Vec<String> {
        let mut prefixes = Vec::new();
        if !home.is_empty() {
            let home_dir = Utf8Path::new(home);
            prefixes.push(home_dir.join(".config").into_string());
            prefixes.push(home_dir.join(".local/share").into_string());
        }

        let xdg_config_home = self.env.get_env_var(
            "XDG_CONFIG_HOME",
            self.config.report_missing_xdg_config_home,
        );
        Self::append_list(&mut prefixes, &xdg_config_home);
        if category == ManifestCategory::ExplicitLayer {
            let layer_path = self.env.get_env_var("VK_LAYER_PATH", false);
            Self::append_list(&mut prefixes, &layer_path);
        }
        Self::append_list(&mut prefixes, &self.config.fallback_data_dirs);
        Self::append_list(&mut prefixes, &self.config.fallback_config_dirs);

        if !self.config.sysconfdir.is_empty() {
            prefixes.push(self.config.sysconfdir.clone());
        }
        if let Some(extra) = self.config.distinct_extra_sysconfdir() {
            prefixes.push(extra.to_owned());
        }
        prefixes
    }

    fn append_list(prefixes: &mut Vec<String>, list: &str) {
        prefixes.extend(split_path_list(list, Self::PATH_LIST_DELIMITER));
    }
}

fn vulkan_dir(prefix: &str, category: ManifestCategory) -> Utf8PathBuf {
    Utf8Path::new(prefix)
        .join("vulkan")
        .join(posix_category_name(category))
}

impl DiscoverySurface for PosixDiscoverySurface {
    const PATH_LIST_DELIMITER: char = ':';

    fn category_path_name(category: ManifestCategory) -> &'static str {
        posix_category_name(category)
    }

    fn reset(&mut self) {
        tracing::debug!(
            redirects = self.redirects.redirect_count(),
            "resetting POSIX discovery surface"
        );
        self.redirects.clear();
    }

    fn set_fake_path(&mut self, category: ManifestCategory, path: &Utf8Path) {
        let primary = self.query_default_redirect_path(category);
        self.redirects.redirect_path(&primary, path);
    }

    fn add_known_path(&mut self, path: &Utf8Path) {
        self.redirects.add_known_path(path);
    }

    fn add_manifest(&mut self, _category: ManifestCategory, _path: &Utf8Path) {}

    fn add_unsecured_manifest(&mut self, _category: ManifestCategory, _path: &Utf8Path) {}

    fn redirect_category(&mut self, real_path: &Utf8Path, category: ManifestCategory) {
        let candidates = self.search_candidates(category);
        tracing::trace!(%category, ?candidates, "computed search candidates");
        for candidate in &candidates {
            self.redirects.redirect_path(candidate, real_path);
        }
    }
}

#[cfg(test)]
mod tests;
