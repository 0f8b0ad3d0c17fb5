//! Virtual-to-real path redirection and the related lookup tables.
//!
//! Three independent namespaces live here:
//!
//! - search-path redirections, keyed by the full virtual path the loader
//!   computes;
//! - the known-path set, for existence probes that never read contents;
//! - dlopen redirections, keyed by bare library filename.

use std::collections::{HashMap, HashSet};

use camino::{Utf8Path, Utf8PathBuf};

use crate::{ShimError, ShimResult};

/// Redirection state consulted by the POSIX loader hooks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RedirectionMap {
    redirections: HashMap<Utf8PathBuf, Utf8PathBuf>,
    known_paths: HashSet<Utf8PathBuf>,
    dlopen_redirections: HashMap<String, Utf8PathBuf>,
}

impl RedirectionMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points `virtual_path` at `real_path`, replacing any earlier target.
    pub fn redirect_path(&mut self, virtual_path: &Utf8Path, real_path: &Utf8Path) {
        tracing::debug!(
            virtual_path = %virtual_path,
            real_path = %real_path,
            "redirecting search path"
        );
        self.redirections
            .insert(virtual_path.to_owned(), real_path.to_owned());
    }

    /// Drops the redirection for `virtual_path`, if any.
    pub fn remove_redirect(&mut self, virtual_path: &Utf8Path) {
        self.redirections.remove(virtual_path);
    }

    /// Whether `virtual_path` has been redirected.
    #[must_use]
    pub fn is_fake_path(&self, virtual_path: &Utf8Path) -> bool {
        self.redirections.contains_key(virtual_path)
    }

    /// Real path registered for `virtual_path`.
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::NotRedirected`] when `virtual_path` was never
    /// redirected. There is no fallback to the real filesystem.
    pub fn real_path_for(&self, virtual_path: &Utf8Path) -> ShimResult<&Utf8Path> {
        self.redirections
            .get(virtual_path)
            .map(Utf8PathBuf::as_path)
            .ok_or_else(|| ShimError::NotRedirected {
                path: virtual_path.to_owned(),
            })
    }

    /// Number of registered search-path redirections.
    #[must_use]
    pub fn redirect_count(&self) -> usize {
        self.redirections.len()
    }

    /// Marks `path` as existing.
    pub fn add_known_path(&mut self, path: &Utf8Path) {
        self.known_paths.insert(path.to_owned());
    }

    /// Clears the existence mark on `path`.
    pub fn remove_known_path(&mut self, path: &Utf8Path) {
        self.known_paths.remove(path);
    }

    /// Whether `path` is marked as existing.
    #[must_use]
    pub fn is_known_path(&self, path: &Utf8Path) -> bool {
        self.known_paths.contains(path)
    }

    /// Loads `real_path` whenever the loader opens a library named `filename`.
    pub fn redirect_dlopen_name(&mut self, filename: &str, real_path: &Utf8Path) {
        tracing::debug!(filename, real_path = %real_path, "redirecting library load");
        self.dlopen_redirections
            .insert(filename.to_owned(), real_path.to_owned());
    }

    /// Whether opening `filename` is redirected.
    #[must_use]
    pub fn is_dlopen_redirect_name(&self, filename: &str) -> bool {
        self.dlopen_redirections.contains_key(filename)
    }

    /// Library to load in place of `filename`, if redirected.
    #[must_use]
    pub fn dlopen_target(&self, filename: &str) -> Option<&Utf8Path> {
        self.dlopen_redirections
            .get(filename)
            .map(Utf8PathBuf::as_path)
    }

    /// Empties all three tables.
    pub fn clear(&mut self) {
        self.redirections.clear();
        self.known_paths.clear();
        self.dlopen_redirections.clear();
    }
}
