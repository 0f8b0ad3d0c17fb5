//! In-memory stand-in for the registry keys listing manifests.

use camino::{Utf8Path, Utf8PathBuf};

use crate::ManifestCategory;

/// Registry hive a manifest is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryScope {
    /// `HKEY_LOCAL_MACHINE`: requires elevation to write.
    Machine,
    /// `HKEY_CURRENT_USER`: writable by the user.
    User,
}

/// Manifest paths per hive and category, in enumeration order.
///
/// Drivers only exist per machine.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryModel {
    machine_explicit_layers: Vec<Utf8PathBuf>,
    machine_implicit_layers: Vec<Utf8PathBuf>,
    machine_drivers: Vec<Utf8PathBuf>,
    machine_settings: Vec<Utf8PathBuf>,
    user_explicit_layers: Vec<Utf8PathBuf>,
    user_implicit_layers: Vec<Utf8PathBuf>,
    user_settings: Vec<Utf8PathBuf>,
}

impl RegistryModel {
    /// Appends `path` under `HKEY_LOCAL_MACHINE`.
    pub fn add_manifest(&mut self, category: ManifestCategory, path: &Utf8Path) {
        let list = match category {
            ManifestCategory::Settings => &mut self.machine_settings,
            ManifestCategory::ImplicitLayer => &mut self.machine_implicit_layers,
            ManifestCategory::ExplicitLayer => &mut self.machine_explicit_layers,
            ManifestCategory::Icd => &mut self.machine_drivers,
        };
        list.push(path.to_owned());
    }

    /// Appends `path` under `HKEY_CURRENT_USER`. Drivers are ignored.
    pub fn add_unsecured_manifest(&mut self, category: ManifestCategory, path: &Utf8Path) {
        let list = match category {
            ManifestCategory::Settings => &mut self.user_settings,
            ManifestCategory::ImplicitLayer => &mut self.user_implicit_layers,
            ManifestCategory::ExplicitLayer => &mut self.user_explicit_layers,
            ManifestCategory::Icd => {
                tracing::debug!(path = %path, "ignoring per-user driver registration");
                return;
            }
        };
        list.push(path.to_owned());
    }

    /// Manifests registered for `category` under `scope`.
    #[must_use]
    pub fn entries(&self, scope: RegistryScope, category: ManifestCategory) -> &[Utf8PathBuf] {
        match (scope, category) {
            (RegistryScope::Machine, ManifestCategory::Settings) => &self.machine_settings,
            (RegistryScope::Machine, ManifestCategory::ImplicitLayer) => {
                &self.machine_implicit_layers
            }
            (RegistryScope::Machine, ManifestCategory::ExplicitLayer) => {
                &self.machine_explicit_layers
            }
            (RegistryScope::Machine, ManifestCategory::Icd) => &self.machine_drivers,
            (RegistryScope::User, ManifestCategory::Settings) => &self.user_settings,
            (RegistryScope::User, ManifestCategory::ImplicitLayer) => &self.user_implicit_layers,
            (RegistryScope::User, ManifestCategory::ExplicitLayer) => &self.user_explicit_layers,
            (RegistryScope::User, ManifestCategory::Icd) => &[],
        }
    }

    /// Removes every registration.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
