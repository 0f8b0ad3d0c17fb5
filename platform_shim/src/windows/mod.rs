//! Windows discovery surface: registry manifests and adapter enumeration.
//!
//! The Windows loader does not probe arbitrary directories. It reads manifest
//! lists from registry keys under `HKEY_LOCAL_MACHINE` and
//! `HKEY_CURRENT_USER`, asks DXGI and D3DKMT for adapters, and consults the
//! package root of a packaged application. Each of those is modelled here.

mod adapter;
mod registry;
mod wide;

use camino::Utf8Path;

use crate::{DiscoverySurface, ManifestCategory, windows_category_name};

pub use adapter::{
    AdapterDesc, AdapterHandle, AdapterModel, D3dkmtAdapter, DxgiAdapter, GpuType,
};
pub use registry::{RegistryModel, RegistryScope};
pub use wide::WidePath;

/// Simulated discovery surface for Windows loaders.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8Path;
/// use platform_shim::windows::{RegistryScope, WindowsDiscoverySurface};
/// use platform_shim::{DiscoverySurface, ManifestCategory};
///
/// let mut shim = WindowsDiscoverySurface::new();
/// shim.add_manifest(ManifestCategory::ExplicitLayer, Utf8Path::new("C:/layers/a.json"));
/// shim.add_manifest(ManifestCategory::ExplicitLayer, Utf8Path::new("C:/layers/b.json"));
/// let entries = shim
///     .registry()
///     .entries(RegistryScope::Machine, ManifestCategory::ExplicitLayer);
/// assert_eq!(entries.len(), 2);
///
/// shim.reset();
/// assert!(shim
///     .registry()
///     .entries(RegistryScope::Machine, ManifestCategory::ExplicitLayer)
///     .is_empty());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WindowsDiscoverySurface {
    registry: RegistryModel,
    adapters: AdapterModel,
    app_package_path: Option<WidePath>,
}

impl WindowsDiscoverySurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered manifests.
    #[must_use]
    pub const fn registry(&self) -> &RegistryModel {
        &self.registry
    }

    /// Registered adapters.
    #[must_use]
    pub const fn adapters(&self) -> &AdapterModel {
        &self.adapters
    }

    /// Registers a DXGI adapter and returns its handle.
    pub fn add_dxgi_adapter(&mut self, gpu_type: GpuType, desc: AdapterDesc) -> AdapterHandle {
        self.adapters.add_dxgi_adapter(gpu_type, desc)
    }

    /// Registers a D3DKMT adapter as given.
    pub fn add_d3dkmt_adapter(&mut self, adapter: D3dkmtAdapter) {
        self.adapters.add_d3dkmt_adapter(adapter);
    }

    /// DXGI adapters in registration order.
    #[must_use]
    pub const fn dxgi_adapters(&self) -> &[DxgiAdapter] {
        self.adapters.dxgi_adapters()
    }

    /// D3DKMT adapters in registration order.
    #[must_use]
    pub const fn d3dkmt_adapters(&self) -> &[D3dkmtAdapter] {
        self.adapters.d3dkmt_adapters()
    }

    /// Sets the packaged-application root, replacing any previous one.
    pub fn set_app_package_path(&mut self, path: &Utf8Path) {
        tracing::debug!(path = %path, "setting app package path");
        self.app_package_path = Some(WidePath::encode(path));
    }

    /// Packaged-application root, if one was set.
    #[must_use]
    pub const fn app_package_path(&self) -> Option<&WidePath> {
        self.app_package_path.as_ref()
    }
}

impl DiscoverySurface for WindowsDiscoverySurface {
    const PATH_LIST_DELIMITER: char = ';';

    fn category_path_name(category: ManifestCategory) -> &'static str {
        windows_category_name(category)
    }

    fn reset(&mut self) {
        tracing::debug!("resetting Windows discovery surface");
        self.registry.clear();
        self.adapters.clear();
        self.app_package_path = None;
    }

    fn set_fake_path(&mut self, _category: ManifestCategory, _path: &Utf8Path) {}

    fn add_known_path(&mut self, _path: &Utf8Path) {}

    fn add_manifest(&mut self, category: ManifestCategory, path: &Utf8Path) {
        self.registry.add_manifest(category, path);
    }

    fn add_unsecured_manifest(&mut self, category: ManifestCategory, path: &Utf8Path) {
        self.registry.add_unsecured_manifest(category, path);
    }

    fn redirect_category(&mut self, _real_path: &Utf8Path, _category: ManifestCategory) {}
}
