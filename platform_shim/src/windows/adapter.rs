//! Simulated GPU adapter enumeration.
//!
//! The Windows loader learns about drivers from two adapter APIs: DXGI, which
//! lists adapters ordered by GPU preference, and the kernel-mode thunk layer
//! (D3DKMT), whose adapters carry the driver and layer manifest paths
//! registered by the display driver.

use camino::Utf8Path;

use super::wide::WidePath;

/// GPU preference tag attached to an enumerated adapter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuType {
    /// No preference reported.
    #[default]
    Unspecified,
    /// Dedicated graphics hardware.
    Discrete,
    /// Graphics integrated with the CPU.
    Integrated,
    /// Software rasterizer.
    Software,
}

/// Opaque handle assigned to an enumerated adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdapterHandle(u32);

impl AdapterHandle {
    /// Raw handle value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Adapter description reported by DXGI. The shim never interprets it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdapterDesc {
    /// Human-readable adapter name.
    pub description: String,
    /// PCI vendor identifier.
    pub vendor_id: u32,
    /// PCI device identifier.
    pub device_id: u32,
    /// PCI subsystem identifier.
    pub sub_sys_id: u32,
    /// Hardware revision.
    pub revision: u32,
    /// Bytes of dedicated video memory.
    pub dedicated_video_memory: u64,
    /// Locally unique identifier linking the adapter to its D3DKMT record.
    pub adapter_luid: u64,
    /// `DXGI_ADAPTER_FLAG` bits.
    pub flags: u32,
}

/// An adapter returned by DXGI enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxgiAdapter {
    /// Preference tag used when enumerating by GPU preference.
    pub gpu_type: GpuType,
    /// Description returned to the loader.
    pub desc: AdapterDesc,
    /// Handle assigned at registration.
    pub handle: AdapterHandle,
}

/// An adapter returned by the D3DKMT thunk layer.
///
/// Manifest paths are encoded to UTF-16 as they are added.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8Path;
/// use platform_shim::windows::D3dkmtAdapter;
///
/// let adapter = D3dkmtAdapter::new("test adapter")
///     .add_driver_manifest_path(Utf8Path::new("C:/drivers/icd.json"))
///     .add_implicit_layer_manifest_path(Utf8Path::new("C:/layers/implicit.json"));
/// assert_eq!(adapter.driver_paths().len(), 1);
/// assert!(adapter.explicit_layer_paths().is_empty());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct D3dkmtAdapter {
    name: String,
    adapter_luid: u64,
    driver_paths: Vec<WidePath>,
    implicit_layer_paths: Vec<WidePath>,
    explicit_layer_paths: Vec<WidePath>,
}

impl D3dkmtAdapter {
    /// Creates an adapter with no manifest paths.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the LUID used to pair this adapter with a DXGI adapter.
    #[must_use]
    pub fn with_luid(mut self, adapter_luid: u64) -> Self {
        self.adapter_luid = adapter_luid;
        self
    }

    /// Adds a driver manifest path.
    #[must_use]
    pub fn add_driver_manifest_path(mut self, path: &Utf8Path) -> Self {
        self.driver_paths.push(WidePath::encode(path));
        self
    }

    /// Adds an implicit layer manifest path.
    #[must_use]
    pub fn add_implicit_layer_manifest_path(mut self, path: &Utf8Path) -> Self {
        self.implicit_layer_paths.push(WidePath::encode(path));
        self
    }

    /// Adds an explicit layer manifest path.
    #[must_use]
    pub fn add_explicit_layer_manifest_path(mut self, path: &Utf8Path) -> Self {
        self.explicit_layer_paths.push(WidePath::encode(path));
        self
    }

    /// Adapter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adapter LUID.
    #[must_use]
    pub const fn adapter_luid(&self) -> u64 {
        self.adapter_luid
    }

    /// Driver manifest paths, in insertion order.
    #[must_use]
    pub const fn driver_paths(&self) -> &[WidePath] {
        self.driver_paths.as_slice()
    }

    /// Implicit layer manifest paths, in insertion order.
    #[must_use]
    pub const fn implicit_layer_paths(&self) -> &[WidePath] {
        self.implicit_layer_paths.as_slice()
    }

    /// Explicit layer manifest paths, in insertion order.
    #[must_use]
    pub const fn explicit_layer_paths(&self) -> &[WidePath] {
        self.explicit_layer_paths.as_slice()
    }
}

/// Both adapter lists plus the handle counter.
///
/// Handles increase with every DXGI registration and survive
/// [`AdapterModel::clear`], so none is handed out twice until the counter
/// passes `u32::MAX` and wraps to zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdapterModel {
    dxgi_adapters: Vec<DxgiAdapter>,
    d3dkmt_adapters: Vec<D3dkmtAdapter>,
    next_handle: u32,
}

impl AdapterModel {
    /// Registers a DXGI adapter and returns its handle.
    pub fn add_dxgi_adapter(&mut self, gpu_type: GpuType, desc: AdapterDesc) -> AdapterHandle {
        let handle = AdapterHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        tracing::debug!(
            handle = handle.get(),
            ?gpu_type,
            description = %desc.description,
            "adding DXGI adapter"
        );
        self.dxgi_adapters.push(DxgiAdapter {
            gpu_type,
            desc,
            handle,
        });
        handle
    }

    /// Registers a D3DKMT adapter as given.
    pub fn add_d3dkmt_adapter(&mut self, adapter: D3dkmtAdapter) {
        tracing::debug!(name = adapter.name(), "adding D3DKMT adapter");
        self.d3dkmt_adapters.push(adapter);
    }

    /// DXGI adapters in registration order.
    #[must_use]
    pub const fn dxgi_adapters(&self) -> &[DxgiAdapter] {
        self.dxgi_adapters.as_slice()
    }

    /// DXGI adapters tagged `gpu_type`, in registration order.
    pub fn dxgi_adapters_by_preference(
        &self,
        gpu_type: GpuType,
    ) -> impl Iterator<Item = &DxgiAdapter> {
        self.dxgi_adapters
            .iter()
            .filter(move |adapter| adapter.gpu_type == gpu_type)
    }

    /// D3DKMT adapters in registration order.
    #[must_use]
    pub const fn d3dkmt_adapters(&self) -> &[D3dkmtAdapter] {
        self.d3dkmt_adapters.as_slice()
    }

    /// Removes every adapter, keeping the handle counter.
    pub fn clear(&mut self) {
        self.dxgi_adapters.clear();
        self.d3dkmt_adapters.clear();
    }
}
