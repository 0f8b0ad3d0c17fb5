//! Deterministic discovery-surface shim for testing plugin loaders.
//!
//! A plugin loader locates driver and layer manifests through OS-specific
//! mechanisms: XDG-style search directories and environment variables on
//! POSIX systems, registry keys and GPU adapter enumeration on Windows. This
//! crate replaces each of those with in-memory state a test controls.
//!
//! The two platform variants implement [`DiscoverySurface`]. [`PlatformShim`]
//! names the variant matching the build target, so a loader compiled for
//! tests calls into exactly one implementation with no runtime branching.
//!
//! ```rust
//! use camino::Utf8Path;
//! use platform_shim::{
//!     DiscoverySurface, ManifestCategory, PosixDiscoverySurface, ShimConfig,
//!     SimulatedEnvironment,
//! };
//!
//! let env = SimulatedEnvironment::default().with_var("HOME", "/home/u");
//! let mut shim = PosixDiscoverySurface::new(env, ShimConfig::default());
//! shim.redirect_category(Utf8Path::new("/tmp/icds"), ManifestCategory::Icd);
//!
//! let default_path = shim.query_default_redirect_path(ManifestCategory::Icd);
//! assert_eq!(
//!     shim.real_path_for(&default_path).ok(),
//!     Some(Utf8Path::new("/tmp/icds")),
//! );
//! ```

mod category;
mod config;
mod env;
mod error;
pub mod folders;
pub mod path_list;
mod posix;
mod redirect;
mod surface;
pub mod windows;

pub use category::{ManifestCategory, posix_category_name, windows_category_name};
pub use config::ShimConfig;
pub use env::{Environment, ProcessEnvironment, SimulatedEnvironment};
pub use error::{ShimError, ShimResult};
pub use folders::{FolderContents, get_folder_contents};
pub use path_list::{PATH_LIST_DELIMITER, parse_env_var_list, split_path_list};
pub use posix::PosixDiscoverySurface;
pub use redirect::RedirectionMap;
pub use surface::DiscoverySurface;
pub use windows::WindowsDiscoverySurface;

/// Discovery surface for the platform family this crate was built for.
#[cfg(not(windows))]
pub type PlatformShim = PosixDiscoverySurface;

/// Discovery surface for the platform family this crate was built for.
#[cfg(windows)]
pub type PlatformShim = WindowsDiscoverySurface;
