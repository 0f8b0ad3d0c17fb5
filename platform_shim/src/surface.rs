//! The capability shared by both platform variants.

use camino::Utf8Path;

use crate::ManifestCategory;

/// Test-side configuration of a simulated discovery surface.
///
/// Operations a platform family does not model are accepted and ignored, so
/// a harness can drive either variant through the same calls.
pub trait DiscoverySurface {
    /// Separator for path-list environment variables on this family.
    const PATH_LIST_DELIMITER: char;

    /// Directory or registry segment searched for `category`.
    fn category_path_name(category: ManifestCategory) -> &'static str;

    /// Clears all configured state.
    fn reset(&mut self);

    /// Makes `path` the single primary location for `category`.
    fn set_fake_path(&mut self, category: ManifestCategory, path: &Utf8Path);

    /// Marks `path` as existing.
    fn add_known_path(&mut self, path: &Utf8Path);

    /// Registers a per-machine manifest.
    fn add_manifest(&mut self, category: ManifestCategory, path: &Utf8Path);

    /// Registers a per-user manifest.
    fn add_unsecured_manifest(&mut self, category: ManifestCategory, path: &Utf8Path);

    /// Redirects every location searched for `category` to `real_path`.
    fn redirect_category(&mut self, real_path: &Utf8Path, category: ManifestCategory);

    /// Redirects layers and drivers, leaving settings alone.
    fn redirect_all_paths(&mut self, real_path: &Utf8Path) {
        for category in [
            ManifestCategory::ImplicitLayer,
            ManifestCategory::ExplicitLayer,
            ManifestCategory::Icd,
        ] {
            self.redirect_category(real_path, category);
        }
    }
}
