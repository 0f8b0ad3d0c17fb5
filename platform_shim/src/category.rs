//! Manifest categories and their per-platform directory names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of manifest a loader searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestCategory {
    /// Loader settings files.
    Settings,
    /// Layers enabled without application opt-in.
    ImplicitLayer,
    /// Layers an application must request by name.
    ExplicitLayer,
    /// Installable client drivers.
    Icd,
}

impl ManifestCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Settings,
        Self::ImplicitLayer,
        Self::ExplicitLayer,
        Self::Icd,
    ];

    /// Returns the `snake_case` identifier used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::ImplicitLayer => "implicit_layer",
            Self::ExplicitLayer => "explicit_layer",
            Self::Icd => "icd",
        }
    }
}

impl fmt::Display for ManifestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subdirectory searched for `category` under each POSIX prefix.
#[must_use]
pub const fn posix_category_name(category: ManifestCategory) -> &'static str {
    match category {
        ManifestCategory::Settings => "settings.d",
        ManifestCategory::ImplicitLayer => "implicit_layer.d",
        ManifestCategory::ExplicitLayer => "explicit_layer.d",
        ManifestCategory::Icd => "icd.d",
    }
}

/// Registry key segment used for `category` on Windows.
///
/// Settings share the `Drivers` name: the Windows loader never resolves
/// settings through this naming, so the collapse is kept as observed.
#[must_use]
pub const fn windows_category_name(category: ManifestCategory) -> &'static str {
    match category {
        ManifestCategory::ImplicitLayer => "ImplicitLayers",
        ManifestCategory::ExplicitLayer => "ExplicitLayers",
        ManifestCategory::Settings | ManifestCategory::Icd => "Drivers",
    }
}
