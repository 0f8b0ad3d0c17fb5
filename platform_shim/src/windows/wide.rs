//! UTF-16 path encoding at the Windows API boundary.

use std::fmt;

use camino::Utf8Path;

/// A path encoded as UTF-16 code units, without a terminating NUL.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct WidePath(Vec<u16>);

impl WidePath {
    /// Encodes `path` to UTF-16.
    #[must_use]
    pub fn encode(path: &Utf8Path) -> Self {
        Self(path.as_str().encode_utf16().collect())
    }

    /// Encoded code units.
    #[must_use]
    pub const fn as_units(&self) -> &[u16] {
        self.0.as_slice()
    }

    /// Decodes back to UTF-8, replacing unpaired surrogates.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl fmt::Display for WidePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
