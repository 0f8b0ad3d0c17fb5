//! Lookup over the filesystem double that materializes test folders.

use camino::Utf8Path;

/// A directory created by the test harness.
pub trait FolderContents {
    /// Where the folder lives on disk.
    fn location(&self) -> &Utf8Path;

    /// Names of the files the folder holds.
    fn files(&self) -> Vec<String>;
}

/// Files of the first folder located at `folder_name`, or none.
///
/// # Examples
///
/// ```rust
/// use camino::{Utf8Path, Utf8PathBuf};
/// use platform_shim::{FolderContents, get_folder_contents};
///
/// struct Folder(Utf8PathBuf, Vec<String>);
///
/// impl FolderContents for Folder {
///     fn location(&self) -> &Utf8Path {
///         &self.0
///     }
///     fn files(&self) -> Vec<String> {
///         self.1.clone()
///     }
/// }
///
/// let folders = [Folder("/tmp/icd".into(), vec!["driver.json".to_owned()])];
/// assert_eq!(get_folder_contents(&folders, Utf8Path::new("/tmp/icd")), ["driver.json"]);
/// assert!(get_folder_contents(&folders, Utf8Path::new("/tmp/other")).is_empty());
/// ```
#[must_use]
pub fn get_folder_contents<F: FolderContents>(
    folders: &[F],
    folder_name: &Utf8Path,
) -> Vec<String> {
    folders
        .iter()
        .find(|folder| folder.location() == folder_name)
        .map(FolderContents::files)
        .unwrap_or_default()
}
