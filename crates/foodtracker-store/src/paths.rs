//! Default snapshot location.
//!
//! The store itself never looks the path up; callers resolve it here (or take
//! it from the command line) and hand it to [`FileMealStore::new`].
//!
//! [`FileMealStore::new`]: crate::FileMealStore::new

use std::path::{Path, PathBuf};

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "foodtracker";

/// Snapshot file name.
pub const SNAPSHOT_FILE: &str = "meals.cbor";

/// Errors that can occur during path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PathError {
    /// The platform reported no per-user data directory.
    #[display("cannot determine the user data directory")]
    DataDirNotFound,
}

/// Returns `<data dir>/foodtracker/meals.cbor` for the current user.
///
/// On Linux this is usually `~/.local/share/foodtracker/meals.cbor`.
///
/// # Errors
///
/// Returns [`PathError::DataDirNotFound`] if `dirs` cannot resolve a data
/// directory.
pub fn default_data_file() -> Result<PathBuf, PathError> {
    dirs::data_dir()
        .map(|dir| data_file_in(&dir))
        .ok_or(PathError::DataDirNotFound)
}

/// Returns the snapshot path inside `base_dir`.
#[must_use]
pub fn data_file_in(base_dir: &Path) -> PathBuf {
    base_dir.join(APP_DIR_NAME).join(SNAPSHOT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_is_nested_under_app_dir() {
        let path = data_file_in(Path::new("/data"));
        assert_eq!(path, Path::new("/data/foodtracker/meals.cbor"));
    }
}
