use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use foodtracker_core::{Meal, RatingPolicy, codec};

use crate::{LoadError, MealStore, SaveError};

/// A [`MealStore`] backed by one CBOR snapshot file.
///
/// Saves go through a sibling `*.tmp` file that is synced and then renamed
/// over the snapshot, so a crash mid-save never leaves a truncated list
/// behind.
///
/// # Example
///
/// ```
/// use foodtracker_core::sample_meals;
/// use foodtracker_store::{FileMealStore, MealStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = FileMealStore::new(dir.path().join("meals.cbor"));
///
/// assert_eq!(store.load().unwrap(), None);
/// store.save(&sample_meals()).unwrap();
/// assert_eq!(store.load().unwrap(), Some(sample_meals()));
/// ```
#[derive(Debug, Clone)]
pub struct FileMealStore {
    path: PathBuf,
    rating_policy: RatingPolicy,
}

impl FileMealStore {
    /// Creates a store for the snapshot at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rating_policy: RatingPolicy::default(),
        }
    }

    /// Sets how out-of-range ratings in a loaded snapshot are handled.
    #[must_use]
    pub fn with_rating_policy(mut self, rating_policy: RatingPolicy) -> Self {
        self.rating_policy = rating_policy;
        self
    }

    /// Returns the snapshot path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the policy applied to out-of-range ratings on load.
    #[must_use]
    pub fn rating_policy(&self) -> RatingPolicy {
        self.rating_policy
    }

    /// Returns the path an unreadable snapshot is moved to, `<file>.bak`.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        self.sibling_path(".bak")
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling_path(".tmp")
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

impl MealStore for FileMealStore {
    fn load(&self) -> Result<Option<Vec<Meal>>, LoadError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no snapshot at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(LoadError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let meals = codec::decode_snapshot(&bytes, self.rating_policy).map_err(|source| {
            LoadError::Decode {
                path: self.path.clone(),
                source,
            }
        })?;
        log::debug!(
            "loaded {} meals from {}",
            meals.len(),
            self.path.display()
        );
        Ok(Some(meals))
    }

    fn save(&mut self, meals: &[Meal]) -> Result<(), SaveError> {
        let bytes = codec::encode_snapshot(meals)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SaveError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = self.temp_path();
        if let Err(source) = write_synced(&temp_path, &bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(SaveError::Write {
                path: temp_path,
                source,
            });
        }
        if let Err(source) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(SaveError::Persist {
                path: self.path.clone(),
                source,
            });
        }

        log::debug!("saved {} meals to {}", meals.len(), self.path.display());
        Ok(())
    }

    fn back_up_unreadable(&mut self) -> Result<Option<PathBuf>, SaveError> {
        let backup = self.backup_path();
        match fs::rename(&self.path, &backup) {
            Ok(()) => {
                log::info!(
                    "moved unreadable snapshot {} to {}",
                    self.path.display(),
                    backup.display()
                );
                Ok(Some(backup))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SaveError::Backup {
                path: self.path.clone(),
                backup,
                source,
            }),
        }
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use foodtracker_core::{DecodeError, MealError, sample_meals};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileMealStore::new(dir.path().join("meals.cbor"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_twice_keeps_same_content() {
        let dir = tempdir().unwrap();
        let mut store = FileMealStore::new(dir.path().join("meals.cbor"));
        let meals = sample_meals();

        store.save(&meals).unwrap();
        store.save(&meals).unwrap();
        assert_eq!(store.load().unwrap(), Some(meals));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let mut store = FileMealStore::new(dir.path().join("meals.cbor"));

        store.save(&sample_meals()).unwrap();
        let only = vec![Meal::new("Tacos", None, 2).unwrap()];
        store.save(&only).unwrap();
        assert_eq!(store.load().unwrap(), Some(only));

        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn save_creates_parent_directories_and_cleans_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeply").join("meals.cbor");
        let mut store = FileMealStore::new(&path);

        store.save(&sample_meals()).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("nested/deeply/meals.cbor.tmp").exists());
    }

    #[test]
    fn save_into_directory_path_fails_with_typed_error() {
        let dir = tempdir().unwrap();
        let mut store = FileMealStore::new(dir.path());

        let err = store.save(&sample_meals()).unwrap_err();
        assert!(matches!(err, SaveError::Persist { .. }), "{err}");
    }

    #[test]
    fn corrupt_snapshot_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meals.cbor");
        fs::write(&path, b"not valid cbor data").unwrap();

        let err = FileMealStore::new(&path).load().unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }), "{err}");
    }

    #[test]
    fn rating_policy_applies_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meals.cbor");
        // [{"name": "Soup", "rating": 9}]
        let bytes = [
            0x81, 0xa2, 0x64, b'n', b'a', b'm', b'e', 0x64, b'S', b'o', b'u', b'p', 0x66, b'r',
            b'a', b't', b'i', b'n', b'g', 0x09,
        ];
        fs::write(&path, bytes).unwrap();

        let err = FileMealStore::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Decode {
                source: DecodeError::InvalidMeal(MealError::RatingOutOfRange { rating: 9 }),
                ..
            }
        ));

        let store = FileMealStore::new(&path).with_rating_policy(RatingPolicy::Clamp);
        let meals = store.load().unwrap().unwrap();
        assert_eq!(meals[0].rating().value(), 5);
    }

    #[test]
    fn unreadable_snapshot_is_moved_aside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meals.cbor");
        fs::write(&path, b"garbage").unwrap();
        let mut store = FileMealStore::new(&path);

        let backup = store.back_up_unreadable().unwrap().unwrap();
        assert_eq!(backup, dir.path().join("meals.cbor.bak"));
        assert_eq!(fs::read(&backup).unwrap(), b"garbage");
        assert!(!path.exists());

        store.save(&sample_meals()).unwrap();
        assert_eq!(fs::read(&backup).unwrap(), b"garbage");
    }

    #[test]
    fn back_up_without_snapshot_is_a_no_op() {
        let dir = tempdir().unwrap();
        let mut store = FileMealStore::new(dir.path().join("meals.cbor"));
        assert_eq!(store.back_up_unreadable().unwrap(), None);
        assert!(!store.backup_path().exists());
    }
}
