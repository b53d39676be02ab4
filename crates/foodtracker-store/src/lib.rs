//! Snapshot persistence for FoodTracker meal lists.
//!
//! The whole ordered list of meals is written as a single snapshot file and
//! replaced on every save. [`FileMealStore`] is the on-disk implementation of
//! the [`MealStore`] gateway; its location is injected by the caller, with
//! [`paths::default_data_file`] providing the platform default.

pub use self::{error::*, file_store::*};

mod error;
mod file_store;
pub mod paths;

use std::path::PathBuf;

use foodtracker_core::Meal;

/// Reads and writes meal list snapshots.
///
/// Implementations keep no copy of the meals between calls; the caller owns
/// the list.
pub trait MealStore: std::fmt::Debug {
    /// Loads the last saved snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if a snapshot exists but cannot be read or
    /// decoded.
    fn load(&self) -> Result<Option<Vec<Meal>>, LoadError>;

    /// Replaces the snapshot with `meals`.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the snapshot cannot be encoded or written. A
    /// failed save leaves the previous snapshot intact.
    fn save(&mut self, meals: &[Meal]) -> Result<(), SaveError>;

    /// Moves an undecodable snapshot aside so the next [`save`] does not
    /// overwrite it.
    ///
    /// Returns where the old snapshot now lives, or `None` if there was
    /// nothing to move. Stores without a backing file keep the default.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Backup`] if the snapshot cannot be moved.
    ///
    /// [`save`]: MealStore::save
    fn back_up_unreadable(&mut self) -> Result<Option<PathBuf>, SaveError> {
        Ok(None)
    }
}
