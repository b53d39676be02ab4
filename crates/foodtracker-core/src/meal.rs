//! The meal record and its rating.

use std::fmt::{self, Display};

use crate::Photo;

/// Errors returned when a [`Meal`] or [`Rating`] fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MealError {
    /// The meal name was empty.
    #[display("meal name must not be empty")]
    EmptyName,
    /// The rating was outside `0..=Rating::MAX`.
    #[display("rating {rating} is out of range (0..={})", Rating::MAX)]
    RatingOutOfRange {
        /// The rejected rating value.
        ///
        /// A decoded rating that does not fit in an `i64` is reported
        /// saturated to `i64::MIN` or `i64::MAX`.
        rating: i64,
    },
}

/// A star rating in the range `0..=5`.
///
/// `0` means "not rated".
///
/// # Examples
///
/// ```
/// use foodtracker_core::Rating;
///
/// let rating = Rating::new(4).unwrap();
/// assert_eq!(rating.value(), 4);
/// assert!(Rating::new(6).is_err());
/// assert_eq!(Rating::clamped(-3), Rating::ZERO);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Highest rating a meal can hold.
    pub const MAX: u8 = 5;

    /// The "not rated" value.
    pub const ZERO: Self = Self(0);

    /// Creates a rating, validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`MealError::RatingOutOfRange`] if `value` is negative or
    /// greater than [`Rating::MAX`].
    pub fn new(value: i64) -> Result<Self, MealError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or(MealError::RatingOutOfRange { rating: value })
    }

    /// Creates a rating, clamping `value` into `0..=Rating::MAX`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(0, i64::from(Self::MAX));
        // Lossless: `clamped` is within `0..=5`.
        Self(u8::try_from(clamped).unwrap_or(Self::MAX))
    }

    /// Returns the numeric rating.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A single tracked meal.
///
/// A `Meal` can only be obtained through [`Meal::new`], so every value in the
/// program has a non-empty name and a rating in range. Editing a meal means
/// building a new one and replacing the old value.
///
/// # Examples
///
/// ```
/// use foodtracker_core::{Meal, MealError};
///
/// let meal = Meal::new("Caprese Salad", None, 4).unwrap();
/// assert_eq!(meal.name(), "Caprese Salad");
/// assert_eq!(meal.rating().value(), 4);
/// assert!(meal.photo().is_none());
///
/// assert_eq!(
///     Meal::new("Soup", None, 9),
///     Err(MealError::RatingOutOfRange { rating: 9 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    name: String,
    photo: Option<Photo>,
    rating: Rating,
}

impl Meal {
    /// Creates a validated meal.
    ///
    /// # Errors
    ///
    /// Returns [`MealError::EmptyName`] if `name` is empty, and
    /// [`MealError::RatingOutOfRange`] if `rating` is not within `0..=5`.
    pub fn new(
        name: impl Into<String>,
        photo: Option<Photo>,
        rating: i64,
    ) -> Result<Self, MealError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MealError::EmptyName);
        }
        let rating = Rating::new(rating)?;
        Ok(Self {
            name,
            photo,
            rating,
        })
    }

    /// Returns the meal name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attached photo, if any.
    #[must_use]
    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    /// Returns the rating.
    #[must_use]
    pub fn rating(&self) -> Rating {
        self.rating
    }
}
