//! Star rating control state.
//!
//! The control holds a rating and a star count. Every mutation returns a fresh
//! [`RatingRender`] describing all stars, which the UI draws as-is; there is
//! no incremental redraw.

use std::num::NonZero;

use foodtracker_core::Rating;

const DEFAULT_STAR_COUNT: NonZero<u8> = NonZero::new(Rating::MAX).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RatingControlError {
    #[display("star {star} does not exist (control has {star_count} stars)")]
    StarOutOfRange { star: u8, star_count: u8 },
    #[display("rating {rating} exceeds the star count {star_count}")]
    RatingOutOfRange { rating: u8, star_count: u8 },
    #[display("a rating control needs at least one star")]
    ZeroStars,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingControl {
    rating: u8,
    star_count: NonZero<u8>,
}

impl Default for RatingControl {
    fn default() -> Self {
        Self::new(DEFAULT_STAR_COUNT)
    }
}

impl RatingControl {
    #[must_use]
    pub fn new(star_count: NonZero<u8>) -> Self {
        Self {
            rating: 0,
            star_count,
        }
    }

    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    #[must_use]
    pub fn star_count(&self) -> u8 {
        self.star_count.get()
    }

    /// Handles a tap on the 1-based `star`.
    ///
    /// Tapping the star that matches the current rating resets it to zero.
    pub fn tap(&mut self, star: u8) -> Result<RatingRender, RatingControlError> {
        if star == 0 || star > self.star_count() {
            return Err(RatingControlError::StarOutOfRange {
                star,
                star_count: self.star_count(),
            });
        }
        self.rating = if self.rating == star { 0 } else { star };
        Ok(self.render())
    }

    pub fn set_rating(&mut self, rating: u8) -> Result<RatingRender, RatingControlError> {
        if rating > self.star_count() {
            return Err(RatingControlError::RatingOutOfRange {
                rating,
                star_count: self.star_count(),
            });
        }
        self.rating = rating;
        Ok(self.render())
    }

    /// Changes the number of stars, clamping the rating if it no longer fits.
    pub fn set_star_count(&mut self, star_count: u8) -> Result<RatingRender, RatingControlError> {
        let star_count = NonZero::new(star_count).ok_or(RatingControlError::ZeroStars)?;
        self.star_count = star_count;
        self.rating = self.rating.min(star_count.get());
        Ok(self.render())
    }

    #[must_use]
    pub fn render(&self) -> RatingRender {
        let stars = (0..self.star_count())
            .map(|index| StarRender {
                index,
                filled: index < self.rating,
                accessibility: StarAccessibility::new(index, self.rating),
            })
            .collect();
        RatingRender {
            rating: self.rating,
            stars,
        }
    }
}

/// Full description of the control for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRender {
    pub rating: u8,
    pub stars: Vec<StarRender>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRender {
    /// 0-based position; tapping it sends `index + 1`.
    pub index: u8,
    pub filled: bool,
    pub accessibility: StarAccessibility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarAccessibility {
    pub label: String,
    pub hint: Option<&'static str>,
    pub value: String,
}

impl StarAccessibility {
    fn new(index: u8, rating: u8) -> Self {
        let hint = (u16::from(index) + 1 == u16::from(rating))
            .then_some("Tap to reset the rating to zero.");
        Self {
            label: format!("Set {} star rating", u16::from(index) + 1),
            hint,
            value: rating_description(rating),
        }
    }
}

#[must_use]
pub fn rating_description(rating: u8) -> String {
    match rating {
        0 => "No rating set".to_owned(),
        1 => "1 star set".to_owned(),
        n => format!("{n} stars set"),
    }
}
