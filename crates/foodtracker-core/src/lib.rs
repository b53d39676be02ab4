//! Core domain types for FoodTracker.
//!
//! This crate defines the [`Meal`] record and its validation rules, the
//! [`Photo`] blob attached to a meal, and the CBOR codec used to persist
//! single records and whole snapshots.
//!
//! Nothing here performs I/O; persistence lives in `foodtracker-store` and
//! presentation in `foodtracker-app`.
//!
//! # Example
//!
//! ```
//! use foodtracker_core::{Meal, MealError, RatingPolicy, codec};
//!
//! let meal = Meal::new("Tacos", None, 2).unwrap();
//! let bytes = codec::encode(&meal).unwrap();
//! assert_eq!(codec::decode(&bytes, RatingPolicy::Reject).unwrap(), meal);
//!
//! assert_eq!(Meal::new("", None, 2), Err(MealError::EmptyName));
//! ```

pub use self::{codec::*, meal::*, photo::*, samples::*};

pub mod codec;
mod meal;
mod photo;
mod samples;
