//! Built-in sample meals used when no saved list exists.

use crate::Meal;

const SAMPLES: [(&str, i64); 3] = [
    ("Caprese Salad", 4),
    ("Chicken and Potatoes", 5),
    ("Pasta with Meatballs", 3),
];

/// Returns the three sample meals, in display order.
///
/// # Examples
///
/// ```
/// let meals = foodtracker_core::sample_meals();
/// let names: Vec<_> = meals.iter().map(|m| m.name()).collect();
/// assert_eq!(
///     names,
///     ["Caprese Salad", "Chicken and Potatoes", "Pasta with Meatballs"]
/// );
/// ```
#[must_use]
pub fn sample_meals() -> Vec<Meal> {
    SAMPLES
        .iter()
        .filter_map(|&(name, rating)| Meal::new(name, None, rating).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_is_valid() {
        let meals = sample_meals();
        assert_eq!(meals.len(), SAMPLES.len());
        let ratings: Vec<_> = meals.iter().map(|m| m.rating().value()).collect();
        assert_eq!(ratings, [4, 5, 3]);
        assert!(meals.iter().all(|m| m.photo().is_none()));
    }
}
