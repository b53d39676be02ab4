//! CBOR encoding of meal records and snapshots.
//!
//! A record is a CBOR map with text keys:
//!
//! | key      | type        | required                      |
//! |----------|-------------|-------------------------------|
//! | `name`   | text        | yes                           |
//! | `photo`  | byte string | no, ignored if ill-typed      |
//! | `rating` | integer     | no, `0` if absent or ill-typed |
//!
//! A snapshot is a CBOR array of records in list order.

use ciborium::value::{Integer, Value};

use crate::{Meal, MealError, Photo, Rating};

/// Map key holding the meal name.
pub const NAME_KEY: &str = "name";
/// Map key holding the encoded photo bytes.
pub const PHOTO_KEY: &str = "photo";
/// Map key holding the rating.
pub const RATING_KEY: &str = "rating";

/// How a decoded rating outside `0..=5` is treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RatingPolicy {
    /// Fail the record with [`DecodeError::InvalidMeal`].
    #[default]
    Reject,
    /// Clamp the value into range.
    Clamp,
}

/// Errors that can occur while encoding.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("failed to encode CBOR: {message}")]
pub struct EncodeError {
    message: String,
}

/// Errors that can occur while decoding a record or snapshot.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum DecodeError {
    /// The input is not well-formed CBOR.
    #[display("malformed CBOR: {message}")]
    Malformed {
        /// Parser diagnostic.
        message: String,
    },
    /// A record is not a CBOR map.
    #[display("meal record is not a map")]
    NotARecord,
    /// A snapshot is not a CBOR array.
    #[display("snapshot is not an array")]
    NotASnapshot,
    /// The required `name` field is absent.
    #[display("meal record has no `name` field")]
    MissingName,
    /// The `name` field is not text.
    #[display("meal record `name` field is not text")]
    NameNotText,
    /// The decoded fields do not form a valid meal.
    #[display("meal record is invalid: {_0}")]
    #[from]
    InvalidMeal(MealError),
}

/// Encodes one meal as a CBOR record.
///
/// # Errors
///
/// Returns [`EncodeError`] if the CBOR writer fails.
pub fn encode(meal: &Meal) -> Result<Vec<u8>, EncodeError> {
    write_value(&meal_to_value(meal))
}

/// Decodes one meal from a CBOR record.
///
/// # Errors
///
/// See [`DecodeError`] for the failure cases. No partially filled meal is
/// ever produced.
pub fn decode(bytes: &[u8], policy: RatingPolicy) -> Result<Meal, DecodeError> {
    meal_from_value(read_value(bytes)?, policy)
}

/// Encodes an ordered list of meals as a snapshot.
///
/// # Errors
///
/// Returns [`EncodeError`] if the CBOR writer fails.
pub fn encode_snapshot(meals: &[Meal]) -> Result<Vec<u8>, EncodeError> {
    write_value(&Value::Array(meals.iter().map(meal_to_value).collect()))
}

/// Decodes a snapshot, preserving order.
///
/// Decoding is all-or-nothing: the first failing record fails the snapshot.
///
/// # Errors
///
/// Returns [`DecodeError::NotASnapshot`] if the top-level value is not an
/// array, or the error of the first record that fails to decode.
pub fn decode_snapshot(bytes: &[u8], policy: RatingPolicy) -> Result<Vec<Meal>, DecodeError> {
    let Value::Array(records) = read_value(bytes)? else {
        return Err(DecodeError::NotASnapshot);
    };
    records
        .into_iter()
        .map(|record| meal_from_value(record, policy))
        .collect()
}

fn write_value(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).map_err(|e| EncodeError {
        message: e.to_string(),
    })?;
    Ok(buf)
}

fn read_value(bytes: &[u8]) -> Result<Value, DecodeError> {
    ciborium::from_reader(bytes).map_err(|e| DecodeError::Malformed {
        message: e.to_string(),
    })
}

fn meal_to_value(meal: &Meal) -> Value {
    let mut entries = Vec::with_capacity(3);
    entries.push((Value::Text(NAME_KEY.into()), Value::Text(meal.name().into())));
    if let Some(photo) = meal.photo() {
        entries.push((
            Value::Text(PHOTO_KEY.into()),
            Value::Bytes(photo.bytes().to_vec()),
        ));
    }
    entries.push((
        Value::Text(RATING_KEY.into()),
        Value::Integer(Integer::from(meal.rating().value())),
    ));
    Value::Map(entries)
}

fn meal_from_value(value: Value, policy: RatingPolicy) -> Result<Meal, DecodeError> {
    let Value::Map(entries) = value else {
        return Err(DecodeError::NotARecord);
    };

    let mut name = None;
    let mut photo = None;
    let mut rating = None;
    for (key, value) in entries {
        match key.as_text() {
            Some(NAME_KEY) => name = Some(value),
            Some(PHOTO_KEY) => photo = Some(value),
            Some(RATING_KEY) => rating = Some(value),
            _ => {}
        }
    }

    let name = match name {
        None => return Err(DecodeError::MissingName),
        Some(Value::Text(name)) => name,
        Some(_) => return Err(DecodeError::NameNotText),
    };
    let photo = match photo {
        Some(Value::Bytes(bytes)) => Photo::from_bytes(bytes).ok(),
        _ => None,
    };
    let rating = match rating {
        Some(Value::Integer(int)) => i128::from(int),
        _ => 0,
    };
    let rating = match policy {
        RatingPolicy::Reject => i64::try_from(rating).map_err(|_| {
            // CBOR integers reach beyond i64; the error carries the saturated value.
            let saturated = if rating.is_negative() { i64::MIN } else { i64::MAX };
            MealError::RatingOutOfRange { rating: saturated }
        })?,
        RatingPolicy::Clamp => {
            let clamped = rating.clamp(0, i128::from(Rating::MAX));
            i64::try_from(clamped).unwrap_or_default()
        }
    };

    Ok(Meal::new(name, photo, rating)?)
}
