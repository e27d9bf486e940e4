use serde::{Deserialize, Deserializer};
use serde_json::Value;

/**
    Highest rating a review can have.
*/
pub const MAX_RATING: u8 = 5;

/**
    Deserializes a star rating from whatever the backend sends -
    integers, fractional numbers or numeric strings - rounded and
    clamped to `0..=5`. Anything else becomes an unrated `0`.
*/
pub fn rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let rating = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(rating.filter(|r| r.is_finite()).map_or(0, clamp_rating))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_rating(rating: f64) -> u8 {
    rating.round().clamp(0.0, f64::from(MAX_RATING)) as u8
}

/**
    Deserializes a string, treating `null` the same as a missing field.
*/
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/**
    Picks the first candidate that is present and not blank.

    Used where the backend sends the same value under more than one key.
*/
pub fn first_present<'a>(
    candidates: impl IntoIterator<Item = &'a Option<String>>,
) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .cloned()
}
