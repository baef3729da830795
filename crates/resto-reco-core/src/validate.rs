//! Field rules shared by every path that creates or edits a record.
//!
//! Interactive prompts, the flat-file decoder and the command line all funnel
//! raw values through these checks so a record that reaches the engine always
//! satisfies the model invariants.

use rust_decimal::Decimal;

use crate::CoreError;

/// Longest accepted resto name, in characters.
pub const RESTO_NAME_MAX_LEN: usize = 22;
/// Longest accepted gusto label, in characters.
pub const GUSTO_LABEL_MAX_LEN: usize = 9;
pub const MAX_RATING: f64 = 5.0;
/// Lowest bound a gusto may put on a rating.
pub const MIN_RATING_FLOOR: f64 = 1.0;
/// Field separator of the data files; never allowed inside text fields.
pub const FIELD_DELIMITER: char = '~';

/// Trim and upper-case a record key, then check it.
///
/// # Errors
///
/// Returns [`CoreError::InvalidField`] if the key is empty, too long, or
/// contains a comma or the file delimiter.
pub fn normalize_key(field: &'static str, raw: &str, max_len: usize) -> Result<String, CoreError> {
    let key = raw.trim().to_uppercase();
    if key.is_empty() {
        return Err(CoreError::invalid(field, "cannot be empty"));
    }
    if key.contains(',') || key.contains(FIELD_DELIMITER) {
        return Err(CoreError::invalid(
            field,
            format!("cannot contain ',' or '{FIELD_DELIMITER}'"),
        ));
    }
    if key.chars().count() > max_len {
        return Err(CoreError::invalid(
            field,
            format!("cannot exceed {max_len} characters"),
        ));
    }
    Ok(key)
}

/// # Errors
///
/// See [`normalize_key`].
pub fn resto_name(raw: &str) -> Result<String, CoreError> {
    normalize_key("name", raw, RESTO_NAME_MAX_LEN)
}

/// # Errors
///
/// See [`normalize_key`].
pub fn gusto_label(raw: &str) -> Result<String, CoreError> {
    normalize_key("label", raw, GUSTO_LABEL_MAX_LEN)
}

/// # Errors
///
/// Returns [`CoreError::InvalidField`] if the trimmed text is empty or
/// contains the file delimiter.
pub fn description(raw: &str) -> Result<String, CoreError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CoreError::invalid("description", "cannot be empty"));
    }
    if text.contains(FIELD_DELIMITER) {
        return Err(CoreError::invalid(
            "description",
            format!("cannot contain '{FIELD_DELIMITER}'"),
        ));
    }
    Ok(text.to_string())
}

/// # Errors
///
/// Returns [`CoreError::InvalidField`] for a negative or non-finite value.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::invalid(field, "must be 0 or greater"));
    }
    Ok(value)
}

/// # Errors
///
/// Returns [`CoreError::InvalidField`] unless the value is finite and > 0.
pub fn positive(field: &'static str, value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::invalid(field, "must be greater than 0"));
    }
    Ok(value)
}

/// A money amount; exact decimal, so no finiteness check is needed.
///
/// # Errors
///
/// Returns [`CoreError::InvalidField`] unless the amount is > 0.
pub fn positive_amount(field: &'static str, value: Decimal) -> Result<Decimal, CoreError> {
    if value <= Decimal::ZERO {
        return Err(CoreError::invalid(field, "must be greater than 0"));
    }
    Ok(value)
}

/// # Errors
///
/// Returns [`CoreError::InvalidField`] for zero.
pub fn group_size(value: u32) -> Result<u32, CoreError> {
    if value == 0 {
        return Err(CoreError::invalid("group size", "must be greater than 0"));
    }
    Ok(value)
}

/// A listing's rating, in `[0, 5]`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidField`] when out of range.
pub fn rating(value: f64) -> Result<f64, CoreError> {
    if !(0.0..=MAX_RATING).contains(&value) {
        return Err(CoreError::invalid("rating", "must be between 0 and 5"));
    }
    Ok(value)
}

/// A gusto's minimum rating, in `[1, 5]`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidField`] when out of range.
pub fn min_rating(value: f64) -> Result<f64, CoreError> {
    if !(MIN_RATING_FLOOR..=MAX_RATING).contains(&value) {
        return Err(CoreError::invalid("minimum rating", "must be between 1 and 5"));
    }
    Ok(value)
}
