//! Line codec for the `~`-delimited data files.
//!
//! ```text
//! resto.dat  NAME~distance~Cuisine,Cuisine~FLAGS~cost~rating
//! gusto.dat  LABEL~description~group_size~MEAL~budget~max_distance~cuisines~min_rating
//! ```
//!
//! Unconstrained gusto fields are written as `ANY`; any of the accepted
//! sentinels is read back as unconstrained.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use resto_reco_core::constraint::{parse_constraint, UNCONSTRAINED};
use resto_reco_core::validate::FIELD_DELIMITER;
use resto_reco_core::{Constraint, CoreError, Cuisine, Listing, MealSupport, MealType, Profile};
use thiserror::Error;

const RESTO_FIELDS: usize = 6;
const GUSTO_FIELDS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} '~'-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field} '{value}' is not a number")]
    Number { field: &'static str, value: String },

    #[error("duplicate key '{0}'")]
    Duplicate(String),

    #[error("gusto has no label")]
    MissingLabel,

    #[error(transparent)]
    Core(#[from] CoreError),
}

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, RecordError> {
    raw.trim().parse().map_err(|_| RecordError::Number {
        field,
        value: raw.trim().to_string(),
    })
}

fn cuisine_set(raw: &str) -> Result<BTreeSet<Cuisine>, CoreError> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::parse)
        .collect()
}

fn join_cuisines(cuisines: &BTreeSet<Cuisine>) -> String {
    cuisines
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(",")
}

fn encode_constraint<T: Display>(value: &Constraint<T>) -> String {
    match value {
        Constraint::Bound(v) => v.to_string(),
        Constraint::Unconstrained => UNCONSTRAINED.to_string(),
    }
}

/// Decode one `resto.dat` line into a validated [`Listing`].
///
/// # Errors
///
/// Returns [`RecordError`] if the line is malformed or breaks an invariant.
pub fn decode_resto(line: &str) -> Result<Listing, RecordError> {
    let f = split_fields(line, RESTO_FIELDS)?;
    let listing = Listing::new(
        f[0],
        number("distance", f[1])?,
        cuisine_set(f[2])?,
        MealSupport::from_flags(f[3])?,
        number("cost", f[4])?,
        number("rating", f[5])?,
    )?;
    Ok(listing)
}

#[must_use]
pub fn encode_resto(listing: &Listing) -> String {
    format!(
        "{}~{}~{}~{}~{}~{}",
        listing.name,
        listing.distance,
        join_cuisines(&listing.cuisines),
        listing.meals.flags(),
        listing.cost_per_person,
        listing.rating,
    )
}

/// Decode one `gusto.dat` line into a validated, labelled [`Profile`].
///
/// # Errors
///
/// Returns [`RecordError`] if the line is malformed or breaks an invariant.
pub fn decode_gusto(line: &str) -> Result<Profile, RecordError> {
    let f = split_fields(line, GUSTO_FIELDS)?;
    let mut profile = Profile::stored(
        f[0],
        f[1],
        number("group size", f[2])?,
        MealType::from_str(f[3])?,
    )?;
    profile.budget = parse_constraint(f[4], |raw| number("budget", raw))?;
    profile.max_distance = parse_constraint(f[5], |raw| number("maximum distance", raw))?;
    profile.cuisines = parse_constraint(f[6], cuisine_set)?;
    profile.min_rating = parse_constraint(f[7], |raw| number("minimum rating", raw))?;
    profile.validate()?;
    Ok(profile)
}

/// # Errors
///
/// Returns [`RecordError::MissingLabel`] for an ad hoc profile; those are
/// never persisted.
pub fn encode_gusto(profile: &Profile) -> Result<String, RecordError> {
    let label = profile.label.as_deref().ok_or(RecordError::MissingLabel)?;
    let cuisines = match &profile.cuisines {
        Constraint::Bound(set) => join_cuisines(set),
        Constraint::Unconstrained => UNCONSTRAINED.to_string(),
    };
    Ok(format!(
        "{}~{}~{}~{}~{}~{}~{}~{}",
        label,
        profile.description,
        profile.group_size,
        profile.meal_type.as_upper(),
        encode_constraint(&profile.budget),
        encode_constraint(&profile.max_distance),
        cuisines,
        encode_constraint(&profile.min_rating),
    ))
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
