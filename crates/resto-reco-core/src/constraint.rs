//! Optional profile constraints.
//!
//! A profile field is either bound to a value or explicitly unconstrained.
//! Text sentinels (`ANY`, `None`, `-1`, empty) are decoded here, at the edge,
//! so matching code only ever branches on the enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tokens that mean "accept any value" wherever a constraint is read from text.
pub const UNCONSTRAINED_TOKENS: [&str; 4] = ["", "ANY", "NONE", "-1"];

/// Canonical token written for an unconstrained field.
pub const UNCONSTRAINED: &str = "ANY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint<T> {
    Bound(T),
    Unconstrained,
}

impl<T> Constraint<T> {
    #[must_use]
    pub fn is_bound(&self) -> bool {
        matches!(self, Constraint::Bound(_))
    }

    #[must_use]
    pub fn as_bound(&self) -> Option<&T> {
        match self {
            Constraint::Bound(value) => Some(value),
            Constraint::Unconstrained => None,
        }
    }

    /// Evaluate `check` against the bound value; unconstrained always passes.
    pub fn permits(&self, check: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Constraint::Bound(value) => check(value),
            Constraint::Unconstrained => true,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Constraint<U> {
        match self {
            Constraint::Bound(value) => Constraint::Bound(f(value)),
            Constraint::Unconstrained => Constraint::Unconstrained,
        }
    }
}

impl<T> From<Option<T>> for Constraint<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Constraint::Unconstrained, Constraint::Bound)
    }
}

/// Returns `true` if `raw` is one of the accepted "unconstrained" sentinels.
#[must_use]
pub fn is_unconstrained_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    UNCONSTRAINED_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(trimmed))
}

/// Parse a constraint from text, treating every sentinel as unconstrained.
///
/// # Errors
///
/// Propagates whatever `parse` returns for a non-sentinel value.
pub fn parse_constraint<T, E>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<Constraint<T>, E> {
    if is_unconstrained_token(raw) {
        Ok(Constraint::Unconstrained)
    } else {
        parse(raw.trim()).map(Constraint::Bound)
    }
}

impl<T: fmt::Display> fmt::Display for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Bound(value) => value.fmt(f),
            Constraint::Unconstrained => f.write_str(UNCONSTRAINED),
        }
    }
}
