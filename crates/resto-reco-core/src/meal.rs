//! Meal types and the compact `B`/`L`/`D` flag set a listing serves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in canonical order.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    /// The single-letter flag used in the compact meal-support encoding.
    #[must_use]
    pub fn flag(self) -> char {
        match self {
            MealType::Breakfast => 'B',
            MealType::Lunch => 'L',
            MealType::Dinner => 'D',
        }
    }

    /// Inverse of [`MealType::flag`]. Lowercase flags are accepted.
    #[must_use]
    pub fn from_flag(flag: char) -> Option<MealType> {
        match flag.to_ascii_uppercase() {
            'B' => Some(MealType::Breakfast),
            'L' => Some(MealType::Lunch),
            'D' => Some(MealType::Dinner),
            _ => None,
        }
    }

    /// Upper-case name as written to the gusto file.
    #[must_use]
    pub fn as_upper(self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
        }
    }

    fn bit(self) -> u8 {
        match self {
            MealType::Breakfast => 0b001,
            MealType::Lunch => 0b010,
            MealType::Dinner => 0b100,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "Breakfast"),
            MealType::Lunch => write!(f, "Lunch"),
            MealType::Dinner => write!(f, "Dinner"),
        }
    }
}

impl FromStr for MealType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            _ => Err(CoreError::UnknownMealType(s.trim().to_string())),
        }
    }
}

/// Non-empty set of meal types a listing serves.
///
/// Stored as a bit set; rendered as flags in canonical `BLD` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MealSupport(u8);

impl MealSupport {
    /// Build a meal-support set from any collection of meal types.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyMealSupport`] if `meals` yields nothing.
    pub fn new<I>(meals: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = MealType>,
    {
        let bits = meals.into_iter().fold(0u8, |acc, meal| acc | meal.bit());
        if bits == 0 {
            return Err(CoreError::EmptyMealSupport);
        }
        Ok(MealSupport(bits))
    }

    /// Serves breakfast, lunch and dinner.
    #[must_use]
    pub fn all_day() -> Self {
        MealSupport(0b111)
    }

    /// Decode a flag string such as `"BLD"` or `"LD"`.
    ///
    /// Flags may appear in any order and may repeat; the result is the same
    /// set either way.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidMealFlag`] for an unknown character and
    /// [`CoreError::EmptyMealSupport`] for an empty string.
    pub fn from_flags(flags: &str) -> Result<Self, CoreError> {
        let meals = flags
            .trim()
            .chars()
            .map(|c| MealType::from_flag(c).ok_or(CoreError::InvalidMealFlag(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(meals)
    }

    #[must_use]
    pub fn serves(self, meal: MealType) -> bool {
        self.0 & meal.bit() != 0
    }

    /// The served meal types in canonical order.
    #[must_use]
    pub fn meal_types(self) -> Vec<MealType> {
        MealType::ALL
            .into_iter()
            .filter(|meal| self.serves(*meal))
            .collect()
    }

    /// Canonical flag encoding, e.g. `"BD"`.
    #[must_use]
    pub fn flags(self) -> String {
        self.meal_types().into_iter().map(MealType::flag).collect()
    }

    /// Human-readable list, e.g. `"Breakfast, Dinner"`.
    #[must_use]
    pub fn describe(self) -> String {
        self.meal_types()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for MealSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flags())
    }
}

impl Serialize for MealSupport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.flags())
    }
}

impl<'de> Deserialize<'de> for MealSupport {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MealSupport::from_flags(&raw).map_err(serde::de::Error::custom)
    }
}
