use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validate;
use crate::{CoreError, Cuisine, MealSupport};

/// A dining place ("resto").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Upper-cased unique key.
    pub name: String,
    /// Meters from the reference point.
    pub distance: f64,
    pub cuisines: BTreeSet<Cuisine>,
    pub meals: MealSupport,
    pub cost_per_person: Decimal,
    /// Average rating out of 5.
    pub rating: f64,
}

impl Listing {
    /// Build a validated listing. The name is normalized to upper case.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if any field breaks the listing invariants.
    pub fn new(
        name: &str,
        distance: f64,
        cuisines: impl IntoIterator<Item = Cuisine>,
        meals: MealSupport,
        cost_per_person: Decimal,
        rating: f64,
    ) -> Result<Self, CoreError> {
        let listing = Listing {
            name: validate::resto_name(name)?,
            distance,
            cuisines: cuisines.into_iter().collect(),
            meals,
            cost_per_person,
            rating,
        };
        listing.validate()?;
        Ok(listing)
    }

    /// Check every field against the listing invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::resto_name(&self.name)?;
        validate::non_negative("distance", self.distance)?;
        if self.cuisines.is_empty() {
            return Err(CoreError::InvalidField {
                field: "cuisines",
                reason: "at least one cuisine is required".to_string(),
            });
        }
        validate::positive_amount("cost", self.cost_per_person)?;
        validate::rating(self.rating)?;
        Ok(())
    }

    /// Cuisines joined with `", "` for display.
    #[must_use]
    pub fn cuisine_list(&self) -> String {
        self.cuisines
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
