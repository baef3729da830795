use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validate;
use crate::{Constraint, CoreError, Cuisine, MealType};

/// A preference profile ("gusto").
///
/// Stored profiles carry a label; ad hoc profiles are built for a single
/// recommendation request and have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub label: Option<String>,
    pub description: String,
    pub group_size: u32,
    pub meal_type: MealType,
    /// Total for the whole group.
    pub budget: Constraint<Decimal>,
    /// Meters from the reference point.
    pub max_distance: Constraint<f64>,
    /// Matches listings serving at least one of these cuisines.
    pub cuisines: Constraint<BTreeSet<Cuisine>>,
    pub min_rating: Constraint<f64>,
}

impl Profile {
    /// An ad hoc profile with every optional field unconstrained.
    #[must_use]
    pub fn ad_hoc(group_size: u32, meal_type: MealType) -> Self {
        Profile {
            label: None,
            description: String::new(),
            group_size,
            meal_type,
            budget: Constraint::Unconstrained,
            max_distance: Constraint::Unconstrained,
            cuisines: Constraint::Unconstrained,
            min_rating: Constraint::Unconstrained,
        }
    }

    /// A stored profile with every optional field unconstrained.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the label or description is invalid.
    pub fn stored(
        label: &str,
        description: &str,
        group_size: u32,
        meal_type: MealType,
    ) -> Result<Self, CoreError> {
        let mut profile = Profile::ad_hoc(group_size, meal_type);
        profile.label = Some(validate::gusto_label(label)?);
        profile.description = validate::description(description)?;
        validate::group_size(group_size)?;
        Ok(profile)
    }

    #[must_use]
    pub fn with_budget(mut self, budget: Decimal) -> Self {
        self.budget = Constraint::Bound(budget);
        self
    }

    #[must_use]
    pub fn with_max_distance(mut self, meters: f64) -> Self {
        self.max_distance = Constraint::Bound(meters);
        self
    }

    #[must_use]
    pub fn with_cuisine(mut self, cuisine: Cuisine) -> Self {
        let mut set = match self.cuisines {
            Constraint::Bound(set) => set,
            Constraint::Unconstrained => BTreeSet::new(),
        };
        set.insert(cuisine);
        self.cuisines = Constraint::Bound(set);
        self
    }

    #[must_use]
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Constraint::Bound(rating);
        self
    }

    #[must_use]
    pub fn is_ad_hoc(&self) -> bool {
        self.label.is_none()
    }

    /// Check every field against the profile invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(label) = &self.label {
            validate::gusto_label(label)?;
            validate::description(&self.description)?;
        }
        validate::group_size(self.group_size)?;
        if let Constraint::Bound(budget) = self.budget {
            validate::positive_amount("budget", budget)?;
        }
        if let Constraint::Bound(distance) = self.max_distance {
            validate::positive("maximum distance", distance)?;
        }
        if let Constraint::Bound(cuisines) = &self.cuisines {
            if cuisines.is_empty() {
                return Err(CoreError::InvalidField {
                    field: "cuisine",
                    reason: "a cuisine filter needs at least one cuisine; use ANY instead"
                        .to_string(),
                });
            }
        }
        if let Constraint::Bound(rating) = self.min_rating {
            validate::min_rating(rating)?;
        }
        Ok(())
    }

    /// Cuisine filter for display: `"Filipino, Thai"` or `"ANY"`.
    #[must_use]
    pub fn cuisine_list(&self) -> String {
        match &self.cuisines {
            Constraint::Bound(set) => set
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", "),
            Constraint::Unconstrained => crate::constraint::UNCONSTRAINED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ad_hoc_is_fully_unconstrained() {
        let profile = Profile::ad_hoc(2, MealType::Lunch);
        assert!(profile.is_ad_hoc());
        assert!(!profile.budget.is_bound());
        assert!(!profile.max_distance.is_bound());
        assert!(!profile.cuisines.is_bound());
        assert!(!profile.min_rating.is_bound());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn stored_normalizes_label() {
        let profile = Profile::stored("date", "Friday dinner", 2, MealType::Dinner).unwrap();
        assert_eq!(profile.label.as_deref(), Some("DATE"));
        assert!(!profile.is_ad_hoc());
    }

    #[test]
    fn stored_requires_description() {
        assert!(Profile::stored("DATE", "  ", 2, MealType::Dinner).is_err());
    }

    #[test]
    fn with_cuisine_accumulates() {
        let profile = Profile::ad_hoc(1, MealType::Lunch)
            .with_cuisine(Cuisine::Thai)
            .with_cuisine(Cuisine::Filipino);
        assert_eq!(profile.cuisine_list(), "Filipino, Thai");
    }

    #[test]
    fn validate_rejects_out_of_range_bounds() {
        assert!(Profile::ad_hoc(1, MealType::Lunch)
            .with_budget(Decimal::ZERO)
            .validate()
            .is_err());
        assert!(Profile::ad_hoc(1, MealType::Lunch)
            .with_min_rating(0.5)
            .validate()
            .is_err());
        assert!(Profile::ad_hoc(0, MealType::Lunch).validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_cuisine_filter() {
        let mut profile = Profile::ad_hoc(1, MealType::Lunch);
        profile.cuisines = Constraint::Bound(BTreeSet::new());
        assert!(profile.validate().is_err());
    }

    #[test]
    fn unconstrained_cuisine_displays_any() {
        assert_eq!(Profile::ad_hoc(1, MealType::Lunch).cuisine_list(), "ANY");
    }
}
