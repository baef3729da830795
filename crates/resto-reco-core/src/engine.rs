//! Recommendation engine: predicate filter plus random truncation.
//!
//! A listing qualifies for a profile when it passes every active predicate
//! (meal type, budget, distance, cuisine, rating). If more than
//! [`MAX_RECOMMENDATIONS`] listings qualify, random ones are dropped until
//! exactly that many remain.

use std::collections::BTreeMap;

use rand::Rng;
use rust_decimal::Decimal;

use crate::{Listing, Profile};

/// Upper bound on the number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// The listing serves the profile's meal type. Always active.
#[must_use]
pub fn meal_matches(profile: &Profile, listing: &Listing) -> bool {
    listing.meals.serves(profile.meal_type)
}

/// The whole group can eat within budget. Inclusive, in exact decimal
/// arithmetic; a total too large to represent never fits.
#[must_use]
pub fn budget_matches(profile: &Profile, listing: &Listing) -> bool {
    profile.budget.permits(|budget| {
        listing
            .cost_per_person
            .checked_mul(Decimal::from(profile.group_size))
            .is_some_and(|total| total <= *budget)
    })
}

/// The listing is no farther than the profile allows. Inclusive.
#[must_use]
pub fn distance_matches(profile: &Profile, listing: &Listing) -> bool {
    profile
        .max_distance
        .permits(|max| listing.distance <= *max)
}

/// The listing serves at least one of the requested cuisines.
#[must_use]
pub fn cuisine_matches(profile: &Profile, listing: &Listing) -> bool {
    profile
        .cuisines
        .permits(|wanted| wanted.iter().any(|c| listing.cuisines.contains(c)))
}

/// The listing is rated at least the profile's minimum. Inclusive.
#[must_use]
pub fn rating_matches(profile: &Profile, listing: &Listing) -> bool {
    profile.min_rating.permits(|min| listing.rating >= *min)
}

/// Conjunction of every predicate, short-circuiting on the first failure.
#[must_use]
pub fn qualifies(profile: &Profile, listing: &Listing) -> bool {
    meal_matches(profile, listing)
        && budget_matches(profile, listing)
        && distance_matches(profile, listing)
        && cuisine_matches(profile, listing)
        && rating_matches(profile, listing)
}

/// Every qualifying listing name, in collection order, before truncation.
#[must_use]
pub fn candidates(profile: &Profile, listings: &BTreeMap<String, Listing>) -> Vec<String> {
    listings
        .iter()
        .filter(|(_, listing)| qualifies(profile, listing))
        .map(|(name, _)| name.clone())
        .collect()
}

/// Remove uniformly random entries until at most `limit` remain.
///
/// Survivors keep their relative order.
pub fn truncate_random<T, R>(items: &mut Vec<T>, limit: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    while items.len() > limit {
        let index = rng.random_range(0..items.len());
        items.remove(index);
    }
}

/// Recommend up to [`MAX_RECOMMENDATIONS`] listings, drawing truncation
/// randomness from `rng`.
///
/// An empty result is a normal outcome: nothing qualified.
pub fn recommend_with_rng<R>(
    profile: &Profile,
    listings: &BTreeMap<String, Listing>,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut recos = candidates(profile, listings);
    let qualified = recos.len();
    truncate_random(&mut recos, MAX_RECOMMENDATIONS, rng);
    tracing::debug!(
        gusto = profile.label.as_deref().unwrap_or("ad hoc"),
        listings = listings.len(),
        qualified,
        returned = recos.len(),
        "recommendation computed"
    );
    recos
}

/// [`recommend_with_rng`] using the thread-local generator.
#[must_use]
pub fn recommend(profile: &Profile, listings: &BTreeMap<String, Listing>) -> Vec<String> {
    recommend_with_rng(profile, listings, &mut rand::rng())
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
