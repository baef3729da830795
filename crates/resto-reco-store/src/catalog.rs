use std::collections::BTreeMap;

use rand::Rng;
use resto_reco_core::{engine, Listing, Profile};

use crate::StoreError;

/// Every resto and gusto known to the application, keyed by upper-cased
/// name or label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    restos: BTreeMap<String, Listing>,
    gustos: BTreeMap<String, Profile>,
}

fn key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn gusto_key(profile: &Profile) -> Result<String, StoreError> {
    profile
        .label
        .as_deref()
        .map(key)
        .ok_or(StoreError::UnlabeledGusto)
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn restos(&self) -> &BTreeMap<String, Listing> {
        &self.restos
    }

    #[must_use]
    pub fn gustos(&self) -> &BTreeMap<String, Profile> {
        &self.gustos
    }

    #[must_use]
    pub fn resto(&self, name: &str) -> Option<&Listing> {
        self.restos.get(&key(name))
    }

    #[must_use]
    pub fn gusto(&self, label: &str) -> Option<&Profile> {
        self.gustos.get(&key(label))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateResto`] if the name is taken, or
    /// [`StoreError::Record`] if the listing is invalid.
    pub fn add_resto(&mut self, listing: Listing) -> Result<(), StoreError> {
        listing.validate()?;
        let name = key(&listing.name);
        if self.restos.contains_key(&name) {
            return Err(StoreError::DuplicateResto(name));
        }
        tracing::debug!(resto = %name, "resto added");
        self.restos.insert(name, listing);
        Ok(())
    }

    /// Replace the listing stored under `current_name`. The listing may carry
    /// a new name as long as no other resto uses it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RestoNotFound`], [`StoreError::DuplicateResto`],
    /// or [`StoreError::Record`].
    pub fn update_resto(&mut self, current_name: &str, listing: Listing) -> Result<(), StoreError> {
        listing.validate()?;
        let current = key(current_name);
        if !self.restos.contains_key(&current) {
            return Err(StoreError::RestoNotFound(current));
        }
        let name = key(&listing.name);
        if name != current && self.restos.contains_key(&name) {
            return Err(StoreError::DuplicateResto(name));
        }
        self.restos.remove(&current);
        tracing::debug!(resto = %name, previous = %current, "resto updated");
        self.restos.insert(name, listing);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`StoreError::RestoNotFound`] if no resto has that name.
    pub fn remove_resto(&mut self, name: &str) -> Result<Listing, StoreError> {
        let name = key(name);
        let removed = self
            .restos
            .remove(&name)
            .ok_or_else(|| StoreError::RestoNotFound(name.clone()))?;
        tracing::debug!(resto = %name, "resto removed");
        Ok(removed)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::UnlabeledGusto`] for an ad hoc profile,
    /// [`StoreError::DuplicateGusto`] if the label is taken, or
    /// [`StoreError::Record`] if the profile is invalid.
    pub fn add_gusto(&mut self, profile: Profile) -> Result<(), StoreError> {
        let label = gusto_key(&profile)?;
        profile.validate()?;
        if self.gustos.contains_key(&label) {
            return Err(StoreError::DuplicateGusto(label));
        }
        tracing::debug!(gusto = %label, "gusto added");
        self.gustos.insert(label, profile);
        Ok(())
    }

    /// Replace the profile stored under `current_label`, renaming it if the
    /// new label is free.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GustoNotFound`], [`StoreError::DuplicateGusto`],
    /// [`StoreError::UnlabeledGusto`], or [`StoreError::Record`].
    pub fn update_gusto(
        &mut self,
        current_label: &str,
        profile: Profile,
    ) -> Result<(), StoreError> {
        let label = gusto_key(&profile)?;
        profile.validate()?;
        let current = key(current_label);
        if !self.gustos.contains_key(&current) {
            return Err(StoreError::GustoNotFound(current));
        }
        if label != current && self.gustos.contains_key(&label) {
            return Err(StoreError::DuplicateGusto(label));
        }
        self.gustos.remove(&current);
        tracing::debug!(gusto = %label, previous = %current, "gusto updated");
        self.gustos.insert(label, profile);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`StoreError::GustoNotFound`] if no gusto has that label.
    pub fn remove_gusto(&mut self, label: &str) -> Result<Profile, StoreError> {
        let label = key(label);
        let removed = self
            .gustos
            .remove(&label)
            .ok_or_else(|| StoreError::GustoNotFound(label.clone()))?;
        tracing::debug!(gusto = %label, "gusto removed");
        Ok(removed)
    }

    /// Recommend restos for a stored gusto.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GustoNotFound`] if no gusto has that label.
    pub fn recommend_for<R>(&self, label: &str, rng: &mut R) -> Result<Vec<String>, StoreError>
    where
        R: Rng + ?Sized,
    {
        let profile = self
            .gusto(label)
            .ok_or_else(|| StoreError::GustoNotFound(key(label)))?;
        Ok(engine::recommend_with_rng(profile, &self.restos, rng))
    }

    /// Recommend restos for a profile that is not stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Record`] if the profile is invalid.
    pub fn recommend_ad_hoc<R>(
        &self,
        profile: &Profile,
        rng: &mut R,
    ) -> Result<Vec<String>, StoreError>
    where
        R: Rng + ?Sized,
    {
        profile.validate()?;
        Ok(engine::recommend_with_rng(profile, &self.restos, rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use resto_reco_core::{Cuisine, MealSupport, MealType};
    use rust_decimal::Decimal;

    use super::*;

    fn listing(name: &str, cost: i64) -> Listing {
        Listing::new(
            name,
            100.0,
            [Cuisine::Filipino],
            MealSupport::all_day(),
            Decimal::from(cost),
            4.0,
        )
        .unwrap()
    }

    fn gusto(label: &str) -> Profile {
        Profile::stored(label, "Weekday lunch", 2, MealType::Lunch).unwrap()
    }

    #[test]
    fn add_resto_rejects_duplicate_name_in_any_case() {
        let mut catalog = Catalog::new();
        catalog.add_resto(listing("Kainan", 80)).unwrap();
        let err = catalog.add_resto(listing("kainan", 90)).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateResto(ref n) if n == "KAINAN"));
        assert_eq!(catalog.restos().len(), 1);
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.add_resto(listing("Kainan", 80)).unwrap();
        catalog.add_gusto(gusto("solo")).unwrap();
        assert!(catalog.resto(" kainan ").is_some());
        assert!(catalog.gusto("Solo").is_some());
    }

    #[test]
    fn update_resto_can_rename() {
        let mut catalog = Catalog::new();
        catalog.add_resto(listing("Kainan", 80)).unwrap();
        catalog
            .update_resto("KAINAN", listing("Kainan Dos", 95))
            .unwrap();
        assert!(catalog.resto("KAINAN").is_none());
        let renamed = catalog.resto("KAINAN DOS").unwrap();
        assert_eq!(renamed.cost_per_person, Decimal::from(95));
    }

    #[test]
    fn update_resto_refuses_rename_onto_existing() {
        let mut catalog = Catalog::new();
        catalog.add_resto(listing("Kainan", 80)).unwrap();
        catalog.add_resto(listing("Bonchon", 150)).unwrap();
        let err = catalog
            .update_resto("KAINAN", listing("Bonchon", 90))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateResto(_)));
        assert!(catalog.resto("KAINAN").is_some());
    }

    #[test]
    fn update_missing_resto_is_not_found() {
        let mut catalog = Catalog::new();
        let err = catalog
            .update_resto("GHOST", listing("Ghost", 80))
            .unwrap_err();
        assert!(matches!(err, StoreError::RestoNotFound(ref n) if n == "GHOST"));
    }

    #[test]
    fn remove_resto_returns_listing() {
        let mut catalog = Catalog::new();
        catalog.add_resto(listing("Kainan", 80)).unwrap();
        let removed = catalog.remove_resto("kainan").unwrap();
        assert_eq!(removed.name, "KAINAN");
        assert!(catalog.restos().is_empty());
        assert!(matches!(
            catalog.remove_resto("kainan"),
            Err(StoreError::RestoNotFound(_))
        ));
    }

    #[test]
    fn add_gusto_refuses_ad_hoc_profile() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add_gusto(Profile::ad_hoc(2, MealType::Lunch))
            .unwrap_err();
        assert!(matches!(err, StoreError::UnlabeledGusto));
    }

    #[test]
    fn add_gusto_refuses_invalid_profile() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add_gusto(gusto("SOLO").with_min_rating(0.5))
            .unwrap_err();
        assert!(matches!(err, StoreError::Record(_)));
        assert!(catalog.gustos().is_empty());
    }

    #[test]
    fn update_gusto_renames_and_checks_collisions() {
        let mut catalog = Catalog::new();
        catalog.add_gusto(gusto("SOLO")).unwrap();
        catalog.add_gusto(gusto("BARKADA")).unwrap();
        assert!(matches!(
            catalog.update_gusto("SOLO", gusto("BARKADA")),
            Err(StoreError::DuplicateGusto(_))
        ));
        catalog.update_gusto("SOLO", gusto("DUO")).unwrap();
        assert!(catalog.gusto("SOLO").is_none());
        assert!(catalog.gusto("DUO").is_some());
    }

    #[test]
    fn remove_gusto_reports_missing_label() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.remove_gusto("NOBODY"),
            Err(StoreError::GustoNotFound(ref l)) if l == "NOBODY"
        ));
    }

    #[test]
    fn recommend_for_uses_stored_gusto() {
        let mut catalog = Catalog::new();
        catalog.add_resto(listing("Cheap", 80)).unwrap();
        catalog.add_resto(listing("Pricey", 400)).unwrap();
        catalog.add_gusto(gusto("SOLO").with_budget(Decimal::from(200))).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let recos = catalog.recommend_for("solo", &mut rng).unwrap();
        assert_eq!(recos, vec!["CHEAP".to_string()]);
    }

    #[test]
    fn recommend_for_unknown_gusto_fails() {
        let catalog = Catalog::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            catalog.recommend_for("NOBODY", &mut rng),
            Err(StoreError::GustoNotFound(_))
        ));
    }

    #[test]
    fn recommend_ad_hoc_validates_profile() {
        let mut catalog = Catalog::new();
        catalog.add_resto(listing("Cheap", 80)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let profile = Profile::ad_hoc(0, MealType::Lunch);
        assert!(matches!(
            catalog.recommend_ad_hoc(&profile, &mut rng),
            Err(StoreError::Record(_))
        ));
        let profile = Profile::ad_hoc(1, MealType::Dinner);
        assert_eq!(
            catalog.recommend_ad_hoc(&profile, &mut rng).unwrap(),
            vec!["CHEAP".to_string()]
        );
    }
}
