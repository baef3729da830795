//! Interactive menu session.
//!
//! The session owns the catalog for its lifetime. Every successful add, edit,
//! or delete rewrites the affected data file immediately; choosing Exit (or
//! closing input) saves both files once more before returning.

mod prompt;

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use resto_reco_core::{validate, CoreError, Listing, Profile};
use resto_reco_store::{Catalog, DataFiles};
use rust_decimal::Decimal;

use crate::render;
use prompt::Prompter;

const MAIN_MENU: &str = "\
  1   Manage Gustos
  2   Manage Restos
  3   Get Recos
  A   About
  H   Help
  X   Exit";

const RECOS_MENU: &str = "\
  1   Get Recos from an Existing Gusto
  2   Get Recos from an Ad Hoc Gusto
  0   Back to Main Menu";

const HELP_MENU: &str = "\
  1   Gustos
  2   Restos
  3   Recos
  0   Back to Main Menu";

const HELP_GUSTOS: &str = "\
  Gustos are preference profiles:
  Label         unique identifier of the gusto
  Description   what the gusto is for
  Group Size    number of people eating
  Meal Type     Breakfast, Lunch, or Dinner
  Budget        total budget for the whole group
  Max Distance  farthest a resto may be, in meters
  Cuisines      acceptable cuisines; a resto serving any of them matches
  Min Rating    lowest acceptable resto rating, 1 to 5
  Budget, Max Distance, Cuisines, and Min Rating accept ANY for no limit.";

const HELP_RESTOS: &str = "\
  Restos are dining places:
  Name          unique identifier of the resto
  Distance      meters from the reference point
  Cuisines      cuisines the resto serves
  Meals         meal types the resto serves
  Cost          average cost of a meal per person
  Rating        average rating, 0 to 5";

const HELP_RECOS: &str = "\
  Recos are up to three restos that satisfy every limit of a gusto:
  they serve its meal type, fit the group's budget, lie within its max
  distance, serve one of its cuisines, and meet its minimum rating.
  When more than three qualify, three are picked at random.";

enum Flow {
    Stay,
    Leave,
}

fn input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

fn manage_menu(noun: &str) -> String {
    format!(
        "  1   Add {noun}\n  2   Edit {noun}\n  3   Delete {noun}\n  4   Display {noun}s\n  5   View a {noun}\n  B   Back to Main Menu"
    )
}

/// Normalize a name or label and make sure nothing else already uses it.
fn fresh_key(
    raw: &str,
    normalize: fn(&str) -> Result<String, CoreError>,
    taken: impl Fn(&str) -> bool,
    noun: &str,
) -> Result<String, String> {
    let key = normalize(raw).map_err(|e| e.to_string())?;
    if taken(&key) {
        return Err(format!("{noun} '{key}' already exists"));
    }
    Ok(key)
}

fn description(raw: &str) -> Result<String, String> {
    validate::description(raw).map_err(|e| e.to_string())
}

fn group_size(raw: &str) -> Result<u32, String> {
    validate::group_size(prompt::number(raw)?).map_err(|e| e.to_string())
}

fn distance(raw: &str) -> Result<f64, String> {
    prompt::checked(raw, |v| validate::non_negative("distance", v))
}

fn cost(raw: &str) -> Result<Decimal, String> {
    prompt::checked(raw, |v| validate::positive_amount("cost", v))
}

fn rating(raw: &str) -> Result<f64, String> {
    prompt::checked(raw, validate::rating)
}

fn budget(raw: &str) -> Result<Decimal, String> {
    prompt::checked(raw, |v| validate::positive_amount("budget", v))
}

fn max_distance(raw: &str) -> Result<f64, String> {
    prompt::checked(raw, |v| validate::positive("maximum distance", v))
}

fn min_rating(raw: &str) -> Result<f64, String> {
    prompt::checked(raw, validate::min_rating)
}

pub(crate) struct Session<'a, R, W> {
    io: Prompter<R, W>,
    catalog: Catalog,
    files: &'a DataFiles,
    reference_point: &'a str,
    rng: StdRng,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(
        input: R,
        out: W,
        catalog: Catalog,
        files: &'a DataFiles,
        reference_point: &'a str,
        rng: StdRng,
    ) -> Self {
        Self {
            io: Prompter::new(input, out),
            catalog,
            files,
            reference_point,
            rng,
        }
    }

    /// Run menus until the user exits or input ends, then save.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output or saving a data file fails.
    pub(crate) fn run(mut self) -> anyhow::Result<()> {
        loop {
            match self.main_menu() {
                Ok(Flow::Stay) => {}
                Ok(Flow::Leave) => break,
                Err(e) if input_closed(&e) => {
                    tracing::warn!("input closed before exit was chosen; saving and exiting");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        self.files.save(&self.catalog)?;
        self.io.say("  Data saved. Goodbye!")?;
        Ok(())
    }

    fn main_menu(&mut self) -> anyhow::Result<Flow> {
        self.io.say(&render::heading("Main Menu"))?;
        self.io.say(MAIN_MENU)?;
        match self.io.line("Enter choice")?.to_ascii_uppercase().as_str() {
            "1" => self.manage_gustos()?,
            "2" => self.manage_restos()?,
            "3" => self.get_recos()?,
            "A" => self.about()?,
            "H" => self.help()?,
            "X" => return Ok(Flow::Leave),
            _ => self.io.error("Invalid choice!")?,
        }
        Ok(Flow::Stay)
    }

    fn about(&mut self) -> anyhow::Result<()> {
        self.io.say(&render::heading("About"))?;
        self.io.say(&format!(
            "  Resto Reco\n  Recommends restos around {} that fit a gusto.",
            self.reference_point
        ))?;
        self.io.pause()
    }

    fn help(&mut self) -> anyhow::Result<()> {
        loop {
            self.io.say(&render::heading("Help"))?;
            self.io.say(HELP_MENU)?;
            let text = match self.io.line("Enter choice")?.as_str() {
                "1" => HELP_GUSTOS,
                "2" => HELP_RESTOS,
                "3" => HELP_RECOS,
                "0" => return Ok(()),
                _ => {
                    self.io.error("Invalid choice!")?;
                    continue;
                }
            };
            self.io.say(text)?;
            self.io.pause()?;
        }
    }

    // Restos

    fn manage_restos(&mut self) -> anyhow::Result<()> {
        loop {
            self.io.say(&render::heading("Manage Restos"))?;
            self.io.say(&manage_menu("Resto"))?;
            match self.io.line("Enter choice")?.to_ascii_uppercase().as_str() {
                "1" => self.add_resto()?,
                "2" => self.edit_resto()?,
                "3" => self.delete_resto()?,
                "4" => self.display_restos()?,
                "5" => self.view_resto()?,
                "B" => return Ok(()),
                _ => self.io.error("Invalid choice!")?,
            }
        }
    }

    fn pick_resto(&mut self) -> anyhow::Result<Option<Listing>> {
        if self.catalog.restos().is_empty() {
            self.io.error("No restos yet. Add one first.")?;
            return Ok(None);
        }
        let names: Vec<&str> = self.catalog.restos().keys().map(String::as_str).collect();
        let listed = format!("  Restos: {}", names.join(", "));
        self.io.say(&listed)?;
        let raw = self.io.line("Resto name")?;
        if let Some(listing) = self.catalog.resto(&raw) {
            return Ok(Some(listing.clone()));
        }
        self.io
            .error(&format!("Resto '{}' not found.", raw.to_uppercase()))?;
        Ok(None)
    }

    fn add_resto(&mut self) -> anyhow::Result<()> {
        self.io.say(&render::heading("Add Resto"))?;
        let catalog = &self.catalog;
        let name = self.io.ask("Name", |raw| {
            fresh_key(raw, validate::resto_name, |n| catalog.resto(n).is_some(), "resto")
        })?;
        let distance = self.io.ask(
            &format!("Distance from {} in meters", self.reference_point),
            distance,
        )?;
        self.io.say(&render::cuisine_grid())?;
        let cuisines = self.io.ask("Cuisines (comma separated)", prompt::cuisines)?;
        let meals = self
            .io
            .ask("Meals served (e.g. Breakfast, Lunch)", prompt::meal_support)?;
        let cost = self.io.ask("Average cost per person", cost)?;
        let rating = self.io.ask("Rating (0-5)", rating)?;

        let listing = Listing::new(&name, distance, cuisines, meals, cost, rating)?;
        self.catalog.add_resto(listing)?;
        self.files.save_restos(&self.catalog)?;
        self.io.say(&format!("  Resto {name} added."))
    }

    fn edit_resto(&mut self) -> anyhow::Result<()> {
        self.io.say(&render::heading("Edit Resto"))?;
        let Some(current) = self.pick_resto()? else {
            return Ok(());
        };
        self.io.say("  Leave blank to keep the current value.")?;
        let catalog = &self.catalog;
        let name = self.io.ask_or_keep(
            &format!("Name [{}]", current.name),
            current.name.clone(),
            |raw| {
                fresh_key(
                    raw,
                    validate::resto_name,
                    |n| n != current.name && catalog.resto(n).is_some(),
                    "resto",
                )
            },
        )?;
        let distance = self.io.ask_or_keep(
            &format!("Distance [{}]", current.distance),
            current.distance,
            distance,
        )?;
        let cuisines = self.io.ask_or_keep(
            &format!("Cuisines [{}]", current.cuisine_list()),
            current.cuisines.clone(),
            prompt::cuisines,
        )?;
        let meals = self.io.ask_or_keep(
            &format!("Meals served [{}]", current.meals.describe()),
            current.meals,
            prompt::meal_support,
        )?;
        let cost = self.io.ask_or_keep(
            &format!("Average cost per person [{}]", current.cost_per_person),
            current.cost_per_person,
            cost,
        )?;
        let rating = self.io.ask_or_keep(
            &format!("Rating [{}]", current.rating),
            current.rating,
            rating,
        )?;

        let listing = Listing::new(&name, distance, cuisines, meals, cost, rating)?;
        self.catalog.update_resto(&current.name, listing)?;
        self.files.save_restos(&self.catalog)?;
        self.io.say(&format!("  Resto {name} updated."))
    }

    fn delete_resto(&mut self) -> anyhow::Result<()> {
        self.io.say(&render::heading("Delete Resto"))?;
        let Some(resto) = self.pick_resto()? else {
            return Ok(());
        };
        if !self.io.confirm(&format!("Delete resto {}?", resto.name))? {
            return self.io.say("  Nothing deleted.");
        }
        self.catalog.remove_resto(&resto.name)?;
        self.files.save_restos(&self.catalog)?;
        self.io.say(&format!("  Resto {} deleted.", resto.name))
    }

    fn display_restos(&mut self) -> anyhow::Result<()> {
        if self.catalog.restos().is_empty() {
            return self.io.error("No restos yet. Add one first.");
        }
        let table = render::resto_table(self.catalog.restos().values());
        self.io.say(&render::heading("Restos"))?;
        self.io.say(&table)?;
        self.io.pause()
    }

    fn view_resto(&mut self) -> anyhow::Result<()> {
        let Some(resto) = self.pick_resto()? else {
            return Ok(());
        };
        self.io.say(&render::heading("Resto"))?;
        self.io
            .say(&render::resto_detail(&resto, self.reference_point))?;
        self.io.pause()
    }

    // Gustos

    fn manage_gustos(&mut self) -> anyhow::Result<()> {
        loop {
            self.io.say(&render::heading("Manage Gustos"))?;
            self.io.say(&manage_menu("Gusto"))?;
            match self.io.line("Enter choice")?.to_ascii_uppercase().as_str() {
                "1" => self.add_gusto()?,
                "2" => self.edit_gusto()?,
                "3" => self.delete_gusto()?,
                "4" => self.display_gustos()?,
                "5" => self.view_gusto()?,
                "B" => return Ok(()),
                _ => self.io.error("Invalid choice!")?,
            }
        }
    }

    /// Returns the stored key together with the profile.
    fn pick_gusto(&mut self) -> anyhow::Result<Option<(String, Profile)>> {
        if self.catalog.gustos().is_empty() {
            self.io.error("No gustos yet. Add one first.")?;
            return Ok(None);
        }
        let labels: Vec<&str> = self.catalog.gustos().keys().map(String::as_str).collect();
        let listed = format!("  Gustos: {}", labels.join(", "));
        self.io.say(&listed)?;
        let raw = self.io.line("Gusto label")?;
        let key = raw.trim().to_uppercase();
        if let Some(profile) = self.catalog.gusto(&key) {
            return Ok(Some((key, profile.clone())));
        }
        self.io.error(&format!("Gusto '{key}' not found."))?;
        Ok(None)
    }

    /// Ask for the four optional limits; blank or `ANY` leaves one open.
    fn ask_limits(&mut self, mut profile: Profile) -> anyhow::Result<Profile> {
        self.io.say("  Enter ANY or leave blank for no limit.")?;
        profile.budget = self.io.ask("Budget for the whole group", |raw| {
            prompt::optional(raw, budget)
        })?;
        profile.max_distance = self.io.ask("Max distance in meters", |raw| {
            prompt::optional(raw, max_distance)
        })?;
        self.io.say(&render::cuisine_grid())?;
        profile.cuisines = self.io.ask("Cuisines (comma separated)", |raw| {
            prompt::optional(raw, prompt::cuisines)
        })?;
        profile.min_rating = self.io.ask("Min rating (1-5)", |raw| {
            prompt::optional(raw, min_rating)
        })?;
        Ok(profile)
    }

    fn add_gusto(&mut self) -> anyhow::Result<()> {
        self.io.say(&render::heading("Add Gusto"))?;
        let catalog = &self.catalog;
        let label = self.io.ask("Label", |raw| {
            fresh_key(raw, validate::gusto_label, |l| catalog.gusto(l).is_some(), "gusto")
        })?;
        let description = self.io.ask("Description", description)?;
        let group_size = self.io.ask("Group size", group_size)?;
        let meal_type = self
            .io
            .ask("Meal type (Breakfast, Lunch, or Dinner)", prompt::meal_type)?;

        let profile = Profile::stored(&label, &description, group_size, meal_type)?;
        let profile = self.ask_limits(profile)?;
        self.catalog.add_gusto(profile)?;
        self.files.save_gustos(&self.catalog)?;
        self.io.say(&format!("  Gusto {label} added."))
    }

    fn edit_gusto(&mut self) -> anyhow::Result<()> {
        self.io.say(&render::heading("Edit Gusto"))?;
        let Some((current_label, current)) = self.pick_gusto()? else {
            return Ok(());
        };
        self.io
            .say("  Leave blank to keep the current value; enter ANY to remove a limit.")?;
        let catalog = &self.catalog;
        let label = self.io.ask_or_keep(
            &format!("Label [{current_label}]"),
            current_label.clone(),
            |raw| {
                fresh_key(
                    raw,
                    validate::gusto_label,
                    |l| l != current_label && catalog.gusto(l).is_some(),
                    "gusto",
                )
            },
        )?;
        let description = self.io.ask_or_keep(
            &format!("Description [{}]", current.description),
            current.description.clone(),
            description,
        )?;
        let group_size = self.io.ask_or_keep(
            &format!("Group size [{}]", current.group_size),
            current.group_size,
            group_size,
        )?;
        let meal_type = self.io.ask_or_keep(
            &format!("Meal type [{}]", current.meal_type),
            current.meal_type,
            prompt::meal_type,
        )?;

        let mut profile = Profile::stored(&label, &description, group_size, meal_type)?;
        profile.budget = self.io.ask_or_keep(
            &format!("Budget [{}]", current.budget),
            current.budget.clone(),
            |raw| prompt::optional_explicit(raw, budget),
        )?;
        profile.max_distance = self.io.ask_or_keep(
            &format!("Max distance [{}]", current.max_distance),
            current.max_distance.clone(),
            |raw| prompt::optional_explicit(raw, max_distance),
        )?;
        profile.cuisines = self.io.ask_or_keep(
            &format!("Cuisines [{}]", current.cuisine_list()),
            current.cuisines.clone(),
            |raw| prompt::optional_explicit(raw, prompt::cuisines),
        )?;
        profile.min_rating = self.io.ask_or_keep(
            &format!("Min rating [{}]", current.min_rating),
            current.min_rating.clone(),
            |raw| prompt::optional_explicit(raw, min_rating),
        )?;

        self.catalog.update_gusto(&current_label, profile)?;
        self.files.save_gustos(&self.catalog)?;
        self.io.say(&format!("  Gusto {label} updated."))
    }

    fn delete_gusto(&mut self) -> anyhow::Result<()> {
        self.io.say(&render::heading("Delete Gusto"))?;
        let Some((label, _)) = self.pick_gusto()? else {
            return Ok(());
        };
        if !self.io.confirm(&format!("Delete gusto {label}?"))? {
            return self.io.say("  Nothing deleted.");
        }
        self.catalog.remove_gusto(&label)?;
        self.files.save_gustos(&self.catalog)?;
        self.io.say(&format!("  Gusto {label} deleted."))
    }

    fn display_gustos(&mut self) -> anyhow::Result<()> {
        if self.catalog.gustos().is_empty() {
            return self.io.error("No gustos yet. Add one first.");
        }
        let table = render::gusto_table(self.catalog.gustos().values());
        self.io.say(&render::heading("Gustos"))?;
        self.io.say(&table)?;
        self.io.pause()
    }

    fn view_gusto(&mut self) -> anyhow::Result<()> {
        let Some((_, gusto)) = self.pick_gusto()? else {
            return Ok(());
        };
        self.io.say(&render::heading("Gusto"))?;
        self.io.say(&render::gusto_detail(&gusto))?;
        self.io.pause()
    }

    // Recos

    fn get_recos(&mut self) -> anyhow::Result<()> {
        if self.catalog.restos().is_empty() {
            return self.io.error("No restos to reco! Add some restos first.");
        }
        self.io.say(&render::heading("Get Recos"))?;
        self.io.say(RECOS_MENU)?;
        match self.io.line("Enter choice")?.as_str() {
            "1" => {
                let Some((label, gusto)) = self.pick_gusto()? else {
                    return Ok(());
                };
                let recos = self.catalog.recommend_for(&label, &mut self.rng)?;
                self.show_recos(&gusto, &recos)
            }
            "2" => {
                self.io.say(&render::heading("Ad Hoc Gusto"))?;
                let group_size = self.io.ask("Group size", group_size)?;
                let meal_type = self
                    .io
                    .ask("Meal type (Breakfast, Lunch, or Dinner)", prompt::meal_type)?;
                let gusto = self.ask_limits(Profile::ad_hoc(group_size, meal_type))?;
                let recos = self.catalog.recommend_ad_hoc(&gusto, &mut self.rng)?;
                self.show_recos(&gusto, &recos)
            }
            "0" => Ok(()),
            _ => self.io.error("Invalid choice!"),
        }
    }

    fn show_recos(&mut self, gusto: &Profile, recos: &[String]) -> anyhow::Result<()> {
        if recos.is_empty() {
            self.io.say(render::NO_MATCH_GUIDANCE)?;
            return self.io.pause();
        }
        let table = render::resto_table(recos.iter().filter_map(|name| self.catalog.resto(name)));
        self.io.say(&render::heading(
            "We reco the following restos based on your gusto!",
        ))?;
        self.io.say(&render::gusto_detail(gusto))?;
        self.io.say(&table)?;
        self.io.pause()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
