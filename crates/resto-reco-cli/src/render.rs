//! Plain-text tables and detail views shared by the session and subcommands.

use resto_reco_core::{Cuisine, Listing, Profile};

pub(crate) const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════";

pub(crate) const NO_MATCH_GUIDANCE: &str = "\
  We cannot find a resto match for your gusto!
  Want to find a match? Try:
  - Adding more restos
  - A different gusto
  - Increasing your gusto's budget
  - Increasing your gusto's max distance
  - Changing your gusto's cuisine type
  - Decreasing your gusto's group size
  - Decreasing your gusto's minimum rating";

pub(crate) fn heading(title: &str) -> String {
    format!("{RULE}\n  {title}\n{RULE}")
}

pub(crate) fn resto_table<'a>(restos: impl IntoIterator<Item = &'a Listing>) -> String {
    let header = format!(
        "  {:<22}  {:>9}  {:<28}  {:<5}  {:>8}  {:>6}\n",
        "Name", "Distance", "Cuisines", "Meals", "Cost", "Rating"
    );
    let rows: String = restos
        .into_iter()
        .map(|r| {
            format!(
                "  {:<22}  {:>9}  {:<28}  {:<5}  {:>8}  {:>6}\n",
                r.name,
                r.distance,
                r.cuisine_list(),
                r.meals.flags(),
                r.cost_per_person.to_string(),
                r.rating
            )
        })
        .collect();
    header + &rows
}

pub(crate) fn gusto_table<'a>(gustos: impl IntoIterator<Item = &'a Profile>) -> String {
    let header = format!(
        "  {:<9}  {:<24}  {:>5}  {:<9}  {:>8}  {:>8}  {:<20}  {:>6}\n",
        "Label", "Description", "Group", "Meal", "Budget", "Max Dist", "Cuisines", "Rating"
    );
    let rows: String = gustos
        .into_iter()
        .map(|g| {
            format!(
                "  {:<9}  {:<24}  {:>5}  {:<9}  {:>8}  {:>8}  {:<20}  {:>6}\n",
                g.label.as_deref().unwrap_or("-"),
                g.description,
                g.group_size,
                g.meal_type.to_string(),
                g.budget.to_string(),
                g.max_distance.to_string(),
                g.cuisine_list(),
                g.min_rating.to_string()
            )
        })
        .collect();
    header + &rows
}

pub(crate) fn resto_detail(resto: &Listing, reference_point: &str) -> String {
    format!(
        "  Name: {}\n  Distance from {reference_point}: {} m\n  Cuisines: {}\n  Meals: {}\n  Cost per person: {}\n  Rating: {}",
        resto.name,
        resto.distance,
        resto.cuisine_list(),
        resto.meals.describe(),
        resto.cost_per_person,
        resto.rating
    )
}

pub(crate) fn gusto_detail(gusto: &Profile) -> String {
    let mut lines = Vec::new();
    if let Some(label) = &gusto.label {
        lines.push(format!("  Label: {label}"));
        lines.push(format!("  Description: {}", gusto.description));
    }
    lines.push(format!("  Group Size: {}", gusto.group_size));
    lines.push(format!("  Meal Type: {}", gusto.meal_type));
    lines.push(format!("  Budget: {}", gusto.budget));
    lines.push(format!("  Max Distance: {}", gusto.max_distance));
    lines.push(format!("  Cuisines: {}", gusto.cuisine_list()));
    lines.push(format!("  Min Rating: {}", gusto.min_rating));
    lines.join("\n")
}

/// The cuisine vocabulary laid out three to a row.
pub(crate) fn cuisine_grid() -> String {
    Cuisine::ALL
        .chunks(3)
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|c| format!("{:<16}", c.name())).collect();
            format!("  {}", cells.join("").trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use resto_reco_core::{MealSupport, MealType};
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn resto_table_has_header_and_one_row_per_resto() {
        let resto = Listing::new(
            "Kainan",
            120.0,
            [Cuisine::Filipino],
            MealSupport::all_day(),
            Decimal::new(8550, 2),
            4.5,
        )
        .unwrap();
        let table = resto_table([&resto]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Name"));
        assert!(lines[1].contains("KAINAN"));
        assert!(lines[1].contains("BLD"));
        assert!(lines[1].contains("85.50"));
    }

    #[test]
    fn ad_hoc_detail_omits_label() {
        let gusto = Profile::ad_hoc(3, MealType::Lunch).with_budget(Decimal::from(450));
        let detail = gusto_detail(&gusto);
        assert!(!detail.contains("Label"));
        assert_eq!(detail.lines().count(), 6);
        assert!(detail.lines().all(|line| line.starts_with("  ")));
        assert!(detail.contains("Budget: 450"));
        assert!(detail.contains("Max Distance: ANY"));
    }

    #[test]
    fn cuisine_grid_lists_every_cuisine() {
        let grid = cuisine_grid();
        assert_eq!(grid.lines().count(), 6);
        assert!(Cuisine::ALL.iter().all(|c| grid.contains(c.name())));
    }
}
