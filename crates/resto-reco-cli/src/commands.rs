//! Non-interactive subcommand handlers.
//!
//! Each handler writes to the supplied writer so tests can capture output.

use std::io::Write;

use anyhow::Context;
use rand::Rng;
use resto_reco_core::{Listing, Profile};
use resto_reco_store::Catalog;
use serde_json::json;

use crate::render;
use crate::RecommendArgs;

/// Build the ad hoc profile described by the `recommend` flags.
fn ad_hoc_profile(args: &RecommendArgs) -> anyhow::Result<Profile> {
    let meal = args
        .meal
        .context("--meal is required when --gusto is not given")?;
    let mut profile = Profile::ad_hoc(args.group_size.unwrap_or(1), meal);
    if let Some(budget) = args.budget {
        profile = profile.with_budget(budget);
    }
    if let Some(distance) = args.max_distance {
        profile = profile.with_max_distance(distance);
    }
    for cuisine in &args.cuisine {
        profile = profile.with_cuisine(*cuisine);
    }
    if let Some(rating) = args.min_rating {
        profile = profile.with_min_rating(rating);
    }
    Ok(profile)
}

pub(crate) fn run_recommend<R, W>(
    catalog: &Catalog,
    args: &RecommendArgs,
    rng: &mut R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    let (profile, recos) = match &args.gusto {
        Some(label) => {
            let recos = catalog.recommend_for(label, rng)?;
            let profile = catalog
                .gusto(label)
                .cloned()
                .with_context(|| format!("gusto '{label}' not found"))?;
            (profile, recos)
        }
        None => {
            let profile = ad_hoc_profile(args)?;
            let recos = catalog.recommend_ad_hoc(&profile, rng)?;
            (profile, recos)
        }
    };
    let listings: Vec<&Listing> = recos.iter().filter_map(|name| catalog.resto(name)).collect();

    if args.json {
        let body = json!({
            "gusto": profile,
            "recommendations": listings,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else if listings.is_empty() {
        writeln!(out, "{}", render::NO_MATCH_GUIDANCE)?;
    } else {
        writeln!(out, "{}", render::gusto_detail(&profile))?;
        write!(out, "{}", render::resto_table(listings))?;
    }
    Ok(())
}

pub(crate) fn list_restos<W: Write>(
    catalog: &Catalog,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if json {
        let restos: Vec<&Listing> = catalog.restos().values().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&restos)?)?;
    } else if catalog.restos().is_empty() {
        writeln!(out, "No restos stored.")?;
    } else {
        write!(out, "{}", render::resto_table(catalog.restos().values()))?;
    }
    Ok(())
}

pub(crate) fn list_gustos<W: Write>(
    catalog: &Catalog,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if json {
        let gustos: Vec<&Profile> = catalog.gustos().values().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&gustos)?)?;
    } else if catalog.gustos().is_empty() {
        writeln!(out, "No gustos stored.")?;
    } else {
        write!(out, "{}", render::gusto_table(catalog.gustos().values()))?;
    }
    Ok(())
}
