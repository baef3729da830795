mod commands;
mod render;
mod session;

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use resto_reco_core::{Cuisine, MealType};
use resto_reco_store::DataFiles;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "resto-reco")]
#[command(about = "Recommend restos that fit a gusto")]
struct Cli {
    /// Directory holding the resto and gusto files (overrides RESTO_RECO_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recommend up to three restos for a stored or ad hoc gusto
    Recommend(RecommendArgs),
    /// Stored restos
    Restos {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Stored gustos
    Gustos {
        #[command(subcommand)]
        command: ListCommands,
    },
}

#[derive(Debug, Args)]
pub(crate) struct RecommendArgs {
    /// Label of a stored gusto
    #[arg(
        long,
        conflicts_with_all = ["meal", "group_size", "budget", "max_distance", "cuisine", "min_rating"]
    )]
    pub(crate) gusto: Option<String>,

    /// Meal type for an ad hoc gusto
    #[arg(long, required_unless_present = "gusto")]
    pub(crate) meal: Option<MealType>,

    /// Number of people eating [default: 1]
    #[arg(long)]
    pub(crate) group_size: Option<u32>,

    /// Total budget for the whole group
    #[arg(long)]
    pub(crate) budget: Option<Decimal>,

    /// Farthest acceptable distance in meters
    #[arg(long)]
    pub(crate) max_distance: Option<f64>,

    /// Acceptable cuisine; repeat for several
    #[arg(long)]
    pub(crate) cuisine: Vec<Cuisine>,

    /// Lowest acceptable rating, 1 to 5
    #[arg(long)]
    pub(crate) min_rating: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Subcommand)]
enum ListCommands {
    /// Print every stored entry
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = resto_reco_core::load_app_config_from_env()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let files = DataFiles::from_config(&config);
    let catalog = files.load()?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        None => session::Session::new(
            io::stdin().lock(),
            stdout,
            catalog,
            &files,
            &config.reference_point,
            StdRng::from_os_rng(),
        )
        .run()?,
        Some(Commands::Recommend(args)) => {
            commands::run_recommend(&catalog, &args, &mut rand::rng(), &mut stdout)?;
        }
        Some(Commands::Restos {
            command: ListCommands::List { json },
        }) => commands::list_restos(&catalog, json, &mut stdout)?,
        Some(Commands::Gustos {
            command: ListCommands::List { json },
        }) => commands::list_gustos(&catalog, json, &mut stdout)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
