use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealmix::cli::{self, PlanRequest};
use mealmix::export::ExportFormat;
use mealmix_catalog::Selection;
use mealmix_shared::{PlanKind, Slot};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// mealmix - meal recommendations and meal plans
#[derive(Parser)]
#[command(name = "mealmix")]
#[command(about = "Meal recommendations, weekly and monthly meal plans, shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known meal of a slot (breakfast, lunch, dinner)
    Slots { slot: Slot },
    /// Search the meals of a slot by substring, ignoring case
    Search {
        slot: Slot,
        #[arg(default_value = "")]
        query: String,
    },
    /// Show the lunch and dinner served with a breakfast
    Recommend { breakfast: String },
    /// List meals compatible with one or two chosen meals
    Options {
        #[arg(long)]
        breakfast: Option<String>,
        #[arg(long)]
        lunch: Option<String>,
        #[arg(long)]
        dinner: Option<String>,
        /// Slot to list options for
        #[arg(long)]
        target: Slot,
    },
    /// Generate meal plans
    Plan {
        /// Plan length, repeat to generate several plans in one run
        #[arg(long = "kind", default_value = "week")]
        kinds: Vec<PlanKind>,
        /// Print the combined shopping list
        #[arg(long)]
        shopping: bool,
        /// Export each plan to this file
        #[arg(long)]
        export: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,
        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealmix::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealmix::observability::init_observability(&config.logging)?;

    let catalog = cli::load_catalog(&config)?;

    let output = match cli.command {
        Commands::Slots { slot } => cli::slots(&catalog, slot),
        Commands::Search { slot, query } => cli::search(&catalog, slot, &query),
        Commands::Recommend { breakfast } => cli::recommend(&catalog, &breakfast),
        Commands::Options {
            breakfast,
            lunch,
            dinner,
            target,
        } => {
            let selection = [
                (Slot::Breakfast, breakfast),
                (Slot::Lunch, lunch),
                (Slot::Dinner, dinner),
            ]
            .into_iter()
            .filter_map(|(slot, value)| value.map(|v| (slot, v)))
            .fold(Selection::new(), |selection, (slot, value)| {
                selection.with(slot, value)
            });

            cli::options(&catalog, &selection, target)?
        }
        Commands::Plan {
            kinds,
            shopping,
            export,
            format,
            seed,
        } => {
            let mut rng: Box<dyn RngCore> = match seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::rng()),
            };

            let request = PlanRequest {
                kinds,
                shopping,
                export,
                format,
            };

            cli::plan(&catalog, &config.planner, &request, &mut *rng)?.output
        }
    };

    print!("{output}");

    Ok(())
}
