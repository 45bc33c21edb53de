mod browse;
mod context;
mod schools;
mod search;
mod show;

use clap::{Parser, Subcommand};
use schoolmap_view::DetailTab;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "schoolmap")]
#[command(about = "Browse schools and their place details from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every school in the catalog
    Schools,
    /// Show place details for one school
    Show {
        /// Catalog record id (see `schools`)
        #[arg(long, conflicts_with = "place_id", required_unless_present = "place_id")]
        id: Option<String>,
        /// Place identifier, bypassing the catalog
        #[arg(long)]
        place_id: Option<String>,
        /// Panel tab to print (overview or reviews)
        #[arg(long, default_value = "overview")]
        tab: DetailTab,
    },
    /// Search places by name within the configured area
    Search {
        /// Partial place name
        query: String,
        /// Show details for the N-th prediction (1-based)
        #[arg(long)]
        pick: Option<usize>,
        /// Panel tab to print when picking (overview or reviews)
        #[arg(long, default_value = "overview")]
        tab: DetailTab,
    },
    /// Interactive browser (default)
    Browse,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = schoolmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Schools) => schools::run_schools(&config).await,
        Some(Commands::Show { id, place_id, tab }) => {
            let target = match (id, place_id) {
                (Some(id), _) => show::ShowTarget::Record(id),
                (None, Some(place_id)) => show::ShowTarget::Place(place_id),
                (None, None) => anyhow::bail!("either --id or --place-id is required"),
            };
            show::run_show(&config, target, tab).await
        }
        Some(Commands::Search { query, pick, tab }) => {
            search::run_search(&config, &query, pick, tab).await
        }
        Some(Commands::Browse) | None => browse::run_browse(&config).await,
    }
}
