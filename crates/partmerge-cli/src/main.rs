mod catalog;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use partmerge_core::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "partmerge")]
#[command(about = "Merge supplier part descriptions into storefront variant families")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split one description into base name and option
    Parse {
        /// Supplier description, e.g. "PRIORITY GTX JACKET - BLACK (S)"
        description: String,
    },
    /// Detect the shared product name and option across several descriptions
    Detect {
        /// Descriptions of the variants, in display order
        #[arg(required = true, num_args = 1..)]
        descriptions: Vec<String>,
    },
    /// Group feed rows into standalone items and variant families
    Group {
        /// Feed file (defaults to ITL_FEED_PATH)
        #[arg(long)]
        feed: Option<PathBuf>,
        /// Only group rows matching every token of this query
        #[arg(long)]
        query: Option<String>,
    },
    /// Search feed rows by part number, description or OEM
    Search {
        /// Feed file (defaults to ITL_FEED_PATH)
        #[arg(long)]
        feed: Option<PathBuf>,
        /// Whitespace-separated tokens, all of which must match
        query: String,
    },
    /// Build a storefront product draft from feed SKUs
    Draft {
        /// Feed file (defaults to ITL_FEED_PATH)
        #[arg(long)]
        feed: Option<PathBuf>,
        /// Product title (defaults to the detected base name)
        #[arg(long)]
        title: Option<String>,
        /// Option label (defaults to the detected option name)
        #[arg(long)]
        option_name: Option<String>,
        /// Plain-text product description
        #[arg(long)]
        description: Option<String>,
        /// Part numbers to merge, in variant order
        #[arg(required = true, num_args = 1..)]
        skus: Vec<String>,
    },
}

/// Log filter used when the configuration itself failed to load.
const FALLBACK_LOG_LEVEL: &str = "info";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = partmerge_core::load_app_config();
    let log_level = config
        .as_ref()
        .map_or(FALLBACK_LOG_LEVEL, |c| c.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let output = run(cli.command, config)?;
    println!("{output}");
    Ok(())
}

/// Executes one command and returns what it prints.
///
/// `parse` and `detect` are pure; only the feed commands and the readiness
/// line need a valid configuration.
fn run(
    command: Option<Commands>,
    config: Result<AppConfig, ConfigError>,
) -> anyhow::Result<String> {
    match command {
        Some(Commands::Parse { description }) => {
            catalog::to_json(&partmerge_catalog::parse(&description))
        }
        Some(Commands::Detect { descriptions }) => {
            catalog::to_json(&partmerge_catalog::detect_common_pattern(&descriptions))
        }
        Some(Commands::Group { feed, query }) => {
            let entries = catalog::group_entries(&config?, feed.as_deref(), query.as_deref())?;
            catalog::to_json(&entries)
        }
        Some(Commands::Search { feed, query }) => {
            let rows = catalog::search_rows(&config?, feed.as_deref(), &query)?;
            catalog::to_json(&rows)
        }
        Some(Commands::Draft {
            feed,
            title,
            option_name,
            description,
            skus,
        }) => {
            let overrides = partmerge_catalog::DraftOverrides {
                title,
                option_name,
                description,
            };
            let draft = catalog::draft_product(&config?, feed.as_deref(), &skus, &overrides)?;
            catalog::to_json(&draft)
        }
        None => Ok(format!("partmerge ready (env: {})", config?.env)),
    }
}
