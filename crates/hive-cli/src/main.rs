use anyhow::{Context, Result};
use clap::Parser;
use hive_search::Config;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "hive", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of library definitions (default: ~/.local/share/hive/libs)
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    /// Path to the summary cache (default: ~/.local/share/hive/summary.json)
    #[arg(long, global = true)]
    summary: Option<PathBuf>,

    /// Minimum similarity (exclusive) for a library to be suggested
    #[arg(long, global = true)]
    threshold: Option<f64>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search the catalog and suggest close matches
    ///
    /// Looks the term up in the summary cache (building it from the catalog
    /// on first use). A bare library name such as `foo` is resolved to its
    /// full `author/foo` name when exactly such a library exists.
    ///
    /// Output:
    /// - A list of similar libraries, best first
    /// - Or, when nothing is similar enough, where to create a new definition
    Search {
        /// Library name or partial name
        term: String,
    },
    /// Show the single best match for a term
    Best {
        /// Library name or partial name
        term: String,
    },
    /// Show the similarity rating of every library for a term
    Matches {
        /// Library name or partial name
        term: String,

        /// Print the ratings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a short library name to its full `author/name`
    Resolve {
        /// Library name
        term: String,
    },
    /// Rebuild the summary cache from the catalog
    Rebuild,
    /// Print a library definition
    Show {
        /// Full library name, e.g. `alice/foo`
        name: String,
    },
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(dir) = &self.catalog_dir {
            config.catalog_dir = dir.clone();
        }
        if let Some(path) = &self.summary {
            config.summary_path = path.clone();
        }
        if let Some(threshold) = self.threshold {
            config.suggestion_threshold = threshold;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    twyg::setup(config.logging.clone())
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;

    match cli.command {
        Commands::Search { term } => {
            commands::run_search(&config, &term).await?;
        }
        Commands::Best { term } => {
            commands::run_best(&config, &term).await?;
        }
        Commands::Matches { term, json } => {
            commands::run_matches(&config, &term, json).await?;
        }
        Commands::Resolve { term } => {
            commands::run_resolve(&config, &term).await?;
        }
        Commands::Rebuild => {
            commands::run_rebuild(&config)
                .await
                .context("Failed to rebuild summary")?;
        }
        Commands::Show { name } => {
            commands::show_library(&config, &name).await?;
        }
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::show_config(&config)?,
            ConfigCommands::Path => commands::config::show_path()?,
            ConfigCommands::Example => commands::config::show_example()?,
            ConfigCommands::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
