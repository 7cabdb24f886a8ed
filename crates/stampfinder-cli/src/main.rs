use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use stampfinder_config::FinderConfig;
use stampfinder_core::Catalog;
use tracing::info;

mod commands;
mod logging;
mod output;

const DEFAULT_CONFIG: &str = "stampfinder.toml";

#[derive(Parser, Debug)]
#[command(name = "stampfinder", version, about = "Stamp catalog search and combination finder")]
struct Cli {
    #[arg(long, global = true, help = "Configuration file (TOML or YAML)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Catalog summary
    Stats,
    /// Filter and sort the catalog
    Search(commands::SearchArgs),
    /// Find stamp combinations adding up to a value
    Combos(commands::CombosArgs),
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::Stats => commands::stats(&catalog, cli.json),
        Commands::Search(args) => commands::search(&catalog, &args, cli.json),
        Commands::Combos(args) => commands::combos(&catalog, &config, &args, cli.json),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FinderConfig> {
    let Some(path) = path else {
        return Ok(FinderConfig::load(DEFAULT_CONFIG).unwrap_or_default());
    };
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let config = if is_yaml {
        let config = FinderConfig::from_yaml_file(path)?;
        config.validate()?;
        config
    } else {
        FinderConfig::load(path)?
    };
    Ok(config)
}

fn load_catalog(config: &FinderConfig) -> anyhow::Result<Catalog> {
    let feeds = config
        .catalog
        .as_ref()
        .context("no [catalog] section configured")?;
    let catalog = Catalog::load(&feeds.image_base_url, &feeds.stamps_path, &feeds.shops_path)
        .with_context(|| format!("loading catalog from {}", feeds.stamps_path.display()))?;
    info!(
        event = "catalog_loaded",
        stamps = catalog.len(),
        shops = catalog.shops().len(),
    );
    Ok(catalog)
}
