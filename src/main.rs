//! shelfwise: product catalog search from the command line.
//!
//! Usage:
//!   shelfwise --catalog products.json search <query>   # Ranked search
//!   shelfwise --catalog products.json suggest <prefix> # Autocomplete
//!   shelfwise --catalog products.json category <name>  # Browse a category
//!   shelfwise schema                                   # Tool input schemas

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;
use shelfwise::config::{default_config_path, EngineConfig};
use shelfwise::tools::{self, BrowseInput, LoadInput, SearchInput, SuggestInput};
use shelfwise::{fmt, SearchEngine};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelfwise")]
#[command(about = "Product catalog search with fuzzy, synonym and brand-aware ranking")]
#[command(version)]
struct Cli {
    /// JSON catalog file (array of rows, or {"products": [...]})
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Engine config file (default: <config dir>/shelfwise/config.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked product search
    Search {
        /// Search query
        query: String,

        /// Maximum results (0 = config default)
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only products in this category
        #[arg(long)]
        category: Option<String>,

        /// Only products whose brand contains this
        #[arg(long)]
        brand: Option<String>,

        /// Also match full product names exactly
        #[arg(long)]
        exact: bool,
    },

    /// Autocomplete suggestions
    Suggest {
        /// Partial term
        query: String,

        /// Maximum suggestions
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Curated trending terms
    Trending,

    /// Products in a category
    Category {
        name: String,

        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Products of a brand
    Brand {
        name: String,

        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Load the catalog and report accepted/quarantined rows
    Load,

    /// Index statistics
    Stats,

    /// Print JSON Schemas for tool inputs
    Schema,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to stderr only (stdout carries results)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("shelfwise=info".parse()?))
        .with_writer(io::stderr)
        .init();

    let color = !cli.no_color && !cli.json && io::stdout().is_terminal();
    let mut out = io::stdout().lock();

    match &cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "shelfwise", &mut out);
            return Ok(());
        }
        Commands::Schema => {
            let schemas = serde_json::json!({
                "search": schemars::schema_for!(SearchInput),
                "suggest": schemars::schema_for!(SuggestInput),
                "browse": schemars::schema_for!(BrowseInput),
                "load": schemars::schema_for!(LoadInput),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&schemas)?)?;
            return Ok(());
        }
        _ => {}
    }

    let engine = SearchEngine::with_config(load_config(cli.config)?);
    let catalog = cli
        .catalog
        .context("--catalog <path> is required for this command")?;
    let load = tools::execute_load(
        &engine,
        LoadInput {
            path: catalog.to_string_lossy().into_owned(),
        },
    )
    .map_err(|e| anyhow::anyhow!(e))
    .with_context(|| format!("loading catalog {}", catalog.display()))?;

    match cli.command {
        Commands::Search {
            query,
            limit,
            category,
            brand,
            exact,
        } => {
            let input = SearchInput {
                query,
                limit,
                category,
                brand,
                exact,
            };
            let result = tools::execute_search(&engine, input);
            emit(&mut out, &result, cli.json, |w| fmt::fmt_search(w, &result, color))?;
        }

        Commands::Suggest { query, limit } => {
            let result = tools::execute_suggest(&engine, SuggestInput { query, limit });
            emit(&mut out, &result, cli.json, |w| fmt::fmt_suggest(w, &result, color))?;
        }

        Commands::Trending => {
            let result = tools::execute_trending(&engine);
            emit(&mut out, &result, cli.json, |w| fmt::fmt_trending(w, &result, color))?;
        }

        Commands::Category { name, limit } => {
            let result = tools::execute_by_category(&engine, BrowseInput { name, limit });
            emit(&mut out, &result, cli.json, |w| fmt::fmt_browse(w, &result, color))?;
        }

        Commands::Brand { name, limit } => {
            let result = tools::execute_by_brand(&engine, BrowseInput { name, limit });
            emit(&mut out, &result, cli.json, |w| fmt::fmt_browse(w, &result, color))?;
        }

        Commands::Load => {
            emit(&mut out, &load, cli.json, |w| fmt::fmt_load(w, &load, color))?;
        }

        Commands::Stats => {
            let result = tools::execute_stats(&engine);
            emit(&mut out, &result, cli.json, |w| fmt::fmt_stats(w, &result, color))?;
        }

        // Handled before the catalog is loaded
        Commands::Schema | Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Explicit `--config`, else the default location if it exists, else defaults.
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<EngineConfig> {
    let path = match explicit {
        Some(path) => path,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => path,
            None => return Ok(EngineConfig::default()),
        },
    };
    EngineConfig::from_path(&path).with_context(|| format!("reading config {}", path.display()))
}

fn emit<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    json: bool,
    human: impl FnOnce(&mut W) -> io::Result<()>,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    } else {
        human(out)?;
    }
    Ok(())
}
