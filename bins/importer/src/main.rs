//! PUC import driver
//!
//! Reads a JSON batch of raw account rows, reconciles it against a snapshot of
//! existing codes, and prints the report (optionally with the resulting tree)
//! as JSON on stdout. Logs go to stderr.
//!
//! Usage: puc-import --rows rows.json [--existing codes.json] [--tree]

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use puc_core::import::{ImportOptions, ImportReconciler, RawRow, ReconciliationReport};
use puc_core::tree::{TreeNode, build_tree, filter_by_prefix};
use puc_shared::{AppConfig, AppResult, LoggingConfig};

/// Reconcile a PUC account import batch.
#[derive(Debug, Parser)]
#[command(name = "puc-import", version, about)]
struct Cli {
    /// JSON array of raw rows.
    #[arg(long)]
    rows: PathBuf,

    /// JSON array of account codes already stored.
    #[arg(long)]
    existing: Option<PathBuf>,

    /// Update accounts whose code already exists instead of rejecting them.
    #[arg(long)]
    overwrite_existing: bool,

    /// Skip parent/child containment checks.
    #[arg(long)]
    no_validate_hierarchy: bool,

    /// Include the tree of accepted accounts in the output.
    #[arg(long)]
    tree: bool,

    /// Restrict the tree to codes starting with this prefix.
    #[arg(long, requires = "tree")]
    prefix: Option<String>,
}

#[derive(Debug, Serialize)]
struct Output {
    report: ReconciliationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<Vec<TreeNode>>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let output = run(&cli, &config).inspect_err(|err| {
        error!(code = err.error_code(), error = %err, "Import failed");
    })?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Reads the inputs, reconciles them, and assembles the output document.
///
/// Rejected rows are part of a successful result; only unreadable input fails.
fn run(cli: &Cli, config: &AppConfig) -> AppResult<Output> {
    let rows: Vec<RawRow> = read_json(&cli.rows)?;
    let existing: HashSet<String> = match &cli.existing {
        Some(path) => read_json::<Vec<String>>(path)?.into_iter().collect(),
        None => HashSet::new(),
    };
    info!(
        rows = rows.len(),
        existing = existing.len(),
        "Loaded import batch"
    );

    let options = resolve_options(cli, config);
    let report = ImportReconciler::new(options).reconcile(&rows, &existing);

    let tree = cli.tree.then(|| {
        let accounts: Vec<_> = report.accounts().cloned().collect();
        let forest = build_tree(&accounts);
        match cli.prefix.as_deref() {
            Some(prefix) => filter_by_prefix(&forest, prefix),
            None => forest,
        }
    });

    Ok(Output { report, tree })
}

/// Config supplies the defaults; command-line flags can only switch them on or off.
fn resolve_options(cli: &Cli, config: &AppConfig) -> ImportOptions {
    let mut options = ImportOptions::from(config.import);
    if cli.overwrite_existing {
        options.overwrite_existing = true;
    }
    if cli.no_validate_hierarchy {
        options.validate_hierarchy = false;
    }
    options
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|err| {
        error!(path = %path.display(), "Input is not valid JSON");
        err.into()
    })
}
