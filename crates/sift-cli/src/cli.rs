//! Command-line arguments and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sift::{Filter, Product, Spec};
use tracing::{debug, info};

use crate::catalog;
use crate::error::CliError;
use crate::output::{self, AttributeListing, OutputMode};

#[derive(Debug, Parser)]
#[command(name = "sift-cli")]
#[command(version, about = "Filter a product catalog with composable specifications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (.json, .yaml or .yml); defaults to the built-in sample
    #[arg(short, long, env = "SIFT_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Clause to match: attr=value, attr!=value or attr~a|b (repeatable)
    #[arg(short = 'w', long = "where", value_name = "CLAUSE")]
    pub clauses: Vec<String>,

    /// Match when any clause holds instead of all of them
    #[arg(long)]
    pub any: bool,

    /// Print the products that do NOT match
    #[arg(long)]
    pub invert: bool,

    /// Maximum number of matches to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text, global = true)]
    pub output: OutputMode,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every attribute and its allowed values
    Values,
}

impl Cli {
    /// Builds the predicate described by `--where`, `--any` and `--invert`.
    ///
    /// No clause means every product matches.
    pub fn spec(&self) -> Result<Spec, CliError> {
        let leaves = self
            .clauses
            .iter()
            .map(|text| Spec::parse(text))
            .collect::<Result<Vec<_>, _>>()?;

        let combined = leaves
            .into_iter()
            .reduce(|acc, next| if self.any { acc.or(next) } else { acc.and(next) })
            .unwrap_or_else(Spec::always);

        Ok(if self.invert {
            combined.negate()
        } else {
            combined
        })
    }

    /// Loads the catalog named by `--catalog`, or the built-in one.
    pub fn products(&self) -> Result<Vec<Product>, CliError> {
        match &self.catalog {
            Some(path) => catalog::load(path),
            None => Ok(catalog::builtin()),
        }
    }
}

/// Runs the parsed command and returns the text to print.
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    match cli.command {
        Some(Commands::Values) => output::render_listing(&AttributeListing::all(), cli.output),
        None => run_filter(cli),
    }
}

fn run_filter(cli: &Cli) -> Result<String, CliError> {
    let spec = cli.spec()?;
    let products = cli.products()?;
    info!(%spec, items = products.len(), "filtering catalog");

    let (selected, examined) = select(&products, &spec, cli.limit);
    debug!(examined, matched = selected.len(), "filter finished");

    output::render_products(&selected, cli.output)
}

/// Pulls at most `limit` matches from the lazy filter.
///
/// Returns the matches and how many products were examined to find them.
fn select<'a>(
    products: &'a [Product],
    spec: &Spec,
    limit: Option<usize>,
) -> (Vec<&'a Product>, usize) {
    let mut matches = Filter.filter(products, spec);
    let selected = matches
        .by_ref()
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    (selected, matches.examined())
}
