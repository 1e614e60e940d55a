//! # Moto Stock Dashboard Entry Point
//!
//! Reporting binary: prints each dashboard view as JSON on stdout.
//!
//! ## Usage
//! ```bash
//! moto-dashboard dashboard
//! moto-dashboard catalog --brand Honda --sort price-asc
//! moto-dashboard stock --patio Matriz --status all
//! moto-dashboard charts
//! moto-dashboard facets
//! moto-dashboard show 4
//! moto-dashboard --config ./dashboard.toml catalog --search ninja
//! ```
//!
//! Errors are printed as `{ "code", "message" }` JSON on stderr with a
//! non-zero exit status.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use moto_dashboard::commands::{self, FilterInput};
use moto_dashboard::error::ApiError;

#[derive(Parser, Debug)]
#[command(name = "moto-dashboard", about = "Dealership inventory views as JSON")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    view: View,
}

#[derive(Subcommand, Debug)]
enum View {
    /// Metric cards and best/worst sellers
    Dashboard,
    /// Filtered, sorted catalog grid
    Catalog(FilterArgs),
    /// Stock table (Reserved hidden unless --status selects it)
    Stock(FilterArgs),
    /// Per-model, per-patio and per-status stock series
    Charts,
    /// Distinct values for the filter drop-downs
    Facets,
    /// One motorcycle by id
    Show { id: String },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    brand: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// New or used ("Nova" / "Seminova" accepted)
    #[arg(long = "type")]
    condition: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    patio: Option<String>,
    /// name | price-asc | price-desc | stock | sales
    #[arg(long)]
    sort: Option<String>,
}

impl From<FilterArgs> for FilterInput {
    fn from(args: FilterArgs) -> Self {
        FilterInput {
            search: args.search,
            brand: args.brand,
            category: args.category,
            condition: args.condition,
            status: args.status,
            color: args.color,
            patio: args.patio,
            sort: args.sort,
        }
    }
}

fn main() -> ExitCode {
    moto_dashboard::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let body = serde_json::to_string_pretty(&err).unwrap_or_else(|_| err.to_string());
            eprintln!("{}", body);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, ApiError> {
    let state = moto_dashboard::bootstrap(cli.config)?;

    match cli.view {
        View::Dashboard => render(&commands::dashboard_metrics(&state)),
        View::Catalog(args) => render(&commands::list_catalog(&state, args.into())?),
        View::Stock(args) => render(&commands::stock_report(&state, args.into())?),
        View::Charts => render(&commands::stock_charts(&state)),
        View::Facets => render(&commands::catalog_facets(&state)),
        View::Show { id } => render(&commands::get_motorcycle(&state, &id)?),
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::internal(e.to_string()))
}
