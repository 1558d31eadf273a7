//! Motorlot Report CLI
//!
//! Builds a period-comparison matrix from a JSON snapshot of vehicle records.
//!
//! Usage:
//!   motorlot-report --vehicles vehicles.json
//!   motorlot-report --vehicles vehicles.json --period quarterly --reference-date 2026-05-14
//!   motorlot-report --vehicles vehicles.json --format table

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use motorlot_core::reports::{ComparisonMatrix, ComparisonMatrixBuilder, RevenueBasis};
use motorlot_core::vehicle::VehicleRecord;
use motorlot_shared::AppConfig;
use motorlot_shared::types::format_inr_grouped;

#[derive(Parser, Debug)]
#[command(name = "motorlot-report")]
#[command(about = "Build period-comparison reports from vehicle records")]
struct Args {
    /// Path to a JSON array of vehicle records
    #[arg(long, env = "MOTORLOT_VEHICLES")]
    vehicles: PathBuf,

    /// Period type: 6months, quarterly, or yearly (defaults to config)
    #[arg(long)]
    period: Option<String>,

    /// Reference date, YYYY-MM-DD (defaults to today, UTC)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Revenue basis: ledger_snapshot or settlement_additive (defaults to config)
    #[arg(long)]
    revenue_basis: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let raw = fs::read_to_string(&args.vehicles)
        .with_context(|| format!("Failed to read {}", args.vehicles.display()))?;
    let vehicles: Vec<VehicleRecord> =
        serde_json::from_str(&raw).context("Failed to parse vehicle records")?;
    info!(count = vehicles.len(), path = %args.vehicles.display(), "vehicle records loaded");

    let period = args
        .period
        .as_deref()
        .unwrap_or(&config.reports.default_period);
    let basis = RevenueBasis::parse(
        args.revenue_basis
            .as_deref()
            .unwrap_or(&config.reports.revenue_basis),
    )?;
    let reference = args.reference_date.unwrap_or_else(|| Utc::now().date_naive());

    let matrix = ComparisonMatrixBuilder::build(period, &vehicles, reference, basis)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matrix)?),
        OutputFormat::Table => print_table(&matrix),
    }

    Ok(())
}

fn print_table(matrix: &ComparisonMatrix) {
    println!(
        "=== {} comparison ({}) ===",
        matrix.period_type, matrix.revenue_basis
    );
    println!(
        "{:<10} {:>16} {:>16} {:>16} {:>9} {:>5} {:>5} {:>14} {:>16}",
        "Period",
        "Revenue",
        "Cost",
        "Net Profit",
        "Margin",
        "Sold",
        "Bought",
        "Expenses",
        "Avg Sale"
    );

    for row in &matrix.periods {
        let m = &row.metrics;
        println!(
            "{:<10} {:>16} {:>16} {:>16} {:>8}% {:>5} {:>5} {:>14} {:>16}",
            row.period,
            format_inr_grouped(m.total_revenue),
            format_inr_grouped(m.total_cost),
            format_inr_grouped(m.net_profit),
            m.profit_margin.round_dp(2),
            m.vehicles_sold,
            m.vehicles_purchased,
            format_inr_grouped(m.total_expenses),
            format_inr_grouped(m.avg_sale_price),
        );
    }
}
