//! Run projections for every scenario in a CSV file
//!
//! Outputs one summary row per scenario for side-by-side comparison

use anyhow::{Context, Result};
use clap::Parser;
use property_projection::inputs::load_scenarios;
use property_projection::scenario::ScenarioRunner;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Batch projections from a scenario CSV")]
struct Args {
    /// Scenario CSV (camelCase headers, optional leading `name` column)
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "scenario_summary.csv")]
    output: PathBuf,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

/// One output row per scenario
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRow {
    name: String,
    error: Option<String>,
    monthly_emi: Option<f64>,
    total_interest: Option<f64>,
    total_paid: Option<f64>,
    total_rental: Option<f64>,
    total_tax: Option<f64>,
    total_out_of_pocket: Option<f64>,
    final_property_value: Option<f64>,
    net_wealth_gain: Option<f64>,
    break_even_year: Option<u32>,
    equity_irr_pct: Option<f64>,
}

impl SummaryRow {
    fn failed(name: String, reason: String) -> Self {
        Self {
            name,
            error: Some(reason),
            monthly_emi: None,
            total_interest: None,
            total_paid: None,
            total_rental: None,
            total_tax: None,
            total_out_of_pocket: None,
            final_property_value: None,
            net_wealth_gain: None,
            break_even_year: None,
            equity_irr_pct: None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());

    let scenarios = load_scenarios(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to load scenarios: {}", e))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let proj_start = Instant::now();
    let outcomes = ScenarioRunner::default().run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let mut failures = 0;
    for outcome in outcomes {
        let row = match outcome.result {
            Ok(result) => {
                let summary = result.summary();
                SummaryRow {
                    name: outcome.name,
                    error: None,
                    monthly_emi: Some(summary.monthly_emi),
                    total_interest: Some(summary.total_interest),
                    total_paid: Some(summary.total_paid),
                    total_rental: Some(summary.total_rental),
                    total_tax: Some(summary.total_tax),
                    total_out_of_pocket: Some(summary.total_out_of_pocket),
                    final_property_value: Some(summary.final_property_value),
                    net_wealth_gain: Some(summary.net_wealth_gain),
                    break_even_year: summary.break_even_year,
                    equity_irr_pct: result.equity_irr().map(|irr| irr * 100.0),
                }
            }
            Err(err) => {
                failures += 1;
                log::warn!("Scenario {} rejected: {}", outcome.name, err);
                SummaryRow::failed(outcome.name, err.to_string())
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    if failures > 0 {
        println!("  {} of {} scenarios rejected by validation", failures, scenarios.len());
    }
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
