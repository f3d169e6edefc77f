//! Run projections for every slider position
//!
//! Projects the full growth × tenure × working capital grid in parallel and
//! writes one summary row per combination.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use dpr_engine::export::{ChartExporter, CsvExporter};
use dpr_engine::projection::ProjectionConstants;
use dpr_engine::scenario::ScenarioRunner;

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let constants = ProjectionConstants::from_env().context("loading projection constants")?;
    let runner = ScenarioRunner::with_constants(constants);

    println!("Running projections...");
    let rows = runner.full_grid()?;
    println!("Projected {} combinations in {:?}", rows.len(), start.elapsed());

    let output_path = "sweep_output.csv";
    let file = File::create(output_path).with_context(|| format!("creating {}", output_path))?;
    let mut writer = BufWriter::new(file);
    CsvExporter.export_sweep(&rows, &mut writer)?;
    writer.flush()?;
    println!("Output written to {}", output_path);

    // Print summary stats
    let below = rows.iter().filter(|r| !r.meets_threshold).count();
    let lowest = rows.iter().min_by(|a, b| a.dscr.total_cmp(&b.dscr));
    let highest = rows.iter().max_by(|a, b| a.dscr.total_cmp(&b.dscr));

    println!("\nSweep Summary:");
    println!("  Below DSCR threshold: {} of {}", below, rows.len());
    if let (Some(lo), Some(hi)) = (lowest, highest) {
        println!(
            "  Lowest DSCR:  {:.2}x (growth {:.0}%, tenure {}y, wc {}m)",
            lo.dscr, lo.growth_rate_percent, lo.loan_tenure_years, lo.working_capital_months
        );
        println!(
            "  Highest DSCR: {:.2}x (growth {:.0}%, tenure {}y, wc {}m)",
            hi.dscr, hi.growth_rate_percent, hi.loan_tenure_years, hi.working_capital_months
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
