// src/bin/convergence_scan.rs - Correct decimals over a grid of (n, k)

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vieta::arctan::{reference_pi, ArctanFormula};
use vieta::scan::{run_scan, write_csv, ScanGrid};
use vieta::{PrecisionContext, Rounding};

#[derive(Parser)]
struct Cli {
    /// Warm-up offsets to try
    #[arg(long, value_delimiter = ',', default_value = "0,5,10,20,27")]
    n_values: Vec<i64>,

    /// Window sizes to try
    #[arg(long, value_delimiter = ',', default_value = "1,2,5,10,25,50")]
    k_values: Vec<i64>,

    /// Significant digits of every intermediate value
    #[arg(long, default_value = "1000")]
    digits: u64,

    /// Rounding rule: down (truncate) or half-up
    #[arg(long, default_value = "down")]
    rounding: Rounding,

    /// Output file for scan results
    #[arg(long, default_value = "convergence.csv")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vieta=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let precision = PrecisionContext::new(args.digits, args.rounding)?;
    let grid = ScanGrid::new(&args.n_values, &args.k_values)?;
    let reference = reference_pi(ArctanFormula::Machin, &precision);

    let bar = ProgressBar::new(grid.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]",
    )?);

    let rows = run_scan(&grid, &precision, &reference, |_| bar.inc(1))?;
    bar.finish();

    write_csv(&rows, File::create(&args.output)?)?;
    info!(rows = rows.len(), "scan written");
    println!("Scan complete → {}", args.output.display());
    Ok(())
}
