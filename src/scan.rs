// scan.rs - Convergence scan over a grid of (n, k)
//
// Each grid point is an independent run of the pipeline; points are
// spread over the rayon pool and the rows are sorted afterwards so the
// CSV order does not depend on scheduling.

use std::io;

use csv::Writer;
use rayon::prelude::*;
use tracing::debug;

use crate::accuracy::correct_decimals;
use crate::config::{Params, PiConfig, Schedule};
use crate::decimal::Decimal;
use crate::error::{PiError, Result};
use crate::pipeline::compute;
use crate::precision::PrecisionContext;

/// Row to be written to CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRow {
    pub n: usize,
    pub k: usize,
    pub vieta_decimals: usize,
    pub accelerated_decimals: usize,
}

/// Validated cartesian grid of run parameters
#[derive(Debug, Clone)]
pub struct ScanGrid {
    points: Vec<Params>,
}

impl ScanGrid {
    pub fn new(n_values: &[i64], k_values: &[i64]) -> Result<Self> {
        if n_values.is_empty() || k_values.is_empty() {
            return Err(PiError::invalid("grid", "need at least one n and one k"));
        }
        let mut points = Vec::with_capacity(n_values.len() * k_values.len());
        for &n in n_values {
            for &k in k_values {
                points.push(Params::new(n, k)?);
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Run every grid point against `reference`; `on_row` fires as rows finish.
pub fn run_scan<F>(
    grid: &ScanGrid,
    precision: &PrecisionContext,
    reference: &Decimal,
    on_row: F,
) -> Result<Vec<ScanRow>>
where
    F: Fn(&ScanRow) + Sync,
{
    debug!(points = grid.len(), digits = precision.digits(), "starting scan");

    let mut rows = grid
        .points
        .par_iter()
        .map(|&params| {
            let config = PiConfig {
                params,
                precision: precision.clone(),
                // Grid points already saturate the pool.
                schedule: Schedule::Sequential,
            };
            let estimate = compute(&config)?;
            let row = ScanRow {
                n: params.n(),
                k: params.k(),
                vieta_decimals: correct_decimals(&estimate.vieta, reference),
                accelerated_decimals: correct_decimals(&estimate.accelerated, reference),
            };
            on_row(&row);
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    // Sort for deterministic CSV order.
    rows.sort_by_key(|r| (r.n, r.k));
    Ok(rows)
}

/// Write rows with a header line.
pub fn write_csv<W: io::Write>(rows: &[ScanRow], out: W) -> Result<()> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(["n", "k", "vieta_decimals", "accelerated_decimals"])?;
    for r in rows {
        wtr.write_record(&[
            r.n.to_string(),
            r.k.to_string(),
            r.vieta_decimals.to_string(),
            r.accelerated_decimals.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
