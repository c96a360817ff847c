//! Accelerated Vieta π (see `PiConfig` for all run parameters).
//!
//! Prints the accelerated estimate as one plain decimal line on stdout;
//! logging goes to stderr.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vieta::precision::DEFAULT_DIGITS;
use vieta::{compute, Params, PiConfig, PrecisionContext, Rounding, Schedule};

#[derive(Parser, Debug)]
#[command(version, about = "High-precision π from Vieta's product with Richardson acceleration")]
struct Cli {
    /// Warm-up terms skipped before the window starts
    #[arg(long, default_value_t = 27, allow_hyphen_values = true)]
    n: i64,

    /// Window size and number of extrapolation rounds
    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    k: i64,

    /// Significant digits of every intermediate value
    #[arg(long, default_value_t = DEFAULT_DIGITS)]
    digits: u64,

    /// Rounding rule: down (truncate) or half-up
    #[arg(long, default_value = "down")]
    rounding: Rounding,

    /// Spread each extrapolation round over all cores
    #[arg(long)]
    parallel: bool,

    /// Also log the unaccelerated Vieta estimate
    #[arg(long)]
    show_vieta: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vieta=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = PiConfig {
        params: Params::new(args.n, args.k)?,
        precision: PrecisionContext::new(args.digits, args.rounding)?,
        schedule: if args.parallel {
            Schedule::Parallel
        } else {
            Schedule::Sequential
        },
    };
    info!(params = ?config.params, digits = args.digits, rounding = %args.rounding, "starting");

    let estimate = compute(&config)?;
    if args.show_vieta {
        info!(vieta = %estimate.vieta, "unaccelerated estimate");
    }
    println!("{}", estimate.accelerated);
    Ok(())
}
