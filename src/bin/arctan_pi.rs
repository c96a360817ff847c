// src/bin/arctan_pi.rs - Arctangent references next to the accelerated Vieta value

use clap::Parser;
use vieta::accuracy::correct_decimals;
use vieta::arctan::{reference_pi, ArctanFormula};
use vieta::{compute, Params, PiConfig, PrecisionContext, Rounding};

#[derive(Parser)]
struct Cli {
    /// Significant digits of every intermediate value
    #[arg(long, default_value = "60")]
    digits: u64,

    /// Warm-up terms for the Vieta run
    #[arg(long, default_value = "27")]
    n: i64,

    /// Window size for the Vieta run
    #[arg(long, default_value = "100")]
    k: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let precision = PrecisionContext::new(args.digits, Rounding::Down)?;

    let machin = reference_pi(ArctanFormula::Machin, &precision);
    let euler = reference_pi(ArctanFormula::Euler, &precision);
    let config = PiConfig {
        params: Params::new(args.n, args.k)?,
        precision,
        ..PiConfig::default()
    };
    let vieta = compute(&config)?;

    println!("Machin      : {machin}");
    println!("Euler       : {euler}");
    println!("Vieta       : {}", vieta.vieta);
    println!("Accelerated : {}", vieta.accelerated);
    println!();
    println!("Euler vs Machin       : {} decimals", correct_decimals(&euler, &machin));
    println!("Vieta vs Machin       : {} decimals", correct_decimals(&vieta.vieta, &machin));
    println!("Accelerated vs Machin : {} decimals", correct_decimals(&vieta.accelerated, &machin));
    Ok(())
}
