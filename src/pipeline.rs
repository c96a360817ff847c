// pipeline.rs - Generator followed by accelerator

use tracing::info;

use crate::accelerate::accelerate;
use crate::config::PiConfig;
use crate::decimal::Decimal;
use crate::error::Result;
use crate::vieta::generate;

/// Both estimates produced by one run
#[derive(Debug, Clone)]
pub struct PiEstimate {
    /// Plain Vieta value `2 * p_{n+k-1}`
    pub vieta: Decimal,
    /// Value after `k` extrapolation rounds
    pub accelerated: Decimal,
}

/// Run both phases under `config`.
pub fn compute(config: &PiConfig) -> Result<PiEstimate> {
    let params = config.params;
    let products = generate(params, &config.precision)?;
    // The window moves into the accelerator; nothing else sees it again.
    let accelerated = accelerate(
        products.window,
        params.k(),
        &config.precision,
        config.schedule,
    )?;
    info!(
        n = params.n(),
        k = params.k(),
        digits = config.precision.digits(),
        "π estimate complete"
    );
    Ok(PiEstimate {
        vieta: products.vieta_estimate,
        accelerated,
    })
}

/// Accelerated π at the default precision (5000 digits, truncating).
pub fn compute_pi(n: i64, k: i64) -> Result<Decimal> {
    let config = PiConfig::new(n, k)?;
    Ok(compute(&config)?.accelerated)
}
