// config.rs - Run parameters for the π pipeline (single source of truth)

use crate::error::{PiError, Result};
use crate::precision::PrecisionContext;

/// Warm-up offset and window size of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    n: usize,
    k: usize,
}

impl Params {
    /// Validate caller-supplied `n >= 0`, `k >= 1`.
    pub fn new(n: i64, k: i64) -> Result<Self> {
        let n = usize::try_from(n)
            .map_err(|_| PiError::invalid("n", format!("must be non-negative, got {n}")))?;
        let k = usize::try_from(k)
            .ok()
            .filter(|&k| k >= 1)
            .ok_or_else(|| PiError::invalid("k", format!("must be at least 1, got {k}")))?;
        Ok(Self { n, k })
    }

    /// Terms skipped before the window starts.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Window size minus one, and the number of extrapolation rounds.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Total terms of the product the generator evaluates.
    pub fn terms(&self) -> usize {
        self.n + self.k + 1
    }
}

impl Default for Params {
    fn default() -> Self {
        Self { n: 27, k: 100 }
    }
}

/// How each extrapolation round walks the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// One index after another, in place
    #[default]
    Sequential,
    /// Whole round on the rayon pool, written back after the round
    Parallel,
}

/// Run‑time configuration.
#[derive(Debug, Clone, Default)]
pub struct PiConfig {
    pub params: Params,
    pub precision: PrecisionContext,
    pub schedule: Schedule,
}

impl PiConfig {
    /// Default precision and schedule with explicit `n`, `k`.
    pub fn new(n: i64, k: i64) -> Result<Self> {
        Ok(Self {
            params: Params::new(n, k)?,
            ..Self::default()
        })
    }

    pub fn with_precision(mut self, precision: PrecisionContext) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_historical_run() {
        let cfg = PiConfig::default();
        assert_eq!(cfg.params.n(), 27);
        assert_eq!(cfg.params.k(), 100);
        assert_eq!(cfg.params.terms(), 128);
        assert_eq!(cfg.precision.digits(), 5000);
        assert_eq!(cfg.schedule, Schedule::Sequential);
    }

    #[test]
    fn test_negative_n_rejected() {
        let err = Params::new(-1, 10).unwrap_err();
        assert!(matches!(err, PiError::InvalidArgument { name: "n", .. }));
    }

    #[test]
    fn test_zero_k_rejected() {
        let err = Params::new(0, 0).unwrap_err();
        assert!(matches!(err, PiError::InvalidArgument { name: "k", .. }));
        assert!(Params::new(0, -3).is_err());
    }
}
