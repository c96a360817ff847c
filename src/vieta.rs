// vieta.rs - Partial products of Vieta's formula
//
//   a_0 = 0,  a_i = sqrt(2 + a_{i-1})
//   p_0 = 1,  p_i = p_{i-1} * (2 / a_i)      p_i -> π/2
//
// The generator records p_n .. p_{n+k} into a window that is handed,
// by value, to the accelerator.

use tracing::debug;

use crate::config::Params;
use crate::decimal::Decimal;
use crate::error::{PiError, Result};
use crate::precision::PrecisionContext;

/// One evaluated step of the recursion
#[derive(Debug, Clone)]
pub struct VietaTerm {
    pub index: usize,
    pub a: Decimal,
    pub p: Decimal,
}

/// Stepper over the nested-radical sequence and its running product
pub struct VietaSequence<'c> {
    ctx: &'c PrecisionContext,
    two: Decimal,
    index: usize,
    a: Decimal,
    p: Decimal,
}

impl<'c> VietaSequence<'c> {
    pub fn new(ctx: &'c PrecisionContext) -> Self {
        Self {
            ctx,
            two: Decimal::from(2),
            index: 0,
            a: Decimal::zero(),
            p: Decimal::one(),
        }
    }

    /// Advance one term and return it.
    pub fn step(&mut self) -> Result<VietaTerm> {
        let radicand = self.ctx.add(&self.two, &self.a);
        debug_assert!(!radicand.is_negative(), "a_i >= 0 keeps 2 + a_i positive");
        if radicand.is_negative() {
            return Err(PiError::ArithmeticInvariantViolation(format!(
                "negative radicand at term {}",
                self.index
            )));
        }

        self.a = self.ctx.sqrt(&radicand)?;
        let factor = self.ctx.div(&self.two, &self.a)?;
        self.p = self.ctx.mul(&self.p, &factor);

        let term = VietaTerm {
            index: self.index,
            a: self.a.clone(),
            p: self.p.clone(),
        };
        self.index += 1;
        Ok(term)
    }
}

/// Shrinking buffer of partial products fed to the accelerator.
///
/// `live` is the number of entries the next extrapolation round updates;
/// each update also reads the neighbour at `i + 1`.
#[derive(Debug, Clone)]
pub struct Window {
    values: Vec<Decimal>,
    live: usize,
}

impl Window {
    pub fn new(values: Vec<Decimal>) -> Self {
        let live = values.len().saturating_sub(1);
        Self { values, live }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn live(&self) -> usize {
        self.live
    }

    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Decimal> {
        self.values
    }

    pub(crate) fn set_live(&mut self, live: usize) {
        debug_assert!(live < self.values.len());
        self.live = live;
    }

    pub(crate) fn values_mut(&mut self) -> &mut [Decimal] {
        &mut self.values
    }

    pub(crate) fn shrink(&mut self) {
        self.live = self.live.saturating_sub(1);
    }
}

/// Output of the generator
#[derive(Debug, Clone)]
pub struct PartialProducts {
    /// `p_n .. p_{n+k}`, exactly `k + 1` entries
    pub window: Window,
    /// `2 * p_{n+k-1}`, the plain Vieta estimate of π
    pub vieta_estimate: Decimal,
}

/// Evaluate `n + k + 1` terms and keep every `p_i` with `i >= n`.
pub fn generate(params: Params, ctx: &PrecisionContext) -> Result<PartialProducts> {
    let (n, k) = (params.n(), params.k());
    debug!(n, k, digits = ctx.digits(), "generating partial products");

    let mut sequence = VietaSequence::new(ctx);
    let mut values = Vec::with_capacity(k + 1);
    for i in 0..params.terms() {
        let term = sequence.step()?;
        if i >= n {
            values.push(term.p);
        }
    }
    debug_assert_eq!(values.len(), k + 1);

    let vieta_estimate = ctx.mul(&Decimal::from(2), &values[k - 1]);
    Ok(PartialProducts {
        window: Window::new(values),
        vieta_estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::Rounding;

    #[test]
    fn test_first_terms() {
        let ctx = PrecisionContext::new(30, Rounding::Down).unwrap();
        let mut seq = VietaSequence::new(&ctx);

        let t0 = seq.step().unwrap();
        assert_eq!(t0.index, 0);
        assert_eq!(t0.a, ctx.sqrt(&Decimal::from(2)).unwrap());

        let t1 = seq.step().unwrap();
        assert_eq!(t1.index, 1);
        assert!(t1.a > t0.a && t1.a < Decimal::from(2));
        // Products climb toward π/2 from below.
        assert!(t1.p > t0.p);
        assert!(t1.p < "1.5708".parse().unwrap());
    }

    #[test]
    fn test_window_shape() {
        let ctx = PrecisionContext::new(40, Rounding::Down).unwrap();
        let products = generate(Params::new(3, 5).unwrap(), &ctx).unwrap();
        assert_eq!(products.window.len(), 6);
        assert_eq!(products.window.live(), 5);
    }
}
