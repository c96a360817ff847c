// accelerate.rs - Richardson extrapolation of Vieta partial products
//
// The error of p_i shrinks by a factor of 4 per step, so round j combines
// neighbours with weight 4^j:
//
//   V[i] <- (4^j * V[i+1] - V[i]) / (4^j - 1),   i = 0 .. m-1
//
// and the live length m drops by one afterwards.

use num_bigint::BigInt;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::Schedule;
use crate::decimal::Decimal;
use crate::error::{PiError, Result};
use crate::precision::PrecisionContext;
use crate::vieta::Window;

/// One extrapolated value from a neighbouring pair.
fn extrapolate(
    ctx: &PrecisionContext,
    weight: &Decimal,
    denominator: &Decimal,
    lower: &Decimal,
    upper: &Decimal,
) -> Result<Decimal> {
    let numerator = ctx.sub(&ctx.mul(weight, upper), lower);
    ctx.div(&numerator, denominator)
}

/// Apply `rounds` extrapolation rounds to `window` and return `2 * V[0]`.
///
/// The window needs at least `rounds + 1` values. Both schedules produce
/// identical digits: the parallel one computes a whole round from the
/// pre-round values before writing any of them back.
pub fn accelerate(
    mut window: Window,
    rounds: usize,
    ctx: &PrecisionContext,
    schedule: Schedule,
) -> Result<Decimal> {
    if rounds == 0 {
        return Err(PiError::invalid("rounds", "at least one round is required"));
    }
    if window.len() < rounds + 1 {
        return Err(PiError::WindowTooShort {
            rounds,
            available: window.len(),
        });
    }
    window.set_live(rounds);
    debug!(rounds, ?schedule, "accelerating partial products");

    let one = BigInt::from(1u32);
    let mut power = BigInt::from(1u32);
    for round in 1..=rounds {
        power *= 4u32;
        let weight = Decimal::from(power.clone());
        let denominator = Decimal::from(&power - &one);
        let live = window.live();
        trace!(round, live, "extrapolation round");

        let values = window.values_mut();
        match schedule {
            Schedule::Sequential => {
                for i in 0..live {
                    values[i] = extrapolate(ctx, &weight, &denominator, &values[i], &values[i + 1])?;
                }
            }
            Schedule::Parallel => {
                let next = values[..=live]
                    .par_windows(2)
                    .map(|pair| extrapolate(ctx, &weight, &denominator, &pair[0], &pair[1]))
                    .collect::<Result<Vec<_>>>()?;
                for (slot, value) in values.iter_mut().zip(next) {
                    *slot = value;
                }
            }
        }
        window.shrink();
    }

    Ok(ctx.mul(&Decimal::from(2), &window.values()[0]))
}
