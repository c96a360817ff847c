// arctan.rs - Independent π reference from arctangent series
//
// Fixed-point big-integer evaluation of
//   Machin:  π = 16 atan(1/5) - 4 atan(1/239)
//   Euler:   π = 4 (atan(1/2) + atan(1/3))
// with a few guard digits, then cut to the caller's context.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::decimal::{pow10, Decimal};
use crate::precision::PrecisionContext;

/// Absorbs the truncation error of the series terms.
const GUARD_DIGITS: u64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArctanFormula {
    #[default]
    Machin,
    Euler,
}

/// atan(1/x) scaled by `unity`, summed until the terms vanish.
fn arctan_inv(x: u32, unity: &BigInt) -> BigInt {
    let x = BigInt::from(x);
    let x_sq = &x * &x;

    let mut power = unity / &x;
    let mut sum = power.clone();
    let mut j: u64 = 1;
    loop {
        power /= &x_sq;
        if power.is_zero() {
            break;
        }
        let term = &power / (2 * j + 1);
        if j % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        j += 1;
    }
    sum
}

/// π to the context's precision using `formula`.
pub fn reference_pi(formula: ArctanFormula, ctx: &PrecisionContext) -> Decimal {
    let working = ctx.digits() + GUARD_DIGITS;
    let unity = pow10(working);
    let fixed = match formula {
        ArctanFormula::Machin => arctan_inv(5, &unity) * 16u32 - arctan_inv(239, &unity) * 4u32,
        ArctanFormula::Euler => (arctan_inv(2, &unity) + arctan_inv(3, &unity)) * 4u32,
    };
    ctx.round(Decimal::new(fixed, working as i64))
}
