// precision.rs - Precision context: significant digits plus a rounding rule
//
// Every arithmetic operation on `Decimal` goes through a context value.
// Add, subtract and multiply are exact before rounding; divide and sqrt
// over-compute by at least one digit (plus a sticky digit for the
// non-truncating modes) so the final rounding sees the true tail.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::decimal::{pow10, Decimal};
use crate::error::{PiError, Result};

/// Significant digits used by the π pipeline.
pub const DEFAULT_DIGITS: u64 = 5000;

const LOG10_2: f64 = 0.301_029_995_663_981_2;

/// How discarded digits are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Truncate toward zero
    #[default]
    Down,
    /// Round to nearest, ties away from zero
    HalfUp,
}

impl Rounding {
    /// Round the truncated quotient `q` given the remainder of `q * divisor`.
    fn apply(self, q: BigInt, remainder: &BigInt, divisor: &BigInt) -> BigInt {
        match self {
            Rounding::Down => q,
            Rounding::HalfUp => {
                if remainder.magnitude() * 2u32 >= *divisor.magnitude() {
                    if remainder.is_negative() {
                        q - 1
                    } else {
                        q + 1
                    }
                } else {
                    q
                }
            }
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::Down => f.write_str("down"),
            Rounding::HalfUp => f.write_str("half-up"),
        }
    }
}

impl FromStr for Rounding {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "down" | "truncate" => Ok(Rounding::Down),
            "half-up" | "half_up" | "halfup" => Ok(Rounding::HalfUp),
            _ => Err(PiError::Parse(s.to_string())),
        }
    }
}

/// Lower bound on the decimal digit count of `m` (never above the true count).
fn digits_lower_bound(m: &BigInt) -> u64 {
    let bits = m.bits();
    if bits <= 1 {
        return bits;
    }
    ((bits - 1) as f64 * LOG10_2).floor() as u64
}

/// Upper bound on the decimal digit count of `m`.
fn digits_upper_bound(m: &BigInt) -> u64 {
    (m.bits() as f64 * LOG10_2).floor() as u64 + 2
}

/// Fixed digit count and rounding rule for every operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionContext {
    digits: u64,
    rounding: Rounding,
    /// 10^digits, the first magnitude that no longer fits
    limit: BigUint,
}

impl Default for PrecisionContext {
    fn default() -> Self {
        Self::build(DEFAULT_DIGITS, Rounding::Down)
    }
}

impl PrecisionContext {
    pub fn new(digits: u64, rounding: Rounding) -> Result<Self> {
        if digits == 0 {
            return Err(PiError::invalid("digits", "precision must be at least 1 digit"));
        }
        Ok(Self::build(digits, rounding))
    }

    fn build(digits: u64, rounding: Rounding) -> Self {
        let limit = pow10(digits).magnitude().clone();
        Self { digits, rounding, limit }
    }

    pub fn digits(&self) -> u64 {
        self.digits
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Cut `x` down to at most `digits` significant digits.
    pub fn round(&self, x: Decimal) -> Decimal {
        if x.mantissa().magnitude() < &self.limit {
            return x;
        }
        let (mantissa, scale) = x.into_parts();

        let mut dropped = digits_lower_bound(&mantissa).saturating_sub(self.digits);
        let mut divisor = pow10(dropped);
        let (mut q, mut r) = mantissa.div_rem(&divisor);

        // The lower bound may be short by a digit or two.
        let ten = BigInt::from(10u32);
        while q.magnitude() >= &self.limit {
            let (q10, r10) = q.div_rem(&ten);
            r = r10 * &divisor + r;
            divisor *= 10u32;
            q = q10;
            dropped += 1;
        }

        let mut q = self.rounding.apply(q, &r, &divisor);
        if q.magnitude() >= &self.limit {
            // 99..9 carried into 10^digits.
            q /= 10u32;
            dropped += 1;
        }
        Decimal::new(q, scale - dropped as i64)
    }

    pub fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
        let (x, y, scale) = a.aligned(b);
        self.round(Decimal::new(x + y, scale))
    }

    pub fn sub(&self, a: &Decimal, b: &Decimal) -> Decimal {
        let (x, y, scale) = a.aligned(b);
        self.round(Decimal::new(x - y, scale))
    }

    pub fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.round(Decimal::new(a.mantissa() * b.mantissa(), a.scale() + b.scale()))
    }

    pub fn div(&self, a: &Decimal, b: &Decimal) -> Result<Decimal> {
        if b.is_zero() {
            return Err(PiError::ArithmeticInvariantViolation(format!(
                "division of {a} by zero"
            )));
        }
        if a.is_zero() {
            return Ok(Decimal::zero());
        }

        // Enough shift that the integer quotient has at least digits + 1 digits.
        let shift = (self.digits + 1 + digits_upper_bound(b.mantissa()))
            .saturating_sub(digits_lower_bound(a.mantissa()));
        let numerator = a.mantissa() * pow10(shift);
        let (mut q, r) = numerator.div_rem(b.mantissa());
        let mut scale = a.scale() + shift as i64 - b.scale();

        if self.rounding != Rounding::Down && !r.is_zero() {
            let sticky = if q.is_negative() { -1 } else { 1 };
            q = q * 10u32 + sticky;
            scale += 1;
        }
        Ok(self.round(Decimal::new(q, scale)))
    }

    pub fn sqrt(&self, a: &Decimal) -> Result<Decimal> {
        if a.is_negative() {
            return Err(PiError::ArithmeticInvariantViolation(format!(
                "square root of negative operand {a}"
            )));
        }
        if a.is_zero() {
            return Ok(Decimal::zero());
        }

        let mut shift = (2 * (self.digits + 1)).saturating_sub(digits_lower_bound(a.mantissa()));
        if (a.scale() + shift as i64).rem_euclid(2) != 0 {
            shift += 1;
        }
        let radicand = a.mantissa() * pow10(shift);
        let mut root = radicand.sqrt();
        let mut scale = (a.scale() + shift as i64) / 2;

        if self.rounding != Rounding::Down && &root * &root != radicand {
            root = root * 10u32 + 1;
            scale += 1;
        }
        Ok(self.round(Decimal::new(root, scale)))
    }
}
