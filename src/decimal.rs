// decimal.rs - Arbitrary-precision decimal value type
//
// A `Decimal` is an exact value `mantissa * 10^-scale`. It carries no
// precision of its own; every rounding decision is made by a
// `PrecisionContext` (see precision.rs).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::PiError;

/// Exact decimal `mantissa * 10^-scale`
#[derive(Debug, Clone)]
pub struct Decimal {
    mantissa: BigInt,
    scale: i64,
}

/// 10^exp as a big integer.
pub(crate) fn pow10(exp: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u32), exp as usize)
}

impl Decimal {
    pub fn new(mantissa: BigInt, scale: i64) -> Self {
        Self { mantissa, scale }
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn into_parts(self) -> (BigInt, i64) {
        (self.mantissa, self.scale)
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.mantissa.abs(), self.scale)
    }

    pub fn negated(&self) -> Self {
        Self::new(-&self.mantissa, self.scale)
    }

    /// Number of decimal digits in the mantissa (0 for zero).
    pub fn precision(&self) -> u64 {
        if self.is_zero() {
            0
        } else {
            self.mantissa.magnitude().to_string().len() as u64
        }
    }

    /// Both mantissas rescaled to the larger of the two scales.
    pub(crate) fn aligned(&self, other: &Self) -> (BigInt, BigInt, i64) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.mantissa.clone(), other.mantissa.clone(), self.scale),
            Ordering::Greater => {
                let shift = (self.scale - other.scale) as u64;
                (self.mantissa.clone(), &other.mantissa * pow10(shift), self.scale)
            }
            Ordering::Less => {
                let shift = (other.scale - self.scale) as u64;
                (&self.mantissa * pow10(shift), other.mantissa.clone(), other.scale)
            }
        }
    }
}

impl From<i64> for Decimal {
    fn from(v: i64) -> Self {
        Self::new(BigInt::from(v), 0)
    }
}

impl From<BigInt> for Decimal {
    fn from(v: BigInt) -> Self {
        Self::new(v, 0)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

/// Plain positional form: sign, integer part, point, `scale` fractional digits.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.magnitude().to_string();
        let sign = if self.is_negative() { "-" } else { "" };

        if self.scale <= 0 {
            write!(f, "{sign}{digits}")?;
            if !self.is_zero() {
                for _ in 0..(-self.scale) {
                    f.write_str("0")?;
                }
            }
            return Ok(());
        }

        let scale = self.scale as usize;
        let padded = if digits.len() <= scale {
            format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

impl FromStr for Decimal {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || PiError::Parse(s.to_string());

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(bad());
        }
        if body.ends_with('.') {
            return Err(bad());
        }

        let combined = format!("{int_part}{frac_part}");
        let mut mantissa = BigInt::parse_bytes(combined.as_bytes(), 10).ok_or_else(bad)?;
        if negative {
            mantissa = -mantissa;
        }
        Ok(Self::new(mantissa, frac_part.len() as i64))
    }
}
