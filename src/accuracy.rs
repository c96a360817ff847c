// accuracy.rs - Digit agreement between an estimate and a reference

use crate::decimal::Decimal;
use crate::precision::PrecisionContext;

/// Leading characters two rendered numbers share.
pub fn matching_prefix(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

/// Fractional digits of `estimate` that agree with `reference`, counted
/// from the decimal point. Zero when sign or integer part differ.
pub fn correct_decimals(estimate: &Decimal, reference: &Decimal) -> usize {
    let estimate = estimate.to_string();
    let reference = reference.to_string();
    let (e_int, e_frac) = estimate.split_once('.').unwrap_or((estimate.as_str(), ""));
    let (r_int, r_frac) = reference.split_once('.').unwrap_or((reference.as_str(), ""));
    if e_int != r_int {
        return 0;
    }
    matching_prefix(e_frac, r_frac)
}

/// |a - b| under `ctx`.
pub fn abs_error(ctx: &PrecisionContext, a: &Decimal, b: &Decimal) -> Decimal {
    ctx.sub(a, b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_correct_decimals() {
        assert_eq!(correct_decimals(&dec("3.14158"), &dec("3.14159")), 4);
        assert_eq!(correct_decimals(&dec("3.1"), &dec("3.14159")), 1);
        assert_eq!(correct_decimals(&dec("2.9999"), &dec("3.0000")), 0);
        assert_eq!(correct_decimals(&dec("-3.14"), &dec("3.14")), 0);
    }

    #[test]
    fn test_abs_error_is_symmetric() {
        let ctx = PrecisionContext::default();
        let (a, b) = (dec("3.2"), dec("3.14159"));
        assert_eq!(abs_error(&ctx, &a, &b), abs_error(&ctx, &b, &a));
        assert_eq!(abs_error(&ctx, &a, &b), dec("0.05841"));
    }
}
