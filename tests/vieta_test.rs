use vieta::accuracy::abs_error;
use vieta::arctan::{reference_pi, ArctanFormula};
use vieta::vieta::{generate, VietaSequence};
use vieta::{Decimal, Params, PrecisionContext, Rounding};

#[test]
fn test_first_estimate_is_two_terms_of_vieta() {
    let ctx = PrecisionContext::default();
    let products = generate(Params::new(0, 1).unwrap(), &ctx).unwrap();

    let two = Decimal::from(2);
    let root_two = ctx.sqrt(&two).unwrap();
    let expected = ctx.mul(&two, &ctx.div(&two, &root_two).unwrap());

    assert_eq!(products.vieta_estimate, expected);
    assert_eq!(products.vieta_estimate.to_string(), expected.to_string());
    assert!(products
        .vieta_estimate
        .to_string()
        .starts_with("2.8284271247461900976033774484193961571393437507538"));
}

#[test]
fn test_window_holds_products_from_offset() {
    let ctx = PrecisionContext::new(80, Rounding::Down).unwrap();
    let (n, k) = (4usize, 6usize);
    let products = generate(Params::new(n as i64, k as i64).unwrap(), &ctx).unwrap();

    let mut seq = VietaSequence::new(&ctx);
    let expected: Vec<Decimal> = (0..n + k + 1)
        .map(|_| seq.step().unwrap())
        .filter(|t| t.index >= n)
        .map(|t| t.p)
        .collect();

    assert_eq!(products.window.len(), k + 1);
    assert_eq!(products.window.values(), expected.as_slice());
    let two_p = ctx.mul(&Decimal::from(2), &expected[k - 1]);
    assert_eq!(products.vieta_estimate, two_p);
}

#[test]
fn test_radicals_stay_below_two() {
    let ctx = PrecisionContext::new(60, Rounding::Down).unwrap();
    let mut seq = VietaSequence::new(&ctx);
    let two = Decimal::from(2);
    let mut previous = Decimal::zero();
    for _ in 0..40 {
        let term = seq.step().unwrap();
        assert!(term.a > previous, "a_i must increase");
        assert!(term.a < two, "a_i must stay below 2");
        previous = term.a;
    }
}

#[test]
fn test_unaccelerated_estimate_converges_monotonically() {
    let ctx = PrecisionContext::new(200, Rounding::Down).unwrap();
    let pi = reference_pi(ArctanFormula::Machin, &ctx);
    let k = 4;

    let mut last_error: Option<Decimal> = None;
    for n in 0..10 {
        let products = generate(Params::new(n, k).unwrap(), &ctx).unwrap();
        let error = abs_error(&ctx, &products.vieta_estimate, &pi);
        // Partial products approach π from below.
        assert!(products.vieta_estimate < pi);
        if let Some(prev) = &last_error {
            assert!(error < *prev, "error did not shrink at n = {n}");
        }
        last_error = Some(error);
    }
}

#[test]
fn test_invalid_window_size() {
    assert!(Params::new(0, 0).unwrap_err().is_invalid_argument());
    assert!(Params::new(-1, 5).unwrap_err().is_invalid_argument());
}
