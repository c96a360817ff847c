use vieta::accelerate::accelerate;
use vieta::accuracy::{abs_error, correct_decimals};
use vieta::arctan::{reference_pi, ArctanFormula};
use vieta::vieta::{generate, Window};
use vieta::{compute, Decimal, Params, PiConfig, PiError, PrecisionContext, Rounding, Schedule};

fn ctx(digits: u64) -> PrecisionContext {
    PrecisionContext::new(digits, Rounding::Down).unwrap()
}

#[test]
fn test_acceleration_beats_plain_vieta() {
    let ctx = ctx(300);
    let pi = reference_pi(ArctanFormula::Machin, &ctx);

    for n in 0..6 {
        for k in 2..8 {
            let config = PiConfig::new(n, k).unwrap().with_precision(ctx.clone());
            let estimate = compute(&config).unwrap();
            let plain = abs_error(&ctx, &estimate.vieta, &pi);
            let accelerated = abs_error(&ctx, &estimate.accelerated, &pi);
            assert!(
                accelerated < plain,
                "n = {n}, k = {k}: accelerated error {accelerated} not below {plain}"
            );
        }
    }
}

#[test]
fn test_single_round_uses_two_values() {
    let ctx = PrecisionContext::default();
    let products = generate(Params::new(0, 1).unwrap(), &ctx).unwrap();
    assert_eq!(products.window.len(), 2);

    let pi = accelerate(products.window, 1, &ctx, Schedule::Sequential).unwrap();
    assert!(pi.to_string().starts_with("3.13914757031222753"), "got {pi}");
}

#[test]
fn test_single_round_matches_formula() {
    let ctx = ctx(100);
    let products = generate(Params::new(3, 1).unwrap(), &ctx).unwrap();
    let values = products.window.values().to_vec();

    let four = Decimal::from(4);
    let numerator = ctx.sub(&ctx.mul(&four, &values[1]), &values[0]);
    let expected = ctx.mul(&Decimal::from(2), &ctx.div(&numerator, &Decimal::from(3)).unwrap());

    let pi = accelerate(products.window, 1, &ctx, Schedule::Sequential).unwrap();
    assert_eq!(pi, expected);
}

#[test]
fn test_parallel_schedule_matches_sequential() {
    let ctx = ctx(250);
    let products = generate(Params::new(5, 30).unwrap(), &ctx).unwrap();

    let seq = accelerate(products.window.clone(), 30, &ctx, Schedule::Sequential).unwrap();
    let par = accelerate(products.window, 30, &ctx, Schedule::Parallel).unwrap();
    assert_eq!(seq.to_string(), par.to_string());
}

#[test]
fn test_fewer_rounds_than_window() {
    let ctx = ctx(120);
    let products = generate(Params::new(2, 10).unwrap(), &ctx).unwrap();
    let pi = reference_pi(ArctanFormula::Machin, &ctx);

    let three = accelerate(products.window.clone(), 3, &ctx, Schedule::Sequential).unwrap();
    let ten = accelerate(products.window, 10, &ctx, Schedule::Sequential).unwrap();
    assert!(correct_decimals(&ten, &pi) > correct_decimals(&three, &pi));
}

#[test]
fn test_too_many_rounds_rejected() {
    let ctx = ctx(40);
    let products = generate(Params::new(0, 4).unwrap(), &ctx).unwrap();

    let err = accelerate(products.window, 5, &ctx, Schedule::Sequential).unwrap_err();
    assert_eq!(err, PiError::WindowTooShort { rounds: 5, available: 5 });
    assert!(err.is_invalid_argument());
}

#[test]
fn test_zero_rounds_rejected() {
    let ctx = ctx(40);
    let window = Window::new(vec![Decimal::one(), Decimal::one()]);
    let err = accelerate(window, 0, &ctx, Schedule::Sequential).unwrap_err();
    assert!(matches!(err, PiError::InvalidArgument { name: "rounds", .. }));
}
