//! tests for the shared bracket validator
use std::cell::Cell;
use roots::root_finding::bracket::{validate, Bracket, Validation};
use roots::root_finding::config::RootsCfg;
use roots::root_finding::errors::RootFindingError;
use roots::root_finding::report::ToleranceSatisfied;

type TestResult = Result<(), RootFindingError>;

#[test]
fn rejects_same_sign_with_two_evaluations() -> TestResult {
    let calls = Cell::new(0);
    let f = |x: f64| { calls.set(calls.get() + 1); x + 5.0 };

    let v = validate(f, 0.0, 1.0, &RootsCfg::new())?;

    assert_eq!(calls.get(), 2);
    assert_eq!(v, Validation::NotBracketed { root: 0.0, residual: 5.0, bracket: [0.0, 1.0] });
    Ok(())
}

#[test]
fn endpoint_a_is_root_skips_b() -> TestResult {
    let calls = Cell::new(0);
    let f = |x: f64| { calls.set(calls.get() + 1); x };

    let v = validate(f, 0.0, 3.0, &RootsCfg::new())?;

    assert_eq!(calls.get(), 1);
    assert!(matches!(
        v,
        Validation::Solved { root, tolerance: ToleranceSatisfied::Ftol, .. } if root == 0.0
    ));
    Ok(())
}

#[test]
fn endpoint_b_is_root() -> TestResult {
    let f = |x: f64| x - 3.0;
    let v = validate(f, 0.0, 3.0, &RootsCfg::new())?;

    assert!(matches!(
        v,
        Validation::Solved { root, residual, .. } if root == 3.0 && residual == 0.0
    ));
    Ok(())
}

#[test]
fn orders_best_estimate_into_b() -> TestResult {
    let f = |x: f64| x - 1.0;
    let v = validate(f, 0.0, 3.0, &RootsCfg::new())?;

    assert_eq!(v, Validation::Continue(Bracket { a: 3.0, b: 0.0, fa: 2.0, fb: -1.0 }));
    Ok(())
}

#[test]
fn narrow_bracket_is_solved_by_width() -> TestResult {
    let f   = |x: f64| x - 1.0 - 5e-13;
    let cfg = RootsCfg::new().set_ftol(0.0)?;
    let v   = validate(f, 1.0, 1.0 + 1e-12, &cfg)?;

    match v {
        Validation::Solved { root, tolerance, .. } => {
            assert_eq!(tolerance, ToleranceSatisfied::Xtol);
            assert!(root == 1.0 || root == 1.0 + 1e-12);
        }
        other => panic!("expected Solved, got {other:?}"),
    }
    Ok(())
}

#[test]
fn detects_non_finite_bounds() -> TestResult {
    let err = validate(|x: f64| x, f64::NAN, 1.0, &RootsCfg::new()).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidBounds { b, .. } if b == 1.0));

    let err = validate(|x: f64| x, 0.0, f64::INFINITY, &RootsCfg::new()).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidBounds { .. }));
    Ok(())
}

#[test]
fn non_finite_endpoint_value() -> TestResult {
    let f   = |x: f64| 1.0 / x;
    let err = validate(f, 0.0, 1.0, &RootsCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::NonFiniteEvaluation { x, fx } if x == 0.0 && fx.is_infinite()
    ));
    Ok(())
}

#[test]
fn bracket_helpers() -> TestResult {
    let mut br = Bracket { a: 0.0, b: 2.0, fa: -0.5, fb: 3.0 };
    br.order();

    assert_eq!(br.bounds(), [2.0, 0.0]);
    assert_eq!(br.fb, -0.5);
    assert_eq!(br.width(), 2.0);
    Ok(())
}
