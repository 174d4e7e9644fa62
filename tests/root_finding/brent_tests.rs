//! tests for Brent's method
use roots::root_finding::bisection::bisection;
use roots::root_finding::brent::brent;
use roots::root_finding::config::RootsCfg;
use roots::root_finding::errors::RootFindingError;
use roots::root_finding::report::Status;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = brent(f, 0.0, 2.0, &RootsCfg::new())?;

    assert_eq!(res.status, Status::Success);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-10);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn beats_bisection() -> TestResult {
    let cfg = RootsCfg::new();
    let cases: [(fn(f64) -> f64, f64, f64); 3] = [
        (|x: f64| x * x - 1.234, 0.0, 2.0),
        (|x: f64| x * x - 612.0, 10.0, 30.0),
        (|x: f64| (x - 1.234) * (x + 111.0), 0.0, 200.0),
    ];

    for (f, a, b) in cases {
        let res = brent(f, a, b, &cfg)?;
        let bis = bisection(f, a, b, &cfg)?;
        assert!(res.is_success());
        assert!(res.iterations < bis.iterations);
    }
    Ok(())
}

#[test]
fn finds_cubic_root() -> TestResult {
    let f   = |x: f64| x * x * x - 2.0 * x - 5.0;
    let cfg = RootsCfg::new().set_xtol(1e-13)?.set_ftol(1e-13)?;

    let res = brent(f, 2.0, 3.0, &cfg)?;

    assert!(res.is_success());
    assert!((res.root - 2.094_551_481_542_326_5).abs() < 1e-10);
    Ok(())
}

#[test]
fn multiple_root() -> TestResult {
    let f   = |x: f64| (x - 1.0).powi(5);
    let cfg = RootsCfg::new().set_ftol(1e-300)?;

    let res = brent(f, -1.0, 2.5, &cfg)?;
    let [a, b] = res.bracket;

    assert!(res.is_success());
    assert!(f(a) * f(b) <= 0.0);
    assert!((a - b).abs() < 1e-10);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let res = brent(|x: f64| x * x + 1.0, -1.0, 1.0, &RootsCfg::new())?;

    assert_eq!(res.status, Status::NotBracketed);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    let f   = |x: f64| x.ln();
    let err = brent(f, -1.0, 5.0, &RootsCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::NonFiniteEvaluation { x, fx } if x == -1.0 && fx.is_nan()
    ));
    Ok(())
}
