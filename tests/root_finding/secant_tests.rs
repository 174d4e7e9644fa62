//! tests for the secant root finding algorithm
use roots::root_finding::algorithms::Algorithm;
use roots::root_finding::bisection::bisection;
use roots::root_finding::config::RootsCfg;
use roots::root_finding::errors::RootFindingError;
use roots::root_finding::report::Status;
use roots::root_finding::secant::secant;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_612() -> TestResult {
    let f   = |x: f64| x * x - 612.0;
    let cfg = RootsCfg::new();

    let res = secant(f, 10.0, 30.0, &cfg)?;

    assert_eq!(res.status, Status::Success);
    assert!((res.root - 612.0_f64.sqrt()).abs() < 1e-8);
    assert!(res.residual.abs() < 1e-10);
    assert_eq!(res.evaluations, res.iterations + 2);
    Ok(())
}

#[test]
fn fewer_iterations_than_bisection() -> TestResult {
    let cfg = RootsCfg::new();

    let sec = secant(|x: f64| x * x - 612.0, 10.0, 30.0, &cfg)?;
    let bis = bisection(|x: f64| x * x - 612.0, 10.0, 30.0, &cfg)?;
    let bis_a = bisection(|x: f64| x * x - 1.234, 0.0, 2.0, &cfg)?;

    assert!(sec.iterations < bis.iterations);
    assert!(sec.iterations < bis_a.iterations);
    Ok(())
}

#[test]
fn exhausted_reports_last_two_iterates() -> TestResult {
    let f   = |x: f64| x * x - 1.234;
    let cfg = RootsCfg::new().set_max_iter(3)?;

    let res = secant(f, 0.0, 2.0, &cfg)?;

    assert_eq!(res.status, Status::MaxIterationsExceeded);
    assert_eq!(res.iterations, 3);
    assert_eq!(res.evaluations, 5);
    assert_eq!(res.root, res.bracket[1]);
    assert_eq!(res.residual, f(res.root));
    Ok(())
}

#[test]
fn does_not_promise_a_bracket() -> TestResult {
    assert!(!Algorithm::Secant.preserves_bracket());
    assert!(Algorithm::ALL
        .iter()
        .filter(|alg| **alg != Algorithm::Secant)
        .all(|alg| alg.preserves_bracket()));
    Ok(())
}

#[test]
fn still_validates_the_bracket() -> TestResult {
    let res = secant(|x: f64| x + 5.0, 0.0, 1.0, &RootsCfg::new())?;

    assert_eq!(res.status, Status::NotBracketed);
    assert_eq!(res.evaluations, 2);
    Ok(())
}

#[test]
fn detects_invalid_bounds() -> TestResult {
    let err = secant(|x: f64| x, 0.0, f64::NEG_INFINITY, &RootsCfg::new()).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidBounds { .. }));
    Ok(())
}
