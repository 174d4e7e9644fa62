//! tests for the TOMS 748 enclosing method
use roots::root_finding::algorithms::Algorithm;
use roots::root_finding::bisection::bisection;
use roots::root_finding::config::RootsCfg;
use roots::root_finding::errors::RootFindingError;
use roots::root_finding::report::{Status, ToleranceSatisfied};
use roots::root_finding::toms748::toms748;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_1_234() -> TestResult {
    let f   = |x: f64| x * x - 1.234;
    let res = toms748(f, 0.0, 2.0, &RootsCfg::new())?;

    assert_eq!(res.status, Status::Success);
    assert!((res.root - 1.234_f64.sqrt()).abs() < 1e-10);
    assert!(res.evaluations <= 4 * res.iterations + 2);
    Ok(())
}

#[test]
fn few_iterations_on_smooth_functions() -> TestResult {
    let cfg = RootsCfg::new();
    let cases: [(fn(f64) -> f64, f64, f64); 4] = [
        (|x: f64| x * x - 1.234, 0.0, 2.0),
        (|x: f64| x * x - 612.0, 10.0, 30.0),
        (|x: f64| (x - 1.234) * (x + 111.0), 200.0, 0.0),
        (|x: f64| x.cos() - x, 0.0, 1.0),
    ];

    for (f, a, b) in cases {
        let res = toms748(f, a, b, &cfg)?;
        let bis = bisection(f, a, b, &cfg)?;
        assert!(res.is_success());
        assert!(res.iterations <= 5);
        assert!(res.evaluations < bis.evaluations);
    }
    Ok(())
}

#[test]
fn bracket_is_sorted_and_keeps_sign_change() -> TestResult {
    let f   = |x: f64| x.powi(3);
    let cfg = RootsCfg::new().set_xtol(1e-12)?.set_ftol(1e-300)?;

    let res = toms748(f, 2.0, -1.0, &cfg)?;
    let [a, b] = res.bracket;

    assert!(res.is_success());
    assert!(a < b);
    assert!(f(a) * f(b) <= 0.0);
    if res.tolerance_satisfied == ToleranceSatisfied::Xtol {
        assert!(b - a < 1e-12);
        assert!(res.residual.abs() <= f(a).abs().max(f(b).abs()));
    }
    Ok(())
}

#[test]
fn respects_evaluation_bound_on_exhaustion() -> TestResult {
    let f   = |x: f64| (x - 0.3).powi(5);
    let cfg = RootsCfg::new().set_xtol(1e-15)?.set_ftol(1e-300)?.set_max_iter(2)?;

    let res = toms748(f, -4.0, 7.0, &cfg)?;

    assert_eq!(res.status, Status::MaxIterationsExceeded);
    assert_eq!(res.iterations, 2);
    assert!(res.evaluations <= Algorithm::Toms748.evaluations_per_iteration() * 2 + 2);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let res = toms748(|x: f64| x + 5.0, 0.0, 1.0, &RootsCfg::new())?;

    assert_eq!(res.status, Status::NotBracketed);
    assert_eq!(res.evaluations, 2);
    Ok(())
}
