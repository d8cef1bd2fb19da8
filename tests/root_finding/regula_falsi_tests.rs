//! tests for the false position root-finding algorithm
use approx::assert_abs_diff_eq;
use rootcompare::root_finding::newton::newton;
use rootcompare::root_finding::regula_falsi::{regula_falsi, RegulaFalsiError};
use rootcompare::root_finding::{Algorithm, SolverCfg};
use rootcompare::target::{f, fprime};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn agrees_with_newton() -> TestResult {
    let cfg = SolverCfg::new();
    let accepted = newton(f, fprime, 1.3, cfg)?.ok_or("newton did not converge")?.root();
    let res = regula_falsi(f, 1.3, 2.0, cfg)?.ok_or("false position did not converge")?;

    assert_eq!(res.algorithm, Algorithm::FalsePosition);
    assert!(res.last.iteration <= 20);
    assert_abs_diff_eq!(res.root(), accepted, epsilon = 1e-4);
    assert!(f(res.root()).abs() < 1e-4);
    Ok(())
}

#[test]
fn error_shrinks_over_final_two_steps() -> TestResult {
    let res = regula_falsi(f, 1.3, 2.0, SolverCfg::new())?
        .ok_or("false position did not converge")?;
    let prev = res.secondlast.ok_or("missing second-to-last step")?;

    assert_eq!(res.last.iteration, 6);
    assert!(res.last.error < prev.error);
    Ok(())
}

#[test]
fn retained_endpoint_keeps_iterates_on_one_side() -> TestResult {
    let root = 2.0_f64.sqrt();
    let res = regula_falsi(|x| x * x - 2.0, 0.0, 2.0, SolverCfg::new())?
        .ok_or("false position did not converge")?;

    // x = 2 stays the retained endpoint, so every estimate approaches from below
    assert!(res.history.iter().all(|r| r.value <= root));
    assert_abs_diff_eq!(res.root(), root, epsilon = 1e-5);
    Ok(())
}

#[test]
fn frozen_endpoint_stalls_past_iteration_cap() -> TestResult {
    // f is convex on [1.3, 5], so x = 5 is never released and the step
    // only shrinks linearly
    assert!(regula_falsi(f, 1.3, 5.0, SolverCfg::new())?.is_none());
    Ok(())
}

#[test]
fn no_bracket_required() -> TestResult {
    // f(2) and f(3) are both positive
    let res = regula_falsi(f, 2.0, 3.0, SolverCfg::new())?
        .ok_or("false position did not converge")?;
    assert!(f(res.root()).abs() < 1e-4);
    Ok(())
}

#[test]
fn invalid_equal_guesses() {
    let err = regula_falsi(f, 2.0, 2.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, RegulaFalsiError::InvalidGuess { x0, x1 } if x0 == 2.0 && x1 == 2.0));
}

#[test]
fn horizontal_secant_is_an_error() {
    let err = regula_falsi(|x| x.abs() - 1.0, -3.0, 3.0, SolverCfg::new()).unwrap_err();
    assert_eq!(err, RegulaFalsiError::DegenerateSecantStep { a: -3.0, b: 3.0 });
}
