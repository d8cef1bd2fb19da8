use approx::assert_abs_diff_eq;
use rootcompare::root_finding::errors::RootFindingError;
use rootcompare::root_finding::newton::{newton, NewtonError};
use rootcompare::root_finding::{Algorithm, SolverCfg};
use rootcompare::target::{f, fprime};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const ROOT: f64 = 1.777_182_274_489_5;

#[test]
fn converges_from_default_guess() -> TestResult {
    let res = newton(f, fprime, 1.3, SolverCfg::new())?.ok_or("newton did not converge")?;

    assert_eq!(res.algorithm, Algorithm::Newton);
    assert!(res.last.iteration <= 20);
    assert_eq!(res.last.iteration, 4);
    assert!(res.last.error < 1e-5);
    assert_abs_diff_eq!(res.root(), ROOT, epsilon = 1e-9);
    assert!(f(res.root()).abs() < 1e-4);
    Ok(())
}

#[test]
fn error_shrinks_over_final_two_steps() -> TestResult {
    let res = newton(f, fprime, 1.3, SolverCfg::new())?.ok_or("newton did not converge")?;
    let prev = res.secondlast.ok_or("missing second-to-last step")?;

    assert_eq!(prev.iteration + 1, res.last.iteration);
    assert!(res.last.error < prev.error);
    Ok(())
}

#[test]
fn history_and_evaluations_are_consistent() -> TestResult {
    let res = newton(f, fprime, 1.3, SolverCfg::new())?.ok_or("newton did not converge")?;

    assert_eq!(res.history.len(), res.steps());
    assert_eq!(res.history.last(), Some(&res.last));
    for (i, rec) in res.history.iter().enumerate() {
        assert_eq!(rec.iteration, i);
    }
    // one f and one f' call per step
    assert_eq!(res.evaluations, 2 * res.steps());
    Ok(())
}

#[test]
fn finds_negative_root_from_left() -> TestResult {
    let res = newton(f, fprime, -3.0, SolverCfg::new())?.ok_or("newton did not converge")?;

    assert_abs_diff_eq!(res.root(), -2.781_097_788_972_86, epsilon = 1e-8);
    assert!(f(res.root()).abs() < 1e-4);
    Ok(())
}

#[test]
fn diverging_guess_yields_no_result() -> TestResult {
    // f' is small near -0.5, so the first step lands near x = 29 and
    // the iterates then crawl back by about one unit per step
    let res = newton(f, fprime, -0.5, SolverCfg::new())?;
    assert!(res.is_none());
    Ok(())
}

#[test]
fn iteration_cap_respected() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(2)?;
    assert!(newton(f, fprime, 1.3, cfg)?.is_none());

    let cfg = SolverCfg::new().set_max_iter(4)?;
    assert!(newton(f, fprime, 1.3, cfg)?.is_some());
    Ok(())
}

#[test]
fn first_step_convergence_has_no_second_to_last() -> TestResult {
    let res = newton(|x| 2.0 * x - 6.0, |_| 2.0, 3.0, SolverCfg::new())?
        .ok_or("newton did not converge")?;

    assert_eq!(res.last.iteration, 0);
    assert_eq!(res.last.error, 0.0);
    assert!(res.secondlast.is_none());
    Ok(())
}

#[test]
fn no_real_root_yields_no_result() -> TestResult {
    let res = newton(|x| x * x + 1.0, |x| 2.0 * x, 0.5, SolverCfg::new())?;
    assert!(res.is_none());
    Ok(())
}

#[test]
fn zero_derivative_is_an_error() {
    let err = newton(|x| x * x + 1.0, |x| 2.0 * x, 0.0, SolverCfg::new()).unwrap_err();
    assert_eq!(err, NewtonError::ZeroDerivative { x: 0.0 });
}

#[test]
fn non_finite_derivative_is_an_error() {
    let err = newton(|x| x, |_| f64::NAN, 1.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::DerivativeNotFinite { x, dfx } if x == 1.0 && dfx.is_nan()));
}

#[test]
fn non_finite_evaluation_is_an_error() {
    let err = newton(|x| 1.0 / x, |x| -1.0 / (x * x), 0.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()
    ));
}

#[test]
fn invalid_guess_rejected() {
    let err = newton(f, fprime, f64::NAN, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { x0 } if x0.is_nan()));
}
