use approx::assert_abs_diff_eq;
use rootcompare::demo::errors::ComparisonError;
use rootcompare::demo::Comparison;
use rootcompare::root_finding::{Algorithm, SolverCfg};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn newton_is_the_accepted_value() -> TestResult {
    let cmp = Comparison::run(1.3, 2.0, SolverCfg::new())?;
    let newton = cmp.result(Algorithm::Newton).ok_or("newton missing")?;

    assert_eq!(cmp.accepted(), newton.root());
    assert_eq!(cmp.absolute_error(newton.root()), 0.0);
    assert_eq!(cmp.relative_error(newton.root()), Some(0.0));
    Ok(())
}

#[test]
fn all_methods_reported_in_order() -> TestResult {
    let cmp = Comparison::run(1.3, 2.0, SolverCfg::new())?;
    let order: Vec<Algorithm> = cmp.outcomes().iter().map(|o| o.algorithm).collect();

    assert_eq!(order, Algorithm::ALL.to_vec());
    assert!(cmp.outcomes().iter().all(|o| o.result.is_some()));
    Ok(())
}

#[test]
fn other_methods_close_to_accepted_value() -> TestResult {
    let cmp = Comparison::run(1.3, 2.0, SolverCfg::new())?;

    for algorithm in [Algorithm::Secant, Algorithm::FalsePosition] {
        let root = cmp.result(algorithm).ok_or("missing result")?.root();
        assert!(cmp.absolute_error(root) < 1e-4);
        let rel = cmp.relative_error(root).ok_or("accepted value is zero")?;
        assert_abs_diff_eq!(rel, cmp.absolute_error(root) / cmp.accepted(), epsilon = 1e-18);
    }
    Ok(())
}

#[test]
fn stalled_method_is_reported_not_fatal() -> TestResult {
    let cmp = Comparison::run(1.3, 5.0, SolverCfg::new())?;

    assert!(cmp.result(Algorithm::Newton).is_some());
    assert!(cmp.result(Algorithm::FalsePosition).is_none());
    Ok(())
}

#[test]
fn diverging_newton_leaves_no_accepted_value() {
    let err = Comparison::run(-0.5, 2.0, SolverCfg::new()).unwrap_err();
    assert_eq!(err, ComparisonError::NoAcceptedValue { p0: -0.5 });
}

#[test]
fn solver_errors_are_tagged_by_method() {
    let err = Comparison::run(1.3, 1.3, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, ComparisonError::Secant(_)));
}
