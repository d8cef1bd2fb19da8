use rootcompare::root_finding::config::{DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use rootcompare::root_finding::errors::ConfigError;
use rootcompare::root_finding::SolverCfg;

#[test]
fn defaults() {
    let cfg = SolverCfg::new();
    assert_eq!(cfg.tolerance(), DEFAULT_TOLERANCE);
    assert_eq!(cfg.max_iter(), DEFAULT_MAX_ITER);
    assert_eq!(cfg.tolerance(), 1e-5);
    assert_eq!(cfg.max_iter(), 20);
}

#[test]
fn setters_chain() -> Result<(), ConfigError> {
    let cfg = SolverCfg::new().set_tolerance(1e-8)?.set_max_iter(50)?;
    assert_eq!(cfg.tolerance(), 1e-8);
    assert_eq!(cfg.max_iter(), 50);
    Ok(())
}

#[test]
fn invalid_tolerance_rejected_by_setter() {
    assert_eq!(
        SolverCfg::new().set_tolerance(0.0).unwrap_err(),
        ConfigError::InvalidTolerance { got: 0.0 }
    );
    assert!(matches!(
        SolverCfg::new().set_tolerance(f64::NAN).unwrap_err(),
        ConfigError::InvalidTolerance { got } if got.is_nan()
    ));
    assert!(SolverCfg::new().set_tolerance(-1e-3).is_err());
}

#[test]
fn invalid_max_iter_rejected_by_setter() {
    assert_eq!(
        SolverCfg::new().set_max_iter(0).unwrap_err(),
        ConfigError::InvalidMaxIter { got: 0 }
    );
}
