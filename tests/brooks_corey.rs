use approx::assert_relative_eq;
use matprop::fluid_matrix::*;
use matprop_core::parameter::{Parameter, ParameterError};
use std::error::Error;

#[test]
fn params_from_json() -> Result<(), ParameterError> {
    let sand = BrooksCoreyParams::from_json("sand", "tests/test_parameters.json")?;
    assert_eq!(sand, BrooksCoreyParams::new(500.0, 2.0));

    let clay = RegularizedBrooksCoreyParams::from_json("clay", "tests/test_parameters.json")?;
    assert_eq!(clay.pe(), 25000.0);
    assert_eq!(clay.alpha(), 0.8);
    assert_eq!(clay.threshold_sw(), 0.01);
    Ok(())
}

#[test]
fn all_rock_types_share_threshold() -> Result<(), ParameterError> {
    let rocks =
        RegularizedBrooksCoreyParams::from_multiple_json(&["clay", "sand"], "tests/test_parameters.json")?;
    assert_eq!(rocks.len(), 2);
    assert_ne!(rocks[0], rocks[1]);
    for rock in rocks {
        assert_eq!(rock.threshold_sw(), 0.01);
    }
    Ok(())
}

#[test]
fn unknown_rock_type() {
    let result = BrooksCoreyParams::from_json("granite", "tests/test_parameters.json");
    assert!(matches!(result, Err(ParameterError::ComponentsNotFound(_))));
}

#[test]
fn serialization() -> Result<(), Box<dyn Error>> {
    let params = RegularizedBrooksCoreyParams::new(1e4, 2.5);
    let json = serde_json::to_string(&params)?;
    assert_eq!(json, r#"{"pe":10000.0,"alpha":2.5}"#);
    let params: RegularizedBrooksCoreyParams = serde_json::from_str(&json)?;
    assert_eq!(params.base(), &BrooksCoreyParams::new(1e4, 2.5));
    Ok(())
}

#[test]
fn capillary_pressure_at_threshold() {
    // value and slope an external regularization has to match
    let params: RegularizedBrooksCoreyParams = RegularizedBrooksCoreyParams::new(1e3, 2.0);
    let sw = params.threshold_sw();
    assert_relative_eq!(BrooksCorey::pc(&params, sw), 1e4, max_relative = 1e-12);
    assert_relative_eq!(BrooksCorey::dpc_dsw(&params, sw), -5e5, max_relative = 1e-12);
}
