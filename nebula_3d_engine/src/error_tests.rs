use super::*;

#[test]
fn test_display_precondition_not_met() {
    let err = Error::PreconditionNotMet("no vertex data".to_string());
    assert_eq!(err.to_string(), "Precondition not met: no vertex data");
}

#[test]
fn test_display_unknown_identifier() {
    let err = Error::UnknownIdentifier("program 'basic'".to_string());
    assert_eq!(err.to_string(), "Unknown identifier: program 'basic'");
}

#[test]
fn test_display_invalid_configuration() {
    let err = Error::InvalidConfiguration("layout slot 0 is reserved".to_string());
    assert_eq!(err.to_string(), "Invalid configuration: layout slot 0 is reserved");
}

#[test]
fn test_display_initialization_failed() {
    let err = Error::InitializationFailed("no display".to_string());
    assert_eq!(err.to_string(), "Initialization failed: no display");
}

#[test]
fn test_engine_err_macro_builds_variant() {
    let err = crate::engine_err!(UnknownIdentifier, "nebula3d::test", "missing '{}'", "basic");
    match err {
        Error::UnknownIdentifier(msg) => assert_eq!(msg, "missing 'basic'"),
        other => panic!("unexpected variant: {:?}", other),
    }
}

#[test]
fn test_engine_bail_macro_returns_early() {
    fn failing() -> Result<u32> {
        crate::engine_bail!(PreconditionNotMet, "nebula3d::test", "not ready");
    }
    assert!(matches!(failing(), Err(Error::PreconditionNotMet(_))));
}
