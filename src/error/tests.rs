use super::{validate, Error};

#[test]
fn param_helper_builds_parameter_error() {
    let err = Error::param("nonce", "must not repeat per key");
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "nonce");
            assert_eq!(reason, "must not repeat per key");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn length_error_display() {
    let err = Error::Length {
        context: "ChaCha20 key",
        expected: 32,
        actual: 16,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for ChaCha20 key: expected 32, got 16"
    );
}

#[test]
fn parameter_error_display() {
    let err = Error::param("position", "must fit in u32");
    assert_eq!(err.to_string(), "Invalid parameter 'position': must fit in u32");
}

#[test]
fn validate_length() {
    assert!(validate::length("key", 32, 32).is_ok());
    let err = validate::length("key", 31, 32).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "key",
            expected: 32,
            actual: 31,
        }
    );
}

#[test]
fn validate_parameter() {
    assert!(validate::parameter(true, "counter", "in range").is_ok());
    assert!(validate::parameter(false, "counter", "in range").is_err());
}

#[test]
fn other_error_display() {
    assert_eq!(Error::Other("internal failure").to_string(), "internal failure");
}
