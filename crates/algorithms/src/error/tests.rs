use super::*;
use eccrypt_api::Error as CoreError;

#[test]
fn test_error_conversion() {
    let err = Error::param("a", "must satisfy 0 < a < q");
    match CoreError::from(err) {
        CoreError::InvalidParameters { message, .. } => {
            assert_eq!(message, "a: must satisfy 0 < a < q");
        }
        other => panic!("Expected InvalidParameters error, got {:?}", other),
    }

    let err = Error::not_found("mod_sqrt", "3 is not a square modulo 7");
    match CoreError::from(err) {
        CoreError::NotFound { context, message } => {
            assert_eq!(context, "mod_sqrt");
            assert_eq!(message, "3 is not a square modulo 7");
        }
        other => panic!("Expected NotFound error, got {:?}", other),
    }

    let err = Error::NotInvertible { value: 4, modulus: 8 };
    assert!(CoreError::from(err).is_invalid_parameters());
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "q", "should pass").is_ok());
    let err = validate::parameter(false, "q", "should fail").unwrap_err();
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "q");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::point(true, "plaintext").is_ok());
    assert_eq!(
        validate::point(false, "plaintext").unwrap_err(),
        Error::InvalidPoint { context: "plaintext" }
    );
}

#[test]
fn test_display() {
    let err = Error::NotInvertible { value: 6, modulus: 9 };
    assert_eq!(err.to_string(), "6 has no inverse modulo 9");
}
