//! # Error Tests
//!
//! Display strings and helpers of `DecodeError`.

use mipsdec_core::common::{DecodeError, DecodeTable};

#[test]
fn test_malformed_word_display() {
    let err = DecodeError::MalformedWord("0xZZ".to_string());
    assert_eq!(err.to_string(), "malformed instruction word `0xZZ`");
}

#[test]
fn test_unknown_operation_display_names_table_and_code() {
    let err = DecodeError::UnknownOperation {
        table: DecodeTable::Opcode,
        code: 0b010011,
    };
    assert_eq!(err.to_string(), "unknown operation: opcode 0b010011 is unassigned");
}

#[test]
fn test_unknown_function_display() {
    let err = DecodeError::UnknownOperation {
        table: DecodeTable::Function,
        code: 1,
    };
    assert_eq!(err.to_string(), "unknown operation: function code 0b000001 is unassigned");
}

#[test]
fn test_unknown_regimm_display() {
    let err = DecodeError::UnknownOperation {
        table: DecodeTable::RegImm,
        code: 0b10001,
    };
    assert!(err.to_string().contains("regimm selector"));
}

#[test]
fn test_unformattable_display() {
    let err = DecodeError::UnformattableCategory("[R-Type]");
    assert_eq!(err.to_string(), "operation `[R-Type]` cannot be formatted");
}

#[test]
fn test_register_errors_display() {
    assert_eq!(
        DecodeError::InvalidRegisterIndex(32).to_string(),
        "invalid register index 32"
    );
    assert_eq!(
        DecodeError::UnknownRegister("$x9".to_string()).to_string(),
        "unknown register name `$x9`"
    );
}

#[test]
fn test_is_unknown_operation() {
    let unknown = DecodeError::UnknownOperation {
        table: DecodeTable::Opcode,
        code: 63,
    };
    assert!(unknown.is_unknown_operation());
    assert!(!DecodeError::MalformedWord(String::new()).is_unknown_operation());
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&DecodeError::InvalidRegisterIndex(40));
}
