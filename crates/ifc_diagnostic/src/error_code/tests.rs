use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2004.as_str(), "E2004");
}

#[test]
fn test_conformance_codes() {
    for code in [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
    ] {
        assert!(code.is_conformance_error());
        assert!(!code.is_manifest_error());
    }
}

#[test]
fn test_manifest_codes() {
    for code in [
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
    ] {
        assert!(code.is_manifest_error());
        assert!(!code.is_conformance_error());
    }
}

#[test]
fn test_from_str_round_trip() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
    assert_eq!("e1002".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_all_is_sorted_and_complete() {
    let mut sorted = ErrorCode::ALL.to_vec();
    sorted.sort();
    assert_eq!(sorted, ErrorCode::ALL);
    assert_eq!(ErrorCode::ALL.len(), 8);
}
