use super::*;
use pretty_assertions::assert_eq;

const ALL_FIXED: [Code; 25] = [
    Code::Bool,
    Code::Byte,
    Code::UByte,
    Code::Short,
    Code::UShort,
    Code::Int,
    Code::UInt,
    Code::Long,
    Code::ULong,
    Code::LongLong,
    Code::ULongLong,
    Code::Float,
    Code::Double,
    Code::LongDouble,
    Code::CFloat,
    Code::CDouble,
    Code::CLongDouble,
    Code::Datetime,
    Code::Timedelta,
    Code::Object,
    Code::String,
    Code::Unicode,
    Code::Void,
    Code::NoType,
    Code::Char,
];

fn categories(code: Code, user_types: usize) -> Vec<&'static str> {
    let mut hits = Vec::new();
    if is_bool(code) {
        hits.push("bool");
    }
    if is_signed(code) {
        hits.push("signed");
    }
    if is_unsigned(code) {
        hits.push("unsigned");
    }
    if is_float(code) {
        hits.push("float");
    }
    if is_complex(code) {
        hits.push("complex");
    }
    if is_flexible(code) {
        hits.push("flexible");
    }
    if is_datetime(code) {
        hits.push("datetime");
    }
    if is_user_defined(code, user_types) {
        hits.push("user");
    }
    hits
}

#[test]
fn categories_are_mutually_exclusive() {
    for code in ALL_FIXED {
        let hits = categories(code, 4);
        assert!(hits.len() <= 1, "{code:?} is in {hits:?}");
    }
    assert_eq!(categories(Code::User(1), 4), vec!["user"]);
}

#[test]
fn object_and_sentinels_have_no_category() {
    for code in [Code::Object, Code::NoType, Code::Char] {
        assert!(categories(code, 4).is_empty(), "{code:?}");
        assert!(!is_number(code));
        assert!(!is_integer(code));
    }
}

#[test]
fn integer_is_signed_or_unsigned() {
    for code in ALL_FIXED {
        assert_eq!(
            is_integer(code),
            is_signed(code) || is_unsigned(code),
            "{code:?}"
        );
    }
}

#[test]
fn number_covers_bool_through_complex() {
    assert!(is_number(Code::Bool));
    assert!(is_number(Code::ULongLong));
    assert!(is_number(Code::CLongDouble));
    assert!(!is_number(Code::Datetime));
    assert!(!is_number(Code::User(0)));
}

#[test]
fn string_and_flexible() {
    assert!(is_string(Code::String));
    assert!(is_string(Code::Unicode));
    assert!(!is_string(Code::Void));
    assert!(is_flexible(Code::Void));
    assert!(!is_flexible(Code::Object));
    assert!(!is_flexible(Code::NoType));
}

#[test]
fn user_defined_is_bounded_by_registry_count() {
    assert!(!is_user_defined(Code::User(0), 0));
    assert!(is_user_defined(Code::User(0), 1));
    assert!(is_user_defined(Code::User(2), 3));
    assert!(!is_user_defined(Code::User(3), 3));
    assert!(!is_user_defined(Code::Char, 3));
}

#[test]
fn extended_is_flexible_or_user() {
    assert!(is_extended(Code::String, 0));
    assert!(is_extended(Code::User(0), 1));
    assert!(!is_extended(Code::User(0), 0));
    assert!(!is_extended(Code::Double, 5));
}

#[test]
fn host_scalar_types() {
    assert!(is_host_scalar(Code::Long));
    assert!(is_host_scalar(Code::Double));
    assert!(is_host_scalar(Code::CDouble));
    assert!(is_host_scalar(Code::Bool));
    assert!(is_host_scalar(Code::Object));
    assert!(!is_host_scalar(Code::Int));
}

#[test]
fn scalar_kind_ordering() {
    assert_eq!(scalar_kind(Code::Bool), ScalarKind::Bool);
    assert_eq!(scalar_kind(Code::UShort), ScalarKind::Integer);
    assert_eq!(scalar_kind(Code::LongDouble), ScalarKind::Float);
    assert_eq!(scalar_kind(Code::CFloat), ScalarKind::Complex);
    assert_eq!(scalar_kind(Code::Unicode), ScalarKind::Object);
    assert_eq!(scalar_kind(Code::Char), ScalarKind::None);
    assert!(ScalarKind::Integer < ScalarKind::Float);
    assert!(ScalarKind::Complex < ScalarKind::Object);
}
