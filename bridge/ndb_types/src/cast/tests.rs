use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn fixed_sizes() {
    assert_eq!(item_size(Code::Bool), Some(1));
    assert_eq!(item_size(Code::UByte), Some(1));
    assert_eq!(item_size(Code::Short), Some(2));
    assert_eq!(item_size(Code::Float), Some(4));
    assert_eq!(item_size(Code::CDouble), Some(16));
    assert_eq!(item_size(Code::Object), Some(size_of::<usize>()));
}

#[test]
fn flexible_and_sentinel_sizes_are_unknown() {
    for code in [
        Code::String,
        Code::Unicode,
        Code::Void,
        Code::NoType,
        Code::Char,
        Code::User(0),
    ] {
        assert_eq!(item_size(code), None, "{code:?}");
    }
}

#[test]
fn bool_casts_to_every_number() {
    for code in ElementTypeCode::BUILTINS {
        if is_number(code) {
            assert!(can_cast_safely(Code::Bool, code), "{code:?}");
        }
    }
    assert!(!can_cast_safely(Code::Bool, Code::Datetime));
}

#[test]
fn integer_widening() {
    assert!(can_cast_safely(Code::Byte, Code::Short));
    assert!(can_cast_safely(Code::Short, Code::LongLong));
    assert!(!can_cast_safely(Code::LongLong, Code::Short));
    assert!(can_cast_safely(Code::UByte, Code::Short));
    assert!(!can_cast_safely(Code::UByte, Code::Byte));
    assert!(!can_cast_safely(Code::Byte, Code::UByte));
    assert!(can_cast_safely(Code::UShort, Code::UInt));
}

#[test]
fn integers_to_floats_need_headroom() {
    assert!(can_cast_safely(Code::Short, Code::Float));
    assert!(!can_cast_safely(Code::Int, Code::Float));
    assert!(can_cast_safely(Code::Int, Code::Double));
    assert!(can_cast_safely(Code::Int, Code::CDouble));
    assert!(!can_cast_safely(Code::Int, Code::CFloat));
    assert!(can_cast_safely(Code::LongLong, Code::Double));
    assert!(can_cast_safely(Code::ULongLong, Code::CDouble));
}

#[test]
fn float_and_complex_rules() {
    assert!(can_cast_safely(Code::Float, Code::Double));
    assert!(!can_cast_safely(Code::Double, Code::Float));
    assert!(can_cast_safely(Code::Float, Code::CFloat));
    assert!(can_cast_safely(Code::Double, Code::CDouble));
    assert!(!can_cast_safely(Code::Double, Code::CFloat));
    assert!(can_cast_safely(Code::CFloat, Code::CDouble));
    assert!(!can_cast_safely(Code::CDouble, Code::Double));
}

#[test]
fn everything_casts_to_object() {
    for code in ElementTypeCode::BUILTINS {
        assert!(can_cast_safely(code, Code::Object), "{code:?}");
    }
    assert!(can_cast_safely(Code::User(7), Code::Object));
    assert!(can_cast_safely(Code::String, Code::Unicode));
    assert!(!can_cast_safely(Code::Unicode, Code::String));
}

#[test]
fn promotion_examples() {
    assert_eq!(promote(Code::Bool, Code::Int), Code::Int);
    assert_eq!(promote(Code::UByte, Code::Byte), Code::Short);
    assert_eq!(promote(Code::Byte, Code::Float), Code::Float);
    assert_eq!(promote(Code::Int, Code::Float), Code::Double);
    assert_eq!(promote(Code::LongLong, Code::Double), Code::Double);
    assert_eq!(promote(Code::Double, Code::CFloat), Code::CDouble);
    assert_eq!(promote(Code::Datetime, Code::Double), Code::Object);
    assert_eq!(promote(Code::String, Code::Unicode), Code::Unicode);
}

fn any_code() -> impl Strategy<Value = Code> {
    prop_oneof![
        (0..ElementTypeCode::BUILTINS.len()).prop_map(|i| ElementTypeCode::BUILTINS[i]),
        Just(Code::NoType),
        Just(Code::Char),
        (0u16..8).prop_map(Code::User),
    ]
}

proptest! {
    #[test]
    fn promotion_is_commutative(a in any_code(), b in any_code()) {
        prop_assert_eq!(promote(a, b), promote(b, a));
    }

    #[test]
    fn promotion_is_safe_for_both_inputs(a in any_code(), b in any_code()) {
        let result = promote(a, b);
        prop_assert!(can_cast_safely(a, result));
        prop_assert!(can_cast_safely(b, result));
    }
}
