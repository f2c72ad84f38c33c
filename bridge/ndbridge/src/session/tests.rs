use super::*;
use ndb_index::AxisIndex;
use ndb_types::ArrayFlags;
use ndb_value::ConvertErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn default_session_uses_engine_limits() {
    let bridge = Bridge::with_defaults();
    assert_eq!(bridge.info(), &BridgeConfig::default());
    let expr = bridge.index(&[Value::Int(3)]).unwrap();
    assert_eq!(expr.entries(), &[AxisIndex::Int(3)]);
    assert_eq!(expr.max_dims(), ndb_types::MAX_DIMS);
}

#[test]
fn configured_max_dims_bounds_indices() {
    let bridge = Bridge::new(BridgeConfig::new().with_max_dims(2));
    let err = bridge
        .index(&[Value::Int(0), Value::Int(1), Value::Int(2)])
        .unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::TooManyIndices { count: 3, max: 2 });
    assert_eq!(
        err.message,
        "Too many indices: 3 given, at most 2 allowed"
    );
}

#[test]
fn user_types_follow_the_registered_count() {
    let bridge = Bridge::new(BridgeConfig::new().with_user_type_count(2));
    let first = ElementTypeCode::User(0);
    let second = ElementTypeCode::User(1);
    let unregistered = ElementTypeCode::User(2);

    assert!(bridge.is_user_defined(first));
    assert!(bridge.is_user_defined(second));
    assert!(!bridge.is_user_defined(unregistered));
    assert!(bridge.is_extended(second));
    assert!(bridge.is_extended(ElementTypeCode::Void));
    assert!(!bridge.is_extended(ElementTypeCode::Double));

    assert!(!Bridge::with_defaults().is_user_defined(first));
}

#[test]
fn common_type_delegates() {
    let bridge = Bridge::with_defaults();
    let common = bridge
        .common_type(&[Value::Int(1), Value::Float(2.5)])
        .unwrap();
    assert_eq!(common.code, ElementTypeCode::Double);
    assert_eq!(common.plan, vec![ArrayFlags::CARRAY; 2]);
}
