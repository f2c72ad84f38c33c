use super::*;
use ndb_types::ElementTypeCode;
use pretty_assertions::assert_eq;

#[test]
fn display_matches_host_repr() {
    assert_eq!(Value::None.to_string(), "None");
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::Int(-7).to_string(), "-7");
    assert_eq!(Value::BigInt(1 << 70).to_string(), "1180591620717411303424");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
    assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-inf");
    assert_eq!(Value::string("abc").to_string(), "abc");
    assert_eq!(Value::opaque("dict").to_string(), "<dict object>");
}

#[test]
fn display_composites() {
    let list = Value::list(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(list.to_string(), "[1, 2]");
    assert_eq!(Value::tuple(vec![Value::Int(1)]).to_string(), "(1,)");
    assert_eq!(
        Value::range(Some(0), Some(5), None).to_string(),
        "slice(0, 5, None)"
    );
    let array = Value::array(HostArray::from_ints(&[1, 2, 3]));
    assert_eq!(
        array.to_string(),
        format!("array(dtype={}, shape=(3,))", ElementTypeCode::INTP)
    );
}

#[test]
fn convertible_kinds() {
    assert!(Value::Bool(false).is_convertible());
    assert!(Value::Int(0).is_convertible());
    assert!(Value::BigInt(0).is_convertible());
    assert!(Value::Float(0.5).is_convertible());
    assert!(Value::string("1").is_convertible());
    assert!(!Value::None.is_convertible());
    assert!(!Value::Ellipsis.is_convertible());
    assert!(!Value::list(vec![]).is_convertible());
    assert!(!Value::opaque("object").is_convertible());
}

#[test]
fn sequences_exclude_strings() {
    assert_eq!(
        Value::tuple(vec![Value::Int(1)]).as_sequence(),
        Some(&[Value::Int(1)][..])
    );
    assert!(Value::string("ab").as_sequence().is_none());
    assert!(Value::array(HostArray::from_ints(&[1])).as_sequence().is_none());
}

#[test]
fn array_equality_is_identity() {
    let a = HostArray::from_ints(&[1, 2]).into_ref();
    let b = HostArray::from_ints(&[1, 2]).into_ref();
    assert_eq!(Value::Array(a.clone()), Value::Array(a.clone()));
    assert_ne!(Value::Array(a), Value::Array(b));
}

#[test]
fn host_array_shapes() {
    assert!(HostArray::new(ElementTypeCode::Double, &[2, 3], vec![Value::Float(0.0); 6]).is_some());
    assert!(HostArray::new(ElementTypeCode::Double, &[2, 3], vec![Value::Float(0.0); 5]).is_none());

    let scalar = HostArray::scalar(ElementTypeCode::Bool, Value::Bool(true)).into_ref();
    assert_eq!(scalar.ndim(), 0);
    assert_eq!(scalar.len(), 1);
    assert_eq!(scalar.item(), Some(Value::Bool(true)));
    assert!(scalar.is_bool_scalar());
    assert!(!scalar.is_integer_scalar());

    let vector = HostArray::from_bools(&[true, false]).into_ref();
    assert_eq!(vector.item(), None);
    assert_eq!(vector.shape(), &[2]);
}

#[test]
fn heap_values_share_payload() {
    let s = Value::string("shared");
    let t = s.clone();
    match (&s, &t) {
        (Value::Str(a), Value::Str(b)) => assert!(Heap::ptr_eq(a, b)),
        _ => panic!("expected strings"),
    }
}
