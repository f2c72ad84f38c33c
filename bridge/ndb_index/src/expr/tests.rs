use super::*;
use crate::axis::{IndexArray, RangeIndex};
use ndb_types::ElementTypeCode;
use ndb_value::{ConvertErrorKind, HostArray, Shape, Value};
use pretty_assertions::assert_eq;

fn range(start: isize, stop: isize) -> AxisIndex {
    AxisIndex::Range(RangeIndex {
        start: Some(start),
        stop: Some(stop),
        step: None,
    })
}

#[test]
fn push_tracks_consumed_axes() {
    let mut expr = IndexExpression::new(32);
    expr.push(AxisIndex::Int(1)).unwrap();
    expr.push(range(0, 5)).unwrap();
    expr.push(AxisIndex::NewAxis).unwrap();
    assert_eq!(expr.len(), 3);
    assert_eq!(expr.consumed_axes(), 2);
    assert_eq!(expr.new_axis_count(), 1);
    assert!(!expr.has_ellipsis());
    assert!(!expr.is_fancy());
    assert_eq!(expr.to_string(), "[1, 0:5, newaxis]");
}

#[test]
fn zero_width_entries_never_overflow() {
    let mut expr = IndexExpression::new(2);
    for _ in 0..10 {
        expr.push(AxisIndex::NewAxis).unwrap();
    }
    expr.push(AxisIndex::Ellipsis).unwrap();
    expr.push(AxisIndex::Field("x".to_string())).unwrap();
    assert_eq!(expr.consumed_axes(), 0);
    assert!(expr.has_ellipsis());
}

#[test]
fn push_rejects_past_max_dims() {
    let mut expr = IndexExpression::new(2);
    expr.push(AxisIndex::Int(0)).unwrap();
    expr.push(AxisIndex::Int(0)).unwrap();
    let err = expr.push(AxisIndex::Int(0)).unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::TooManyIndices { count: 3, max: 2 });
    assert_eq!(expr.len(), 2);
    assert_eq!(expr.consumed_axes(), 2);
}

#[test]
fn bool_mask_consumes_its_rank() {
    let mask = HostArray::new(ElementTypeCode::Bool, &[2, 2], vec![Value::Bool(false); 4])
        .unwrap()
        .into_ref();
    let mut expr = IndexExpression::new(3);
    expr.push(AxisIndex::BoolMask(mask.clone())).unwrap();
    assert_eq!(expr.consumed_axes(), 2);
    assert!(expr.is_fancy());
    assert!(expr.push(AxisIndex::BoolMask(mask)).is_err());
    expr.push(AxisIndex::Int(0)).unwrap();
    assert_eq!(expr.consumed_axes(), 3);
}

#[test]
fn iteration_in_order() {
    let mut expr = IndexExpression::new(32);
    expr.push(AxisIndex::Ellipsis).unwrap();
    expr.push(AxisIndex::IntArray(IndexArray::Converted {
        shape: Shape::from_slice(&[2]),
        values: vec![3, 4],
    }))
    .unwrap();
    let rendered: Vec<String> = expr.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["...", "[3, 4]"]);
    let owned: Vec<AxisIndex> = expr.into_iter().collect();
    assert_eq!(owned[0], AxisIndex::Ellipsis);
}
