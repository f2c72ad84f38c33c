//! Scalar converters: booleans, integers, axes, and dimension lists.
//!
//! Each converter accepts its native kind directly, falls back to the host
//! conversion rules for other convertible values, and otherwise fails with
//! `InvalidArgumentType`. Only the documented `None` defaults substitute a
//! value.

use ndb_types::MAX_DIMS;
use ndb_value::coerce;
use ndb_value::errors::invalid_argument_type;
use ndb_value::{ConvertResult, Target, Value};
use smallvec::SmallVec;

/// Dimension list produced by [`to_int_array`].
pub type Dims = SmallVec<[isize; 4]>;

/// Axis sentinel meaning "no axis given": operate on the flattened array.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "MAX_DIMS is 32, well inside i32"
)]
pub const AXIS_NONE: i32 = MAX_DIMS as i32;

/// Boolean argument; `None` means `false`.
pub fn to_boolean(value: &Value) -> ConvertResult<bool> {
    match value {
        Value::None => Ok(false),
        _ => coerce::boolean(value),
    }
}

/// 32-bit integer argument; `None` means `0`.
pub fn to_int32(value: &Value) -> ConvertResult<i32> {
    match value {
        Value::None => Ok(0),
        _ => coerce::int32(value),
    }
}

/// Pointer-sized integer argument. `None` is rejected.
pub fn to_intp(value: &Value) -> ConvertResult<isize> {
    coerce::intp(value)
}

/// Convert each element with [`to_intp`], preserving order.
pub fn to_intp_list(values: &[Value]) -> ConvertResult<Vec<isize>> {
    values.iter().map(to_intp).collect()
}

/// Dimension list: a sequence gives one entry per member, a convertible
/// scalar gives a single entry, `None` gives `None`.
pub fn to_int_array(value: &Value) -> ConvertResult<Option<Dims>> {
    if let Some(members) = value.as_sequence() {
        let dims = members
            .iter()
            .map(dimension)
            .collect::<ConvertResult<Dims>>()?;
        return Ok(Some(dims));
    }
    match value {
        Value::None => Ok(None),
        _ => Ok(Some(SmallVec::from_elem(dimension(value)?, 1))),
    }
}

fn dimension(value: &Value) -> ConvertResult<isize> {
    if !value.is_convertible() {
        return Err(invalid_argument_type(Target::Dimensions, value));
    }
    let n = coerce::integer(value, Target::Int64)?;
    coerce::narrow(n, value, Target::Int64)
}

/// Axis argument; `None` means [`AXIS_NONE`].
///
/// No range check happens here: whether the axis exists depends on the
/// array it is applied to.
pub fn to_axis(value: &Value) -> ConvertResult<i32> {
    match value {
        Value::None => Ok(AXIS_NONE),
        _ => coerce::int32(value),
    }
}
