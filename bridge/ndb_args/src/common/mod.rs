//! Common element type of a collection of operands.
//!
//! Used by multi-operand methods (`choose`, concatenation) that convert every
//! operand to one element type before calling the engine.
//!
//! Operands split into array items (arrays and sequences) and scalar items.
//! Scalars only decide the type when there are no arrays, or when their kind
//! outranks the arrays' kind (a float scalar against integer arrays).
//! Otherwise they are force-cast into the array type.

use ndb_types::{promote, scalar_kind, ArrayFlags, ElementTypeCode};
use ndb_value::errors::empty_sequence;
use ndb_value::{ConvertResult, Value};

/// Inferred element type plus how to convert each operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonType {
    pub code: ElementTypeCode,
    /// Requirement flags for each operand, in input order.
    pub plan: Vec<ArrayFlags>,
}

/// Element type a single value maps to.
pub fn value_type(value: &Value) -> ElementTypeCode {
    match value {
        Value::Bool(_) => ElementTypeCode::Bool,
        Value::Int(_) => ElementTypeCode::Long,
        Value::BigInt(n) if i64::try_from(*n).is_ok() => ElementTypeCode::LongLong,
        Value::Float(_) => ElementTypeCode::Double,
        Value::Str(_) => ElementTypeCode::String,
        Value::Array(a) => a.dtype(),
        Value::List(items) | Value::Tuple(items) => items
            .iter()
            .map(value_type)
            .reduce(promote)
            .unwrap_or(ElementTypeCode::Double),
        Value::BigInt(_) | Value::None | Value::Ellipsis | Value::Slice(_) | Value::Opaque(_) => {
            ElementTypeCode::Object
        }
    }
}

fn is_array_item(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::List(_) | Value::Tuple(_))
}

fn merge(acc: Option<ElementTypeCode>, code: ElementTypeCode) -> Option<ElementTypeCode> {
    Some(acc.map_or(code, |prev| promote(prev, code)))
}

/// Infer the element type all `values` convert to.
///
/// # Errors
///
/// `EmptySequence` when `values` is empty.
#[tracing::instrument(level = "debug", skip_all, fields(count = values.len()))]
pub fn common_type(values: &[Value]) -> ConvertResult<CommonType> {
    if values.is_empty() {
        return Err(empty_sequence());
    }

    let mut array_type = None;
    let mut scalar_type = None;
    for value in values {
        let code = value_type(value);
        if is_array_item(value) {
            array_type = merge(array_type, code);
        } else {
            scalar_type = merge(scalar_type, code);
        }
    }

    let (code, force_scalars) = match (array_type, scalar_type) {
        (Some(arrays), Some(scalars)) if scalar_kind(scalars) > scalar_kind(arrays) => {
            (promote(arrays, scalars), false)
        }
        (Some(arrays), Some(_)) => (arrays, true),
        (Some(arrays), None) => (arrays, false),
        (None, scalars) => (scalars.unwrap_or(ElementTypeCode::Object), false),
    };

    let plan = values
        .iter()
        .map(|value| {
            if force_scalars && !is_array_item(value) {
                ArrayFlags::CARRAY | ArrayFlags::FORCECAST
            } else {
                ArrayFlags::CARRAY
            }
        })
        .collect();

    tracing::debug!(?code, force_scalars, "inferred common type");
    Ok(CommonType { code, plan })
}
