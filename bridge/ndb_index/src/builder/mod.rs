//! Index builder: raw subscript arguments to an [`IndexExpression`].
//!
//! # Argument Shapes
//!
//! A subscript like `a[1, 0:5, None]` arrives as several arguments and each
//! is converted on its own. `a[x]` arrives as one argument, and then the
//! question is whether `x` is a tuple of per-axis indices or one fancy
//! selector. Arrays and strings are always a single index. Other sequences
//! are split per member only when [`IndexBuilder::is_sequence_tuple`] says
//! so.
//!
//! # Conversion Order
//!
//! [`IndexBuilder::convert_single`] classifies by the first matching rule:
//! `None`, ellipsis, bool, int, slice, string, 0-d bool array, 0-d integer
//! array, other array, sequence, other convertible value.

use ndb_types::{is_bool, is_integer, EngineInfo};
use ndb_value::errors::{
    invalid_index_array_type, not_a_valid_index, ragged_index, too_many_indices,
    zero_slice_step,
};
use ndb_value::{coerce, ArrayRef, ConvertResult, Shape, SliceValue, Value};

use crate::axis::{AxisIndex, IndexArray, RangeIndex};
use crate::expr::IndexExpression;

/// Builds index expressions against the limits reported by `E`.
#[derive(Clone, Debug, Default)]
pub struct IndexBuilder<E> {
    info: E,
}

impl<E: EngineInfo> IndexBuilder<E> {
    pub fn new(info: E) -> Self {
        IndexBuilder { info }
    }

    pub fn info(&self) -> &E {
        &self.info
    }

    /// Convert subscript arguments into an index expression.
    ///
    /// # Errors
    ///
    /// - `TooManyIndices` for more than `max_dims` arguments, or when the
    ///   entries would address more than `max_dims` axes
    /// - `InvalidIndexArrayType` for arrays that are neither integer nor bool
    /// - `InvalidIndexValue` for values with no index interpretation
    #[tracing::instrument(level = "debug", skip_all, fields(count = args.len()))]
    pub fn build(&self, args: &[Value]) -> ConvertResult<IndexExpression> {
        let max_dims = self.info.max_dims();
        let mut expr = IndexExpression::new(max_dims);

        match args {
            [arg] => match arg {
                Value::Array(_) | Value::Str(_) => self.convert_single(arg, &mut expr)?,
                _ => match arg.as_sequence() {
                    Some(members) if self.is_sequence_tuple(members) => {
                        for member in members {
                            self.convert_single(member, &mut expr)?;
                        }
                    }
                    _ => self.convert_single(arg, &mut expr)?,
                },
            },
            _ => {
                if args.len() > max_dims {
                    return Err(too_many_indices(args.len(), max_dims));
                }
                for arg in args {
                    self.convert_single(arg, &mut expr)?;
                }
            }
        }

        tracing::debug!(%expr, consumed = expr.consumed_axes(), "built index");
        Ok(expr)
    }

    /// Whether a lone sequence argument is a tuple of per-axis indices.
    ///
    /// A sequence longer than `max_dims` is always one fancy selector, even
    /// if it holds slices; the length check comes first. Otherwise it is a
    /// tuple when any member is `None`, an ellipsis, a slice, or a sequence.
    pub fn is_sequence_tuple(&self, members: &[Value]) -> bool {
        if members.len() > self.info.max_dims() {
            return false;
        }
        members.iter().any(|member| {
            matches!(
                member,
                Value::None | Value::Ellipsis | Value::Slice(_) | Value::List(_) | Value::Tuple(_)
            )
        })
    }

    /// Convert one argument and append it to `expr`.
    pub fn convert_single(&self, arg: &Value, expr: &mut IndexExpression) -> ConvertResult<()> {
        let entry = match arg {
            Value::None => AxisIndex::NewAxis,
            Value::Ellipsis => AxisIndex::Ellipsis,
            Value::Bool(b) => AxisIndex::Bool(*b),
            Value::Int(_) => AxisIndex::Int(coerce::intp(arg)?),
            Value::BigInt(n) => AxisIndex::Int(truncate_big(*n, arg)?),
            Value::Slice(slice) => AxisIndex::Range(convert_slice(slice, arg)?),
            Value::Str(name) => AxisIndex::Field(name.as_str().to_owned()),
            Value::Array(array) => convert_array(array)?,
            Value::List(items) | Value::Tuple(items) => {
                AxisIndex::IntArray(self.convert_sequence(arg, items)?)
            }
            Value::Float(_) => AxisIndex::Int(coerce::intp(arg)?),
            Value::Opaque(_) => return Err(not_a_valid_index(arg)),
        };
        expr.push(entry)
    }

    /// Build a row-major integer selector from nested sequences.
    ///
    /// The shape follows the first member at every level; any member that
    /// disagrees makes the whole argument ragged.
    fn convert_sequence(&self, root: &Value, items: &[Value]) -> ConvertResult<IndexArray> {
        let max_dims = self.info.max_dims();
        let mut shape = Shape::new();
        shape.push(items.len());
        let mut first = items.first();
        while let Some(inner) = first.and_then(Value::as_sequence) {
            if shape.len() >= max_dims {
                return Err(too_many_indices(shape.len() + 1, max_dims));
            }
            shape.push(inner.len());
            first = inner.first();
        }

        // The shape is only a guess until every member has been visited.
        if shape.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n)).is_none() {
            return Err(ragged_index(root));
        }
        let mut values = Vec::new();
        fill_selector(root, items, &shape, &mut values)?;
        Ok(IndexArray::Converted { shape, values })
    }
}

impl IndexBuilder<ndb_types::StaticEngineInfo> {
    /// Builder with the compile-time engine limits.
    pub fn with_defaults() -> Self {
        IndexBuilder::new(ndb_types::StaticEngineInfo)
    }
}

fn fill_selector(
    root: &Value,
    items: &[Value],
    shape: &[usize],
    out: &mut Vec<isize>,
) -> ConvertResult<()> {
    let Some((&extent, inner_shape)) = shape.split_first() else {
        return Err(ragged_index(root));
    };
    if items.len() != extent {
        return Err(ragged_index(root));
    }
    for item in items {
        match (item.as_sequence(), inner_shape.is_empty()) {
            (Some(inner), false) => fill_selector(root, inner, inner_shape, out)?,
            (None, true) => out.push(selector_element(item)?),
            _ => return Err(ragged_index(root)),
        }
    }
    Ok(())
}

fn selector_element(item: &Value) -> ConvertResult<isize> {
    match item {
        Value::Array(array) if array.is_integer_scalar() || array.is_bool_scalar() => {
            scalar_item(array, item).and_then(|v| coerce::intp(&v))
        }
        _ if item.is_convertible() => coerce::intp(item),
        _ => Err(not_a_valid_index(item)),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "host big integers keep their low 64 bits"
)]
fn truncate_big(n: i128, arg: &Value) -> ConvertResult<isize> {
    let low = n as i64;
    coerce::narrow(low, arg, ndb_value::Target::Intp)
}

fn convert_slice(slice: &SliceValue, arg: &Value) -> ConvertResult<RangeIndex> {
    let bound = |value: &Value| match value {
        Value::None => Ok(None),
        _ => coerce::intp(value).map(Some),
    };
    let range = RangeIndex {
        start: bound(&slice.start)?,
        stop: bound(&slice.stop)?,
        step: bound(&slice.step)?,
    };
    if range.step == Some(0) {
        return Err(zero_slice_step(arg));
    }
    Ok(range)
}

fn scalar_item(array: &ArrayRef, arg: &Value) -> ConvertResult<Value> {
    array.item().ok_or_else(|| not_a_valid_index(arg))
}

fn convert_array(array: &ArrayRef) -> ConvertResult<AxisIndex> {
    let arg = Value::Array(array.clone());
    if array.is_bool_scalar() {
        let item = scalar_item(array, &arg)?;
        return Ok(AxisIndex::Bool(coerce::boolean(&item)?));
    }
    if array.is_integer_scalar() {
        let item = scalar_item(array, &arg)?;
        return Ok(AxisIndex::Int(coerce::intp(&item)?));
    }
    let dtype = array.dtype();
    if is_integer(dtype) {
        Ok(AxisIndex::IntArray(IndexArray::Native(array.clone())))
    } else if is_bool(dtype) {
        Ok(AxisIndex::BoolMask(array.clone()))
    } else {
        Err(invalid_index_array_type(dtype))
    }
}
