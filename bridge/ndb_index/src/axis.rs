//! Canonical per-axis index entries.

use std::fmt;

use ndb_value::{ArrayRef, Shape};

/// One entry of an index expression.
///
/// Each variant is final: the execution layer dispatches on the tag and
/// never re-interprets the payload.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisIndex {
    /// Insert a length-1 axis.
    NewAxis,
    /// Expand to as many full slices as needed.
    Ellipsis,
    /// Boolean scalar: keep (`true`) or drop (`false`) via a new axis.
    Bool(bool),
    /// Select one position; negative counts from the end.
    Int(isize),
    /// `start:stop:step`.
    Range(RangeIndex),
    /// Select a named field of a structured element.
    Field(String),
    /// Fancy selection by integer positions.
    IntArray(IndexArray),
    /// Fancy selection by a boolean mask spanning `mask.ndim()` axes.
    BoolMask(ArrayRef),
}

impl AxisIndex {
    /// Number of array axes this entry addresses.
    pub fn consumed_axes(&self) -> usize {
        match self {
            AxisIndex::NewAxis | AxisIndex::Ellipsis | AxisIndex::Bool(_) | AxisIndex::Field(_) => 0,
            AxisIndex::Int(_) | AxisIndex::Range(_) | AxisIndex::IntArray(_) => 1,
            AxisIndex::BoolMask(mask) => mask.ndim(),
        }
    }

    /// Array-valued entries that trigger advanced indexing.
    pub fn is_fancy(&self) -> bool {
        matches!(self, AxisIndex::IntArray(_) | AxisIndex::BoolMask(_))
    }
}

/// Slice bounds after conversion. `None` is an omitted bound; the step is
/// never zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RangeIndex {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl RangeIndex {
    /// The full range `:`.
    pub const FULL: RangeIndex = RangeIndex {
        start: None,
        stop: None,
        step: None,
    };
}

/// Integer selector of a fancy index.
#[derive(Clone, Debug, PartialEq)]
pub enum IndexArray {
    /// An integer-typed array passed straight through.
    Native(ArrayRef),
    /// Built from (possibly nested) host sequences, row-major.
    Converted { shape: Shape, values: Vec<isize> },
}

impl IndexArray {
    pub fn shape(&self) -> &[usize] {
        match self {
            IndexArray::Native(array) => array.shape(),
            IndexArray::Converted { shape, .. } => shape.as_slice(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Number of selected positions.
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Display

fn write_bound(f: &mut fmt::Formatter<'_>, bound: Option<isize>) -> fmt::Result {
    match bound {
        Some(n) => write!(f, "{n}"),
        None => Ok(()),
    }
}

fn write_shape(f: &mut fmt::Formatter<'_>, shape: &[usize]) -> fmt::Result {
    write!(f, "(")?;
    for (i, extent) in shape.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{extent}")?;
    }
    if shape.len() == 1 {
        write!(f, ",")?;
    }
    write!(f, ")")
}

impl fmt::Display for RangeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bound(f, self.start)?;
        write!(f, ":")?;
        write_bound(f, self.stop)?;
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AxisIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisIndex::NewAxis => write!(f, "newaxis"),
            AxisIndex::Ellipsis => write!(f, "..."),
            AxisIndex::Bool(true) => write!(f, "True"),
            AxisIndex::Bool(false) => write!(f, "False"),
            AxisIndex::Int(n) => write!(f, "{n}"),
            AxisIndex::Range(range) => write!(f, "{range}"),
            AxisIndex::Field(name) => write!(f, "'{name}'"),
            AxisIndex::IntArray(IndexArray::Converted { shape, values }) if shape.len() == 1 => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            AxisIndex::IntArray(selector) => {
                write!(f, "intp")?;
                write_shape(f, selector.shape())
            }
            AxisIndex::BoolMask(mask) => {
                write!(f, "mask")?;
                write_shape(f, mask.shape())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndb_value::HostArray;
    use pretty_assertions::assert_eq;

    #[test]
    fn consumed_axes_per_variant() {
        assert_eq!(AxisIndex::NewAxis.consumed_axes(), 0);
        assert_eq!(AxisIndex::Ellipsis.consumed_axes(), 0);
        assert_eq!(AxisIndex::Bool(true).consumed_axes(), 0);
        assert_eq!(AxisIndex::Field("x".into()).consumed_axes(), 0);
        assert_eq!(AxisIndex::Int(3).consumed_axes(), 1);
        assert_eq!(AxisIndex::Range(RangeIndex::FULL).consumed_axes(), 1);

        let mask = HostArray::new(
            ndb_types::ElementTypeCode::Bool,
            &[2, 3],
            vec![ndb_value::Value::Bool(true); 6],
        )
        .unwrap()
        .into_ref();
        assert_eq!(AxisIndex::BoolMask(mask).consumed_axes(), 2);
    }

    #[test]
    fn range_display() {
        let r = RangeIndex {
            start: Some(0),
            stop: Some(5),
            step: None,
        };
        assert_eq!(r.to_string(), "0:5");
        assert_eq!(RangeIndex::FULL.to_string(), ":");
        let r = RangeIndex {
            start: None,
            stop: Some(-1),
            step: Some(-2),
        };
        assert_eq!(r.to_string(), ":-1:-2");
    }

    #[test]
    fn selector_display_and_shape() {
        let converted = IndexArray::Converted {
            shape: Shape::from_slice(&[3]),
            values: vec![1, 2, 3],
        };
        assert_eq!(converted.len(), 3);
        assert_eq!(AxisIndex::IntArray(converted).to_string(), "[1, 2, 3]");

        let grid = IndexArray::Converted {
            shape: Shape::from_slice(&[2, 2]),
            values: vec![0, 1, 1, 0],
        };
        assert_eq!(AxisIndex::IntArray(grid).to_string(), "intp(2, 2)");

        let native = IndexArray::Native(HostArray::from_ints(&[4, 5]).into_ref());
        assert_eq!(native.shape(), &[2]);
        assert!(AxisIndex::IntArray(native).is_fancy());

        let mask = AxisIndex::BoolMask(HostArray::from_bools(&[true]).into_ref());
        assert_eq!(mask.to_string(), "mask(1,)");
    }
}
