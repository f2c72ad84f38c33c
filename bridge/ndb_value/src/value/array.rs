//! Array operands as seen by normalization.
//!
//! Normalization never touches element storage. It needs the element type,
//! the shape, and for 0-d arrays the single item, so that is all
//! [`ArrayLike`] asks for.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use ndb_types::{is_bool, is_integer, ElementTypeCode};
use smallvec::SmallVec;

use super::Value;

/// Inline capacity for shapes; most arrays have at most four dimensions.
pub type Shape = SmallVec<[usize; 4]>;

/// An array owned by the native engine or the host.
pub trait ArrayLike: fmt::Debug + Send + Sync {
    /// Element type of the array.
    fn dtype(&self) -> ElementTypeCode;

    /// Extent of each dimension, outermost first.
    fn shape(&self) -> &[usize];

    /// The single element of a 0-d array as a host value.
    ///
    /// Returns `None` for arrays with one or more dimensions.
    fn item(&self) -> Option<Value>;

    /// Number of dimensions.
    fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Total number of elements.
    fn len(&self) -> usize {
        self.shape().iter().product()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared reference to an array operand.
///
/// Equality is identity: two refs are equal when they point at the same
/// array object.
#[derive(Clone)]
pub struct ArrayRef(Arc<dyn ArrayLike>);

impl ArrayRef {
    pub fn new<A: ArrayLike + 'static>(array: A) -> Self {
        ArrayRef(Arc::new(array))
    }

    /// 0-d array with a boolean element type.
    pub fn is_bool_scalar(&self) -> bool {
        self.ndim() == 0 && is_bool(self.dtype())
    }

    /// 0-d array with an integer element type.
    pub fn is_integer_scalar(&self) -> bool {
        self.ndim() == 0 && is_integer(self.dtype())
    }
}

impl Deref for ArrayRef {
    type Target = dyn ArrayLike;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for ArrayRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array(dtype={}, shape=(", self.dtype())?;
        for (i, extent) in self.shape().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{extent}")?;
        }
        if self.ndim() == 1 {
            write!(f, ",")?;
        }
        write!(f, "))")
    }
}

/// A host-side array: element type, shape, and row-major items.
///
/// Used by callers that have no native array at hand, and by tests.
#[derive(Clone, Debug)]
pub struct HostArray {
    dtype: ElementTypeCode,
    shape: Shape,
    items: Vec<Value>,
}

impl HostArray {
    /// Build an array, or `None` if `items` does not fill `shape` exactly.
    pub fn new(dtype: ElementTypeCode, shape: &[usize], items: Vec<Value>) -> Option<Self> {
        let expected: usize = shape.iter().product();
        if items.len() != expected {
            return None;
        }
        Some(HostArray {
            dtype,
            shape: Shape::from_slice(shape),
            items,
        })
    }

    /// A 0-d array holding `item`.
    pub fn scalar(dtype: ElementTypeCode, item: Value) -> Self {
        HostArray {
            dtype,
            shape: Shape::new(),
            items: vec![item],
        }
    }

    /// A one-dimensional `intp` array.
    pub fn from_ints(values: &[i64]) -> Self {
        HostArray {
            dtype: ElementTypeCode::INTP,
            shape: Shape::from_slice(&[values.len()]),
            items: values.iter().copied().map(Value::Int).collect(),
        }
    }

    /// A one-dimensional boolean array.
    pub fn from_bools(values: &[bool]) -> Self {
        HostArray {
            dtype: ElementTypeCode::Bool,
            shape: Shape::from_slice(&[values.len()]),
            items: values.iter().copied().map(Value::Bool).collect(),
        }
    }

    /// Items in row-major order.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Wrap into a shareable operand.
    pub fn into_ref(self) -> ArrayRef {
        ArrayRef::new(self)
    }
}

impl ArrayLike for HostArray {
    fn dtype(&self) -> ElementTypeCode {
        self.dtype
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn item(&self) -> Option<Value> {
        if self.shape.is_empty() {
            self.items.first().cloned()
        } else {
            None
        }
    }
}
