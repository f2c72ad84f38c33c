//! Ndb Value - the dynamic value model and conversion errors.
//!
//! Callers hand the bridge loosely-typed host values. This crate defines
//! that closed set of values, the array operand trait, the host's primitive
//! conversion rules, and the failure taxonomy every converter reports
//! through.

pub mod coerce;
pub mod errors;
mod value;

pub use errors::{
    ConvertError, ConvertErrorKind, ConvertResult, IndexFault, ModeKeyword, NamedArgumentFault,
    Target,
};
pub use value::{ArrayLike, ArrayRef, Heap, HostArray, Shape, SliceValue, Value};
