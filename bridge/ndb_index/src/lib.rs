//! Ndb Index - canonical index expressions for the ndarray bridge.
//!
//! Turns the raw arguments of a subscript (`a[1, 0:5, None]`, `a[mask]`,
//! `a[[0, 2]]`) into an [`IndexExpression`]: an ordered list of
//! [`AxisIndex`] entries that the execution layer applies to storage.
//!
//! Building never touches array data. It validates shapes of the
//! description only: dtype of index arrays, slice steps, and the number of
//! axes addressed.

mod axis;
mod builder;
mod expr;

pub use axis::{AxisIndex, IndexArray, RangeIndex};
pub use builder::IndexBuilder;
pub use expr::IndexExpression;
