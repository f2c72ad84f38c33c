//! Ndb Args - argument conversion for engine method calls.
//!
//! Converts loosely-typed call arguments into the canonical values the
//! native engine takes:
//!
//! - Scalars: booleans, 32-bit and pointer-sized integers, axes, dimension
//!   lists
//! - Mode strings: clip mode, memory order, byte order, sort kind, search side
//! - Keyword binding of positional and named arguments ([`Signature`])
//! - Common element type inference over operand collections
//!
//! All converters are pure. Failures are [`ConvertError`]s whose message
//! quotes the offending input.
//!
//! [`ConvertError`]: ndb_value::ConvertError

mod common;
mod keywords;
mod modes;
mod scalar;

pub use common::{common_type, value_type, CommonType};
pub use keywords::{
    build_args, BoundArgs, Signature, ARGSORT, CHOOSE, COPY, CUMSUM, FLATTEN, METHODS,
    NEWBYTEORDER, PUT, RAVEL, REPEAT, SEARCHSORTED, SORT, TAKE,
};
pub use modes::{to_byte_order, to_clip_mode, to_memory_order, to_search_side, to_sort_kind};
pub use scalar::{
    to_axis, to_boolean, to_int32, to_int_array, to_intp, to_intp_list, Dims, AXIS_NONE,
};
