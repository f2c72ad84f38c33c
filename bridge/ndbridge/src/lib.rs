//! Ndbridge - argument and index normalization for a native ndarray engine.
//!
//! The calling environment passes loosely-typed values: integers, strings,
//! nested lists, slices, sub-arrays. The engine takes a small closed set of
//! canonical forms. This crate ties the pieces together:
//!
//! - [`ndb_types`]: element type codes and their categories
//! - [`ndb_value`]: the dynamic value model and [`ConvertError`]
//! - [`ndb_args`]: scalar, mode, and keyword argument conversion
//! - [`ndb_index`]: subscript arguments to an [`IndexExpression`]
//! - [`ndb_handle`]: at-most-once release of native handles
//!
//! [`Bridge`] is the entry point for callers that carry an engine
//! configuration around.

mod config;
mod session;

use std::sync::Once;

pub use config::BridgeConfig;
pub use session::Bridge;

pub use ndb_args::{
    build_args, common_type, to_axis, to_boolean, to_byte_order, to_clip_mode, to_int32,
    to_int_array, to_intp, to_memory_order, to_search_side, to_sort_kind, BoundArgs,
    CommonType, Signature, AXIS_NONE,
};
pub use ndb_handle::{CoreWrapper, Disposal, NativeEngine, NativeHandle, SlotArena};
pub use ndb_index::{AxisIndex, IndexArray, IndexBuilder, IndexExpression, RangeIndex};
pub use ndb_types::{
    ArrayFlags, ByteOrder, ClipMode, ElementTypeCode, EngineInfo, MemoryOrder, SearchSide,
    SortKind, MAX_DIMS,
};
pub use ndb_value::{
    ArrayLike, ArrayRef, ConvertError, ConvertErrorKind, ConvertResult, HostArray, Value,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and only the first call in a
/// process has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
