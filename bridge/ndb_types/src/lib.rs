//! Ndb Types - element type classification for the ndarray bridge.
//!
//! This crate provides:
//! - `ElementTypeCode`, the closed enumeration of array element types
//! - Category predicates (`is_integer`, `is_flexible`, ...) as range checks
//! - Safe-cast rules and promotion
//! - Canonical engine enums (memory order, clip mode, sort kind, ...)
//! - Array and dtype flag sets
//! - Engine limits (`MAX_DIMS`) and the `EngineInfo` trait
//!
//! Nothing here allocates or fails; every query is a constant-time lookup.

mod cast;
pub mod classify;
mod engine;
mod flags;
mod modes;
mod tag;

pub use cast::{can_cast_safely, item_size, promote};
pub use classify::{
    is_bool, is_complex, is_datetime, is_extended, is_flexible, is_float, is_host_scalar,
    is_integer, is_number, is_signed, is_string, is_unsigned, is_user_defined, scalar_kind,
    ScalarKind,
};
pub use engine::{EngineInfo, StaticEngineInfo, MAX_ARGS, MAX_DIMS};
pub use flags::{ArrayFlags, DtypeFlags};
pub use modes::{ByteOrder, ClipMode, MemoryOrder, SearchSide, SortKind};
pub use tag::{ElementTypeCode, BUILTIN_COUNT, MAX_USER_OFFSET, USER_DEF_OFFSET};
