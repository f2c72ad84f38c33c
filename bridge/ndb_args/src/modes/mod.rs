//! Mode-string converters.
//!
//! Mode keywords are matched on their first character, case-insensitively,
//! so `"clip"`, `"C"`, and `"cLiPpEr"` all select the same mode.

use ndb_types::{ByteOrder, ClipMode, MemoryOrder, SearchSide, SortKind};
use ndb_value::errors::{empty_mode, unrecognized_mode};
use ndb_value::{coerce, ConvertResult, ModeKeyword, Value};

use crate::scalar::to_int32;

fn first_char(s: &str) -> Option<char> {
    s.chars().next().map(|c| c.to_ascii_lowercase())
}

/// Out-of-bounds mode; `None` means [`ClipMode::Raise`].
///
/// Non-string values go through [`to_int32`] and must name a valid mode.
pub fn to_clip_mode(value: &Value) -> ConvertResult<ClipMode> {
    match value {
        Value::None => Ok(ClipMode::Raise),
        Value::Str(s) => match first_char(s) {
            Some('c') => Ok(ClipMode::Clip),
            Some('w') => Ok(ClipMode::Wrap),
            Some('r') => Ok(ClipMode::Raise),
            _ => Err(unrecognized_mode(ModeKeyword::Clip, s)),
        },
        _ => {
            let raw = to_int32(value)?;
            ClipMode::from_raw(raw)
                .ok_or_else(|| unrecognized_mode(ModeKeyword::Clip, &value.to_string()))
        }
    }
}

/// Memory order; `None` means [`MemoryOrder::Any`].
///
/// A boolean selects Fortran order when true. Other convertible values are
/// read as booleans.
pub fn to_memory_order(value: &Value) -> ConvertResult<MemoryOrder> {
    let from_flag = |fortran: bool| {
        if fortran {
            MemoryOrder::Fortran
        } else {
            MemoryOrder::C
        }
    };
    match value {
        Value::None => Ok(MemoryOrder::Any),
        Value::Bool(b) => Ok(from_flag(*b)),
        Value::Str(s) => match first_char(s) {
            Some('c') => Ok(MemoryOrder::C),
            Some('f') => Ok(MemoryOrder::Fortran),
            Some('a') => Ok(MemoryOrder::Any),
            _ => Err(unrecognized_mode(ModeKeyword::Order, s)),
        },
        _ if value.is_convertible() => coerce::boolean(value).map(from_flag),
        _ => Err(unrecognized_mode(ModeKeyword::Order, &value.to_string())),
    }
}

/// Byte order; `None` means [`ByteOrder::Swap`].
pub fn to_byte_order(input: Option<&str>) -> ConvertResult<ByteOrder> {
    let Some(s) = input else {
        return Ok(ByteOrder::Swap);
    };
    match s.chars().next() {
        None => Err(empty_mode(ModeKeyword::ByteOrder)),
        Some('>' | 'b' | 'B') => Ok(ByteOrder::Big),
        Some('<' | 'l' | 'L') => Ok(ByteOrder::Little),
        Some('=' | 'n' | 'N') => Ok(ByteOrder::Native),
        Some('s' | 'S') => Ok(ByteOrder::Swap),
        Some(_) => Err(unrecognized_mode(ModeKeyword::ByteOrder, s)),
    }
}

/// Sort algorithm; `None` means [`SortKind::Quick`].
pub fn to_sort_kind(input: Option<&str>) -> ConvertResult<SortKind> {
    let Some(s) = input else {
        return Ok(SortKind::Quick);
    };
    match first_char(s) {
        None => Err(empty_mode(ModeKeyword::SortKind)),
        Some('q') => Ok(SortKind::Quick),
        Some('h') => Ok(SortKind::Heap),
        Some('m') => Ok(SortKind::Merge),
        Some(_) => Err(unrecognized_mode(ModeKeyword::SortKind, s)),
    }
}

/// Search side; `None` means [`SearchSide::Left`].
pub fn to_search_side(input: Option<&str>) -> ConvertResult<SearchSide> {
    let Some(s) = input else {
        return Ok(SearchSide::Left);
    };
    match first_char(s) {
        None => Err(empty_mode(ModeKeyword::SearchSide)),
        Some('l') => Ok(SearchSide::Left),
        Some('r') => Ok(SearchSide::Right),
        Some(_) => Err(unrecognized_mode(ModeKeyword::SearchSide, s)),
    }
}
