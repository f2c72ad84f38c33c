//! Category predicates over element type codes.
//!
//! All predicates are pure range or set checks on [`ElementTypeCode::raw`].
//! `NoType` and `Char` sit outside every range and satisfy none of them.

use crate::tag::{ElementTypeCode, USER_DEF_OFFSET};

type Code = ElementTypeCode;

#[inline]
const fn in_range(code: Code, lo: Code, hi: Code) -> bool {
    let raw = code.raw();
    lo.raw() <= raw && raw <= hi.raw()
}

#[inline]
pub const fn is_bool(code: Code) -> bool {
    matches!(code, Code::Bool)
}

#[inline]
pub const fn is_signed(code: Code) -> bool {
    matches!(
        code,
        Code::Byte | Code::Short | Code::Int | Code::Long | Code::LongLong
    )
}

#[inline]
pub const fn is_unsigned(code: Code) -> bool {
    matches!(
        code,
        Code::UByte | Code::UShort | Code::UInt | Code::ULong | Code::ULongLong
    )
}

#[inline]
pub const fn is_integer(code: Code) -> bool {
    in_range(code, Code::Byte, Code::ULongLong)
}

#[inline]
pub const fn is_float(code: Code) -> bool {
    in_range(code, Code::Float, Code::LongDouble)
}

#[inline]
pub const fn is_complex(code: Code) -> bool {
    in_range(code, Code::CFloat, Code::CLongDouble)
}

/// Boolean, integer, float, or complex.
#[inline]
pub const fn is_number(code: Code) -> bool {
    code.raw() <= Code::CLongDouble.raw()
}

#[inline]
pub const fn is_string(code: Code) -> bool {
    matches!(code, Code::String | Code::Unicode)
}

/// Variable-width or structured element types.
#[inline]
pub const fn is_flexible(code: Code) -> bool {
    in_range(code, Code::String, Code::Void)
}

#[inline]
pub const fn is_datetime(code: Code) -> bool {
    in_range(code, Code::Datetime, Code::Timedelta)
}

/// Types a bare host scalar maps to without an explicit dtype.
#[inline]
pub const fn is_host_scalar(code: Code) -> bool {
    matches!(
        code,
        Code::Long | Code::Double | Code::CDouble | Code::Bool | Code::Object
    )
}

/// True for codes in `[USER_DEF_OFFSET, USER_DEF_OFFSET + user_type_count)`.
///
/// The engine owns the registry of user types and supplies the count.
#[inline]
pub const fn is_user_defined(code: Code, user_type_count: usize) -> bool {
    let raw = code.raw() as usize;
    let offset = USER_DEF_OFFSET as usize;
    raw >= offset && raw - offset < user_type_count
}

#[inline]
pub const fn is_extended(code: Code, user_type_count: usize) -> bool {
    is_flexible(code) || is_user_defined(code, user_type_count)
}

/// Coarse scalar category, ordered from least to most general.
///
/// A scalar may be coerced into an array of another type without upcasting
/// only when its kind does not outrank the array's kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ScalarKind {
    /// Sentinel codes carry no scalar kind.
    None,
    Bool,
    Integer,
    Float,
    Complex,
    Object,
}

pub const fn scalar_kind(code: Code) -> ScalarKind {
    if is_bool(code) {
        ScalarKind::Bool
    } else if is_integer(code) {
        ScalarKind::Integer
    } else if is_float(code) {
        ScalarKind::Float
    } else if is_complex(code) {
        ScalarKind::Complex
    } else if matches!(code, Code::NoType | Code::Char) {
        ScalarKind::None
    } else {
        ScalarKind::Object
    }
}

#[cfg(test)]
mod tests;
