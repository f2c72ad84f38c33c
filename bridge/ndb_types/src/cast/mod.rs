//! Safe-cast rules and type promotion.
//!
//! A cast is safe when every value of the source type is representable in
//! the destination type. Promotion picks the first builtin code, in
//! enumeration order, that both inputs cast to safely, with `Object` as the
//! last resort.

use std::ffi::{c_int, c_long, c_longlong, c_short};
use std::mem::size_of;

use crate::classify::{is_complex, is_float, is_number, is_signed, is_unsigned};
use crate::tag::ElementTypeCode;

type Code = ElementTypeCode;

/// Size of `long double` on the platform ABI the engine is built for.
const LONG_DOUBLE_SIZE: usize = 16;

/// Element size in bytes for fixed-width codes.
///
/// Flexible types are sized per array, so they return `None`, as do the
/// sentinels and user-defined codes.
pub const fn item_size(code: Code) -> Option<usize> {
    let size = match code {
        Code::Bool | Code::Byte | Code::UByte => 1,
        Code::Short | Code::UShort => size_of::<c_short>(),
        Code::Int | Code::UInt => size_of::<c_int>(),
        Code::Long | Code::ULong => size_of::<c_long>(),
        Code::LongLong | Code::ULongLong => size_of::<c_longlong>(),
        Code::Float => 4,
        Code::Double | Code::Datetime | Code::Timedelta => 8,
        Code::LongDouble => LONG_DOUBLE_SIZE,
        Code::CFloat => 8,
        Code::CDouble => 16,
        Code::CLongDouble => 2 * LONG_DOUBLE_SIZE,
        Code::Object => size_of::<usize>(),
        Code::String | Code::Unicode | Code::Void | Code::NoType | Code::Char | Code::User(_) => {
            return None
        }
    };
    Some(size)
}

fn size(code: Code) -> usize {
    item_size(code).unwrap_or(0)
}

/// Check whether every value of `from` is representable in `to`.
pub fn can_cast_safely(from: Code, to: Code) -> bool {
    if from == to || to == Code::Object {
        return true;
    }
    match from {
        Code::Bool => is_number(to),
        _ if is_signed(from) => {
            (is_signed(to) && size(to) >= size(from)) || integer_to_inexact(from, to)
        }
        _ if is_unsigned(from) => {
            (is_unsigned(to) && size(to) >= size(from))
                || (is_signed(to) && size(to) > size(from))
                || integer_to_inexact(from, to)
        }
        _ if is_float(from) => {
            (is_float(to) && size(to) >= size(from))
                || (is_complex(to) && size(to) / 2 >= size(from))
        }
        _ if is_complex(from) => is_complex(to) && size(to) >= size(from),
        Code::String => to == Code::Unicode,
        _ => false,
    }
}

/// Integers narrower than 8 bytes need a wider mantissa; 8-byte and wider
/// integers may go to a float of the same size.
fn integer_to_inexact(from: Code, to: Code) -> bool {
    let from_size = size(from);
    let to_size = if is_float(to) {
        size(to)
    } else if is_complex(to) {
        size(to) / 2
    } else {
        return false;
    };
    if from_size < 8 {
        to_size > from_size
    } else {
        to_size >= from_size
    }
}

/// The smallest builtin code both `a` and `b` cast to safely.
///
/// `Object` is only chosen when no other builtin fits.
pub fn promote(a: Code, b: Code) -> Code {
    if a == b {
        return a;
    }
    ElementTypeCode::BUILTINS
        .into_iter()
        .find(|&candidate| {
            candidate != Code::Object
                && can_cast_safely(a, candidate)
                && can_cast_safely(b, candidate)
        })
        .unwrap_or(Code::Object)
}

#[cfg(test)]
mod tests;
