//! Host conversion rules for convertible values.
//!
//! A value is convertible when it is a bool, integer, float, or string
//! (see [`Value::is_convertible`]). These functions apply the host's rules
//! for turning one of those into a boolean or an integer:
//!
//! - bool → 0 / 1
//! - float → integer rounds half to even, then range-checks; NaN and
//!   infinities fail
//! - string → parsed; booleans accept `true`/`false` in any case, integers
//!   are decimal with surrounding whitespace ignored
//! - big integers are range-checked
//!
//! Every failure is `InvalidArgumentType` tagged with the requested target.

use crate::errors::{invalid_argument_type, ConvertResult, Target};
use crate::value::Value;

/// Smallest `f64` above the `i64` range (2^63).
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Host boolean conversion.
pub fn boolean(value: &Value) -> ConvertResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Int(n) => Ok(*n != 0),
        Value::BigInt(n) => Ok(*n != 0),
        Value::Float(x) => Ok(*x != 0.0),
        Value::Str(s) => {
            let text = s.trim();
            if text.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if text.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(invalid_argument_type(Target::Boolean, value))
            }
        }
        _ => Err(invalid_argument_type(Target::Boolean, value)),
    }
}

/// Host integer conversion to 64 bits; failures are tagged with `target`.
pub fn integer(value: &Value, target: Target) -> ConvertResult<i64> {
    let fail = || invalid_argument_type(target, value);
    match value {
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Int(n) => Ok(*n),
        Value::BigInt(n) => i64::try_from(*n).map_err(|_| fail()),
        Value::Float(x) => float_to_i64(*x).ok_or_else(fail),
        Value::Str(s) => s.trim().parse::<i64>().map_err(|_| fail()),
        _ => Err(fail()),
    }
}

/// Narrow an integer already produced from `value` to `T`.
pub fn narrow<T: TryFrom<i64>>(n: i64, value: &Value, target: Target) -> ConvertResult<T> {
    T::try_from(n).map_err(|_| invalid_argument_type(target, value))
}

/// Host integer conversion to 32 bits.
pub fn int32(value: &Value) -> ConvertResult<i32> {
    let n = integer(value, Target::Int32)?;
    narrow(n, value, Target::Int32)
}

/// Host integer conversion to the platform pointer width.
pub fn intp(value: &Value) -> ConvertResult<isize> {
    let n = integer(value, Target::Intp)?;
    narrow(n, value, Target::Intp)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "range checked against the i64 bounds first"
)]
fn float_to_i64(x: f64) -> Option<i64> {
    if !x.is_finite() {
        return None;
    }
    let rounded = x.round_ties_even();
    if (-I64_UPPER..I64_UPPER).contains(&rounded) {
        Some(rounded as i64)
    } else {
        None
    }
}
