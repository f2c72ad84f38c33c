//! Element type codes for dtype-driven dispatch.
//!
//! Every array element type has an `ElementTypeCode`. The raw ordinal of a
//! code is significant: category predicates in [`crate::classify`] are
//! contiguous range checks over it.
//!
//! # Code Ranges
//!
//! - 0: Boolean
//! - 1-10: Integers (signed/unsigned pairs, narrowest first)
//! - 11-13: Floating point
//! - 14-16: Complex
//! - 17-18: Datetime family
//! - 19: Object
//! - 20-22: Flexible (string, unicode, void/structured)
//! - 23: builtin count (not a type)
//! - 24-25: Sentinels (`NoType`, `Char`)
//! - 256+: User-defined types
//!
//! The relative order is append-only. Moving a code means re-deriving every
//! range predicate.

use std::fmt;

/// First raw code of the user-defined range.
///
/// Leaves room below it for the character-coded builtins.
pub const USER_DEF_OFFSET: u16 = 256;

/// Largest user offset whose raw code still fits in a `u16`.
pub const MAX_USER_OFFSET: u16 = u16::MAX - USER_DEF_OFFSET;

/// Number of builtin data type codes (`Bool..=Void`).
pub const BUILTIN_COUNT: u16 = 23;

/// Element type code of an array.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementTypeCode {
    // === Boolean (0) ===
    Bool,

    // === Integers (1-10) ===
    /// 8-bit signed integer.
    Byte,
    /// 8-bit unsigned integer.
    UByte,
    /// C `short`.
    Short,
    /// C `unsigned short`.
    UShort,
    /// C `int`.
    Int,
    /// C `unsigned int`.
    UInt,
    /// C `long`.
    Long,
    /// C `unsigned long`.
    ULong,
    /// C `long long`.
    LongLong,
    /// C `unsigned long long`.
    ULongLong,

    // === Floating point (11-13) ===
    Float,
    Double,
    LongDouble,

    // === Complex (14-16) ===
    CFloat,
    CDouble,
    CLongDouble,

    // === Datetime family (17-18) ===
    Datetime,
    Timedelta,

    // === Object (19) ===
    /// Opaque host object reference.
    Object,

    // === Flexible (20-22) ===
    /// Fixed-width byte string.
    String,
    /// Fixed-width unicode string.
    Unicode,
    /// Structured or raw-bytes record.
    Void,

    // === Sentinels (24-25) ===
    /// "No type" marker.
    NoType,
    /// Special character flag.
    Char,

    // === User-defined (256+) ===
    /// Registered user type, stored as its offset from [`USER_DEF_OFFSET`].
    ///
    /// Offsets above [`MAX_USER_OFFSET`] have no raw code of their own; build
    /// user codes with [`ElementTypeCode::user`] to keep them in range.
    User(u16),
}

impl ElementTypeCode {
    /// All builtin data type codes in enumeration order (`Bool..=Void`).
    pub const BUILTINS: [ElementTypeCode; BUILTIN_COUNT as usize] = [
        Self::Bool,
        Self::Byte,
        Self::UByte,
        Self::Short,
        Self::UShort,
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::ULong,
        Self::LongLong,
        Self::ULongLong,
        Self::Float,
        Self::Double,
        Self::LongDouble,
        Self::CFloat,
        Self::CDouble,
        Self::CLongDouble,
        Self::Datetime,
        Self::Timedelta,
        Self::Object,
        Self::String,
        Self::Unicode,
        Self::Void,
    ];

    /// Pointer-sized signed integer code (`intp`).
    #[cfg(target_pointer_width = "64")]
    pub const INTP: ElementTypeCode = Self::Long;
    /// Pointer-sized signed integer code (`intp`).
    #[cfg(not(target_pointer_width = "64"))]
    pub const INTP: ElementTypeCode = Self::Int;

    /// Pointer-sized unsigned integer code (`uintp`).
    #[cfg(target_pointer_width = "64")]
    pub const UINTP: ElementTypeCode = Self::ULong;
    /// Pointer-sized unsigned integer code (`uintp`).
    #[cfg(not(target_pointer_width = "64"))]
    pub const UINTP: ElementTypeCode = Self::UInt;

    /// User-defined code at `offset`, or `None` past [`MAX_USER_OFFSET`].
    pub const fn user(offset: u16) -> Option<Self> {
        if offset > MAX_USER_OFFSET {
            return None;
        }
        Some(Self::User(offset))
    }

    /// The raw ordinal used by the native engine.
    ///
    /// A `User` offset above [`MAX_USER_OFFSET`] clamps to `u16::MAX`.
    #[inline]
    pub const fn raw(self) -> u16 {
        match self {
            Self::Bool => 0,
            Self::Byte => 1,
            Self::UByte => 2,
            Self::Short => 3,
            Self::UShort => 4,
            Self::Int => 5,
            Self::UInt => 6,
            Self::Long => 7,
            Self::ULong => 8,
            Self::LongLong => 9,
            Self::ULongLong => 10,
            Self::Float => 11,
            Self::Double => 12,
            Self::LongDouble => 13,
            Self::CFloat => 14,
            Self::CDouble => 15,
            Self::CLongDouble => 16,
            Self::Datetime => 17,
            Self::Timedelta => 18,
            Self::Object => 19,
            Self::String => 20,
            Self::Unicode => 21,
            Self::Void => 22,
            Self::NoType => 24,
            Self::Char => 25,
            Self::User(offset) => USER_DEF_OFFSET.saturating_add(offset),
        }
    }

    /// Decode a raw ordinal.
    ///
    /// Returns `None` for the builtin count (23) and the reserved gap 26-255.
    pub const fn from_raw(raw: u16) -> Option<Self> {
        if raw < BUILTIN_COUNT {
            return Some(Self::BUILTINS[raw as usize]);
        }
        match raw {
            24 => Some(Self::NoType),
            25 => Some(Self::Char),
            _ if raw >= USER_DEF_OFFSET => Some(Self::User(raw - USER_DEF_OFFSET)),
            _ => None,
        }
    }

    /// The single-character type code, if the type has one.
    pub const fn type_char(self) -> Option<char> {
        let c = match self {
            Self::Bool => '?',
            Self::Byte => 'b',
            Self::UByte => 'B',
            Self::Short => 'h',
            Self::UShort => 'H',
            Self::Int => 'i',
            Self::UInt => 'I',
            Self::Long => 'l',
            Self::ULong => 'L',
            Self::LongLong => 'q',
            Self::ULongLong => 'Q',
            Self::Float => 'f',
            Self::Double => 'd',
            Self::LongDouble => 'g',
            Self::CFloat => 'F',
            Self::CDouble => 'D',
            Self::CLongDouble => 'G',
            Self::Datetime => 'M',
            Self::Timedelta => 'm',
            Self::Object => 'O',
            Self::String => 'S',
            Self::Unicode => 'U',
            Self::Void => 'V',
            Self::Char => 'c',
            Self::NoType | Self::User(_) => return None,
        };
        Some(c)
    }

    /// Decode a single-character type code.
    ///
    /// Accepts the legacy `'a'` spelling of the string type and the
    /// pointer-sized integer letters `'p'` / `'P'`.
    pub const fn from_type_char(c: char) -> Option<Self> {
        let code = match c {
            '?' => Self::Bool,
            'b' => Self::Byte,
            'B' => Self::UByte,
            'h' => Self::Short,
            'H' => Self::UShort,
            'i' => Self::Int,
            'I' => Self::UInt,
            'l' => Self::Long,
            'L' => Self::ULong,
            'q' => Self::LongLong,
            'Q' => Self::ULongLong,
            'f' => Self::Float,
            'd' => Self::Double,
            'g' => Self::LongDouble,
            'F' => Self::CFloat,
            'D' => Self::CDouble,
            'G' => Self::CLongDouble,
            'M' => Self::Datetime,
            'm' => Self::Timedelta,
            'O' => Self::Object,
            'S' | 'a' => Self::String,
            'U' => Self::Unicode,
            'V' => Self::Void,
            'c' => Self::Char,
            'p' => Self::INTP,
            'P' => Self::UINTP,
            _ => return None,
        };
        Some(code)
    }

    /// Get the name of this code as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::UByte => "ubyte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::LongLong => "longlong",
            Self::ULongLong => "ulonglong",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "longdouble",
            Self::CFloat => "cfloat",
            Self::CDouble => "cdouble",
            Self::CLongDouble => "clongdouble",
            Self::Datetime => "datetime",
            Self::Timedelta => "timedelta",
            Self::Object => "object",
            Self::String => "string",
            Self::Unicode => "unicode",
            Self::Void => "void",
            Self::NoType => "notype",
            Self::Char => "char",
            Self::User(_) => "user",
        }
    }
}

impl fmt::Debug for ElementTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(offset) => write!(f, "ElementTypeCode::User({offset})"),
            _ => write!(f, "ElementTypeCode::{}", self.name()),
        }
    }
}

impl fmt::Display for ElementTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(offset) => write!(f, "user#{offset}"),
            _ => f.write_str(self.name()),
        }
    }
}
