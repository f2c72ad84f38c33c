//! Canonical mode enums consumed by the native engine.
//!
//! Discriminants match the engine's integer encodings.

use std::fmt;

/// Memory layout requested for a result array.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum MemoryOrder {
    /// Keep whatever layout the input has.
    Any = -1,
    /// Row-major.
    C = 0,
    /// Column-major.
    Fortran = 1,
}

/// Out-of-bounds handling for `take`/`put`/`choose`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum ClipMode {
    Clip = 0,
    Wrap = 1,
    Raise = 2,
}

impl ClipMode {
    /// Decode the engine's integer encoding.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Clip),
            1 => Some(Self::Wrap),
            2 => Some(Self::Raise),
            _ => None,
        }
    }
}

/// Sorting algorithm.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum SortKind {
    Quick = 0,
    Heap = 1,
    Merge = 2,
}

/// Which side of equal elements `searchsorted` returns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum SearchSide {
    Left = 0,
    Right = 1,
}

/// Byte order of array data.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    Big,
    Little,
    Native,
    /// Swap relative to the current order.
    Swap,
}

impl ByteOrder {
    /// The engine's single-character encoding.
    pub const fn as_char(self) -> char {
        match self {
            Self::Big => '>',
            Self::Little => '<',
            Self::Native => '=',
            Self::Swap => 's',
        }
    }

    /// Decode the canonical character (not the user-facing aliases).
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::Big),
            '<' => Some(Self::Little),
            '=' => Some(Self::Native),
            's' => Some(Self::Swap),
            _ => None,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
