//! Conversion failures.
//!
//! `ConvertErrorKind` is the structured category; `ConvertError` pairs it
//! with the rendered message. The `#[cold]` factory functions at the bottom
//! of this module are the public constructors: they fill in both fields so
//! `message` always equals `kind.to_string()`.

use std::fmt;

use ndb_types::ElementTypeCode;

use crate::value::Value;

/// Result of a conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Target of a primitive conversion that failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Boolean,
    Int32,
    Int64,
    /// Pointer-sized integer.
    Intp,
    /// A list of dimensions.
    Dimensions,
}

impl Target {
    fn describe(self, value: &str) -> String {
        match self {
            Target::Boolean => format!("Unable to convert argument '{value}' to Boolean value."),
            Target::Int32 | Target::Int64 => {
                format!("Unable to convert argument '{value}' to int value.")
            }
            Target::Intp => "Argument can't be converted to an integer.".to_string(),
            Target::Dimensions => "unsupported type for dimensions".to_string(),
        }
    }
}

/// Mode keyword whose string form failed to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModeKeyword {
    Clip,
    Order,
    ByteOrder,
    SortKind,
    SearchSide,
}

impl ModeKeyword {
    fn unrecognized(self, input: &str) -> String {
        match self {
            ModeKeyword::Clip => "clipmode not understood".to_string(),
            ModeKeyword::Order => "order not understood".to_string(),
            ModeKeyword::ByteOrder => format!("{input} is an unrecognized byte order"),
            ModeKeyword::SortKind => format!("{input} is an unrecognized sort kind"),
            ModeKeyword::SearchSide => format!("'{input}' is an invalid value for keyword 'side'"),
        }
    }

    fn empty(self) -> &'static str {
        match self {
            ModeKeyword::Clip => "clipmode not understood",
            ModeKeyword::Order => "order not understood",
            ModeKeyword::ByteOrder => "byte-order string must be at least length 1",
            ModeKeyword::SortKind => "sort kind string must be at least length 1",
            ModeKeyword::SearchSide => "expected nonempty string for keyword 'side'",
        }
    }
}

impl fmt::Display for ModeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModeKeyword::Clip => "mode",
            ModeKeyword::Order => "order",
            ModeKeyword::ByteOrder => "byteorder",
            ModeKeyword::SortKind => "kind",
            ModeKeyword::SearchSide => "side",
        };
        f.write_str(name)
    }
}

/// Why an index value was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexFault {
    /// No conversion to an index exists.
    NotAnIndex,
    /// A slice with step zero.
    ZeroStep,
    /// Nested sequences whose lengths disagree.
    Ragged,
}

impl IndexFault {
    fn describe(self, value: &str) -> String {
        match self {
            IndexFault::NotAnIndex => format!("Argument '{value}' is not a valid index."),
            IndexFault::ZeroStep => "slice step cannot be zero".to_string(),
            IndexFault::Ragged => {
                format!("Argument '{value}' is not a valid index: nested sequences differ in length.")
            }
        }
    }
}

/// How a named argument collided with the declared parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedArgumentFault {
    /// Given both positionally and by name.
    Duplicate,
    /// Matches no declared parameter.
    Unknown,
}

impl NamedArgumentFault {
    fn describe(self, name: &str) -> String {
        match self {
            NamedArgumentFault::Duplicate => {
                format!("Argument '{name}' is specified both positionally and by name.")
            }
            NamedArgumentFault::Unknown => format!("Unknown named argument '{name}' was specified."),
        }
    }
}

/// Typed conversion failure category.
///
/// Variants carry the offending input rendered as the host would print it,
/// so messages quote it verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertErrorKind {
    // Scalars
    #[error("{}", .target.describe(.value))]
    InvalidArgumentType { target: Target, value: String },

    // Modes
    #[error("{}", .keyword.unrecognized(.input))]
    UnrecognizedModeString { keyword: ModeKeyword, input: String },
    #[error("{}", .keyword.empty())]
    EmptyModeString { keyword: ModeKeyword },

    // Indexing
    #[error("Too many indices: {count} given, at most {max} allowed")]
    TooManyIndices { count: usize, max: usize },
    #[error("arrays used as indices must be of integer (or boolean) type")]
    InvalidIndexArrayType { dtype: ElementTypeCode },
    #[error("{}", .fault.describe(.value))]
    InvalidIndexValue { fault: IndexFault, value: String },

    // Argument binding
    #[error("{}", .fault.describe(.name))]
    DuplicateOrUnknownNamedArgument {
        fault: NamedArgumentFault,
        name: String,
    },
    #[error("takes at most {max} arguments ({given} given)")]
    TooManyArguments { max: usize, given: usize },

    // Sequences
    #[error("0-length sequence")]
    EmptySequence,
}

/// A conversion failure: structured kind plus rendered message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConvertError {
    pub kind: ConvertErrorKind,
    /// Equals `kind.to_string()` for every factory-built error.
    pub message: String,
}

impl ConvertError {
    fn from_kind(kind: ConvertErrorKind) -> Self {
        let message = kind.to_string();
        ConvertError { kind, message }
    }
}

/// Longest quoted value, in characters, before it is cut short.
pub const MAX_QUOTED_CHARS: usize = 200;

/// Cut `text` to `MAX_QUOTED_CHARS` characters, marking the cut with `...`.
fn excerpt(mut text: String) -> String {
    if let Some((cut, _)) = text.char_indices().nth(MAX_QUOTED_CHARS) {
        text.truncate(cut);
        text.push_str("...");
    }
    text
}

// Factory functions

/// A value that cannot be converted to `target`.
#[cold]
pub fn invalid_argument_type(target: Target, value: &Value) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::InvalidArgumentType {
        target,
        value: excerpt(value.to_string()),
    })
}

/// A mode string whose first character selects nothing.
#[cold]
pub fn unrecognized_mode(keyword: ModeKeyword, input: &str) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::UnrecognizedModeString {
        keyword,
        input: excerpt(input.to_string()),
    })
}

/// An empty mode string.
#[cold]
pub fn empty_mode(keyword: ModeKeyword) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::EmptyModeString { keyword })
}

#[cold]
pub fn too_many_indices(count: usize, max: usize) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::TooManyIndices { count, max })
}

#[cold]
pub fn invalid_index_array_type(dtype: ElementTypeCode) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::InvalidIndexArrayType { dtype })
}

#[cold]
pub fn not_a_valid_index(value: &Value) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::InvalidIndexValue {
        fault: IndexFault::NotAnIndex,
        value: excerpt(value.to_string()),
    })
}

#[cold]
pub fn zero_slice_step(slice: &Value) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::InvalidIndexValue {
        fault: IndexFault::ZeroStep,
        value: excerpt(slice.to_string()),
    })
}

#[cold]
pub fn ragged_index(value: &Value) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::InvalidIndexValue {
        fault: IndexFault::Ragged,
        value: excerpt(value.to_string()),
    })
}

#[cold]
pub fn duplicate_named_argument(name: &str) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::DuplicateOrUnknownNamedArgument {
        fault: NamedArgumentFault::Duplicate,
        name: name.to_string(),
    })
}

#[cold]
pub fn unknown_named_argument(name: &str) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::DuplicateOrUnknownNamedArgument {
        fault: NamedArgumentFault::Unknown,
        name: name.to_string(),
    })
}

#[cold]
pub fn too_many_arguments(max: usize, given: usize) -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::TooManyArguments { max, given })
}

#[cold]
pub fn empty_sequence() -> ConvertError {
    ConvertError::from_kind(ConvertErrorKind::EmptySequence)
}
