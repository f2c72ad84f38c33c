//! Keyword binding: aligning positional and named arguments to a parameter
//! list.
//!
//! [`build_args`] is the primitive. [`Signature`] wraps a static parameter
//! list for one engine method, and [`BoundArgs`] applies the converters to
//! individual slots by name.

mod methods;

use ndb_types::{ByteOrder, ClipMode, MemoryOrder, SearchSide, SortKind};
use ndb_value::errors::{
    duplicate_named_argument, too_many_arguments, unknown_named_argument, unrecognized_mode,
};
use ndb_value::{ConvertResult, ModeKeyword, Value};
use rustc_hash::FxHashMap;

use crate::modes::{to_byte_order, to_clip_mode, to_memory_order, to_search_side, to_sort_kind};
use crate::scalar::{to_axis, to_boolean, to_int32, to_int_array, to_intp, Dims};

pub use methods::{
    ARGSORT, CHOOSE, COPY, CUMSUM, FLATTEN, METHODS, NEWBYTEORDER, PUT, RAVEL, REPEAT,
    SEARCHSORTED, SORT, TAKE,
};

/// Align arguments to `names`.
///
/// Positional values fill the leading slots, named values are placed by
/// lookup, and slots nobody supplied are `Value::None`.
///
/// # Errors
///
/// - `TooManyArguments` when there are more positional values than names.
/// - `DuplicateOrUnknownNamedArgument` when a name is supplied both
///   positionally and by name (or twice by name), or matches no parameter.
pub fn build_args(
    positional: &[Value],
    names: &[&str],
    named: &[(&str, Value)],
) -> ConvertResult<Vec<Value>> {
    if positional.len() > names.len() {
        return Err(too_many_arguments(names.len(), positional.len()));
    }

    let mut by_name: FxHashMap<&str, &Value> = FxHashMap::default();
    by_name.reserve(named.len());
    for (name, value) in named {
        if by_name.insert(name, value).is_some() {
            return Err(duplicate_named_argument(name));
        }
    }

    let mut args = Vec::with_capacity(names.len());
    for (value, name) in positional.iter().zip(names) {
        if by_name.contains_key(name) {
            return Err(duplicate_named_argument(name));
        }
        args.push(value.clone());
    }
    for name in &names[positional.len()..] {
        args.push(by_name.remove(name).cloned().unwrap_or(Value::None));
    }

    // Report the first leftover in call order so the message is stable.
    if let Some((name, _)) = named.iter().find(|(name, _)| by_name.contains_key(name)) {
        return Err(unknown_named_argument(name));
    }
    Ok(args)
}

/// Parameter list of one engine method.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    method: &'static str,
    names: &'static [&'static str],
}

impl Signature {
    pub const fn new(method: &'static str, names: &'static [&'static str]) -> Self {
        Signature { method, names }
    }

    pub const fn method(&self) -> &'static str {
        self.method
    }

    pub const fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Find a predeclared signature by method name.
    pub fn lookup(method: &str) -> Option<Signature> {
        METHODS.iter().copied().find(|sig| sig.method == method)
    }

    /// Bind call arguments to this parameter list.
    #[tracing::instrument(level = "trace", skip_all, fields(
        method = self.method,
        positional = positional.len(),
        named = named.len(),
    ))]
    pub fn bind(&self, positional: &[Value], named: &[(&str, Value)]) -> ConvertResult<BoundArgs> {
        let values = build_args(positional, self.names, named)?;
        Ok(BoundArgs {
            signature: *self,
            values,
        })
    }
}

/// Arguments aligned to a [`Signature`], with typed accessors per slot.
///
/// Accessors take a parameter name. Asking for a name the signature does not
/// declare is a caller bug: it reads as an absent argument, and debug builds
/// assert.
#[derive(Clone, Debug)]
pub struct BoundArgs {
    signature: Signature,
    values: Vec<Value>,
}

static ABSENT: Value = Value::None;

impl BoundArgs {
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Slot values in parameter order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Raw value of a slot; `Value::None` when not supplied.
    pub fn value(&self, name: &str) -> &Value {
        let slot = self.signature.names.iter().position(|n| *n == name);
        debug_assert!(
            slot.is_some(),
            "{} has no parameter '{name}'",
            self.signature.method
        );
        slot.and_then(|i| self.values.get(i)).unwrap_or(&ABSENT)
    }

    /// Whether the caller supplied a non-`None` value for the slot.
    pub fn is_given(&self, name: &str) -> bool {
        !self.value(name).is_none()
    }

    pub fn boolean(&self, name: &str) -> ConvertResult<bool> {
        to_boolean(self.value(name))
    }

    pub fn int32(&self, name: &str) -> ConvertResult<i32> {
        to_int32(self.value(name))
    }

    pub fn intp(&self, name: &str) -> ConvertResult<isize> {
        to_intp(self.value(name))
    }

    pub fn int_array(&self, name: &str) -> ConvertResult<Option<Dims>> {
        to_int_array(self.value(name))
    }

    pub fn axis(&self, name: &str) -> ConvertResult<i32> {
        to_axis(self.value(name))
    }

    pub fn clip_mode(&self, name: &str) -> ConvertResult<ClipMode> {
        to_clip_mode(self.value(name))
    }

    pub fn order(&self, name: &str) -> ConvertResult<MemoryOrder> {
        to_memory_order(self.value(name))
    }

    pub fn byte_order(&self, name: &str) -> ConvertResult<ByteOrder> {
        to_byte_order(self.mode_str(name, ModeKeyword::ByteOrder)?)
    }

    pub fn sort_kind(&self, name: &str) -> ConvertResult<SortKind> {
        to_sort_kind(self.mode_str(name, ModeKeyword::SortKind)?)
    }

    pub fn search_side(&self, name: &str) -> ConvertResult<SearchSide> {
        to_search_side(self.mode_str(name, ModeKeyword::SearchSide)?)
    }

    /// String-only mode slots: absent is `None`, non-strings are unrecognized.
    fn mode_str(&self, name: &str, keyword: ModeKeyword) -> ConvertResult<Option<&str>> {
        match self.value(name) {
            Value::None => Ok(None),
            Value::Str(s) => Ok(Some(s.as_str())),
            other => Err(unrecognized_mode(keyword, &other.to_string())),
        }
    }
}
