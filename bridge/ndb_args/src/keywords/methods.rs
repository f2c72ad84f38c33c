//! Parameter lists of the engine methods that take converted arguments.

use super::Signature;

pub const TAKE: Signature = Signature::new("take", &["indices", "axis", "out", "mode"]);
pub const PUT: Signature = Signature::new("put", &["indices", "values", "mode"]);
pub const SORT: Signature = Signature::new("sort", &["axis", "kind", "order"]);
pub const ARGSORT: Signature = Signature::new("argsort", &["axis", "kind", "order"]);
pub const SEARCHSORTED: Signature = Signature::new("searchsorted", &["keys", "side"]);
pub const FLATTEN: Signature = Signature::new("flatten", &["order"]);
pub const RAVEL: Signature = Signature::new("ravel", &["order"]);
pub const COPY: Signature = Signature::new("copy", &["order"]);
pub const NEWBYTEORDER: Signature = Signature::new("newbyteorder", &["new_order"]);
pub const REPEAT: Signature = Signature::new("repeat", &["repeats", "axis"]);
pub const CHOOSE: Signature = Signature::new("choose", &["choices", "out", "mode"]);
pub const CUMSUM: Signature = Signature::new("cumsum", &["axis", "dtype", "out"]);

/// Every predeclared signature.
pub const METHODS: &[Signature] = &[
    TAKE,
    PUT,
    SORT,
    ARGSORT,
    SEARCHSORTED,
    FLATTEN,
    RAVEL,
    COPY,
    NEWBYTEORDER,
    REPEAT,
    CHOOSE,
    CUMSUM,
];
