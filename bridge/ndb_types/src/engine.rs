//! Limits and registry counts supplied by the native engine.

/// Maximum array rank, and the maximum number of index entries.
pub const MAX_DIMS: usize = 32;

/// Maximum number of operands to a multi-input operation.
pub const MAX_ARGS: usize = 32;

/// Engine facts that normalization depends on.
///
/// Both values may change at runtime (user types are registered
/// dynamically), so callers query them per operation rather than caching.
pub trait EngineInfo {
    /// Maximum number of dimensions an index may address.
    fn max_dims(&self) -> usize {
        MAX_DIMS
    }

    /// Number of user-defined element types currently registered.
    fn user_type_count(&self) -> usize {
        0
    }
}

/// Compile-time defaults: `MAX_DIMS` dimensions, no user types.
#[derive(Copy, Clone, Debug, Default)]
pub struct StaticEngineInfo;

impl EngineInfo for StaticEngineInfo {}

impl<T: EngineInfo + ?Sized> EngineInfo for &T {
    fn max_dims(&self) -> usize {
        (**self).max_dims()
    }

    fn user_type_count(&self) -> usize {
        (**self).user_type_count()
    }
}
