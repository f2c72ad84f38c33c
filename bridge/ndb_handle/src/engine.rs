//! The native engine's side of handle ownership.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Opaque address of an allocation owned by the native engine.
///
/// Never null. The bridge does not dereference it; it is only passed back
/// to the engine that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NativeHandle(NonZeroUsize);

impl NativeHandle {
    /// Wrap a raw address. Returns `None` for the null address.
    pub fn new(addr: usize) -> Option<Self> {
        NonZeroUsize::new(addr).map(NativeHandle)
    }

    pub fn addr(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// Reference-count observation and deallocation, as exported by the engine.
///
/// The count is the number of references held on the native side. It may
/// change concurrently with any host-side call.
pub trait NativeEngine {
    fn refcount(&self, handle: NativeHandle) -> usize;

    /// Free the allocation. Called at most once per handle by a wrapper.
    fn dealloc(&self, handle: NativeHandle);
}

impl<T: NativeEngine + ?Sized> NativeEngine for &T {
    fn refcount(&self, handle: NativeHandle) -> usize {
        (**self).refcount(handle)
    }

    fn dealloc(&self, handle: NativeHandle) {
        (**self).dealloc(handle);
    }
}

impl<T: NativeEngine + ?Sized> NativeEngine for Arc<T> {
    fn refcount(&self, handle: NativeHandle) -> usize {
        (**self).refcount(handle)
    }

    fn dealloc(&self, handle: NativeHandle) {
        (**self).dealloc(handle);
    }
}
