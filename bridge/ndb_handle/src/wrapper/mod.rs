//! Host-side owner of a native handle.
//!
//! # Disposal
//!
//! Explicit [`CoreWrapper::release`] and the implicit release in `Drop` run
//! the same critical section under the wrapper's lock:
//!
//! 1. No handle: nothing to do ([`Disposal::AlreadyReleased`]).
//! 2. Engine refcount is nonzero: the native side still uses the
//!    allocation, so the handle is kept ([`Disposal::Deferred`]).
//! 3. Refcount is zero: clear the handle, then deallocate
//!    ([`Disposal::Released`]).
//!
//! An explicit release that deallocates also disarms the `Drop` release.
//! Wrappers aliasing one allocation coordinate only through the engine's
//! refcount; there is no cross-wrapper locking.

use std::fmt;

use parking_lot::Mutex;

use crate::engine::{NativeEngine, NativeHandle};

/// Outcome of one disposal attempt. None of them is an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Disposal {
    /// The handle was cleared and deallocated by this call.
    Released,
    /// Native references remain; the handle is still owned and valid.
    Deferred,
    /// An earlier call already released the handle.
    AlreadyReleased,
}

impl fmt::Display for Disposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Disposal::Released => "released",
            Disposal::Deferred => "deferred",
            Disposal::AlreadyReleased => "already released",
        })
    }
}

#[derive(Debug)]
struct Core {
    handle: Option<NativeHandle>,
    /// Whether `Drop` still runs disposal.
    release_on_drop: bool,
}

/// Owns one native handle and releases it at most once.
pub struct CoreWrapper<E: NativeEngine> {
    engine: E,
    core: Mutex<Core>,
}

impl<E: NativeEngine> CoreWrapper<E> {
    /// Take ownership of an existing native allocation.
    pub fn new(engine: E, handle: NativeHandle) -> Self {
        CoreWrapper {
            engine,
            core: Mutex::new(Core {
                handle: Some(handle),
                release_on_drop: true,
            }),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The handle, if it has not been released.
    pub fn handle(&self) -> Option<NativeHandle> {
        self.core.lock().handle
    }

    pub fn is_released(&self) -> bool {
        self.core.lock().handle.is_none()
    }

    /// Release the handle now if the engine holds no references to it.
    ///
    /// Safe to call repeatedly and from several threads; exactly one call
    /// observes [`Disposal::Released`].
    pub fn release(&self) -> Disposal {
        let mut core = self.core.lock();
        let outcome = dispose(&self.engine, &mut core);
        if outcome == Disposal::Released {
            core.release_on_drop = false;
        }
        outcome
    }
}

impl<E: NativeEngine> Drop for CoreWrapper<E> {
    fn drop(&mut self) {
        let core = self.core.get_mut();
        if core.release_on_drop {
            dispose(&self.engine, core);
        }
    }
}

impl<E: NativeEngine> fmt::Debug for CoreWrapper<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreWrapper")
            .field("core", &*self.core.lock())
            .finish_non_exhaustive()
    }
}

fn dispose<E: NativeEngine>(engine: &E, core: &mut Core) -> Disposal {
    let Some(handle) = core.handle else {
        return Disposal::AlreadyReleased;
    };
    let refcount = engine.refcount(handle);
    if refcount != 0 {
        tracing::debug!(%handle, refcount, "disposal deferred");
        return Disposal::Deferred;
    }
    core.handle = None;
    engine.dealloc(handle);
    tracing::debug!(%handle, "handle released");
    Disposal::Released
}

#[cfg(test)]
mod tests;
