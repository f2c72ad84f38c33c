//! Ndb Handle - ownership of allocations that live in the native engine.
//!
//! The native engine keeps its own reference count on every allocation it
//! hands out. A [`CoreWrapper`] is the host-side owner of one such handle:
//! it deallocates the handle at most once, and only when the engine reports
//! no remaining native references. Otherwise disposal is deferred and the
//! handle stays valid.
//!
//! [`SlotArena`] is an in-process engine with the same contract, for hosts
//! that run without a native library and for tests.

mod arena;
mod engine;
mod wrapper;

pub use arena::SlotArena;
pub use engine::{NativeEngine, NativeHandle};
pub use wrapper::{CoreWrapper, Disposal};
