use std::sync::Arc;

use super::*;
use crate::SlotArena;
use pretty_assertions::assert_eq;
use rayon::prelude::*;

fn wrapped() -> (Arc<SlotArena>, CoreWrapper<Arc<SlotArena>>) {
    let arena = Arc::new(SlotArena::new());
    let handle = arena.alloc().unwrap();
    let wrapper = CoreWrapper::new(Arc::clone(&arena), handle);
    (arena, wrapper)
}

#[test]
fn release_with_no_native_references() {
    let (arena, wrapper) = wrapped();
    let handle = wrapper.handle().unwrap();
    assert_eq!(wrapper.release(), Disposal::Released);
    assert!(wrapper.is_released());
    assert!(!arena.is_live(handle));
    assert_eq!(arena.dealloc_count(), 1);
}

#[test]
fn second_release_is_a_no_op() {
    let (arena, wrapper) = wrapped();
    assert_eq!(wrapper.release(), Disposal::Released);
    assert_eq!(wrapper.release(), Disposal::AlreadyReleased);
    drop(wrapper);
    assert_eq!(arena.dealloc_count(), 1);
    assert_eq!(arena.invalid_free_count(), 0);
}

#[test]
fn native_references_defer_release() {
    let (arena, wrapper) = wrapped();
    let handle = wrapper.handle().unwrap();
    arena.incref(handle);

    assert_eq!(wrapper.release(), Disposal::Deferred);
    assert_eq!(wrapper.handle(), Some(handle));
    assert!(arena.is_live(handle));
    assert_eq!(arena.dealloc_count(), 0);

    arena.decref(handle);
    assert_eq!(wrapper.release(), Disposal::Released);
    assert_eq!(arena.dealloc_count(), 1);
}

#[test]
fn drop_releases_when_unreferenced() {
    let (arena, wrapper) = wrapped();
    let handle = wrapper.handle().unwrap();
    drop(wrapper);
    assert!(!arena.is_live(handle));
    assert_eq!(arena.dealloc_count(), 1);
}

#[test]
fn drop_leaves_referenced_handle_to_the_engine() {
    let (arena, wrapper) = wrapped();
    let handle = wrapper.handle().unwrap();
    arena.incref(handle);
    drop(wrapper);
    assert!(arena.is_live(handle));
    assert_eq!(arena.dealloc_count(), 0);
}

#[test]
fn deferred_then_drop_after_engine_lets_go() {
    let (arena, wrapper) = wrapped();
    let handle = wrapper.handle().unwrap();
    arena.incref(handle);
    assert_eq!(wrapper.release(), Disposal::Deferred);
    arena.decref(handle);
    drop(wrapper);
    assert_eq!(arena.dealloc_count(), 1);
    assert_eq!(arena.invalid_free_count(), 0);
}

#[test]
fn concurrent_release_deallocates_once() {
    let (arena, wrapper) = wrapped();
    let outcomes: Vec<Disposal> = (0..64)
        .into_par_iter()
        .map(|_| wrapper.release())
        .collect();

    let released = outcomes
        .iter()
        .filter(|&&d| d == Disposal::Released)
        .count();
    assert_eq!(released, 1);
    assert!(outcomes
        .iter()
        .all(|&d| matches!(d, Disposal::Released | Disposal::AlreadyReleased)));
    drop(wrapper);
    assert_eq!(arena.dealloc_count(), 1);
    assert_eq!(arena.invalid_free_count(), 0);
}

#[test]
fn concurrent_release_while_referenced_is_deferred() {
    let (arena, wrapper) = wrapped();
    let handle = wrapper.handle().unwrap();
    arena.incref(handle);
    let all_deferred = (0..64)
        .into_par_iter()
        .all(|_| wrapper.release() == Disposal::Deferred);
    assert!(all_deferred);
    assert_eq!(arena.dealloc_count(), 0);
    assert!(arena.is_live(handle));
}

#[test]
fn many_wrappers_share_one_arena() {
    let arena = Arc::new(SlotArena::new());
    let wrappers: Vec<_> = (0..32)
        .map(|_| CoreWrapper::new(Arc::clone(&arena), arena.alloc().unwrap()))
        .collect();
    assert_eq!(arena.live_count(), 32);

    wrappers.par_iter().for_each(|w| {
        assert_eq!(w.release(), Disposal::Released);
    });
    drop(wrappers);
    assert_eq!(arena.live_count(), 0);
    assert_eq!(arena.dealloc_count(), 32);
}

#[test]
fn aliased_wrapper_cannot_free_a_reused_slot() {
    let (arena, first) = wrapped();
    let handle = first.handle().unwrap();
    let second = CoreWrapper::new(Arc::clone(&arena), handle);

    assert_eq!(first.release(), Disposal::Released);
    let reused = arena.alloc().unwrap();
    assert_ne!(reused, handle);

    // The stale handle reads as unreferenced, so the arena rejects the free.
    assert_eq!(second.release(), Disposal::Released);
    drop(second);
    assert!(arena.is_live(reused));
    assert_eq!(arena.dealloc_count(), 1);
    assert_eq!(arena.invalid_free_count(), 1);
}

#[test]
fn aliased_wrappers_coordinate_through_the_refcount() {
    let (arena, first) = wrapped();
    let handle = first.handle().unwrap();
    // The second wrapper's claim is held as a native reference.
    arena.incref(handle);
    let second = CoreWrapper::new(Arc::clone(&arena), handle);

    assert_eq!(first.release(), Disposal::Deferred);
    arena.decref(handle);
    assert_eq!(second.release(), Disposal::Released);
    assert!(!arena.is_live(handle));

    let reused = arena.alloc().unwrap();
    drop(first);
    assert!(arena.is_live(reused));
    assert_eq!(arena.dealloc_count(), 1);
}

#[test]
fn disposal_display() {
    assert_eq!(Disposal::Deferred.to_string(), "deferred");
    assert_eq!(Disposal::AlreadyReleased.to_string(), "already released");
}
