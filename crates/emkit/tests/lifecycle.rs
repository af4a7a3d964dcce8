//! Integration tests: allocation, sizing, and sticky error chains across
//! the array and arena crates.

use std::cell::Cell;

use emkit::prelude::*;
use emkit_test_utils::{arena, filled, shared_arena};
use proptest::prelude::*;

#[test]
fn heap_size_matches_arena_cost() {
    for n in [1usize, 5, 64, 500] {
        let seg = arena(2048);
        let mut ctx = Context::new();
        let before = seg.borrow().free_bytes();
        let mut arr = Int16Arr::new();
        arr.create(&mut ctx, n, &seg);
        assert!(ctx.check().is_ok());
        assert_eq!(before - seg.borrow().free_bytes(), Int16Arr::heap_size(n));
    }
}

#[test]
fn create_zero_on_fresh_array_costs_nothing() {
    let seg = arena(64);
    let mut ctx = Context::new();
    let mut arr = Int16Arr::new();
    arr.create(&mut ctx, 0, &seg);
    assert!(ctx.check().is_ok());
    assert_eq!(seg.borrow().free_bytes(), 64);
    assert_eq!(seg.borrow().block_count(), 0);
}

#[test]
fn sticky_chain_reports_first_failure_only() {
    let seg = arena(64);
    let mut ctx = Context::new();
    let mut a = Int16Arr::new();
    let mut b = Int16Arr::new();

    a.create(&mut ctx, 4, &seg);
    b.create(&mut ctx, 1000, &seg); // exhausts the segment
    a.fill(&ctx, 5);
    a.resize(&mut ctx, 100);
    b.copy(&mut ctx, &a);

    let err = ctx.check().unwrap_err();
    assert_eq!(err.kind, ErrorKind::AllocationFailure);
    assert_eq!(ctx.errors().len(), 1);
    assert_eq!(a.to_vec(), vec![0; 4]);
    assert_eq!(a.len(), 4);
}

#[test]
fn reset_context_resumes_chain() {
    let seg = arena(256);
    let mut ctx = Context::new();
    let mut a = filled(&mut ctx, &seg, &[1, 2]);
    a.resize(&mut ctx, 3);
    assert!(ctx.is_in_error());

    ctx.reset();
    a.fill(&ctx, 9);
    assert!(ctx.check().is_ok());
    assert_eq!(a.to_vec(), vec![9, 9]);
}

thread_local! {
    static SEEN: Cell<u32> = const { Cell::new(0) };
}

fn count_error(_: &ErrorRecord) {
    SEEN.with(|c| c.set(c.get() + 1));
}

#[test]
fn error_handler_sees_each_raise() {
    let seg = arena(64);
    let mut ctx = Context::new();
    ctx.set_error_handler(count_error);
    let mut a = filled(&mut ctx, &seg, &[1]);
    a.set(&mut ctx, 5, 0);
    a.set(&mut ctx, 6, 0);
    assert_eq!(SEEN.with(Cell::get), 1);
    assert_eq!(ctx.error_kind(), Some(ErrorKind::OutOfRange));
}

#[test]
fn shared_pool_arrays_never_release() {
    let seg = shared_arena(256);
    let mut ctx = Context::new();
    let mut a = filled(&mut ctx, &seg, &[1, 2, 3]);
    let b = filled(&mut ctx, &seg, &[4, 5]);
    assert_eq!(a.ownership(), Ownership::Shared);

    a.release(&ctx);
    assert!(!a.has_storage());
    assert_eq!(b.to_vec(), vec![4, 5]);
    assert_eq!(seg.borrow().block_count(), 2);
}

#[test]
fn segment_reset_reclaims_everything() {
    let seg = arena(64);
    let mut ctx = Context::new();
    let mut a = filled(&mut ctx, &seg, &[1; 20]);
    a.release(&ctx);
    seg.borrow_mut().reset();
    let b = filled(&mut ctx, &seg, &[2; 20]);
    assert_eq!(b.len(), 20);
    assert_eq!(seg.borrow().used_bytes(), Int16Arr::heap_size(20));
}

#[test]
fn copy_leaves_tail_untouched() {
    let seg = arena(256);
    let mut ctx = Context::new();
    let mut dest = filled(&mut ctx, &seg, &[7, 7, 7, 7, 7, 7]);
    let src = filled(&mut ctx, &seg, &[1, 2]);
    dest.copy(&mut ctx, &src);
    assert!(dest.equal(&src));
    dest.resize(&mut ctx, 6);
    assert!(ctx.check().is_ok());
    assert_eq!(dest.to_vec(), vec![1, 2, 7, 7, 7, 7]);
}

proptest! {
    #[test]
    fn resize_never_moves_capacity(
        cap in 1usize..100,
        sizes in proptest::collection::vec(0usize..150, 1..10),
    ) {
        let seg = arena(1024);
        let mut ctx = Context::new();
        let mut arr = Int16Arr::new();
        arr.create(&mut ctx, cap, &seg);
        for n in sizes {
            ctx.reset();
            arr.resize(&mut ctx, n);
            prop_assert_eq!(arr.capacity(), cap);
            prop_assert_eq!(ctx.is_in_error(), n > cap);
        }
    }

    #[test]
    fn heap_size_lockstep(n in 1usize..1000) {
        let seg = arena(4096);
        let mut ctx = Context::new();
        let before = seg.borrow().free_bytes();
        let mut arr = Int16Arr::new();
        arr.create(&mut ctx, n, &seg);
        prop_assert_eq!(before - seg.borrow().free_bytes(), Int16Arr::heap_size(n));
    }
}
