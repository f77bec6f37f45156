//! An instrumented global allocator for tests. Every allocation and deallocation made on the
//! current thread is counted, and a single upcoming allocation can be made to fail on purpose.
//!
//! Counters are thread local because the test harness runs tests concurrently.
#![cfg(test)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;

#[global_allocator]
static GLOBAL: TrackingAlloc = TrackingAlloc;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static FAIL_IN: Cell<Option<usize>> = const { Cell::new(None) };
}

pub struct TrackingAlloc;

// SAFETY: All requests are forwarded to the System allocator unchanged, or refused with null.
unsafe impl GlobalAlloc for TrackingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if should_fail() {
            return ptr::null_mut();
        }
        // SAFETY: The caller upholds the GlobalAlloc contract for layout.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            adjust_live(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        adjust_live(-1);
        // SAFETY: ptr was allocated by System through this allocator with the same layout.
        unsafe { System.dealloc(ptr, layout) }
    }
}

fn should_fail() -> bool {
    FAIL_IN
        .try_with(|fail_in| match fail_in.get() {
            Some(0) => {
                fail_in.set(None);
                true
            },
            Some(n) => {
                fail_in.set(Some(n - 1));
                false
            },
            None => false,
        })
        .unwrap_or(false)
}

fn adjust_live(by: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + by));
}

/// Returns the number of allocations made on this thread which haven't been freed yet. Only the
/// difference between two readings is meaningful.
pub fn live_allocations() -> isize {
    LIVE.with(Cell::get)
}

/// Makes the allocation `n` requests from now (0 being the very next one) on this thread fail.
pub fn fail_nth_allocation(n: usize) {
    FAIL_IN.with(|fail_in| fail_in.set(Some(n)));
}

/// Cancels a pending failure set by [`fail_nth_allocation`] that was never triggered.
pub fn clear_allocation_failure() {
    FAIL_IN.with(|fail_in| fail_in.set(None));
}
