//! Operations on a queue handle which may be absent.
//!
//! These functions mirror the methods of [`StringQueue`], but accept an [`Option`] in place of the
//! queue itself. Mutating operations on an absent queue fail with [`NoQueue`], while queries and
//! reordering treat it as an empty queue.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use super::{InsertError, NoQueue, RemoveError, StringQueue};
use crate::util::error::AllocError;

/// Allocates a new, empty queue on the heap, failing if the storage can't be obtained.
pub fn new() -> Result<Box<StringQueue>, AllocError> {
    let layout = Layout::new::<StringQueue>();
    // SAFETY: StringQueue is never zero sized, it always holds at least a discriminant.
    let ptr = NonNull::new(unsafe { alloc::alloc(layout) }.cast::<StringQueue>())
        .ok_or(AllocError { layout })?;

    // SAFETY: ptr is valid for writes, and was allocated with the layout Box uses for a
    // StringQueue in the global allocator.
    unsafe {
        ptr.as_ptr().write(StringQueue::new());
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

/// Releases a queue along with every element it still holds. Does nothing for [`None`].
pub fn free(queue: Option<Box<StringQueue>>) {
    drop(queue);
}

pub fn insert_head(queue: Option<&mut StringQueue>, value: &str) -> Result<(), InsertError> {
    Ok(queue.ok_or(NoQueue)?.insert_head(value)?)
}

pub fn insert_tail(queue: Option<&mut StringQueue>, value: &str) -> Result<(), InsertError> {
    Ok(queue.ok_or(NoQueue)?.insert_tail(value)?)
}

/// See [`StringQueue::remove_head`].
pub fn remove_head(
    queue: Option<&mut StringQueue>,
    out: Option<&mut [u8]>,
) -> Result<usize, RemoveError> {
    queue.ok_or(NoQueue)?.remove_head(out)
}

/// Returns the number of elements in the queue, or 0 if there is no queue.
pub fn size(queue: Option<&StringQueue>) -> usize {
    queue.map_or(0, StringQueue::len)
}

pub fn reverse(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

#[cfg(feature = "natural")]
pub fn sort(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}
