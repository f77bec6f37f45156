use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::util::error::AllocError;

pub(crate) type Link = Option<NodeRef>;

/// A copyable handle to a heap allocated [`Node`]. The queue that links a node is its only owner,
/// so a NodeRef is only ever dereferenced while that queue is borrowed.
#[derive(Debug)]
pub(crate) struct NodeRef(pub NonNull<Node>);

impl NodeRef {
    /// Allocates a new node holding a copy of `value`, linked to `next`.
    ///
    /// The node itself is allocated first, then the value's storage. If the second allocation
    /// fails, the node is released again before returning, so nothing is leaked on either path.
    pub fn try_new(value: &str, next: Link) -> Result<NodeRef, AllocError> {
        let layout = Layout::new::<Node>();
        // SAFETY: Node contains a Box<str>, so its layout is never zero sized.
        let ptr = NonNull::new(unsafe { alloc::alloc(layout) }.cast::<Node>())
            .ok_or(AllocError { layout })?;

        let value = match copy_value(value) {
            Ok(value) => value,
            Err(error) => {
                // SAFETY: ptr was just allocated with layout and nothing has been written to it.
                unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) };
                return Err(error);
            },
        };

        // SAFETY: ptr is valid for writes of a Node and currently uninitialized.
        unsafe { ptr.as_ptr().write(Node { value, next }) };
        Ok(NodeRef(ptr))
    }

    pub fn value<'a>(&self) -> &'a str {
        // SAFETY: The pointer refers to a live node for as long as the owning queue holds it.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link {
        // SAFETY: As for value. The queue is borrowed mutably whenever links are rewritten.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Moves the node back out of the heap, releasing its allocation. The value is released when
    /// the returned Node is dropped.
    ///
    /// # Safety
    /// The node must not be reachable through any other NodeRef after this call.
    pub unsafe fn take_node(self) -> Node {
        // SAFETY: Layout::new::<Node>() with the global allocator is exactly how Box<Node>
        // allocates, so the allocation can be reclaimed as a Box.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl Clone for NodeRef {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for NodeRef {}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for NodeRef {}

pub(crate) struct Node {
    pub value: Box<str>,
    pub next: Link,
}

/// Copies `value` into a new allocation of exactly `value.len()` bytes.
fn copy_value(value: &str) -> Result<Box<str>, AllocError> {
    let mut copy = String::new();
    copy.try_reserve_exact(value.len()).map_err(|_| AllocError {
        // Layout::array only fails past isize::MAX bytes.
        layout: Layout::array::<u8>(value.len()).unwrap_or(Layout::new::<u8>()),
    })?;
    copy.push_str(value);
    // Capacity already equals length, so no reallocation happens here.
    Ok(copy.into_boxed_str())
}
