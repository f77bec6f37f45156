use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{BrokenChain, EmptyQueue, Iter, Length, Link, NodeRef, ONE, RemoveError};
use crate::util::error::AllocError;
use crate::util::result::ResultExtension;

/// A singly linked queue of owned strings, with links from head to tail. Elements can be added at
/// either end but only removed from the head, so the same queue can be used as a FIFO (insert at
/// the tail) or a LIFO (insert at the head).
///
/// Every inserted value is copied into its own allocation, so the queue never borrows from the
/// caller. Allocation failures are reported as [`AllocError`] rather than aborting.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of elements in the queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `insert_head/tail` | `O(1)` |
/// | `remove_head` | `O(1)` |
/// | `reverse` | `O(n)` |
/// | `sort/sort_by` | `O(n log n)` |
#[derive(PartialEq, Eq)]
pub struct StringQueue {
    pub(crate) state: QueueState,
    pub(crate) _phantom: PhantomData<Box<str>>,
}

#[derive(Default, PartialEq, Eq, IsVariant)]
pub(crate) enum QueueState {
    #[default]
    Empty,
    Full(QueueContents),
}

use QueueState::*;

pub(crate) struct QueueContents {
    pub len: Length,
    pub head: NodeRef,
    pub tail: NodeRef,
}

impl StringQueue {
    /// Creates a new StringQueue with no elements. This doesn't allocate.
    pub const fn new() -> StringQueue {
        StringQueue {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the queue. The count is cached, not recomputed.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(QueueContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the value at the head of the queue, if there is one.
    pub fn front(&self) -> Option<&str> {
        match &self.state {
            Empty => None,
            Full(QueueContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns the value at the tail of the queue, if there is one.
    pub fn back(&self) -> Option<&str> {
        match &self.state {
            Empty => None,
            Full(QueueContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Copies `value` into a new element at the head of the queue.
    ///
    /// On failure the queue is left exactly as it was.
    pub fn insert_head(&mut self, value: &str) -> Result<(), AllocError> {
        match &mut self.state {
            Empty => self.state = QueueState::single(value)?,
            Full(contents) => {
                let len = contents.len.checked_add(1).ok_or_else(capacity_overflow)?;
                contents.head = NodeRef::try_new(value, Some(contents.head))?;
                contents.len = len;
            },
        }
        Ok(())
    }

    /// Copies `value` into a new element at the tail of the queue.
    ///
    /// On failure the queue is left exactly as it was.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), AllocError> {
        match &mut self.state {
            Empty => self.state = QueueState::single(value)?,
            Full(contents) => {
                let len = contents.len.checked_add(1).ok_or_else(capacity_overflow)?;
                let node = NodeRef::try_new(value, None)?;
                *contents.tail.next_mut() = Some(node);
                contents.tail = node;
                contents.len = len;
            },
        }
        Ok(())
    }

    /// Removes the element at the head of the queue. If `out` is provided, the removed value is
    /// copied into it as described by [`copy_into`], otherwise the value is discarded. Returns the
    /// number of value bytes written to `out`.
    ///
    /// Fails without modifying the queue if it is empty, or if the head node doesn't agree with the
    /// queue's length.
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<usize, RemoveError> {
        let node = self.unlink_head()?;
        Ok(match out {
            Some(buffer) => copy_into(node.value.as_bytes(), buffer),
            None => 0,
        })
    }

    /// Removes every element from the queue, releasing all of them.
    pub fn clear(&mut self) {
        if let Full(QueueContents { head, .. }) = mem::take(&mut self.state) {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                // SAFETY: The queue no longer references any nodes, and each node is visited once.
                drop(unsafe { ptr.take_node() });
            }
        }
    }

    /// Reverses the order of the elements in place. No elements are allocated or released, the
    /// existing nodes are relinked in a single pass.
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            contents.reverse();
        }
    }

    /// Sorts the queue in ascending [natural order](crate::cmp::natural), so that `"item2"` comes
    /// before `"item10"`. The sort is stable and relinks the existing nodes without allocating.
    #[cfg(feature = "natural")]
    pub fn sort(&mut self) {
        self.sort_by(crate::cmp::natural::compare);
    }

    /// Sorts the queue in place using `compare`. The sort is stable: elements which compare as
    /// [`Equal`](Ordering::Equal) keep their relative order.
    ///
    /// If `compare` panics, the queue still holds every element, in an unspecified order.
    pub fn sort_by<F: FnMut(&str, &str) -> Ordering>(&mut self, mut compare: F) {
        if let Full(contents) = &mut self.state {
            contents.sort_by(&mut compare);
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl StringQueue {
    /// Detaches the head node and hands ownership of it to the caller.
    pub(crate) fn unlink_head(&mut self) -> Result<super::Node, RemoveError> {
        match &mut self.state {
            Empty => Err(EmptyQueue.into()),
            Full(QueueContents { len, head, tail }) => {
                let next = *head.next();
                match (len.checked_sub(1), next) {
                    (Some(new_len), Some(new_head)) => {
                        let old_head = mem::replace(head, new_head);
                        *len = new_len;
                        // SAFETY: old_head has just been replaced and nothing else links to it.
                        Ok(unsafe { old_head.take_node() })
                    },
                    (None, None) if head == tail => {
                        let old_head = *head;
                        self.state = Empty;
                        // SAFETY: The queue is now empty, so nothing references old_head.
                        Ok(unsafe { old_head.take_node() })
                    },
                    _ => {
                        debug_assert!(false, "queue chain disagrees with its length");
                        Err(BrokenChain { len: len.get() }.into())
                    },
                }
            },
        }
    }

    /// Walks the whole chain, panicking if it disagrees with the cached length or tail.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(QueueContents { len, head, tail }) => {
                let mut curr = *head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    curr = *next;
                    count += 1;
                    assert!(count <= len.get(), "chain is longer than the queue's length");
                }
                assert_eq!(count, len.get(), "chain is shorter than the queue's length");
                assert!(curr == *tail, "last node in the chain isn't the tail");
            },
        }
    }
}

impl QueueContents {
    pub fn wrap_one(value: &str) -> Result<QueueContents, AllocError> {
        let node = NodeRef::try_new(value, None)?;

        Ok(QueueContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    /// Relinks every node to point at its predecessor. The old head is processed first and gets a
    /// terminal link, the old tail is processed last and becomes the new head.
    pub fn reverse(&mut self) {
        let mut prev: Link = None;
        let mut curr: Link = Some(self.head);

        while let Some(node) = curr {
            let next = mem::replace(node.next_mut(), prev);
            prev = Some(node);
            curr = next;
        }

        mem::swap(&mut self.head, &mut self.tail);
    }
}

impl QueueState {
    pub fn single(value: &str) -> Result<QueueState, AllocError> {
        Ok(Full(QueueContents::wrap_one(value)?))
    }
}

/// Copies `value` into `buffer` as a zero terminated byte string, truncating it to at most
/// `buffer.len() - 1` bytes. Returns the number of value bytes copied, excluding the terminator.
///
/// An empty buffer has no room for the terminator, so nothing is written and 0 is returned. Bytes
/// after the terminator are never touched, and nothing past the end of `value` is read.
///
/// ```
/// # use string_queue::collections::linked::queue::copy_into;
/// let mut buffer = [0xFF_u8; 4];
/// assert_eq!(copy_into(b"hello", &mut buffer), 3);
/// assert_eq!(buffer, *b"hel\0");
/// ```
pub fn copy_into(value: &[u8], buffer: &mut [u8]) -> usize {
    let Some(room) = buffer.len().checked_sub(1) else {
        return 0;
    };
    let count = value.len().min(room);
    buffer[..count].copy_from_slice(&value[..count]);
    buffer[count] = 0;
    count
}

fn capacity_overflow() -> AllocError {
    AllocError {
        layout: std::alloc::Layout::new::<super::Node>(),
    }
}

impl<'a> FromIterator<&'a str> for StringQueue {
    /// # Panics
    /// Panics if an element can't be allocated.
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = StringQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> Extend<&'a str> for StringQueue {
    /// # Panics
    /// Panics if an element can't be allocated. Elements inserted before the failure remain.
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for item in iter {
            self.insert_tail(item).throw();
        }
    }
}

impl Default for StringQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StringQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl PartialEq for QueueContents {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // Both chains have the same length, so they end together.
                _ => break true,
            }
        }
    }
}

impl Eq for QueueContents {}

impl Debug for StringQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a>(&'a StringQueue);

        impl Debug for Contents<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("StringQueue")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .finish()
    }
}

impl Display for StringQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
