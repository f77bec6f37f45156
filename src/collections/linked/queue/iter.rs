use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, QueueContents, QueueState, RemoveError, StringQueue};

impl IntoIterator for StringQueue {
    type Item = Box<str>;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            queue: self,
        }
    }
}

/// An owning iterator which removes values from the head of a [`StringQueue`].
///
/// # Panics
/// Iteration panics if the queue's chain is found to disagree with its length, rather than ending
/// early and leaving the remaining elements unaccounted for.
pub struct IntoIter {
    pub(crate) queue: StringQueue,
}

impl Iterator for IntoIter {
    type Item = Box<str>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.queue.unlink_head() {
            Ok(node) => Some(node.value),
            Err(RemoveError::EmptyQueue(_)) => None,
            Err(error) => unreachable!("{error}"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl FusedIterator for IntoIter {}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<'a> IntoIterator for &'a StringQueue {
    type Item = &'a str;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: match &self.state {
                QueueState::Empty => None,
                QueueState::Full(QueueContents { head, .. }) => Some(*head),
            },
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over the values of a [`StringQueue`], from head to tail.
pub struct Iter<'a> {
    // Links are only followed, never modified. remaining bounds the walk to the queue's length.
    pub(crate) next: Link,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a StringQueue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.remaining -= 1;
        if self.remaining != 0 {
            self.next = *node.next();
        }
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for Iter<'_> {}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}
