use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::{AllocError, NoQueue};

/// There was no element at the head of the queue to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueue;

impl Display for EmptyQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to remove an element from an empty queue!")
    }
}

impl Error for EmptyQueue {}

/// The head of the queue disagrees with the queue's cached length. This can't occur while the
/// queue's invariants hold, but is checked before anything is unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenChain {
    pub len: usize,
}

impl Display for BrokenChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Queue chain is inconsistent with its length of {}!", self.len)
    }
}

impl Error for BrokenChain {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    NoQueue(NoQueue),
    AllocError(AllocError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum RemoveError {
    NoQueue(NoQueue),
    EmptyQueue(EmptyQueue),
    BrokenChain(BrokenChain),
}
