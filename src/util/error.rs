use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The global allocator was unable to provide memory for the given [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    pub layout: Layout,
}

impl Display for AllocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to allocate {} bytes with alignment {}!",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl Error for AllocError {}

/// An operation was invoked without a queue to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoQueue;

impl Display for NoQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No queue was provided to operate on!")
    }
}

impl Error for NoQueue {}
