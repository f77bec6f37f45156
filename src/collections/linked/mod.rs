//! Linked collection types. At the moment this is only [`StringQueue`], a singly linked queue of
//! owned strings.

pub mod queue;

#[doc(inline)]
pub use queue::StringQueue;
