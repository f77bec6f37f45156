//! A singly linked queue of owned strings, with in-place reversal and natural-order sorting.
//!
//! # Purpose
//! [`StringQueue`](collections::linked::StringQueue) is a small, self-contained exercise in manual
//! node management: every element is a separately allocated node holding its own copy of a string,
//! and the queue is the single owner of the whole chain. Elements can be inserted at either end and
//! removed from the head, so the queue serves as both a FIFO and a LIFO.
//!
//! Reversal and sorting never allocate; they relink the existing nodes. Sorting is a stable merge
//! sort using [natural ordering](cmp::natural), where `"item2"` comes before `"item10"`.
//!
//! # Error Handling
//! Nothing in this crate aborts on a failed allocation. Inserts report an
//! [`AllocError`](collections::linked::queue::AllocError) instead and leave the queue exactly as
//! it was, including releasing a node whose value couldn't be allocated. Errors are strongly typed,
//! using enums for static dispatch rather than dynamic, with small structs that implement
//! [`Error`](std::error::Error).
//!
//! The [`handle`](collections::linked::queue::handle) module exposes the same operations for a
//! queue that may be absent, which adds a [`NoQueue`](collections::linked::queue::NoQueue) error.
//!
//! # Features
//! - `handle`: The optional-handle operations.
//! - `natural`: Natural string comparison and [`StringQueue::sort`](collections::linked::StringQueue::sort).
//!
//! Both are enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod cmp;
pub mod collections;

pub(crate) mod util;
