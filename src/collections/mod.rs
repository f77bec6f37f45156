//! Collection types.

pub mod linked;
