mod error;
#[cfg(feature = "handle")]
pub mod handle;
mod iter;
mod length;
mod node;
mod sort;
mod string_queue;

pub use error::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
pub use string_queue::*;
