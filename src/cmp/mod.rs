//! Orderings over strings which aren't provided by [`Ord`] for [`str`].

#[cfg(feature = "natural")]
pub mod natural;
