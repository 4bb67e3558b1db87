/// Build a finite stream from a list of values.
/// Only the first node is constructed eagerly.
#[macro_export]
macro_rules! stream {
  () => { $crate::Stream::empty() };
  ( $($x:expr),+ $(,)? ) => { $crate::Stream::from(vec![ $($x),+ ]) };
}

pub mod error;
pub mod thunk;
pub mod core;
pub mod transform;
pub mod split;
pub mod join;
pub mod fold;
pub mod iter;
pub mod display;
pub mod numbers;

#[cfg(test)]
pub mod proptest;

pub use crate::core::Stream;
pub use crate::error::{Error, Result};
pub use crate::thunk::Thunk;
pub use crate::iter::Iter;
pub use crate::fold::DEFAULT_SAMPLE_SIZE;
