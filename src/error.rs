use thiserror::Error;

/// Failures reported by stream operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  /// The head of the empty stream was requested.
  #[error("empty stream")]
  EmptyStreamAccess,
}

pub type Result<T> = std::result::Result<T, Error>;
