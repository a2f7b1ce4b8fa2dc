//! Error types for survivor-core.

use thiserror::Error;

/// Result type for survivor-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing a survivor position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The chair count is not a positive integer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn zero_chairs() -> Self {
        Self::InvalidArgument("number of chairs must be at least 1".to_string())
    }
}

/// Parse a decimal chair count.
///
/// Anything other than a positive integer that fits in a `u64` is rejected
/// with [`Error::InvalidArgument`].
///
/// ```
/// use survivor_core::parse_chairs;
///
/// assert_eq!(parse_chairs("100").unwrap(), 100);
/// assert!(parse_chairs("0").is_err());
/// assert!(parse_chairs("2.5").is_err());
/// ```
pub fn parse_chairs(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let chairs: u64 = trimmed.parse().map_err(|_| {
        Error::InvalidArgument(format!("expected a positive integer, got {trimmed:?}"))
    })?;
    if chairs == 0 {
        return Err(Error::zero_chairs());
    }
    Ok(chairs)
}
