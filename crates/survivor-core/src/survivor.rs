//! Survivor position from the chair count alone.
//!
//! Runs in `O(log n)` time and space: only the round schedule is built,
//! never the circle itself.

use crate::error::Result;
use crate::round::RoundSequence;

/// Chair number (1-based) of the last person left in a circle of `chairs`.
///
/// Chair #1 leaves first, chair #2 is skipped, chair #3 leaves, and so on
/// around the circle until one person remains.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when `chairs`
/// is zero.
///
/// # Examples
///
/// ```
/// use survivor_core::survivor_position;
///
/// assert_eq!(survivor_position(1).unwrap(), 1);
/// assert_eq!(survivor_position(100).unwrap(), 72);
/// assert_eq!(survivor_position(1_000_000).unwrap(), 951_424);
/// ```
pub fn survivor_position(chairs: u64) -> Result<u64> {
    Ok(RoundSequence::forward(chairs)?.survivor())
}
