//! Brute-force elimination, kept as a correctness oracle.
//!
//! Materializes every chair and filters the circle round by round.
//! `O(n)` memory, `O(n)` time overall.

use crate::error::{Error, Result};

/// Survivor chair found by eliminating people one round at a time.
pub fn brute_force_position(chairs: u64) -> Result<u64> {
    if chairs == 0 {
        return Err(Error::zero_chairs());
    }
    let len = usize::try_from(chairs).map_err(|_| {
        Error::InvalidArgument(format!("{chairs} chairs do not fit in memory"))
    })?;

    let mut circle: Vec<u64> = Vec::new();
    circle.try_reserve_exact(len).map_err(|_| {
        Error::InvalidArgument(format!("{chairs} chairs do not fit in memory"))
    })?;
    circle.extend(1..=chairs);
    let mut delete_head = true;

    while circle.len() > 1 {
        let kept_parity = usize::from(delete_head);
        let odd = circle.len() % 2 == 1;

        let mut index = 0usize;
        circle.retain(|_| {
            let keep = index % 2 == kept_parity;
            index += 1;
            keep
        });

        delete_head ^= odd;
    }

    Ok(circle[0])
}
