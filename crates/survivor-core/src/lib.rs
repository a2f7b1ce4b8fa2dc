//! Survivor Position
//!
//! Which chair is left when every second person leaves a circle?
//!
//! # The Elimination
//!
//! `n` people sit in a circle of chairs numbered `1..=n`. The person in
//! chair #1 leaves, chair #2 is skipped, chair #3 leaves, and the pattern of
//! skipping one and removing the next continues around the circle until a
//! single person, the survivor, remains.
//!
//! # Halving Instead of Simulating
//!
//! Instead of tracking people, we track group sizes. Each round is described
//! by a [`RoundDescriptor`]: how many people enter it and whether it starts by
//! removing the head. The schedule of rounds follows from `n` alone, and
//! read backwards it spells out, one binary digit per round, how many chairs
//! sit in front of the survivor:
//!
//! ```text
//! chairs  100  50  25  12   6   3   2   1
//! head    del del del keep keep keep del del
//!
//! backward bits (skip the terminal round): 1 0 0 0 1 1 1 = 71
//! survivor = 71 + 1 = 72
//! ```
//!
//! This is `O(log n)` in time and memory, against `O(n)` for
//! [`brute_force_position`], which is kept only as an oracle.

mod error;
mod reference;
mod round;
mod survivor;

pub use error::{parse_chairs, Error, Result};
pub use reference::brute_force_position;
pub use round::{max_rounds, RoundDescriptor, RoundSequence, Rounds};
pub use survivor::survivor_position;

/// Chair count of the classic 100-chair puzzle.
pub const DEFAULT_CHAIRS: u64 = 100;
