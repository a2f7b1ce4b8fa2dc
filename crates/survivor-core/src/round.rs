//! Round descriptors - the halving schedule of the circle.
//!
//! Every round walks once around the circle and asks every second person to
//! leave. Which half leaves depends on whether the round starts by removing
//! the head (the first remaining chair) or by skipping it. A round is fully
//! described by that flag and by how many people enter it:
//!
//! - Round 0 always deletes the head and starts with all `n` chairs
//! - Deleting the head with `c` people leaves `floor(c / 2)`
//! - Skipping the head with `c` people leaves `ceil(c / 2)`
//! - The flag flips after a round with an odd count, because the last
//!   person of that round and the first person of the next sit next to each
//!   other across the seam of the circle
//!
//! The schedule ends at the round with a single person, the survivor.

use crate::error::{Error, Result};

/// One round of the elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundDescriptor {
    /// Whether the first remaining person leaves in this round.
    pub delete_head: bool,
    /// People remaining when the round starts (always >= 1).
    pub count: u64,
}

impl RoundDescriptor {
    /// The opening round for `chairs` people: chair #1 leaves first.
    #[inline]
    pub const fn initial(chairs: u64) -> Self {
        Self {
            delete_head: true,
            count: chairs,
        }
    }

    /// Is this the round with a single person left?
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.count <= 1
    }

    /// How many people survive this round.
    #[inline]
    pub const fn survivors(&self) -> u64 {
        if self.delete_head {
            self.count / 2
        } else {
            self.count.div_ceil(2)
        }
    }

    /// Derive the following round, or `None` once the survivor is found.
    pub const fn next(&self) -> Option<Self> {
        if self.is_terminal() {
            return None;
        }
        Some(Self {
            delete_head: self.delete_head ^ (self.count % 2 == 1),
            count: self.survivors(),
        })
    }
}

impl std::fmt::Display for RoundDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = if self.delete_head { "delete" } else { "keep" };
        write!(f, "{} ({} head)", self.count, mode)
    }
}

/// Iterator over the rounds for a circle, from the opening round to the
/// terminal one.
pub struct Rounds {
    current: Option<RoundDescriptor>,
}

impl Rounds {
    /// Rounds for a circle of `chairs` people.
    pub fn new(chairs: u64) -> Result<Self> {
        if chairs == 0 {
            return Err(Error::zero_chairs());
        }
        Ok(Self {
            current: Some(RoundDescriptor::initial(chairs)),
        })
    }
}

impl Iterator for Rounds {
    type Item = RoundDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let round = self.current?;
        self.current = round.next();
        Some(round)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(round) => (1, Some(max_rounds(round.count) as usize)),
            None => (0, Some(0)),
        }
    }
}

impl std::iter::FusedIterator for Rounds {}

/// Upper bound on the number of rounds for `chairs` people:
/// `ceil(log2(chairs)) + 1`.
///
/// Each round at least halves the count, rounding up at worst, so the
/// schedule reaches one person after `ceil(log2(chairs))` halvings.
#[inline]
pub const fn max_rounds(chairs: u64) -> u32 {
    if chairs <= 1 {
        return 1;
    }
    u64::BITS - (chairs - 1).leading_zeros() + 1
}

/// The complete round schedule for one circle.
///
/// Built front to back (forward phase), read back to front when the
/// survivor's chair is reconstructed (backward phase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSequence {
    rounds: Vec<RoundDescriptor>,
}

impl RoundSequence {
    /// Forward phase: halve the group until one person is left.
    pub fn forward(chairs: u64) -> Result<Self> {
        let mut rounds = Vec::with_capacity(max_rounds(chairs) as usize);
        rounds.extend(Rounds::new(chairs)?);
        Ok(Self { rounds })
    }

    /// Number of rounds, terminal round included.
    #[inline]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Always false: a schedule holds at least the opening round.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Chairs in the circle.
    #[inline]
    pub fn chairs(&self) -> u64 {
        self.rounds[0].count
    }

    /// Rounds in elimination order.
    #[inline]
    pub fn descriptors(&self) -> &[RoundDescriptor] {
        &self.rounds
    }

    /// Rounds in elimination order.
    pub fn iter(&self) -> std::slice::Iter<'_, RoundDescriptor> {
        self.rounds.iter()
    }

    /// Rounds from the terminal one back to the opening one.
    pub fn backward(&self) -> std::iter::Rev<std::slice::Iter<'_, RoundDescriptor>> {
        self.rounds.iter().rev()
    }

    /// Backward phase: rebuild the survivor's chair number.
    ///
    /// Walking back from the single survivor, each earlier round doubles the
    /// number of chairs in front of the survivor, plus one more when that
    /// round deleted the head. The terminal round contributes no bit.
    pub fn survivor(&self) -> u64 {
        let before = self
            .backward()
            .skip(1)
            .fold(0u64, |before, round| (before << 1) | u64::from(round.delete_head));
        before + 1
    }
}

impl<'a> IntoIterator for &'a RoundSequence {
    type Item = &'a RoundDescriptor;
    type IntoIter = std::slice::Iter<'a, RoundDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}
