//! Strongly typed slot identifier.
//!
//! A boid has no identity beyond its slot in the flock buffers.  `BoidId`
//! wraps that slot so neighbor records and observer rows cannot be confused
//! with counts or frame numbers.  The inner integer is `pub` for direct
//! construction in tests; callers should prefer `.index()` for `Vec` access.

use std::fmt;

/// Index of a boid in both flock buffers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidId(pub u32);

impl BoidId {
    /// Cast to `usize` for direct use as a slice index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BoidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoidId({})", self.0)
    }
}

impl TryFrom<usize> for BoidId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<BoidId, Self::Error> {
        u32::try_from(n).map(BoidId)
    }
}
