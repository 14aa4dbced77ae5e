//! Simulation frame counter.
//!
//! The simulation is frame-stepped: one `tick` per rendered frame, no
//! wall-clock coupling.  `Frame` counts completed ticks so observers and
//! output rows can be keyed without floating-point time.

use std::fmt;

/// An absolute frame number.  `Frame::ZERO` is the state right after
/// initialization, before the first tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// The frame after `self`.
    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }

    /// `true` when this frame falls on a snapshot boundary.  An interval of
    /// zero disables snapshots.
    #[inline]
    pub fn is_on_interval(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
