//! Disk and pole identification.
//!
//! Disks are identified by their size: a positive integer in `1..=N`,
//! unique within a puzzle. Larger numbers are physically larger disks.
//!
//! Poles are identified by index. A puzzle always has exactly three poles;
//! by convention pole 0 is the source, pole 1 the auxiliary, and pole 2 the
//! target, but nothing in the types enforces that reading.

use serde::{Deserialize, Serialize};

/// Number of poles in a puzzle. Fixed by the rules, not configurable.
pub const POLE_COUNT: usize = 3;

/// A disk, identified by its size.
///
/// Sizes are unique within a puzzle instance, so two disks never compare
/// equal. The derived `Ord` gives the stacking order directly: a disk may
/// rest on any strictly larger disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Disk(pub u8);

impl Disk {
    /// The globally smallest disk. It can land on anything.
    pub const SMALLEST: Disk = Disk(1);

    /// Create a disk of the given size.
    #[must_use]
    pub const fn new(size: u8) -> Self {
        Self(size)
    }

    /// Get the disk's size.
    #[must_use]
    pub const fn size(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.0)
    }
}

/// Pole index.
///
/// Valid poles are `0..3`, but the type does not enforce the range: the
/// boundary hands in raw indices, and `MoveValidator` fails closed on
/// anything out of range rather than panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoleId(pub u8);

impl PoleId {
    /// Create a pole ID. Not range-checked; see `MoveValidator`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The raw index as a `usize`, for slot lookup.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a valid pole index.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < POLE_COUNT
    }

    /// Iterate over all valid pole IDs in ascending order.
    pub fn all() -> impl Iterator<Item = PoleId> {
        (0..POLE_COUNT as u8).map(PoleId::new)
    }
}

impl std::fmt::Display for PoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pole({})", self.0)
    }
}
