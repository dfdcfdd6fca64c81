//! Puzzle state: three poles of disks.
//!
//! ## PuzzleState
//!
//! The live, mutable state owned by a `GameEngine`. Mutation is crate-internal
//! and only reachable through validated move application, so the union
//! invariant - the poles together hold exactly the disks `{1..N}` - can never
//! be observed broken.
//!
//! ## StateSnapshot
//!
//! An immutable, hashable copy for handing across the boundary. Poles use
//! `im::Vector`, so taking a snapshot is O(1) structural sharing rather than
//! a deep copy. Snapshots coming back *in* from the boundary are untrusted:
//! `PuzzleState::from_snapshot` re-checks the union invariant and fails with
//! `InvariantViolation` instead of adopting a corrupted state.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::disk::{Disk, PoleId, POLE_COUNT};
use super::error::EngineError;

/// The live disk/pole state of one puzzle.
///
/// Bottom of each pole is the front of its vector; the top disk is the back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleState {
    poles: [Vector<Disk>; POLE_COUNT],
    disk_count: u8,
}

impl PuzzleState {
    /// Canonical start: all disks on pole 0, largest at bottom.
    #[must_use]
    pub fn canonical(disk_count: u8) -> Self {
        let mut source = Vector::new();
        for size in (1..=disk_count).rev() {
            source.push_back(Disk::new(size));
        }
        Self {
            poles: [source, Vector::new(), Vector::new()],
            disk_count,
        }
    }

    /// Reconstruct a state from an externally supplied snapshot.
    ///
    /// Validates the union invariant: every disk `1..=N` present exactly
    /// once across the three poles. Stacking order within a pole is not
    /// checked here - a mid-game snapshot from a well-behaved engine is
    /// always properly stacked, and legality of future moves is the
    /// validator's concern.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Result<Self, EngineError> {
        let disk_count = snapshot.disk_count;
        if disk_count == 0 {
            return Err(EngineError::InvalidConfiguration { disk_count });
        }

        let mut seen: FxHashSet<Disk> = FxHashSet::default();
        let mut total = 0usize;
        for pole in &snapshot.poles {
            for &disk in pole {
                if disk.size() == 0 || disk.size() > disk_count {
                    return Err(EngineError::invariant(format!(
                        "{disk} out of range for {disk_count} disks"
                    )));
                }
                if !seen.insert(disk) {
                    return Err(EngineError::invariant(format!("{disk} appears twice")));
                }
                total += 1;
            }
        }
        if total != disk_count as usize {
            return Err(EngineError::invariant(format!(
                "expected {disk_count} disks, found {total}"
            )));
        }

        Ok(Self {
            poles: snapshot.poles.clone(),
            disk_count,
        })
    }

    /// Number of disks in this puzzle.
    #[must_use]
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// Top disk of a pole, or `None` if the pole is empty or out of range.
    #[must_use]
    pub fn top_of(&self, pole: PoleId) -> Option<Disk> {
        self.poles.get(pole.index())?.back().copied()
    }

    /// Number of disks on a pole. Out-of-range poles read as empty.
    #[must_use]
    pub fn pole_height(&self, pole: PoleId) -> usize {
        self.poles.get(pole.index()).map_or(0, Vector::len)
    }

    /// Disks on a pole, bottom to top.
    pub fn pole_disks(&self, pole: PoleId) -> impl Iterator<Item = Disk> + '_ {
        self.poles
            .get(pole.index())
            .into_iter()
            .flat_map(|p| p.iter().copied())
    }

    /// True iff the target pole holds every disk - equivalently, poles 0
    /// and 1 are both empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.poles[2].len() == self.disk_count as usize
    }

    /// Take an immutable snapshot. O(1) via structural sharing.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            poles: self.poles.clone(),
            disk_count: self.disk_count,
        }
    }

    /// Pop the top disk of a pole. Engine-internal; callers go through
    /// validated move application.
    pub(crate) fn lift(&mut self, pole: PoleId) -> Option<Disk> {
        self.poles.get_mut(pole.index())?.pop_back()
    }

    /// Push a disk onto a pole. Engine-internal; only ever receives a disk
    /// just lifted from another pole, which preserves the union invariant.
    pub(crate) fn place(&mut self, pole: PoleId, disk: Disk) {
        self.poles[pole.index()].push_back(disk);
    }
}

/// Immutable state snapshot, usable as a hash/equality key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateSnapshot {
    poles: [Vector<Disk>; POLE_COUNT],
    disk_count: u8,
}

impl StateSnapshot {
    /// Build a snapshot from raw pole contents, bottom to top.
    ///
    /// The container itself is unvalidated; `PuzzleState::from_snapshot`
    /// checks the union invariant on the way back in.
    #[must_use]
    pub fn from_poles(disk_count: u8, poles: [Vec<u8>; POLE_COUNT]) -> Self {
        let poles = poles.map(|p| p.into_iter().map(Disk::new).collect());
        Self { poles, disk_count }
    }

    /// Snapshot of the canonical start state.
    #[must_use]
    pub fn canonical(disk_count: u8) -> Self {
        PuzzleState::canonical(disk_count).snapshot()
    }

    /// Snapshot of the solved state: every disk on pole 2.
    #[must_use]
    pub fn solved(disk_count: u8) -> Self {
        let mut target = Vector::new();
        for size in (1..=disk_count).rev() {
            target.push_back(Disk::new(size));
        }
        Self {
            poles: [Vector::new(), Vector::new(), target],
            disk_count,
        }
    }

    /// Number of disks this snapshot was taken with.
    #[must_use]
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// Disks on one pole, bottom to top.
    pub fn pole_disks(&self, pole: PoleId) -> impl Iterator<Item = Disk> + '_ {
        self.poles
            .get(pole.index())
            .into_iter()
            .flat_map(|p| p.iter().copied())
    }

    /// Number of disks on a pole.
    #[must_use]
    pub fn pole_height(&self, pole: PoleId) -> usize {
        self.poles.get(pole.index()).map_or(0, Vector::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pole(id: u8) -> PoleId {
        PoleId::new(id)
    }

    #[test]
    fn test_canonical_start() {
        let state = PuzzleState::canonical(3);

        let source: Vec<u8> = state.pole_disks(pole(0)).map(Disk::size).collect();
        assert_eq!(source, vec![3, 2, 1]);
        assert_eq!(state.pole_height(pole(1)), 0);
        assert_eq!(state.pole_height(pole(2)), 0);
        assert_eq!(state.top_of(pole(0)), Some(Disk::new(1)));
        assert_eq!(state.top_of(pole(1)), None);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_out_of_range_pole_reads_empty() {
        let state = PuzzleState::canonical(3);
        assert_eq!(state.top_of(pole(7)), None);
        assert_eq!(state.pole_height(pole(7)), 0);
    }

    #[test]
    fn test_snapshot_equality_and_hash() {
        use std::collections::HashSet;

        let a = PuzzleState::canonical(4).snapshot();
        let b = StateSnapshot::canonical(4);
        let c = StateSnapshot::solved(4);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_from_snapshot_round_trip() {
        let snapshot = StateSnapshot::from_poles(3, [vec![3], vec![2], vec![1]]);
        let state = PuzzleState::from_snapshot(&snapshot).unwrap();
        assert_eq!(state.snapshot(), snapshot);
    }

    #[test]
    fn test_from_snapshot_rejects_duplicate_disk() {
        let snapshot = StateSnapshot::from_poles(3, [vec![3, 2], vec![2], vec![]]);
        let err = PuzzleState::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, EngineError::InvariantViolation { .. }));
    }

    #[test]
    fn test_from_snapshot_rejects_missing_disk() {
        let snapshot = StateSnapshot::from_poles(3, [vec![3, 1], vec![], vec![]]);
        let err = PuzzleState::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, EngineError::InvariantViolation { .. }));
    }

    #[test]
    fn test_from_snapshot_rejects_oversized_disk() {
        let snapshot = StateSnapshot::from_poles(2, [vec![5, 1], vec![], vec![]]);
        let err = PuzzleState::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, EngineError::InvariantViolation { .. }));
    }

    #[test]
    fn test_from_snapshot_rejects_zero_disk_count() {
        let snapshot = StateSnapshot::from_poles(0, [vec![], vec![], vec![]]);
        let err = PuzzleState::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_solved_snapshot_is_complete() {
        let state = PuzzleState::from_snapshot(&StateSnapshot::solved(5)).unwrap();
        assert!(state.is_complete());
        let target: Vec<u8> = state.pole_disks(pole(2)).map(Disk::size).collect();
        assert_eq!(target, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = StateSnapshot::canonical(3);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
