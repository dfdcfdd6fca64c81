//! Move legality.
//!
//! `is_legal` is the single source of truth for whether a move may be
//! applied. Every other component - the engine, the advisor, the boundary -
//! consults it rather than re-deriving the rule.
//!
//! It fails closed: out-of-range indices, `from == to`, and empty source
//! poles are simply illegal, never panics or errors. The boundary routinely
//! hands in raw, unchecked indices.

use smallvec::SmallVec;

use crate::core::{Move, PoleId, PuzzleState};

/// All legal moves from a state, at most 6. Never spills to the heap.
pub type MoveList = SmallVec<[Move; 6]>;

/// Check whether moving the top disk of `from` onto `to` is legal.
///
/// Legal iff both indices are in range, the poles differ, `from` is
/// non-empty, and its top disk is smaller than the top of `to` (an empty
/// destination accepts anything). Sizes are unique, so ties cannot occur.
#[must_use]
pub fn is_legal(state: &PuzzleState, from: PoleId, to: PoleId) -> bool {
    if !from.is_valid() || !to.is_valid() || from == to {
        return false;
    }
    let Some(moving) = state.top_of(from) else {
        return false;
    };
    match state.top_of(to) {
        None => true,
        Some(resting) => moving < resting,
    }
}

/// Enumerate all legal moves in ascending `(from, to)` order.
///
/// The ordering is deterministic so callers can rely on stable enumeration
/// for tie-breaking.
#[must_use]
pub fn legal_moves(state: &PuzzleState) -> MoveList {
    let mut moves = MoveList::new();
    for from in PoleId::all() {
        for to in PoleId::all() {
            if is_legal(state, from, to) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateSnapshot;

    fn pole(id: u8) -> PoleId {
        PoleId::new(id)
    }

    fn state_from(disk_count: u8, poles: [Vec<u8>; 3]) -> PuzzleState {
        PuzzleState::from_snapshot(&StateSnapshot::from_poles(disk_count, poles)).unwrap()
    }

    #[test]
    fn test_fails_closed_on_bad_indices() {
        let state = PuzzleState::canonical(3);
        assert!(!is_legal(&state, pole(3), pole(0)));
        assert!(!is_legal(&state, pole(0), pole(3)));
        assert!(!is_legal(&state, pole(200), pole(200)));
    }

    #[test]
    fn test_same_pole_illegal() {
        let state = PuzzleState::canonical(3);
        assert!(!is_legal(&state, pole(0), pole(0)));
    }

    #[test]
    fn test_empty_source_illegal() {
        let state = PuzzleState::canonical(3);
        assert!(!is_legal(&state, pole(1), pole(2)));
    }

    #[test]
    fn test_empty_destination_legal() {
        let state = PuzzleState::canonical(3);
        assert!(is_legal(&state, pole(0), pole(1)));
        assert!(is_legal(&state, pole(0), pole(2)));
    }

    #[test]
    fn test_size_ordering() {
        // [[3],[2],[1]]: 1 can go anywhere, 2 only onto 3, 3 nowhere.
        let state = state_from(3, [vec![3], vec![2], vec![1]]);

        assert!(is_legal(&state, pole(2), pole(0)));
        assert!(is_legal(&state, pole(2), pole(1)));
        assert!(is_legal(&state, pole(1), pole(0)));
        assert!(!is_legal(&state, pole(1), pole(2)));
        assert!(!is_legal(&state, pole(0), pole(1)));
        assert!(!is_legal(&state, pole(0), pole(2)));
    }

    #[test]
    fn test_legal_moves_order() {
        let state = PuzzleState::canonical(3);
        let moves: Vec<(u8, u8)> = legal_moves(&state)
            .iter()
            .map(|m| (m.from.raw(), m.to.raw()))
            .collect();
        assert_eq!(moves, vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn test_legal_moves_never_stack_larger_on_smaller() {
        let state = state_from(3, [vec![3], vec![2], vec![1]]);
        for mv in legal_moves(&state) {
            let moving = state.top_of(mv.from).unwrap();
            if let Some(resting) = state.top_of(mv.to) {
                assert!(moving < resting, "{mv} stacks {moving} on {resting}");
            }
        }
    }
}
