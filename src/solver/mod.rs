//! Optimal solution generation.
//!
//! The standard divide-and-conquer recurrence - solve N-1 disks onto the
//! auxiliary, move disk N to the target, solve N-1 disks onto the target -
//! evaluated with an explicit work stack instead of native recursion. That
//! keeps call depth flat for large N and lets the sequence be consumed
//! incrementally (an animation layer can pull one move at a time without the
//! whole `2^N - 1` sequence ever materializing).
//!
//! The solver is defined only for the canonical start state; advising from
//! arbitrary mid-game states is the `advisor` module's job.

use crate::core::{Move, PoleId};

/// Minimum number of moves to solve `disk_count` disks: `2^N - 1`.
///
/// Saturates at `u128::MAX` for counts past 127, where the closed form no
/// longer fits; the lazy iterator itself has no such bound.
#[must_use]
pub fn minimum_moves(disk_count: u8) -> u128 {
    if disk_count >= 128 {
        return u128::MAX;
    }
    (1u128 << disk_count) - 1
}

/// Pending work: either a sub-puzzle to expand or a single move to emit.
#[derive(Clone, Copy, Debug)]
enum Frame {
    Split {
        count: u8,
        from: PoleId,
        to: PoleId,
        via: PoleId,
    },
    Emit(Move),
}

/// Lazy iterator over the canonical optimal move sequence.
///
/// Yields exactly `2^N - 1` moves taking pole 0 to pole 2. The work stack
/// holds O(N) frames at any point.
#[derive(Clone, Debug)]
pub struct Solution {
    stack: Vec<Frame>,
    remaining: u128,
}

impl Solution {
    /// Moves not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> u128 {
        self.remaining
    }
}

impl Iterator for Solution {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(mv) => {
                    self.remaining -= 1;
                    return Some(mv);
                }
                Frame::Split { count: 0, .. } => {}
                Frame::Split {
                    count,
                    from,
                    to,
                    via,
                } => {
                    // Pushed in reverse so they pop in recurrence order.
                    self.stack.push(Frame::Split {
                        count: count - 1,
                        from: via,
                        to,
                        via: from,
                    });
                    self.stack.push(Frame::Emit(Move::new(from, to)));
                    self.stack.push(Frame::Split {
                        count: count - 1,
                        from,
                        to: via,
                        via: to,
                    });
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Solve `disk_count` disks from the canonical start, pole 0 to pole 2.
#[must_use]
pub fn solve(disk_count: u8) -> Solution {
    let mut stack = Vec::new();
    if disk_count > 0 {
        stack.push(Frame::Split {
            count: disk_count,
            from: PoleId::new(0),
            to: PoleId::new(2),
            via: PoleId::new(1),
        });
    }
    Solution {
        stack,
        remaining: minimum_moves(disk_count),
    }
}

/// Materialize the full solution. Convenience for small N.
#[must_use]
pub fn solve_vec(disk_count: u8) -> Vec<Move> {
    solve(disk_count).collect()
}
