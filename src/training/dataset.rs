//! Training-sample generation and dataset persistence.
//!
//! Samples pair the shared state encoding with supervision targets:
//! random legal walks labeled with the move taken (for the move head), and
//! a balanced mix of solved/unsolved states (for the classifier head).
//! Generation is seeded and fully reproducible.
//!
//! Datasets persist as bincode; actual model training happens outside this
//! crate.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::advisor::encoding::{encode_snapshot, EncodedState};
use crate::core::{EngineError, GameRng, PuzzleConfig};
use crate::engine::GameEngine;
use crate::solver;

/// Errors from dataset persistence.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Upper bound on unsolved-sample walk length. Walks only need to scatter
/// states away from the start; tying their length to the full `2^N - 1`
/// solution size would make large puzzles effectively non-terminating.
const MAX_WALK_STEPS: usize = 256;

/// One move-prediction sample: encoded state and the move-index target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveSample {
    pub encoded: EncodedState,
    /// Dense move index, `from * 3 + to`.
    pub move_index: u8,
}

/// One solved-classification sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolvedSample {
    pub encoded: EncodedState,
    pub solved: bool,
}

/// Generate move-prediction samples from a seeded random legal walk.
///
/// Each step records the pre-move encoding and the (uniformly chosen) legal
/// move taken. The walk resets whenever it stumbles into the solved state so
/// every sample has a successor move.
pub fn generate_move_samples(
    disk_count: u8,
    samples: usize,
    seed: u64,
) -> Result<Vec<MoveSample>, EngineError> {
    let config = PuzzleConfig::new(disk_count)?;
    let mut engine = GameEngine::new(config);
    let mut rng = GameRng::new(seed);
    let mut out = Vec::with_capacity(samples);

    while out.len() < samples {
        if engine.is_solved() {
            engine.reset();
        }
        let legal = engine.legal_moves();
        let Some(&mv) = rng.choose(&legal) else {
            break; // zero-disk puzzles have no walk
        };
        out.push(MoveSample {
            encoded: encode_snapshot(&engine.snapshot()),
            move_index: mv.to_index() as u8,
        });
        engine.apply_move(mv.from, mv.to);
    }

    debug!(disk_count, count = out.len(), "generated move samples");
    Ok(out)
}

/// Generate solved-classification samples: half solved states, half
/// random-walk unsolved states.
pub fn generate_solved_samples(
    disk_count: u8,
    samples: usize,
    seed: u64,
) -> Result<Vec<SolvedSample>, EngineError> {
    let config = PuzzleConfig::new(disk_count)?;
    let mut engine = GameEngine::new(config);
    let mut rng = GameRng::new(seed);
    let mut out = Vec::with_capacity(samples);

    let solved = crate::core::StateSnapshot::solved(disk_count);
    for _ in 0..samples / 2 {
        out.push(SolvedSample {
            encoded: encode_snapshot(&solved),
            solved: true,
        });
    }

    let max_walk = usize::try_from(solver::minimum_moves(disk_count))
        .unwrap_or(usize::MAX)
        .clamp(2, MAX_WALK_STEPS);
    while out.len() < samples {
        engine.reset();
        let mut walk = rng.fork();
        let steps = walk.gen_range(1..max_walk);
        for _ in 0..steps {
            let legal = engine.legal_moves();
            if let Some(&mv) = walk.choose(&legal) {
                engine.apply_move(mv.from, mv.to);
            }
        }
        if engine.is_solved() {
            // A walk can stumble onto the solution; step back off it so the
            // label stays honest.
            engine.undo();
        }
        out.push(SolvedSample {
            encoded: encode_snapshot(&engine.snapshot()),
            solved: false,
        });
    }

    debug!(disk_count, count = out.len(), "generated solved samples");
    Ok(out)
}

/// Write a dataset to disk as bincode.
pub fn save_dataset<T: Serialize>(path: impl AsRef<Path>, samples: &[T]) -> Result<(), DatasetError> {
    let file = File::create(path)?;
    bincode::serialize_into(BufWriter::new(file), samples)?;
    Ok(())
}

/// Read a dataset back from disk.
pub fn load_dataset<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, DatasetError> {
    let file = File::open(path)?;
    Ok(bincode::deserialize_from(BufReader::new(file))?)
}
