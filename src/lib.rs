//! # hanoi-engine
//!
//! A three-pole disk puzzle engine: state model, move legality, a mutable
//! game session with bounded undo, a deterministic optimal solver, and a
//! move advisor blending an optional predictive model with a
//! guaranteed-correct heuristic fallback.
//!
//! ## Design Principles
//!
//! 1. **One legality oracle**: `engine::validator::is_legal` is the single
//!    source of truth for move legality. Everything else consults it.
//!
//! 2. **Invariant-safe state**: the poles always hold exactly the disks
//!    `{1..N}`. Mutation is engine-internal; untrusted snapshots are
//!    re-validated on the way in.
//!
//! 3. **Capability, not dependency**: the predictive model is a pluggable
//!    trait. Its absence or failure degrades hint quality, never
//!    correctness - the deterministic fallback always produces a legal move.
//!
//! 4. **Synchronous single-writer**: no internal locking; callers serialize
//!    mutations per session. Validator, solver, and encoder are pure.
//!
//! ## Modules
//!
//! - `core`: disks, poles, moves, puzzle state, snapshots, config, errors
//! - `engine`: move validator and the `GameEngine` session
//! - `solver`: lazy iterative optimal-solution generator
//! - `advisor`: predictive-model trait, state encoding, `MoveAdvisor`
//! - `training`: reproducible training-sample generation for the models
//! - `api`: transport-agnostic boundary request/response surface

pub mod advisor;
pub mod api;
pub mod core;
pub mod engine;
pub mod solver;
pub mod training;

// Re-export commonly used types
pub use crate::core::{
    Disk, EngineError, GameRng, Move, PoleId, PuzzleConfig, PuzzleState, StateSnapshot,
    DEFAULT_DISKS, HISTORY_CAPACITY, MAX_DISKS, MIN_DISKS, MOVE_ENCODINGS, POLE_COUNT,
};

pub use crate::engine::{is_legal, legal_moves, GameEngine, MoveList};

pub use crate::solver::{minimum_moves, solve, solve_vec, Solution};

pub use crate::advisor::{
    encode_snapshot, move_from_distribution, EncodedState, MoveAdvisor, NullModel,
    PredictiveModel, SolvedReport, SOLVED_THRESHOLD,
};

pub use crate::training::{
    generate_move_samples, generate_solved_samples, load_dataset, save_dataset, DatasetError,
    MoveSample, SolvedSample,
};
