//! Core puzzle types: disks, poles, moves, state, configuration, errors, RNG.
//!
//! Everything here is data and invariants; mutation policy lives in the
//! `engine` module.

pub mod config;
pub mod disk;
pub mod error;
pub mod moves;
pub mod rng;
pub mod state;

pub use config::{PuzzleConfig, DEFAULT_DISKS, HISTORY_CAPACITY, MAX_DISKS, MIN_DISKS};
pub use disk::{Disk, PoleId, POLE_COUNT};
pub use error::EngineError;
pub use moves::{Move, MOVE_ENCODINGS};
pub use rng::GameRng;
pub use state::{PuzzleState, StateSnapshot};
