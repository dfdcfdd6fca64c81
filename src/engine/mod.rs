//! Session engine: move legality and the mutable game wrapper.
//!
//! - `validator`: the single source of truth for move legality
//! - `game`: `GameEngine`, the validated-mutation session around a state

pub mod game;
pub mod validator;

pub use game::GameEngine;
pub use validator::{is_legal, legal_moves, MoveList};
