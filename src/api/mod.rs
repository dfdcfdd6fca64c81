//! Transport-agnostic boundary surface.
//!
//! Serializable request/response pairs and pure handler functions for the
//! four operations an external caller (HTTP layer, GUI, CLI) needs:
//! construct a game, apply a move, fetch the full solution, request a hint.
//!
//! Handlers are stateless: each request carries the state snapshot it
//! operates on, and snapshots coming in are validated before use. Disk-count
//! range policy (clamping user input to 3..=8) belongs to the caller; these
//! handlers only reject outright-invalid configurations.

use serde::{Deserialize, Serialize};

use crate::advisor::MoveAdvisor;
use crate::core::{EngineError, Move, PoleId, PuzzleConfig, StateSnapshot};
use crate::engine::GameEngine;
use crate::solver;

/// Construct a fresh game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewGameRequest {
    pub disks: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub snapshot: StateSnapshot,
    pub disk_count: u8,
}

/// Apply one move to a caller-held state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveRequest {
    pub snapshot: StateSnapshot,
    pub from: u8,
    pub to: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveResponse {
    pub success: bool,
    /// Resulting state; unchanged from the request when `success` is false.
    pub snapshot: StateSnapshot,
    pub solved: bool,
}

/// Fetch the canonical full solution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolveRequest {
    pub disks: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Exactly `2^disks - 1` moves.
    pub solution: Vec<Move>,
}

/// Request a single-move hint for a caller-held state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HintRequest {
    pub snapshot: StateSnapshot,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HintResponse {
    pub hint: Option<Move>,
}

/// Start a new game at the canonical state.
pub fn new_game(req: &NewGameRequest) -> Result<NewGameResponse, EngineError> {
    let config = PuzzleConfig::new(req.disks)?;
    let engine = GameEngine::new(config);
    Ok(NewGameResponse {
        snapshot: engine.snapshot(),
        disk_count: req.disks,
    })
}

/// Apply a move to the supplied snapshot.
///
/// The snapshot is validated (`InvariantViolation` on corruption). An
/// illegal move yields `success: false` with the state unchanged, never an
/// error.
pub fn apply_move(req: &MoveRequest) -> Result<MoveResponse, EngineError> {
    let mut engine = GameEngine::from_snapshot(&req.snapshot)?;
    let success = engine.apply_move(PoleId::new(req.from), PoleId::new(req.to));
    Ok(MoveResponse {
        success,
        snapshot: engine.snapshot(),
        solved: engine.is_solved(),
    })
}

/// Full canonical solution for the given disk count.
pub fn full_solution(req: &SolveRequest) -> Result<SolveResponse, EngineError> {
    PuzzleConfig::new(req.disks)?;
    Ok(SolveResponse {
        solution: solver::solve_vec(req.disks),
    })
}

/// Single-move hint via the supplied advisor.
///
/// The caller owns the advisor (and whatever model it carries); a plain
/// `MoveAdvisor::new()` gives deterministic heuristic hints.
pub fn hint(req: &HintRequest, advisor: &MoveAdvisor) -> Result<HintResponse, EngineError> {
    let engine = GameEngine::from_snapshot(&req.snapshot)?;
    Ok(HintResponse {
        hint: advisor.suggest(engine.state()),
    })
}
