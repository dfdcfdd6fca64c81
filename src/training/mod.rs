//! Training-data generation for the predictive capability.
//!
//! The models themselves are trained and served outside this crate; what
//! lives here is the reproducible sample generation that feeds them, using
//! the same state encoding the advisor consumes at inference time.

pub mod dataset;

pub use dataset::{
    generate_move_samples, generate_solved_samples, load_dataset, save_dataset, DatasetError,
    MoveSample, SolvedSample,
};
