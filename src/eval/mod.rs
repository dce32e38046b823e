//! Position evaluation

pub mod heuristic;
pub mod patterns;

pub use heuristic::{desirability, evaluate, evaluate_board};
pub use patterns::{line_score, PatternScore, SCAN_WINDOW};
