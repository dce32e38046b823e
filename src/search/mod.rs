//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation and ranking
//! - Greedy selection (easy)
//! - Two-ply lookahead (medium)
//! - Alpha-Beta search with iterative deepening (hard)

pub mod alphabeta;
pub mod candidates;
pub mod greedy;
pub mod lookahead;

pub use alphabeta::{SearchParams, Searcher, WIN_SCORE};
pub use candidates::{generate_candidates, neighborhood, Candidate, DEFAULT_MAX_CANDIDATES};
pub use greedy::greedy_move;
pub use lookahead::{lookahead_move, LookaheadParams};

use crate::board::Pos;

/// What a search tier settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation score of the best move
    pub score: i32,
    /// Depth completed
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
}

impl SearchResult {
    /// Nothing to play
    pub fn none() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }
}
