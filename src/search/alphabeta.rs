//! Alpha-Beta search with iterative deepening
//!
//! Negamax with alpha-beta pruning over a narrow, re-ranked candidate list
//! at every ply. Leaves are scored with `evaluate_board` from the side to
//! move. A fixed node budget bounds the work; when it runs out mid-iteration
//! the move from the last completed depth is kept.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{SearchParams, Searcher};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new(SearchParams::default());
//! let result = searcher.search(&board, Stone::White);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_board;
use crate::rules::check_win;

use super::candidates::generate_candidates;
use super::SearchResult;

/// Score of a won position. Far above any sum `evaluate_board` can reach.
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1_000;

/// Limits for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Deepest iteration, in plies
    pub max_depth: u8,
    /// Candidates tried at the root
    pub root_breadth: usize,
    /// Candidates tried at inner nodes
    pub inner_breadth: usize,
    /// Nodes visited before the search stops
    pub node_budget: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            root_breadth: 10,
            inner_breadth: 8,
            node_budget: 20_000,
        }
    }
}

/// Single-use negamax searcher.
///
/// Holds only counters; the board is copied for every child, so a searcher
/// never touches the caller's position.
pub struct Searcher {
    params: SearchParams,
    nodes: u64,
    stopped: bool,
}

impl Searcher {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            nodes: 0,
            stopped: false,
        }
    }

    /// Nodes visited so far
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Iterative deepening from depth 1 up to `max_depth`.
    ///
    /// The best move starts as the top ranked candidate, so a budget that runs
    /// out during the first iteration still yields a move.
    pub fn search(&mut self, board: &Board, color: Stone) -> SearchResult {
        let mut root_moves: Vec<Pos> = generate_candidates(board, self.params.root_breadth.max(1))
            .into_iter()
            .map(|c| c.pos)
            .collect();

        let Some(&first) = root_moves.first() else {
            return SearchResult::none();
        };

        let mut best = SearchResult {
            best_move: Some(first),
            score: 0,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=self.params.max_depth.max(1) {
            let Some((mov, score)) = self.search_root(board, color, depth, &root_moves) else {
                break;
            };

            best.best_move = Some(mov);
            best.score = score;
            best.depth = depth;

            // Try the previous best first at the next depth
            if let Some(idx) = root_moves.iter().position(|&p| p == mov) {
                root_moves[..=idx].rotate_right(1);
            }

            if score >= WIN_SCORE - i32::from(depth) {
                break;
            }
        }

        best.nodes = self.nodes;
        best
    }

    /// One full-window pass over the root moves. `None` if the budget ran out.
    fn search_root(
        &mut self,
        board: &Board,
        color: Stone,
        depth: u8,
        moves: &[Pos],
    ) -> Option<(Pos, i32)> {
        let mut alpha = -INF;
        let beta = INF;
        let mut best: Option<(Pos, i32)> = None;

        for &mov in moves {
            let child = board.with_stone(mov, color);
            let score = -self.alpha_beta(&child, color.opponent(), depth - 1, 1, -beta, -alpha, mov);

            if self.stopped {
                return None;
            }

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mov, score));
            }
            alpha = alpha.max(score);
        }

        best
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        color: Stone,
        depth: u8,
        ply: u8,
        mut alpha: i32,
        beta: i32,
        last_move: Pos,
    ) -> i32 {
        if self.nodes >= self.params.node_budget {
            self.stopped = true;
        }
        if self.stopped {
            return 0;
        }
        self.nodes += 1;

        // The previous mover just made five: a loss for the side to move,
        // scored so that faster wins rank higher
        if check_win(board, last_move, color.opponent()) {
            return -(WIN_SCORE - i32::from(ply));
        }
        if board.is_full() {
            return 0;
        }
        if depth == 0 {
            return evaluate_board(board, color);
        }

        let moves = generate_candidates(board, self.params.inner_breadth.max(1));
        if moves.is_empty() {
            return evaluate_board(board, color);
        }
        let mut best = -INF;

        for candidate in moves {
            let child = board.with_stone(candidate.pos, color);
            let score = -self.alpha_beta(
                &child,
                color.opponent(),
                depth - 1,
                ply + 1,
                -beta,
                -alpha,
                candidate.pos,
            );

            if self.stopped {
                return 0;
            }

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
