//! Main AI engine integrating all search components
//!
//! The engine picks a move for one side of a position. Every difficulty
//! shares the same front end:
//!
//! 1. **Opening**: an empty board is answered with the center cell
//! 2. **Immediate win**: a cell that completes five for us is played at once
//! 3. **Defense**: a cell that would complete five for the opponent is blocked
//!
//! Only then does the difficulty tier decide:
//!
//! - [`Difficulty::Easy`]: best ranked candidate, optionally jittered
//! - [`Difficulty::Medium`]: two-ply lookahead over the top candidates
//! - [`Difficulty::Hard`]: bounded alpha-beta with iterative deepening
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Difficulty, Engine, Pos, Stone};
//!
//! let engine = Engine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.select_move_with_stats(&board, Stone::White, Difficulty::Medium)?;
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! # Ok::<(), gomoku::EngineError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Move, Pos, Stone, CENTER};
use crate::error::EngineError;
use crate::eval::desirability;
use crate::rules::check_win;
use crate::search::{
    generate_candidates, greedy_move, lookahead_move, neighborhood, LookaheadParams,
    SearchParams, SearchResult, Searcher, DEFAULT_MAX_CANDIDATES, WIN_SCORE,
};

/// Playing strength, in increasing order of effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[serde(alias = "normal")]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(EngineError::InvalidParameter(format!(
                "unknown difficulty '{other}', expected easy, medium or hard"
            ))),
        }
    }
}

/// Which phase of the engine produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    /// Center cell on an empty board
    Opening,
    /// Completes five for the side to move
    ImmediateWin,
    /// Blocks the opponent's five
    Defense,
    /// Easy tier
    Greedy,
    /// Medium tier
    Lookahead,
    /// Hard tier
    AlphaBeta,
    /// Board is full
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score the deciding phase assigned to the move
    pub score: i32,
    /// Phase that decided the move
    pub search_type: SearchType,
    /// Depth completed (plies)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn opening(time_ms: u64) -> Self {
        Self {
            best_move: Some(CENTER),
            score: 0,
            search_type: SearchType::Opening,
            depth: 0,
            nodes: 1,
            time_ms,
        }
    }

    #[inline]
    fn immediate_win(pos: Pos, nodes: u64, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: WIN_SCORE,
            search_type: SearchType::ImmediateWin,
            depth: 1,
            nodes,
            time_ms,
        }
    }

    #[inline]
    fn defense(pos: Pos, score: i32, nodes: u64, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type: SearchType::Defense,
            depth: 1,
            nodes,
            time_ms,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            depth: 0,
            nodes: 0,
            time_ms,
        }
    }

    /// The chosen cell as a move for `color`
    pub fn to_move(&self, color: Stone) -> Option<Move> {
        self.best_move.map(|pos| Move::new(pos, color))
    }
}

/// Engine tuning. Every field has a default, so a partial TOML table works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ranked candidates kept per position
    pub max_candidates: usize,
    /// Easy picks at random among candidates within this percent of the best; 0 disables
    pub easy_margin_percent: u32,
    /// Seed for the easy jitter; entropy when absent
    pub seed: Option<u64>,
    /// Own candidates examined by the medium lookahead
    pub medium_breadth: usize,
    /// Weight of the opponent's best reply in the medium lookahead, in percent
    pub medium_reply_weight_percent: u32,
    /// Deepest iteration of the hard search
    pub hard_depth: u8,
    pub hard_root_breadth: usize,
    pub hard_inner_breadth: usize,
    /// Nodes the hard search may visit
    pub hard_node_budget: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let search = SearchParams::default();
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            easy_margin_percent: 0,
            seed: None,
            medium_breadth: 10,
            medium_reply_weight_percent: 50,
            hard_depth: search.max_depth,
            hard_root_breadth: search.root_breadth,
            hard_inner_breadth: search.inner_breadth,
            hard_node_budget: search.node_budget,
        }
    }
}

impl EngineConfig {
    fn lookahead_params(&self) -> LookaheadParams {
        LookaheadParams {
            breadth: self.medium_breadth,
            reply_breadth: self.max_candidates,
            reply_weight_percent: self.medium_reply_weight_percent,
        }
    }

    fn search_params(&self) -> SearchParams {
        SearchParams {
            max_depth: self.hard_depth,
            root_breadth: self.hard_root_breadth,
            inner_breadth: self.hard_inner_breadth,
            node_budget: self.hard_node_budget,
        }
    }
}

/// Main AI engine for Gomoku.
///
/// Holds only its configuration. Every call works on copies of the caller's
/// board, so one engine can serve any number of threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for `color`, or `None` if the board is full.
    pub fn select_move(
        &self,
        board: &Board,
        color: Stone,
        difficulty: Difficulty,
    ) -> Result<Option<Move>, EngineError> {
        Ok(self
            .select_move_with_stats(board, color, difficulty)?
            .to_move(color))
    }

    /// Choose a move and report how it was found.
    pub fn select_move_with_stats(
        &self,
        board: &Board,
        color: Stone,
        difficulty: Difficulty,
    ) -> Result<MoveResult, EngineError> {
        if !color.is_player() {
            return Err(EngineError::InvalidParameter(
                "ai color must be black or white".to_string(),
            ));
        }

        let start = Instant::now();
        let result = self.search(board, color, difficulty, start);

        debug!(
            %difficulty,
            %color,
            best_move = ?result.best_move,
            search_type = ?result.search_type,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "move selected"
        );

        Ok(result)
    }

    fn search(&self, board: &Board, color: Stone, difficulty: Difficulty, start: Instant) -> MoveResult {
        let elapsed_ms = || u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        if board.is_full() {
            return MoveResult::no_move(elapsed_ms());
        }
        if board.is_board_empty() {
            return MoveResult::opening(elapsed_ms());
        }

        // Forced moves take precedence over every tier
        let nearby = neighborhood(board);
        #[allow(clippy::cast_possible_truncation)]
        let scanned = nearby.len() as u64;

        if let Some(pos) = find_immediate_win(board, &nearby, color) {
            return MoveResult::immediate_win(pos, scanned, elapsed_ms());
        }
        if let Some((pos, score)) = find_block(board, &nearby, color.opponent()) {
            return MoveResult::defense(pos, score, scanned * 2, elapsed_ms());
        }

        let candidates = generate_candidates(board, self.config.max_candidates.max(1));

        match difficulty {
            Difficulty::Easy => {
                let mut rng = self.rng_for(board);
                let pick = greedy_move(&candidates, self.config.easy_margin_percent, &mut rng);
                let result = pick.map_or_else(SearchResult::none, |pick| SearchResult {
                    best_move: Some(pick.pos),
                    score: pick.score,
                    depth: 1,
                    nodes: scanned,
                });
                MoveResult::from_search(result, SearchType::Greedy, elapsed_ms())
            }
            Difficulty::Medium => {
                let result =
                    lookahead_move(board, color, &candidates, self.config.lookahead_params());
                MoveResult::from_search(result, SearchType::Lookahead, elapsed_ms())
            }
            Difficulty::Hard => {
                let result = Searcher::new(self.config.search_params()).search(board, color);
                MoveResult::from_search(result, SearchType::AlphaBeta, elapsed_ms())
            }
        }
    }

    /// Seeded runs vary with the position but repeat for the same one
    fn rng_for(&self, board: &Board) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed ^ u64::from(board.stone_count())),
            None => SmallRng::from_entropy(),
        }
    }
}

/// First cell (in discovery order) where `color` completes five
fn find_immediate_win(board: &Board, cells: &[Pos], color: Stone) -> Option<Pos> {
    cells.iter().copied().find(|&pos| check_win(board, pos, color))
}

/// The opponent's winning cell to block. With several, the most desirable
/// one wins; ties keep discovery order.
fn find_block(board: &Board, cells: &[Pos], opponent: Stone) -> Option<(Pos, i32)> {
    let mut best: Option<(Pos, i32)> = None;
    for &pos in cells {
        if !check_win(board, pos, opponent) {
            continue;
        }
        let score = desirability(board, pos);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }
    best
}
