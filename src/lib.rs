//! Gomoku AI engine and game service
//!
//! Freestyle Gomoku on a 15x15 board:
//! - Black moves first
//! - Five or more in a row wins (overlines allowed)
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and line scanning
//! - [`rules`]: Win/draw detection and placement legality
//! - [`eval`]: Position evaluation and heuristics
//! - [`search`]: Candidate generation and the per-difficulty searches
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Game session referee shared by every play mode
//! - [`server`]: HTTP endpoints for AI moves and move judging
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Difficulty, Engine, Pos, Stone};
//!
//! let engine = Engine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(mv) = engine.select_move(&board, Stone::White, Difficulty::Hard)? {
//!     board.place_stone(mv.pos(), mv.color);
//!     println!("AI plays at ({}, {})", mv.row, mv.col);
//! }
//! # Ok::<(), gomoku::EngineError>(())
//! ```
//!
//! # Search Priority
//!
//! Every difficulty follows this order:
//! 1. Center on an empty board
//! 2. Immediate winning move
//! 3. Block the opponent's immediate win
//! 4. The difficulty's own search: greedy, two-ply lookahead or alpha-beta

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod server;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, BOARD_SIZE};
pub use engine::{Difficulty, Engine, EngineConfig, MoveResult, SearchType};
pub use error::{ConfigError, EngineError, MoveError};
pub use game::{Game, GameStatus};
