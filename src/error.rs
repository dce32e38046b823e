//! Error conditions for the engine, the referee and configuration loading

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{Pos, Stone};

/// Rejected engine input. A full board is not an error: it yields no move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Wrong dimensions or an unknown cell value
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    /// Missing or unknown color or difficulty
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Illegal placement reported by the referee
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("position ({}, {}) is already occupied", .0.row, .0.col)]
    Occupied(Pos),
    #[error("the game is already over")]
    GameOver,
    #[error("it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: Stone, got: Stone },
    #[error("'{0}' cannot be played")]
    InvalidColor(Stone),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
