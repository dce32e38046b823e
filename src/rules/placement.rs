//! Placement legality
//!
//! Freestyle Gomoku has no forbidden patterns: a move is legal iff it lands
//! inside the board on an empty cell.

use crate::board::{Board, Pos};
use crate::error::MoveError;

/// Check if a move at `(row, col)` is legal
pub fn is_valid_move(board: &Board, row: i32, col: i32) -> bool {
    validate_move(board, row, col).is_ok()
}

/// Validate untrusted coordinates, returning the on-board position
pub fn validate_move(board: &Board, row: i32, col: i32) -> Result<Pos, MoveError> {
    let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied(pos));
    }
    Ok(pos)
}
