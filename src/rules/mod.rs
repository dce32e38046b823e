//! Game rules for freestyle Gomoku
//!
//! - Win: five or more in a row on any axis (overlines count)
//! - Draw: the board fills up without a win
//! - Any empty cell is a legal move

pub mod placement;
pub mod win;

// Re-exports for convenient access
pub use placement::{is_valid_move, validate_move};
pub use win::{
    check_win, find_five, has_five_in_row, is_board_full, outcome_after, winning_line, Outcome,
};
