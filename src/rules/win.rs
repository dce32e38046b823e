//! Win and draw detection
//!
//! Five or more stones in a row wins; overlines are not excluded. A draw is
//! only declared when the placement that filled the board did not also win.

use serde::{Deserialize, Serialize};

use crate::board::{scan_line, Board, Pos, Stone, DIRECTIONS};

/// Terminal state reached by a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    #[serde(rename_all = "camelCase")]
    Win { winner: Stone, winning_line: [Pos; 5] },
    Draw,
}

/// Would `color` have five in a row through `pos`?
///
/// The stone at `pos` itself is not read, so this works both after the
/// placement and for a hypothetical placement on an empty cell.
#[inline]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if !color.is_player() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| 1 + scan_line(board, pos, dir, color).run() >= 5)
}

/// True iff no empty cell remains
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

/// The first five cells of the winning run through `pos`, in line order
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; 5]> {
    if !color.is_player() {
        return None;
    }
    for dir in DIRECTIONS {
        let scan = scan_line(board, pos, dir, color);
        if 1 + scan.run() < 5 {
            continue;
        }
        let (dr, dc) = dir.delta();
        let back = i32::from(scan.backward.len);
        let start = pos.offset(-dr, -dc, back)?;
        let mut line = [start; 5];
        for (i, cell) in line.iter_mut().enumerate().skip(1) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let step = i as i32;
            *cell = start.offset(dr, dc, step)?;
        }
        return Some(line);
    }
    None
}

/// Find any five-in-a-row of `color` already on the board
pub fn find_five(board: &Board, color: Stone) -> Option<[Pos; 5]> {
    board
        .stones(color)
        .find_map(|pos| winning_line(board, pos, color))
}

/// Check if there's 5+ in a row for the given color
#[inline]
pub fn has_five_in_row(board: &Board, color: Stone) -> bool {
    find_five(board, color).is_some()
}

/// Decide the terminal state after `color` has been placed at `pos`.
///
/// Win is checked before draw for the same placement.
pub fn outcome_after(board: &Board, pos: Pos, color: Stone) -> Option<Outcome> {
    if let Some(line) = winning_line(board, pos, color) {
        return Some(Outcome::Win {
            winner: color,
            winning_line: line,
        });
    }
    if is_board_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
