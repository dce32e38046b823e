//! Heuristic evaluation of cells and whole positions
//!
//! `evaluate` answers "how good is it for `color` to play here" for a single
//! cell. Candidate ordering and the greedy tiers use it directly; the
//! alpha-beta search uses `evaluate_board` at its leaves.

use crate::board::{scan_line_within, Board, Pos, Stone, DIRECTIONS};

use super::patterns::{line_score, PatternScore, SCAN_WINDOW};

/// Score placing `color` at `pos`.
///
/// Each axis is scanned up to four cells each way. The anchor is not read,
/// so the same call also scores an already placed stone.
#[must_use]
pub fn evaluate(board: &Board, pos: Pos, color: Stone) -> i32 {
    if !color.is_player() {
        return 0;
    }

    let pattern_score: i32 = DIRECTIONS
        .iter()
        .map(|&dir| {
            let scan = scan_line_within(board, pos, dir, color, SCAN_WINDOW);
            line_score(scan.run(), scan.room(), scan.open_sides())
        })
        .sum();

    pattern_score + position_bonus(pos)
}

/// Combined desirability of a cell: good for us plus good for them
#[inline]
#[must_use]
pub fn desirability(board: &Board, pos: Pos) -> i32 {
    evaluate(board, pos, Stone::Black) + evaluate(board, pos, Stone::White)
}

/// Static value of the whole position from `color`'s point of view.
///
/// Sum of `evaluate` over `color`'s stones minus the same over the
/// opponent's stones, so `evaluate_board(b, Black) == -evaluate_board(b, White)`.
#[must_use]
pub fn evaluate_board(board: &Board, color: Stone) -> i32 {
    if !color.is_player() {
        return 0;
    }
    let opponent = color.opponent();
    let mine: i32 = board.stones(color).map(|p| evaluate(board, p, color)).sum();
    let theirs: i32 = board
        .stones(opponent)
        .map(|p| evaluate(board, p, opponent))
        .sum();
    mine - theirs
}

/// Cells nearer the center are worth more
#[inline]
fn position_bonus(pos: Pos) -> i32 {
    (PatternScore::MAX_CENTER_DIST - pos.center_distance()) * PatternScore::CENTER_WEIGHT
}
