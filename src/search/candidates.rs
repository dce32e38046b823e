//! Candidate move generation
//!
//! Only empty cells within two steps of an existing stone are worth looking
//! at. They are ranked by combined desirability so the search tiers can cut
//! the list short.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, BOARD_SIZE, CENTER};
use crate::eval::desirability;

/// Proximity radius around existing stones
const RADIUS: i32 = 2;

/// Default cap on the number of ranked candidates
pub const DEFAULT_MAX_CANDIDATES: usize = 20;

/// A ranked candidate cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub pos: Pos,
    pub score: i32,
}

/// Empty cells near any stone, in discovery order.
///
/// Stones are visited row-major and each neighborhood is walked row by row,
/// so the order is stable for a given board. An empty board yields nothing.
pub fn neighborhood(board: &Board) -> Vec<Pos> {
    let mut cells = Vec::with_capacity(64);
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];

    for stone in board.occupied() {
        for dr in -RADIUS..=RADIUS {
            for dc in -RADIUS..=RADIUS {
                let Some(pos) = stone.offset(dr, dc, 1) else {
                    continue;
                };

                let (r, c) = (pos.row as usize, pos.col as usize);
                if seen[r][c] {
                    continue;
                }
                seen[r][c] = true;

                if board.is_empty(pos) {
                    cells.push(pos);
                }
            }
        }
    }

    cells
}

/// Ranked candidates, best first, at most `max` of them.
///
/// On an empty board the center is the only candidate. Ties keep their
/// discovery order.
pub fn generate_candidates(board: &Board, max: usize) -> Vec<Candidate> {
    if board.is_board_empty() {
        return vec![Candidate {
            pos: CENTER,
            score: desirability(board, CENTER),
        }];
    }

    let mut scored: Vec<Candidate> = neighborhood(board)
        .into_iter()
        .map(|pos| Candidate {
            pos,
            score: desirability(board, pos),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(max);
    scored
}
