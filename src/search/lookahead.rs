//! Two-ply lookahead for the medium tier
//!
//! Each of the top candidates is tried on a copy of the board, and the
//! opponent's strongest reply is scored on the result. The move that keeps
//! the most of its own value after that reply wins.

use crate::board::{Board, Stone};
use crate::eval::evaluate;

use super::candidates::{generate_candidates, Candidate};
use super::SearchResult;

/// Tuning for one lookahead call
#[derive(Debug, Clone, Copy)]
pub struct LookaheadParams {
    /// Own candidates examined
    pub breadth: usize,
    /// Opponent replies examined per candidate
    pub reply_breadth: usize,
    /// Weight of the opponent's best reply, in percent
    pub reply_weight_percent: u32,
}

/// Choose among `candidates` (ranked best first) by own value minus the
/// weighted best reply.
pub fn lookahead_move(
    board: &Board,
    color: Stone,
    candidates: &[Candidate],
    params: LookaheadParams,
) -> SearchResult {
    let opponent = color.opponent();
    let mut nodes = 0u64;
    let mut best: Option<(Candidate, i64)> = None;

    for &candidate in candidates.iter().take(params.breadth.max(1)) {
        let next = board.with_stone(candidate.pos, color);
        nodes += 1;

        let reply = generate_candidates(&next, params.reply_breadth)
            .iter()
            .map(|c| {
                nodes += 1;
                evaluate(&next, c.pos, opponent)
            })
            .max()
            .unwrap_or(0);

        let value = i64::from(candidate.score) * 100
            - i64::from(params.reply_weight_percent) * i64::from(reply);

        // Strictly greater keeps the earlier, better ranked candidate on ties
        if best.map_or(true, |(_, v)| value > v) {
            best = Some((candidate, value));
        }
    }

    let Some((candidate, value)) = best else {
        return SearchResult::none();
    };
    #[allow(clippy::cast_possible_truncation)]
    let score = (value / 100).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    SearchResult {
        best_move: Some(candidate.pos),
        score,
        depth: 2,
        nodes,
    }
}
