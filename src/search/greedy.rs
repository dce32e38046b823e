//! Greedy selection for the easy tier
//!
//! Plays the best-ranked candidate. With a non-zero margin, the pick is drawn
//! at random from every candidate scoring within `margin_percent` of the best.

use rand::seq::SliceRandom;
use rand::Rng;

use super::candidates::Candidate;

/// Pick a move from candidates ranked best first.
///
/// The rng is only consulted when more than one candidate is within the
/// margin, so a zero margin is fully deterministic.
pub fn greedy_move<R: Rng + ?Sized>(
    candidates: &[Candidate],
    margin_percent: u32,
    rng: &mut R,
) -> Option<Candidate> {
    let best = *candidates.first()?;
    if margin_percent == 0 {
        return Some(best);
    }

    let slack = i64::from(best.score.max(0)) * i64::from(margin_percent.min(100)) / 100;
    let floor = i64::from(best.score) - slack;
    let pool: Vec<Candidate> = candidates
        .iter()
        .take_while(|c| i64::from(c.score) >= floor)
        .copied()
        .collect();

    pool.choose(rng).copied().or(Some(best))
}
