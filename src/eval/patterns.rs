//! Pattern scores for Gomoku evaluation
//!
//! One tier per run length. A tier only applies when the run has enough
//! empty room around it to still grow into a five.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Four stones already in line with the cell: placing here makes five
    pub const FIVE: i32 = 100_000;
    /// Three in line plus at least one empty slot
    pub const FOUR: i32 = 10_000;
    /// Two in line plus at least two empty slots
    pub const THREE: i32 = 1_000;
    /// One in line plus at least three empty slots
    pub const TWO: i32 = 100;

    /// Positional bonus per unit of closeness to the center
    pub const CENTER_WEIGHT: i32 = 10;
    /// Largest Manhattan distance counted for the center bonus
    pub const MAX_CENTER_DIST: i32 = 14;
}

/// Cells inspected on each side of the anchor
pub const SCAN_WINDOW: usize = 4;

/// Score of a run of `run` stones with `room` empty slots after it,
/// `open_sides` of which are directly adjacent (0..=2).
///
/// A run open on both sides earns half a tier extra, which keeps it below
/// the next tier up.
pub fn line_score(run: u32, room: u32, open_sides: u32) -> i32 {
    let base = match run {
        r if r >= 4 => return PatternScore::FIVE,
        3 if room >= 1 => PatternScore::FOUR,
        2 if room >= 2 => PatternScore::THREE,
        1 if room >= 3 => PatternScore::TWO,
        _ => return 0,
    };
    if open_sides >= 2 {
        base + base / 2
    } else {
        base
    }
}
