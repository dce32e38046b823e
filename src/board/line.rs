//! Line scanning along the four board axes
//!
//! Both win detection and position evaluation are built on one primitive:
//! walk outward from an anchor cell in both signed directions of an axis and
//! count the consecutive stones of one color. The anchor itself is never
//! inspected, so the same scan answers "what would placing here connect to".

use super::{Board, Pos, Stone, BOARD_SIZE};

/// One of the four line axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    /// `(dr, dc)` step in the forward sense; the backward sense is the negation
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// All four axes. Each is scanned both ways, so opposite vectors are not listed.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagonalDown,
    Direction::DiagonalUp,
];

/// Why a run stopped on one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// Next cell is empty
    Empty,
    /// Ran off the board
    Edge,
    /// Next cell holds the other color
    Opponent,
    /// Scan window exhausted while still on the run
    Limit,
}

/// Run on one side of the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideRun {
    /// Consecutive stones of the scanned color
    pub len: u8,
    pub end: LineEnd,
    /// Empty cells directly after the run, inside the scan window
    pub room: u8,
}

impl SideRun {
    /// Only an opponent stone blocks; an empty cell or the edge leaves the run open
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.end == LineEnd::Opponent
    }

    /// The run can be extended by one stone on this side
    #[inline]
    pub fn is_open(&self) -> bool {
        self.end == LineEnd::Empty
    }
}

/// Result of scanning one axis through an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    pub forward: SideRun,
    pub backward: SideRun,
}

impl LineScan {
    /// Stones on both sides, anchor excluded
    #[inline]
    pub fn run(&self) -> u32 {
        u32::from(self.forward.len) + u32::from(self.backward.len)
    }

    /// Sides ending on an empty cell (0..=2)
    #[inline]
    pub fn open_sides(&self) -> u32 {
        u32::from(self.forward.is_open()) + u32::from(self.backward.is_open())
    }

    /// Empty extension cells on both sides
    #[inline]
    pub fn room(&self) -> u32 {
        u32::from(self.forward.room) + u32::from(self.backward.room)
    }
}

/// Scan an axis through `pos` without a window limit.
#[inline]
pub fn scan_line(board: &Board, pos: Pos, dir: Direction, color: Stone) -> LineScan {
    scan_line_within(board, pos, dir, color, BOARD_SIZE)
}

/// Scan an axis through `pos`, looking at most `limit` cells each way.
pub fn scan_line_within(
    board: &Board,
    pos: Pos,
    dir: Direction,
    color: Stone,
    limit: usize,
) -> LineScan {
    let (dr, dc) = dir.delta();
    LineScan {
        forward: scan_side(board, pos, dr, dc, color, limit),
        backward: scan_side(board, pos, -dr, -dc, color, limit),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn scan_side(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone, limit: usize) -> SideRun {
    let limit = limit as i32;
    let mut len = 0u8;
    let mut step = 1i32;

    let end = loop {
        if step > limit {
            break LineEnd::Limit;
        }
        let Some(next) = pos.offset(dr, dc, step) else {
            break LineEnd::Edge;
        };
        match board.get(next) {
            s if s == color => {
                len += 1;
                step += 1;
            }
            Stone::Empty => break LineEnd::Empty,
            _ => break LineEnd::Opponent,
        }
    };

    let mut room = 0u8;
    if end == LineEnd::Empty {
        while step <= limit {
            match pos.offset(dr, dc, step) {
                Some(next) if board.is_empty(next) => {
                    room += 1;
                    step += 1;
                }
                _ => break,
            }
        }
    }

    SideRun { len, end, room }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_counts_both_sides() {
        let mut board = Board::new();
        for c in [3, 4, 6, 7] {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        let scan = scan_line(&board, Pos::new(7, 5), Direction::Horizontal, Stone::Black);
        assert_eq!(scan.forward.len, 2);
        assert_eq!(scan.backward.len, 2);
        assert_eq!(scan.run(), 4);
        assert_eq!(scan.open_sides(), 2);
    }

    #[test]
    fn test_scan_blocked_by_opponent() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 2), Stone::White);
        for c in 3..7 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        let scan = scan_line(&board, Pos::new(7, 7), Direction::Horizontal, Stone::Black);
        assert_eq!(scan.backward.len, 4);
        assert!(scan.backward.is_blocked());
        assert_eq!(scan.forward.len, 0);
        assert!(scan.forward.is_open());
    }

    #[test]
    fn test_scan_edge_is_not_blocked() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        board.place_stone(Pos::new(0, 1), Stone::White);
        let scan = scan_line(&board, Pos::new(0, 2), Direction::Horizontal, Stone::White);
        assert_eq!(scan.backward.len, 2);
        assert_eq!(scan.backward.end, LineEnd::Edge);
        assert!(!scan.backward.is_blocked());
        assert!(!scan.backward.is_open());
    }

    #[test]
    fn test_scan_window_limit() {
        let mut board = Board::new();
        for r in 0..5 {
            board.place_stone(Pos::new(r, 5), Stone::Black);
        }
        let scan = scan_line_within(&board, Pos::new(5, 5), Direction::Vertical, Stone::Black, 4);
        assert_eq!(scan.backward.len, 4);
        assert_eq!(scan.backward.end, LineEnd::Limit);

        let full = scan_line(&board, Pos::new(5, 5), Direction::Vertical, Stone::Black);
        assert_eq!(full.backward.len, 5);
        assert_eq!(full.backward.end, LineEnd::Edge);
    }

    #[test]
    fn test_scan_room_stops_at_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 5), Stone::Black);
        board.place_stone(Pos::new(4, 8), Stone::White);
        let scan = scan_line_within(&board, Pos::new(4, 4), Direction::Horizontal, Stone::Black, 4);
        assert_eq!(scan.forward.len, 1);
        assert_eq!(scan.forward.room, 2); // (4,6), (4,7) then white
        assert_eq!(scan.backward.room, 4);
        assert_eq!(scan.room(), 6);
    }

    #[test]
    fn test_diagonal_up_direction() {
        let mut board = Board::new();
        board.place_stone(Pos::new(6, 8), Stone::White);
        board.place_stone(Pos::new(8, 6), Stone::White);
        let scan = scan_line(&board, Pos::new(7, 7), Direction::DiagonalUp, Stone::White);
        assert_eq!(scan.run(), 2);

        let down = scan_line(&board, Pos::new(7, 7), Direction::DiagonalDown, Stone::White);
        assert_eq!(down.run(), 0);
    }
}
