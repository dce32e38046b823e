//! Board structure: a fixed 15x15 grid of stones

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::EngineError;

/// Wire form of a board: 15 rows of 15 cells, `None` for empty
pub type BoardRows = Vec<Vec<Option<Stone>>>;

/// Game board.
///
/// A plain value type: the engine only ever reads a caller's board and
/// simulates lookahead on copies (`with_stone`).
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRows", into = "BoardRows")]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
    stone_count: u16,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
            stone_count: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone on an empty cell.
    ///
    /// Legality (bounds, occupancy, turn order) is the caller's concern;
    /// see `rules::is_valid_move` and `game::Game::play`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "cell {pos:?} already occupied");
        if stone == Stone::Empty || !self.is_empty(pos) {
            return;
        }
        self.cells[pos.to_index()] = stone;
        self.stone_count += 1;
    }

    /// Copy of this board with one more stone
    #[inline]
    #[must_use]
    pub fn with_stone(&self, pos: Pos, stone: Stone) -> Board {
        let mut next = *self;
        next.place_stone(pos, stone);
        next
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        u32::from(self.stone_count)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count == 0
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count as usize == TOTAL_CELLS
    }

    /// Positions holding `stone`, in row-major order
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &s)| s == stone)
            .map(|(idx, _)| Pos::from_index(idx))
    }

    /// Occupied positions (either color), in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_player())
            .map(|(idx, _)| Pos::from_index(idx))
    }

    /// Empty positions, in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.stones(Stone::Empty)
    }

    /// Build a board from wire rows, rejecting anything that is not 15x15
    pub fn from_rows(rows: &[Vec<Option<Stone>>]) -> Result<Self, EngineError> {
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(EngineError::InvalidBoard(format!(
                    "row {r} has {} cells, expected {BOARD_SIZE}",
                    row.len()
                )));
            }
            for (c, cell) in row.iter().enumerate() {
                let stone = cell.unwrap_or(Stone::Empty);
                if stone.is_player() {
                    #[allow(clippy::cast_possible_truncation)]
                    let pos = Pos::new(r as u8, c as u8);
                    board.place_stone(pos, stone);
                }
            }
        }
        Ok(board)
    }

    /// Wire rows, `None` for empty cells
    pub fn to_rows(&self) -> BoardRows {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|&s| s.is_player().then_some(s)).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<BoardRows> for Board {
    type Error = EngineError;

    fn try_from(rows: BoardRows) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for BoardRows {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({} stones)\n{}", self.stone_count, self)
    }
}

/// Text grid: `X` black, `O` white, `.` empty, with row/column indices
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{c:3}")?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{r:3}")?;
            for c in 0..BOARD_SIZE {
                #[allow(clippy::cast_possible_truncation)]
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Stone::Black => "  X",
                    Stone::White => "  O",
                    Stone::Empty => "  .",
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
