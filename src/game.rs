//! Game session referee
//!
//! Tracks one game: whose turn it is, the move history and the outcome.
//! Player-vs-player relays and the single player path both go through
//! `Game::play`, so they share one set of win and draw rules.

use serde::Serialize;

use crate::board::{Board, Move, Pos, Stone};
use crate::error::MoveError;
use crate::rules::{find_five, is_board_full, outcome_after, validate_move, Outcome};

/// Public state of a game after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    #[serde(rename_all = "camelCase")]
    Win {
        winner: Stone,
        winning_line: [Pos; 5],
    },
    Draw,
}

impl From<Option<Outcome>> for GameStatus {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            None => GameStatus::Ongoing,
            Some(Outcome::Win {
                winner,
                winning_line,
            }) => GameStatus::Win {
                winner,
                winning_line,
            },
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_turn: Stone,
    history: Vec<Move>,
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game on an empty board, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Stone::Black,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Adopt a position mid-game.
    ///
    /// The side to move is inferred from the stone counts (Black moves first),
    /// and a five already on the board ends the game at once.
    pub fn from_board(board: Board) -> Self {
        let blacks = board.stones(Stone::Black).count();
        let whites = board.stones(Stone::White).count();
        let current_turn = if blacks > whites {
            Stone::White
        } else {
            Stone::Black
        };

        let outcome = [Stone::Black, Stone::White]
            .into_iter()
            .find_map(|color| {
                find_five(&board, color).map(|winning_line| Outcome::Win {
                    winner: color,
                    winning_line,
                })
            })
            .or_else(|| is_board_full(&board).then_some(Outcome::Draw));

        Self {
            board,
            current_turn,
            history: Vec::new(),
            outcome,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn status(&self) -> GameStatus {
        self.outcome.into()
    }

    /// Apply a move for `color` at untrusted coordinates.
    ///
    /// Checks, in order: game over, turn, bounds, occupancy. On success the
    /// stone is placed, the win is checked before the draw, and the turn
    /// passes unless the game ended.
    pub fn play(&mut self, row: i32, col: i32, color: Stone) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !color.is_player() {
            return Err(MoveError::InvalidColor(color));
        }
        if color != self.current_turn {
            return Err(MoveError::WrongTurn {
                expected: self.current_turn,
                got: color,
            });
        }
        let pos = validate_move(&self.board, row, col)?;

        self.board.place_stone(pos, color);
        self.history.push(Move::new(pos, color));

        self.outcome = outcome_after(&self.board, pos, color);
        if self.outcome.is_none() {
            self.current_turn = color.opponent();
        }
        Ok(self.status())
    }

    /// Apply a `Move`
    pub fn play_move(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        self.play(i32::from(mv.row), i32::from(mv.col), mv.color)
    }

    /// Take back the last `count` moves by replaying the rest.
    ///
    /// Only moves made through this session can be undone; a board adopted
    /// with `from_board` is the floor. Returns the number of moves removed.
    pub fn undo(&mut self, count: usize) -> usize {
        let keep = self.history.len().saturating_sub(count);
        let removed = self.history.len() - keep;
        if removed == 0 {
            return 0;
        }

        let undone: Vec<Move> = self.history.drain(keep..).collect();
        let mut board = Board::new();
        for pos in self.board.occupied() {
            if !undone.iter().any(|m| m.pos() == pos) {
                board.place_stone(pos, self.board.get(pos));
            }
        }

        self.board = board;
        self.outcome = None;
        self.current_turn = undone.first().map_or(self.current_turn, |m| m.color);
        removed
    }
}
