//! Two-player tic-tac-toe on squares 1-9 (row-major).

use crate::rng::SimpleRng;
use crate::types::Intent;

use super::{Controls, MiniGame};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeOutcome {
    Winner(Mark),
    Tie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToe {
    squares: [Option<Mark>; 9],
    to_move: Mark,
    outcome: Option<TicTacToeOutcome>,
    /// Completed rounds
    rounds: u32,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            squares: [None; 9],
            to_move: Mark::X,
            outcome: None,
            rounds: 0,
        }
    }

    pub fn squares(&self) -> &[Option<Mark>; 9] {
        &self.squares
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn outcome(&self) -> Option<TicTacToeOutcome> {
        self.outcome
    }

    fn play(&mut self, square: u8) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let Some(idx) = (square as usize).checked_sub(1) else {
            return false;
        };
        match self.squares.get(idx) {
            Some(None) => {}
            _ => return false,
        }
        self.squares[idx] = Some(self.to_move);

        if self.has_line(self.to_move) {
            self.outcome = Some(TicTacToeOutcome::Winner(self.to_move));
            self.rounds += 1;
        } else if self.squares.iter().all(Option::is_some) {
            self.outcome = Some(TicTacToeOutcome::Tie);
            self.rounds += 1;
        } else {
            self.to_move = self.to_move.other();
        }
        true
    }

    fn has_line(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.squares[i] == Some(mark)))
    }

    fn clear_board(&mut self) {
        self.squares = [None; 9];
        self.to_move = Mark::X;
        self.outcome = None;
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for TicTacToe {
    fn press(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::SelectOption(square) => self.play(square),
            Intent::Restart if self.outcome.is_some() => {
                self.clear_board();
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, _controls: Controls, _rng: &mut SimpleRng) {}

    fn score(&self) -> u32 {
        self.rounds
    }

    /// Rounds restart in place, so the game itself never finishes.
    fn finished(&self) -> bool {
        false
    }
}
