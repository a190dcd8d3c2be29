//! Board module - the snake, its food, and collision detection
//!
//! The board is a 40x30 grid. The snake body is a deque (head first) backed by a
//! flat occupancy array for O(1) self-collision tests.
//! Coordinates: (x, y) where x ranges 0..39 (left to right), y ranges 0..29 (top to bottom)
//! A fresh snake is a single head cell at (20, 15) heading right.
//!
//! Movement is throttled by the caller-supplied move delay: a tick that arrives
//! before the delay has elapsed since the last step changes nothing.

use std::collections::VecDeque;

use tracing::trace;

use crate::rng::SimpleRng;
use crate::types::{Cell, Direction, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Why a step ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Outcome of one [`Board::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// The snake advanced one cell
    pub moved: bool,
    /// The new head landed on the food
    pub ate_food: bool,
    pub collision: Option<Collision>,
}

impl TickResult {
    /// Throttled or otherwise inert tick
    pub const IDLE: TickResult = TickResult {
        moved: false,
        ate_food: false,
        collision: None,
    };

    pub fn collided(&self) -> bool {
        self.collision.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    /// Body cells, head first
    snake: VecDeque<Cell>,
    /// Number of body segments on each cell, row-major (y * WIDTH + x).
    /// Counts rather than flags because `grow` stacks a segment on the tail.
    occupancy: [u8; GRID_CELLS],
    heading: Direction,
    food: Cell,
    last_move_ms: u64,
}

impl Board {
    /// A single-segment snake at the grid center heading right, with food
    /// placed on a free cell.
    pub fn new(rng: &mut SimpleRng, now_ms: u64) -> Self {
        let mut board = Self {
            snake: VecDeque::with_capacity(64),
            occupancy: [0; GRID_CELLS],
            heading: Direction::Right,
            food: Cell::new(0, 0),
            last_move_ms: now_ms,
        };
        board.place_snake(&[Cell::center()], Direction::Right);
        board.spawn_food(rng);
        board
    }

    /// Build a board from explicit cells (head first).
    ///
    /// Returns `None` if any cell is out of bounds, the body is empty, or the
    /// food sits on the body.
    pub fn with_snake(cells: &[Cell], heading: Direction, food: Cell) -> Option<Self> {
        if cells.is_empty() || !food.in_bounds() || cells.contains(&food) {
            return None;
        }
        if cells.iter().any(|c| !c.in_bounds()) {
            return None;
        }
        let mut board = Self {
            snake: VecDeque::with_capacity(cells.len().max(64)),
            occupancy: [0; GRID_CELLS],
            heading,
            food,
            last_move_ms: 0,
        };
        board.place_snake(cells, heading);
        Some(board)
    }

    fn place_snake(&mut self, cells: &[Cell], heading: Direction) {
        self.snake.clear();
        self.occupancy = [0; GRID_CELLS];
        for &cell in cells {
            self.push_back(cell);
        }
        self.heading = heading;
    }

    /// Back to a fresh single-cell snake with new food. The throttle restarts at `now_ms`.
    pub fn reset(&mut self, rng: &mut SimpleRng, now_ms: u64) {
        self.place_snake(&[Cell::center()], Direction::Right);
        self.last_move_ms = now_ms;
        self.spawn_food(rng);
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake.front().copied().unwrap_or_else(Cell::center)
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn last_move_ms(&self) -> u64 {
        self.last_move_ms
    }

    /// Check if any body segment covers `cell`
    pub fn is_occupied(&self, cell: Cell) -> bool {
        cell.index().is_some_and(|idx| self.occupancy[idx] > 0)
    }

    /// Advance the snake if `move_delay_ms` has elapsed since the last step.
    ///
    /// `pending` becomes the heading unless it reverses the current one.
    /// A colliding step leaves the body untouched.
    pub fn tick(
        &mut self,
        now_ms: u64,
        pending: Option<Direction>,
        move_delay_ms: u32,
    ) -> TickResult {
        if now_ms.saturating_sub(self.last_move_ms) < u64::from(move_delay_ms) {
            return TickResult::IDLE;
        }

        if let Some(dir) = pending {
            if !dir.is_opposite(self.heading) {
                self.heading = dir;
            }
        }
        self.last_move_ms = now_ms;

        let Some(next) = self.head().step(self.heading) else {
            return TickResult {
                collision: Some(Collision::Wall),
                ..TickResult::IDLE
            };
        };
        if self.is_occupied(next) {
            return TickResult {
                collision: Some(Collision::SelfCollision),
                ..TickResult::IDLE
            };
        }

        self.push_front(next);
        if next == self.food {
            return TickResult {
                moved: true,
                ate_food: true,
                collision: None,
            };
        }
        self.pop_back();
        TickResult {
            moved: true,
            ate_food: false,
            collision: None,
        }
    }

    /// Duplicate the tail segment. The copy unfolds on the next step.
    pub fn grow(&mut self) {
        if let Some(&tail) = self.snake.back() {
            self.push_back(tail);
        }
    }

    /// Place food uniformly on a cell not covered by the snake.
    ///
    /// Returns `false` (food unchanged) when the snake fills the grid.
    pub fn spawn_food(&mut self, rng: &mut SimpleRng) -> bool {
        let free = GRID_CELLS - self.occupied_cells();
        if free == 0 {
            return false;
        }
        loop {
            let cell = Cell::new(
                rng.next_range(GRID_WIDTH as u32) as i8,
                rng.next_range(GRID_HEIGHT as u32) as i8,
            );
            if !self.is_occupied(cell) {
                trace!(x = cell.x, y = cell.y, "food spawned");
                self.food = cell;
                return true;
            }
        }
    }

    fn occupied_cells(&self) -> usize {
        self.occupancy.iter().filter(|&&n| n > 0).count()
    }

    fn push_front(&mut self, cell: Cell) {
        if let Some(idx) = cell.index() {
            self.occupancy[idx] += 1;
        }
        self.snake.push_front(cell);
    }

    fn push_back(&mut self, cell: Cell) {
        if let Some(idx) = cell.index() {
            self.occupancy[idx] += 1;
        }
        self.snake.push_back(cell);
    }

    fn pop_back(&mut self) {
        if let Some(idx) = self.snake.pop_back().and_then(|c| c.index()) {
            self.occupancy[idx] -= 1;
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.snake == other.snake
            && self.heading == other.heading
            && self.food == other.food
            && self.last_move_ms == other.last_move_ms
    }
}
