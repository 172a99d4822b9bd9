use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step one cell in a direction on a toroidal board of `grid_count` cells
    /// per side. Leaving one edge re-enters from the opposite edge.
    pub fn stepped(&self, direction: Direction, grid_count: usize) -> Self {
        let (dx, dy) = direction.delta();
        let n = grid_count as i32;
        Self {
            x: (self.x + dx).rem_euclid(n),
            y: (self.y + dy).rem_euclid(n),
        }
    }

    pub fn is_within(&self, grid_count: usize) -> bool {
        let n = grid_count as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: VecDeque<Cell>,
    /// Direction applied on the last tick
    pub direction: Direction,
}

impl Snake {
    /// A one-cell snake
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction,
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body or one that overlaps itself.
    pub fn from_cells(cells: &[Cell], direction: Direction) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        for (i, cell) in cells.iter().enumerate() {
            if cells[i + 1..].contains(cell) {
                return None;
            }
        }
        Some(Self {
            body: cells.iter().copied().collect(),
            direction,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// True if any segment, head and tail included, sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub fn drop_tail(&mut self) -> Option<Cell> {
        // never shrink below the head
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never happens once constructed)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Board drawn, waiting for the player to start
    Idle,
    /// Ticks are being applied
    Running,
    /// Frozen until the next restart
    Over,
}

/// Why a session reached [`SessionState::Over`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// The head moved onto a body segment
    SelfCollision,
    /// The snake covers every cell; nowhere left to put food
    BoardFull,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub grid_count: usize,
    pub score: u32,
    pub ticks: u32,
    pub session: SessionState,
    pub outcome: Option<GameOutcome>,
}

impl GameState {
    /// A fresh, idle game state
    pub fn new(snake: Snake, food: Cell, grid_count: usize) -> Self {
        Self {
            snake,
            food,
            grid_count,
            score: 0,
            ticks: 0,
            session: SessionState::Idle,
            outcome: None,
        }
    }

    /// Same state, already running
    pub fn running(mut self) -> Self {
        self.session = SessionState::Running;
        self
    }

    pub fn is_running(&self) -> bool {
        self.session == SessionState::Running
    }

    pub fn is_over(&self) -> bool {
        self.session == SessionState::Over
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.occupies(cell)
    }
}
