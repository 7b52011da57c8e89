use std::collections::{HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::BoardError;
use crate::grid::{Cell, Direction, Grid, MAX_SIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Moved,
    Ate,
    HitWall,
    HitSelf,
    /// The game had already ended; nothing changed.
    GameOver,
}

/// Authoritative single-snake game. The engine only advises; collisions and
/// growth are decided here.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub grid: Grid,
    pub body: VecDeque<Cell>,
    pub food: Option<Cell>,
    pub turn: u32,
    pub score: u32,
    pub alive: bool,
}

impl GameState {
    pub fn new(grid: Grid, body: Vec<Cell>) -> Self {
        GameState {
            grid,
            body: body.into(),
            food: None,
            turn: 0,
            score: 0,
            alive: true,
        }
    }

    /// A length-3 snake in the middle of the board, facing up.
    pub fn centered(grid: Grid) -> Self {
        let x = (grid.width / 2) as i32;
        let y = (grid.height / 2) as i32;
        let body = (0..3)
            .map(|offset| Cell::new(x, y + offset))
            .filter(|&cell| grid.in_bounds(cell))
            .collect();
        GameState::new(grid, body)
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }

    pub fn body_cells(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    pub fn is_full(&self) -> bool {
        self.body.len() >= self.grid.size()
    }

    /// Places food on a uniformly chosen free cell. Leaves `food` empty when
    /// the snake covers the whole board.
    pub fn spawn_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Cell> {
        let occupied: HashSet<Cell> = self.body.iter().copied().collect();
        let free: Vec<Cell> = self
            .grid
            .cells()
            .filter(|cell| !occupied.contains(cell))
            .collect();
        // `choose` yields None on an empty slice, i.e. a full board
        self.food = free.choose(rng).copied();
        self.food
    }

    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        // Dead snakes do not move
        if !self.alive {
            return StepOutcome::GameOver;
        }
        let Some(head) = self.head() else {
            self.alive = false;
            return StepOutcome::GameOver;
        };

        self.turn += 1;
        let new_head = head.step(direction);

        // Moved off the board
        if !self.grid.in_bounds(new_head) {
            self.alive = false;
            return StepOutcome::HitWall;
        }

        let grows = self.food == Some(new_head);
        // The tail vacates this tick unless the snake grows
        let blocking = if grows {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        // Self-collision
        if self.body.iter().take(blocking).any(|&cell| cell == new_head) {
            self.alive = false;
            return StepOutcome::HitSelf;
        }

        self.body.push_front(new_head);
        if grows {
            // Keep the tail so the body grows by one
            self.score += 1;
            self.food = None;
            StepOutcome::Ate
        } else {
            self.body.pop_back();
            StepOutcome::Moved
        }
    }
}

/// Checks the board is non-empty and no side exceeds `MAX_SIDE`.
pub fn validate_grid(grid: &Grid) -> Result<(), BoardError> {
    if grid.width == 0 || grid.height == 0 {
        return Err(BoardError::EmptyGrid {
            width: grid.width,
            height: grid.height,
        });
    }
    // Keeps `Grid::size` and the i32 cell coordinates from overflowing
    if grid.width > MAX_SIDE || grid.height > MAX_SIDE {
        return Err(BoardError::TooLarge {
            width: grid.width,
            height: grid.height,
            max: MAX_SIDE,
        });
    }
    Ok(())
}

/// Checks everything the engine assumes about its input.
pub fn validate_board(grid: &Grid, body: &[Cell], target: Cell) -> Result<(), BoardError> {
    validate_grid(grid)?;
    if body.is_empty() {
        return Err(BoardError::EmptyBody);
    }

    let mut seen = HashSet::with_capacity(body.len());
    for (index, &cell) in body.iter().enumerate() {
        if !grid.in_bounds(cell) {
            return Err(BoardError::BodyOutOfBounds { index, cell });
        }
        if !seen.insert(cell) {
            return Err(BoardError::SelfIntersecting { cell });
        }
    }
    if let Some(index) = body
        .windows(2)
        .position(|pair| pair[0].manhattan_distance(pair[1]) != 1)
    {
        return Err(BoardError::Disconnected { index });
    }

    if !grid.in_bounds(target) {
        return Err(BoardError::TargetOutOfBounds { cell: target });
    }
    if seen.contains(&target) {
        return Err(BoardError::TargetInBody { cell: target });
    }

    Ok(())
}
