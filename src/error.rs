use thiserror::Error;

use crate::grid::Cell;

/// Reasons a board snapshot cannot be handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("board {width}x{height} exceeds the {max}x{max} limit")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("snake body must contain at least one cell")]
    EmptyBody,
    #[error("body cell {index} at {cell} is off the board")]
    BodyOutOfBounds { index: usize, cell: Cell },
    #[error("body cells {index} and {} are not adjacent", .index + 1)]
    Disconnected { index: usize },
    #[error("body cell {cell} appears more than once")]
    SelfIntersecting { cell: Cell },
    #[error("target {cell} is off the board")]
    TargetOutOfBounds { cell: Cell },
    #[error("target {cell} lies inside the snake body")]
    TargetInBody { cell: Cell },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {source}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
    #[error("default board is invalid: {0}")]
    Board(#[from] BoardError),
}
