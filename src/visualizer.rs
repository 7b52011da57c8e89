// File: src/visualizer.rs

use serde::Deserialize;

use crate::grid::{Cell, Grid};

/// A board as the engine sees it: grid, head-first body and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub grid: Grid,
    pub body: Vec<Cell>,
    pub target: Cell,
}

// Compact fixture layout: cells are `[x, y]` pairs
#[derive(Deserialize)]
struct BoardJson {
    width: usize,
    height: usize,
    body: Vec<(i32, i32)>,
    target: (i32, i32),
}

/// ASCII picture of a board: `H` head, `s` body, `*` food, `.` empty.
pub fn visualize_board(grid: &Grid, body: &[Cell], food: Option<Cell>) -> String {
    let mut cells = vec!['.'; grid.size()];

    if let Some(food) = food.filter(|&cell| grid.in_bounds(cell)) {
        cells[grid.index_of(food)] = '*';
    }

    for (i, &cell) in body.iter().enumerate() {
        // Skip anything off the board rather than panicking on a bad snapshot
        if grid.in_bounds(cell) {
            cells[grid.index_of(cell)] = if i == 0 { 'H' } else { 's' };
        }
    }

    cells
        .chunks(grid.width.max(1))
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Reads a board written as
/// `{"width": 5, "height": 5, "body": [[2, 2], [2, 3]], "target": [2, 0]}`.
pub fn board_from_json(json: &serde_json::Value) -> Result<BoardSnapshot, serde_json::Error> {
    let board = BoardJson::deserialize(json)?;
    Ok(BoardSnapshot {
        grid: Grid::new(board.width, board.height),
        body: board.body.into_iter().map(|(x, y)| Cell::new(x, y)).collect(),
        target: Cell::new(board.target.0, board.target.1),
    })
}
