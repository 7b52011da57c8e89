use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use crate::obstacles::ObstacleSet;

/// Counts how many cells the snake could reach from `start`.
///
/// The count is the size of the 4-connected region containing `start` once
/// every cell in `obstacles` is removed from the board. `start` itself is
/// always counted, even when it is listed as an obstacle.
///
/// # Parameters
/// - `grid`: The board dimensions.
/// - `start`: Cell the flood fill grows from.
/// - `obstacles`: Cells that cannot be entered.
///
/// # Returns
/// The number of reachable cells, at least 1.
pub fn reachable_count(grid: &Grid, start: Cell, obstacles: &ObstacleSet) -> usize {
    if !grid.in_bounds(start) {
        return 1;
    }

    let mut visited = vec![false; grid.size()];
    let mut queue = VecDeque::new();

    visited[grid.index_of(start)] = true;
    queue.push_back(start);
    let mut count = 1;

    while let Some(cell) = queue.pop_front() {
        for (next, _) in grid.neighbors(cell) {
            let index = grid.index_of(next);
            if visited[index] || obstacles.contains(next) {
                continue;
            }
            visited[index] = true;
            count += 1;
            queue.push_back(next);
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_fully_reachable() {
        let grid = Grid::new(4, 3);
        assert_eq!(reachable_count(&grid, Cell::new(0, 0), &ObstacleSet::default()), 12);
    }

    #[test]
    fn wall_splits_the_board() {
        let grid = Grid::new(5, 3);
        let wall: ObstacleSet = (0..3).map(|y| Cell::new(2, y)).collect();
        assert_eq!(reachable_count(&grid, Cell::new(0, 0), &wall), 6);
        assert_eq!(reachable_count(&grid, Cell::new(4, 2), &wall), 6);
    }

    #[test]
    fn boxed_in_start_counts_itself() {
        let grid = Grid::new(3, 3);
        let boxed: ObstacleSet = [Cell::new(1, 0), Cell::new(0, 1), Cell::new(2, 1), Cell::new(1, 2)]
            .into_iter()
            .collect();
        assert_eq!(reachable_count(&grid, Cell::new(1, 1), &boxed), 1);
    }
}
