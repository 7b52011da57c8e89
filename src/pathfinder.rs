use std::collections::VecDeque;

use crate::grid::{Cell, Direction, Grid};
use crate::obstacles::ObstacleSet;

/// Finds a shortest route from `start` to `goal` that avoids `obstacles`.
///
/// This is a plain level-order breadth-first search. Neighbors are expanded in
/// `Direction::ALL` order, so when several shortest routes exist the one found
/// first in that order is returned. `start` is always treated as free.
///
/// # Returns
/// The directions to follow from `start`, an empty vector when
/// `start == goal`, or `None` when `goal` cannot be reached.
pub fn shortest_path(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    obstacles: &ObstacleSet,
) -> Option<Vec<Direction>> {
    if start == goal {
        return Some(Vec::new());
    }
    if !grid.in_bounds(start) || !grid.in_bounds(goal) || obstacles.contains(goal) {
        return None;
    }

    // For every reached cell, the index it was reached from and the step taken
    let mut came_from: Vec<Option<(usize, Direction)>> = vec![None; grid.size()];
    let mut visited = vec![false; grid.size()];
    let mut queue = VecDeque::new();

    let start_index = grid.index_of(start);
    let goal_index = grid.index_of(goal);
    visited[start_index] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        let from = grid.index_of(cell);
        for (next, direction) in grid.neighbors(cell) {
            let index = grid.index_of(next);
            if visited[index] || obstacles.contains(next) {
                continue;
            }
            visited[index] = true;
            came_from[index] = Some((from, direction));

            if index == goal_index {
                return Some(trace_back(&came_from, start_index, goal_index));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Length of the shortest route, if there is one.
pub fn distance(grid: &Grid, start: Cell, goal: Cell, obstacles: &ObstacleSet) -> Option<usize> {
    shortest_path(grid, start, goal, obstacles).map(|path| path.len())
}

fn trace_back(
    came_from: &[Option<(usize, Direction)>],
    start_index: usize,
    goal_index: usize,
) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut current = goal_index;
    while current != start_index {
        match came_from[current] {
            Some((previous, direction)) => {
                path.push(direction);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
