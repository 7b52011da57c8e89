use std::cmp::Reverse;
use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Direction, Grid};
use crate::heuristic::reachable_count;
use crate::obstacles::ObstacleSet;
use crate::pathfinder::distance;
use crate::simulate::{simulate, VirtualState};

/// Which stage of the fallback chain produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Safe move with the shortest path to the target.
    Targeted,
    /// Safe move with the most reachable space; the target is out of reach.
    SpaceSafe,
    /// No safe move exists; the legal move with the most space.
    Emergency,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Targeted => "targeted",
            Tier::SpaceSafe => "space_safe",
            Tier::Emergency => "emergency",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub direction: Direction,
    pub tier: Tier,
    /// Steps from the current head to the target for `Tier::Targeted`,
    /// reachable cell count otherwise.
    pub score: usize,
    /// Number of legal first steps that were considered.
    pub candidates: usize,
}

#[derive(Debug)]
struct Candidate {
    direction: Direction,
    head: Cell,
    state: VirtualState,
}

impl Candidate {
    fn reaches_target(&self) -> bool {
        self.state.grows()
    }

    /// The snake can still chase its own tail after taking this step.
    fn is_safe(&self, grid: &Grid) -> bool {
        distance(grid, self.state.head(), self.state.tail(), self.state.obstacles()).is_some()
    }
}

/// Picks the next step for a snake with `body` (head first) chasing `target`.
///
/// Returns `None` only when every neighbor of the head is a wall, the neck,
/// or a body cell other than the tail.
pub fn decide(grid: &Grid, body: &[Cell], target: Cell) -> Option<Direction> {
    decide_detailed(grid, body, target).map(|decision| decision.direction)
}

/// Same as [`decide`], but also reports which tier chose the move.
pub fn decide_detailed(grid: &Grid, body: &[Cell], target: Cell) -> Option<Decision> {
    let head = *body.first()?;
    let current_obstacles = ObstacleSet::from_body(body, true);
    let candidates = legal_candidates(grid, body, head, target, &current_obstacles);

    if candidates.is_empty() {
        warn!("No legal move from {:?}, snake is trapped", head);
        return None;
    }

    // Safety: after the step the head must still reach the virtual tail
    let considered = candidates.len();
    let safe: Vec<&Candidate> = candidates.iter().filter(|c| c.is_safe(grid)).collect();

    // Tier 3 only when nothing is safe; tier 2 only when no safe route to food
    let choice = if safe.is_empty() {
        emergency(grid, &candidates, &current_obstacles)
    } else {
        targeted(grid, &safe, target).or_else(|| space_safe(grid, &safe))
    };
    let decision = choice.map(|(direction, tier, score)| Decision {
        direction,
        tier,
        score,
        candidates: considered,
    });

    if let Some(decision) = &decision {
        debug!(
            "Chose {} via {} (score {}, {} candidates, {} safe)",
            decision.direction.as_str(),
            decision.tier,
            decision.score,
            considered,
            safe.len()
        );
    }

    decision
}

/// In-bounds neighbors of the head that are neither the neck nor a body cell
/// other than the current tail, in enumeration order.
fn legal_candidates(
    grid: &Grid,
    body: &[Cell],
    head: Cell,
    target: Cell,
    current_obstacles: &ObstacleSet,
) -> Vec<Candidate> {
    // Stepping onto the neck would be a 180 degree turn
    let neck = body.get(1).copied();

    grid.neighbors(head)
        .filter(|(next, _)| Some(*next) != neck && !current_obstacles.contains(*next))
        .map(|(next, direction)| Candidate {
            direction,
            head: next,
            state: simulate(body, next, target),
        })
        .collect()
}

fn targeted(grid: &Grid, safe: &[&Candidate], target: Cell) -> Option<(Direction, Tier, usize)> {
    safe.iter()
        .filter_map(|candidate| {
            // Distance is measured on the board as it looks after the step
            let remaining = if candidate.reaches_target() {
                Some(0)
            } else {
                distance(grid, candidate.state.head(), target, candidate.state.obstacles())
            };
            // Count the candidate step itself
            remaining.map(|remaining| (candidate.direction, remaining + 1))
        })
        // min_by_key keeps the first of equal minima, i.e. enumeration order
        .min_by_key(|&(_, steps)| steps)
        .map(|(direction, steps)| (direction, Tier::Targeted, steps))
}

fn space_safe(grid: &Grid, safe: &[&Candidate]) -> Option<(Direction, Tier, usize)> {
    safe.iter()
        .map(|candidate| {
            // Room left around the virtual head, tail cell counted as free
            let space = reachable_count(grid, candidate.state.head(), candidate.state.obstacles());
            (candidate.direction, space)
        })
        // Reverse turns the first maximum into the first minimum
        .min_by_key(|&(_, space)| Reverse(space))
        .map(|(direction, space)| (direction, Tier::SpaceSafe, space))
}

fn emergency(
    grid: &Grid,
    candidates: &[Candidate],
    current_obstacles: &ObstacleSet,
) -> Option<(Direction, Tier, usize)> {
    candidates
        .iter()
        .map(|candidate| {
            // No virtual state here: measure against the body as it stands
            let space = reachable_count(grid, candidate.head, current_obstacles);
            (candidate.direction, space)
        })
        .min_by_key(|&(_, space)| Reverse(space))
        .map(|(direction, space)| (direction, Tier::Emergency, space))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(points: &[(i32, i32)]) -> Vec<Cell> {
        points.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn empty_body_has_no_move() {
        assert_eq!(decide(&Grid::new(3, 3), &[], Cell::new(0, 0)), None);
    }

    #[test]
    fn never_reverses_into_the_neck() {
        let grid = Grid::new(5, 5);
        let body = cells(&[(2, 2), (1, 2)]);
        // Target directly behind the head; reversing is illegal.
        let decision = decide_detailed(&grid, &body, Cell::new(0, 2)).unwrap();
        assert_ne!(decision.direction, Direction::Left);
        assert_eq!(decision.candidates, 3);
    }

    #[test]
    fn tail_cell_is_a_legal_candidate() {
        // The only neighbor of the head that is not the neck is the tail.
        let grid = Grid::new(3, 2);
        let body = cells(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        let decision = decide_detailed(&grid, &body, Cell::new(2, 0)).unwrap();
        assert_eq!(decision.direction, Direction::Right);
        assert_eq!(decision.tier, Tier::Targeted);
        assert_eq!(decision.candidates, 1);
    }

    #[test]
    fn tier_names_render_snake_case() {
        assert_eq!(Tier::SpaceSafe.to_string(), "space_safe");
    }
}
