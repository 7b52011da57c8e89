use crate::grid::Cell;
use crate::obstacles::ObstacleSet;

/// Hypothetical next-tick snapshot for one candidate step. It owns its own
/// body copy, so it can never alias the caller's body.
#[derive(Debug, Clone)]
pub struct VirtualState {
    body: Vec<Cell>,
    tail: Cell,
    obstacles: ObstacleSet,
    grows: bool,
}

impl VirtualState {
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    /// Where the tail sits after this step; it is left out of `obstacles`
    /// because it moves away again on the following tick.
    pub fn tail(&self) -> Cell {
        self.tail
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn grows(&self) -> bool {
        self.grows
    }
}

/// Builds the body that results from moving the head onto `candidate_head`.
///
/// Reaching `target` keeps the whole current body behind the new head.
/// Otherwise the current tail is dropped. `body` must be non-empty.
pub fn simulate(body: &[Cell], candidate_head: Cell, target: Cell) -> VirtualState {
    let grows = candidate_head == target;
    let kept = if grows {
        body.len()
    } else {
        body.len().saturating_sub(1)
    };

    let mut virtual_body = Vec::with_capacity(kept + 1);
    virtual_body.push(candidate_head);
    virtual_body.extend_from_slice(&body[..kept]);

    // Non-empty: the candidate head was pushed above
    let tail = virtual_body[virtual_body.len() - 1];
    let obstacles = ObstacleSet::from_body(&virtual_body, true);

    VirtualState {
        body: virtual_body,
        tail,
        obstacles,
        grows,
    }
}
