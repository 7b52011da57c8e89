use std::collections::HashSet;

use crate::grid::Cell;

/// Cells blocked for a single query. Built from a body snapshot and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    cells: HashSet<Cell>,
}

impl ObstacleSet {
    /// With `exclude_tail` the last body cell is left out, since it vacates
    /// on the same tick the head advances.
    pub fn from_body<'a, I>(body: I, exclude_tail: bool) -> Self
    where
        I: IntoIterator<Item = &'a Cell>,
        I::IntoIter: ExactSizeIterator,
    {
        let body = body.into_iter();
        let keep = if exclude_tail {
            body.len().saturating_sub(1)
        } else {
            body.len()
        };
        ObstacleSet {
            cells: body.take(keep).copied().collect(),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Cell> for ObstacleSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        ObstacleSet {
            cells: iter.into_iter().collect(),
        }
    }
}
