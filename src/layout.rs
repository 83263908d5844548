use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::formatter::MapFormatter;
use crate::vec2d::Vec2d;

/// The static part of a warehouse - walls and targets never move.
#[derive(Clone)]
pub struct Layout {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) targets: Vec<Pos>,
}

impl Layout {
    pub(crate) fn new(grid: Vec2d<MapCell>, targets: Vec<Pos>) -> Layout {
        Layout { grid, targets }
    }

    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && self.grid[pos] == MapCell::Wall
    }

    /// Cells outside the grid count as blocked - the worker and boxes
    /// can never leave it.
    pub fn is_blocked(&self, pos: Pos) -> bool {
        !self.grid.contains(pos) || self.grid[pos] == MapCell::Wall
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && self.grid[pos] == MapCell::Target
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.grid, None))
    }
}

impl Debug for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
