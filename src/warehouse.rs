use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::formatter::MapFormatter;
use crate::layout::Layout;
use crate::state::State;

/// A complete puzzle: the static layout plus the initial worker and boxes.
#[derive(Clone)]
pub struct Warehouse {
    pub(crate) layout: Layout,
    pub(crate) state: State,
}

impl Warehouse {
    pub(crate) fn new(layout: Layout, state: State) -> Warehouse {
        Warehouse { layout, state }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn worker(&self) -> Pos {
        self.state.worker
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.state.boxes
    }
}

impl Display for Warehouse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.layout.grid, Some(&self.state)))
    }
}

impl Debug for Warehouse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
