use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, Dir, MapCell, Pos, Push};
use crate::state::State;
use crate::vec2d::Vec2d;
use crate::warehouse::Warehouse;

/// Renders a grid in the XSB format, optionally with a state's
/// worker and boxes placed on it.
pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, state: Option<&'a State>) -> Self {
        MapFormatter { grid, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut contents = self.grid.scratchpad();
        if let Some(state) = self.state {
            for &box_pos in &state.boxes {
                contents[box_pos] = Contents::Box;
            }
            contents[state.worker] = Contents::Worker;
        }

        for r in 0..self.grid.rows() {
            // trim trailing empty cells to keep ragged rows ragged
            let last = (0..self.grid.cols()).rev().find(|&c| {
                let pos = Pos::new(r, c);
                self.grid[pos] != MapCell::Empty || contents[pos] != Contents::Empty
            });
            if let Some(last) = last {
                for c in 0..=last {
                    let pos = Pos::new(r, c);
                    Self::write_cell(f, self.grid[pos], contents[pos])?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }

    fn write_cell(f: &mut Formatter<'_>, cell: MapCell, contents: Contents) -> fmt::Result {
        let c = match (cell, contents) {
            (MapCell::Wall, Contents::Empty) => '#',
            (MapCell::Wall, _) => unreachable!("Wall with non-empty contents"),
            (MapCell::Empty, Contents::Empty) => ' ',
            (MapCell::Empty, Contents::Box) => '$',
            (MapCell::Empty, Contents::Worker) => '@',
            (MapCell::Target, Contents::Empty) => '.',
            (MapCell::Target, Contents::Box) => '*',
            (MapCell::Target, Contents::Worker) => '+',
        };
        write!(f, "{}", c)
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Renders the result of the taboo analysis: walls as `#`, taboo cells
/// as `X`, everything else as spaces. All rows are padded to the full
/// grid width and there is no trailing newline.
pub struct TabooFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    taboo: &'a Vec2d<bool>,
}

impl<'a> TabooFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, taboo: &'a Vec2d<bool>) -> Self {
        TabooFormatter { grid, taboo }
    }
}

impl Display for TabooFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.grid.cols() {
                let pos = Pos::new(r, c);
                let cell = if self.grid[pos] == MapCell::Wall {
                    '#'
                } else if self.taboo[pos] {
                    'X'
                } else {
                    ' '
                };
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl Debug for TabooFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

enum Actions<'a> {
    Moves(&'a [Dir]),
    Pushes(&'a [Push]),
}

/// Renders every state a solution passes through, starting with the
/// initial one. Assumes the actions are legal in the warehouse.
pub struct SolutionFormatter<'a> {
    warehouse: &'a Warehouse,
    actions: Actions<'a>,
}

impl<'a> SolutionFormatter<'a> {
    pub fn moves(warehouse: &'a Warehouse, moves: &'a [Dir]) -> Self {
        SolutionFormatter {
            warehouse,
            actions: Actions::Moves(moves),
        }
    }

    pub fn pushes(warehouse: &'a Warehouse, pushes: &'a [Push]) -> Self {
        SolutionFormatter {
            warehouse,
            actions: Actions::Pushes(pushes),
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = &self.warehouse.layout.grid;
        let mut state = self.warehouse.state.clone();
        writeln!(f, "{}", MapFormatter::new(grid, Some(&state)))?;

        match self.actions {
            Actions::Moves(moves) => {
                for &dir in moves {
                    let worker = state.worker + dir;
                    let boxes = state
                        .boxes
                        .iter()
                        .map(|&b| if b == worker { b + dir } else { b })
                        .collect();
                    state = State::new(worker, boxes);
                    writeln!(f, "{}", MapFormatter::new(grid, Some(&state)))?;
                }
            }
            Actions::Pushes(pushes) => {
                for &push in pushes {
                    let boxes = state
                        .boxes
                        .iter()
                        .map(|&b| {
                            if b == push.box_pos {
                                b + push.dir
                            } else {
                                b
                            }
                        })
                        .collect();
                    state = State::new(push.box_pos, boxes);
                    writeln!(f, "{}", MapFormatter::new(grid, Some(&state)))?;
                }
            }
        }

        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
