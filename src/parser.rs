use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos, MAX_SIZE};
use crate::layout::Layout;
use crate::state::State;
use crate::vec2d::Vec2d;
use crate::warehouse::Warehouse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Cell(usize, usize),
    TooLarge,
    MultipleWorkers,
    NoWorker,
    NoWalls,
    OutsideWalls,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Cell(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Warehouse larger than 255 rows/columns"),
            ParserErr::MultipleWorkers => write!(f, "More than one worker"),
            ParserErr::NoWorker => write!(f, "No worker"),
            ParserErr::NoWalls => write!(f, "No walls"),
            ParserErr::OutsideWalls => write!(f, "Worker or box outside the outermost walls"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Warehouse {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub(crate) fn parse(warehouse: &str) -> Result<Warehouse, ParserErr> {
    // trim so we can specify warehouses using raw strings more easily
    let warehouse = warehouse.trim_matches('\n').trim_end();

    let mut walls = Vec::new();
    let mut targets = Vec::new();
    let mut boxes = Vec::new();
    let mut worker = None;

    for (r, line) in warehouse.lines().enumerate() {
        if r > MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        for (c, cur_char) in line.chars().enumerate() {
            if c > MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let pos = Pos::new(r as i16, c as i16);
            match cur_char {
                '#' => walls.push(pos),
                '@' => {
                    if worker.is_some() {
                        return Err(ParserErr::MultipleWorkers);
                    }
                    worker = Some(pos);
                }
                '+' | '!' => {
                    if worker.is_some() {
                        return Err(ParserErr::MultipleWorkers);
                    }
                    worker = Some(pos);
                    targets.push(pos);
                }
                '$' => boxes.push(pos),
                '*' => {
                    boxes.push(pos);
                    targets.push(pos);
                }
                '.' => targets.push(pos),
                ' ' | '-' | '_' => {}
                _ => return Err(ParserErr::Cell(r, c)),
            }
        }
    }

    let worker = worker.ok_or(ParserErr::NoWorker)?;
    if walls.is_empty() {
        return Err(ParserErr::NoWalls);
    }

    // the grid is sized by the outermost walls, everything else must fit inside
    let rows = walls.iter().map(|pos| pos.r).max().unwrap() + 1;
    let cols = walls.iter().map(|pos| pos.c).max().unwrap() + 1;

    let mut grid = Vec2d::filled(rows, cols, MapCell::Empty);
    for &pos in &walls {
        grid[pos] = MapCell::Wall;
    }
    for &pos in &targets {
        if !grid.contains(pos) {
            return Err(ParserErr::OutsideWalls);
        }
        grid[pos] = MapCell::Target;
    }
    if !grid.contains(worker) {
        return Err(ParserErr::OutsideWalls);
    }
    for &pos in &boxes {
        if !grid.contains(pos) {
            return Err(ParserErr::OutsideWalls);
        }
    }

    Ok(Warehouse::new(
        Layout::new(grid, targets),
        State::new(worker, boxes),
    ))
}
