use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Grids are limited to 255 rows/columns so positions stay small.
pub const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i16,
    pub c: i16,
}

impl Pos {
    pub fn new(r: i16, c: i16) -> Pos {
        Pos { r, c }
    }

    /// Manhattan distance.
    pub(crate) fn dist(self, other: Pos) -> u16 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u16
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    fn offset(self) -> (i16, i16) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "Up"),
            Dir::Right => write!(f, "Right"),
            Dir::Down => write!(f, "Down"),
            Dir::Left => write!(f, "Left"),
        }
    }
}

impl FromStr for Dir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Dir::Up),
            "right" => Ok(Dir::Right),
            "down" => Ok(Dir::Down),
            "left" => Ok(Dir::Left),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r - dr,
            c: self.c - dc,
        }
    }
}

/// A whole-box move: push the box at `box_pos` one cell in `dir`.
/// The worker ends up on the box's old cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Push {
    pub box_pos: Pos,
    pub dir: Dir,
}

impl Display for Push {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.box_pos, self.dir)
    }
}

impl Debug for Push {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Wall,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contents {
    Empty,
    Box,
    Worker,
}

impl Default for Contents {
    fn default() -> Contents {
        Contents::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let pos = Pos::new(3, 4);
        assert_eq!(pos + Dir::Up, Pos::new(2, 4));
        assert_eq!(pos + Dir::Down, Pos::new(4, 4));
        assert_eq!(pos + Dir::Left, Pos::new(3, 3));
        assert_eq!(pos + Dir::Right, Pos::new(3, 5));
        for &dir in &DIRECTIONS {
            assert_eq!(pos + dir - dir, pos);
        }
    }

    #[test]
    fn manhattan_dist() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(2, 3)), 5);
        assert_eq!(Pos::new(2, 3).dist(Pos::new(0, 0)), 5);
        assert_eq!(Pos::new(1, 1).dist(Pos::new(1, 1)), 0);
    }

    #[test]
    fn parsing_directions() {
        assert_eq!("Up".parse::<Dir>().unwrap(), Dir::Up);
        assert_eq!("left".parse::<Dir>().unwrap(), Dir::Left);
        assert_eq!("DOWN".parse::<Dir>().unwrap(), Dir::Down);
        assert!("North".parse::<Dir>().is_err());
    }

    #[test]
    fn formatting_actions() {
        assert_eq!(Dir::Left.to_string(), "Left");
        let push = Push {
            box_pos: Pos::new(3, 4),
            dir: Dir::Left,
        };
        assert_eq!(push.to_string(), "((3, 4), Left)");
        assert_eq!(format!("{:?}", push), "((3, 4), Left)");
    }
}
