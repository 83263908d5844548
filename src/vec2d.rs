use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// A rectangular grid stored as a flat vector.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: i16,
    cols: i16,
}

impl<T> Vec2d<T> {
    pub(crate) fn filled(rows: i16, cols: i16, default: T) -> Vec2d<T>
    where
        T: Clone,
    {
        Vec2d {
            data: vec![default; rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    pub(crate) fn rows(&self) -> i16 {
        self.rows
    }

    pub(crate) fn cols(&self) -> i16 {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.r < self.rows && pos.c >= 0 && pos.c < self.cols
    }

    /// All positions in row-major order.
    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    /// An empty grid with the same dimensions, useful for marking cells
    /// while traversing the original.
    pub(crate) fn scratchpad<U>(&self) -> Vec2d<U>
    where
        U: Default + Clone,
    {
        Vec2d::filled(self.rows, self.cols, U::default())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        &self.data[pos.r as usize * self.cols as usize + pos.c as usize]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        &mut self.data[pos.r as usize * self.cols as usize + pos.c as usize]
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{}", self[Pos::new(r, c)] as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
