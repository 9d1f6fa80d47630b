//! The labyrinth grid: a flat array of field variants, exclusively owned.
//! Reads outside the grid behave as walls; writes outside are a hard error.

use crate::types::{FieldKind, MazeError, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    fields: Vec<FieldKind>,
}

impl Maze {
    /// A fresh maze is solid rock; generation carves into it.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, fields: vec![FieldKind::Wall; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// True for the outer ring and for anything outside the grid entirely.
    /// Generation never carves these cells.
    pub fn is_boundary_or_outside(&self, pos: Pos) -> bool {
        pos.x <= 0
            || pos.y <= 0
            || (pos.x as usize) >= self.width - 1
            || (pos.y as usize) >= self.height - 1
    }

    /// Out-of-bounds coordinates read as `Wall`: callers may treat anything
    /// outside the grid as impassable without their own bounds checks.
    pub fn field_at(&self, pos: Pos) -> FieldKind {
        match self.index_of(pos) {
            Some(index) => self.fields[index],
            None => FieldKind::Wall,
        }
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.field_at(pos).is_walkable()
    }

    pub fn set_field(&mut self, pos: Pos, kind: FieldKind) -> Result<(), MazeError> {
        match self.index_of(pos) {
            Some(index) => {
                self.fields[index] = kind;
                Ok(())
            }
            None => {
                Err(MazeError::OutOfBounds { pos, width: self.width, height: self.height })
            }
        }
    }

    /// In-crate setter for positions already validated by the caller.
    /// Silently ignores out-of-bounds writes instead of erroring.
    pub(crate) fn put(&mut self, pos: Pos, kind: FieldKind) {
        if let Some(index) = self.index_of(pos) {
            self.fields[index] = kind;
        }
    }

    /// Column of the single entrance on row 0, once generation has placed it.
    pub fn entrance_x(&self) -> Option<i32> {
        (0..self.width as i32)
            .find(|&x| self.field_at(Pos { y: 0, x }) == FieldKind::Entrance)
    }

    pub fn symbol_rows(&self) -> Vec<String> {
        (0..self.height as i32)
            .map(|y| {
                (0..self.width as i32)
                    .map(|x| self.field_at(Pos { y, x }).symbol())
                    .collect()
            })
            .collect()
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as usize) * self.width + (pos.x as usize))
        } else {
            None
        }
    }
}
