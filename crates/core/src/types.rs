use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    Sword,
    Shield,
    Hammer,
    FogOfWar,
}

/// One of the five mutually exclusive kinds a grid cell can hold.
/// A cell changes kind only through explicit maze mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    Passage,
    Wall,
    Entrance,
    Exit,
    Item(ItemKind),
}

impl FieldKind {
    /// Display symbol. Items all render as `'P'`: which relic a cell holds
    /// stays hidden until the avatar steps on it.
    pub fn symbol(self) -> char {
        match self {
            Self::Passage => ' ',
            Self::Wall => '#',
            Self::Entrance => 'U',
            Self::Exit => 'I',
            Self::Item(_) => 'P',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerIntent {
    Move(Direction),
    Quit,
    Redraw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    MinotaurSlain,
    CaughtByMinotaur,
    Forfeited,
}

/// Where the minotaur is, or why it is not. `Slain` is terminal: a slain
/// minotaur never moves again and is excluded from capture checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinotaurState {
    Roaming(Pos),
    Slain,
    Absent,
}

impl MinotaurState {
    pub fn pos(self) -> Option<Pos> {
        match self {
            Self::Roaming(pos) => Some(pos),
            Self::Slain | Self::Absent => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    ItemPickedUp(ItemKind),
    WallSmashed(Pos),
    MoveBlocked(Pos),
    MinotaurSlain,
    AttackDeflected { to: Pos },
    ItemCrushed { pos: Pos },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationWarning {
    NoRoomForItems,
    NoRoomForMinotaur,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    OutOfBounds { pos: Pos, width: usize, height: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => write!(
                f,
                "field mutation at ({}, {}) outside the {}x{} maze",
                pos.x, pos.y, width, height
            ),
        }
    }
}

impl std::error::Error for MazeError {}
