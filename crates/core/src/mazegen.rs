//! Maze generation: entrance/exit placement, randomized frontier carving,
//! exit-connectivity repair, and item scattering, in that order.

mod carve;
mod connect;
mod items;
mod spawn;

use std::time::{Duration, Instant};

use crate::maze::Maze;
use crate::rng::GameRng;
use crate::types::{FieldKind, GenerationWarning, ItemKind, MazeError, Pos};

pub use spawn::minotaur_spawn;

pub struct MazeGenerator {
    width: usize,
    height: usize,
}

#[derive(Clone, Debug)]
pub struct GeneratedMaze {
    pub maze: Maze,
    pub entrance_x: i32,
    pub exit_x: i32,
    pub items_placed: usize,
    pub build_time: Duration,
    pub warnings: Vec<GenerationWarning>,
}

impl GeneratedMaze {
    /// The avatar always starts on the carving seed, one row below the
    /// entrance.
    pub fn avatar_start(&self) -> Pos {
        Pos { y: 1, x: self.entrance_x }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let width = self.maze.width();
        let height = self.maze.height();
        let mut bytes = Vec::with_capacity(width * height + 16);
        bytes.extend((width as u32).to_le_bytes());
        bytes.extend((height as u32).to_le_bytes());
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                bytes.push(match self.maze.field_at(Pos { y, x }) {
                    FieldKind::Wall => 0,
                    FieldKind::Passage => 1,
                    FieldKind::Entrance => 2,
                    FieldKind::Exit => 3,
                    FieldKind::Item(ItemKind::Sword) => 4,
                    FieldKind::Item(ItemKind::Shield) => 5,
                    FieldKind::Item(ItemKind::Hammer) => 6,
                    FieldKind::Item(ItemKind::FogOfWar) => 7,
                });
            }
        }
        bytes.extend(self.entrance_x.to_le_bytes());
        bytes.extend(self.exit_x.to_le_bytes());
        bytes
    }
}

impl MazeGenerator {
    /// Dimensions are validated upstream (both must exceed 15); the
    /// generator assumes they hold for its whole lifetime.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn generate(
        &self,
        rng: &mut GameRng,
        item_count: usize,
    ) -> Result<GeneratedMaze, MazeError> {
        let started = Instant::now();

        let mut maze = Maze::new(self.width, self.height);
        let (entrance_x, exit_x) = place_entrance_and_exit(&mut maze, rng)?;

        carve::carve_passages(&mut maze, rng, entrance_x)?;
        connect::assure_exit_connectivity(&mut maze, rng, exit_x)?;

        let avatar_start = Pos { y: 1, x: entrance_x };
        let items_placed = items::place_items(&mut maze, rng, item_count, avatar_start)?;

        let mut warnings = Vec::new();
        if items_placed == 0 && item_count > 0 {
            warnings.push(GenerationWarning::NoRoomForItems);
        }

        Ok(GeneratedMaze {
            maze,
            entrance_x,
            exit_x,
            items_placed,
            build_time: started.elapsed(),
            warnings,
        })
    }
}

/// One entrance on the top row, one exit on the bottom row, each at an
/// independently drawn interior column.
fn place_entrance_and_exit(maze: &mut Maze, rng: &mut GameRng) -> Result<(i32, i32), MazeError> {
    let width = maze.width() as i32;
    let height = maze.height() as i32;
    let entrance_x = rng.uniform(1, width - 2);
    let exit_x = rng.uniform(1, width - 2);

    maze.set_field(Pos { y: 0, x: entrance_x }, FieldKind::Entrance)?;
    maze.set_field(Pos { y: height - 1, x: exit_x }, FieldKind::Exit)?;

    Ok((entrance_x, exit_x))
}
