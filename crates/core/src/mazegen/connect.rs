//! Exit-connectivity repair. The frontier carving works on cells at odd
//! offsets from the seed, so the final approach to the exit row can come
//! out disconnected; this pass guarantees the exit is reachable without
//! re-running the carve.

use crate::maze::Maze;
use crate::rng::GameRng;
use crate::types::{FieldKind, MazeError, Pos};

pub(super) fn assure_exit_connectivity(
    maze: &mut Maze,
    rng: &mut GameRng,
    exit_x: i32,
) -> Result<(), MazeError> {
    let height = maze.height() as i32;

    if maze.height() % 2 == 0 {
        // Even height: the row above the exit is a midpoint row the carve
        // never reaches. Punch through it, then tie the column into the
        // nearest carved cell two rows above.
        maze.set_field(Pos { y: height - 2, x: exit_x }, FieldKind::Passage)?;

        let already_connected =
            maze.field_at(Pos { y: height - 3, x: exit_x }) == FieldKind::Passage;
        if !already_connected
            && let Some(found) = nearest_passage_column(maze, exit_x, height - 3)
        {
            carve_row_segment(maze, height - 3, exit_x, found)?;
        }

        soften_exit_approach(maze, rng, height - 2)?;
    } else {
        // Odd height: the row above the exit is a lattice row; make sure
        // the cell above the exit is open and horizontally attached.
        let above = Pos { y: height - 2, x: exit_x };
        if maze.field_at(above) == FieldKind::Wall {
            maze.set_field(above, FieldKind::Passage)?;
        }

        let attached = maze.field_at(Pos { y: height - 2, x: exit_x - 1 })
            == FieldKind::Passage
            || maze.field_at(Pos { y: height - 2, x: exit_x + 1 }) == FieldKind::Passage;
        if !attached
            && let Some(found) = nearest_passage_column(maze, exit_x, height - 2)
        {
            carve_row_segment(maze, height - 2, exit_x, found)?;
        }
    }

    Ok(())
}

/// Scan outward from the exit column along `row`, probing the positive
/// offset before the negative one at each distance, for the nearest
/// interior passage.
fn nearest_passage_column(maze: &Maze, exit_x: i32, row: i32) -> Option<i32> {
    let width = maze.width() as i32;
    for offset in 1..width {
        if exit_x + offset < width - 1
            && maze.field_at(Pos { y: row, x: exit_x + offset }) == FieldKind::Passage
        {
            return Some(exit_x + offset);
        }
        if exit_x - offset > 0
            && maze.field_at(Pos { y: row, x: exit_x - offset }) == FieldKind::Passage
        {
            return Some(exit_x - offset);
        }
    }
    None
}

fn carve_row_segment(maze: &mut Maze, row: i32, a: i32, b: i32) -> Result<(), MazeError> {
    let width = maze.width() as i32;
    for x in a.min(b)..=a.max(b) {
        if x > 0 && x < width - 1 {
            maze.set_field(Pos { y: row, x }, FieldKind::Passage)?;
        }
    }
    Ok(())
}

/// Flip roughly one in three walls in the row above the exit to passages so
/// the approach looks less boxy. Only cells that attach to an existing
/// passage (above, or the already-processed cell to the left) are eligible,
/// which keeps every flipped cell reachable.
fn soften_exit_approach(maze: &mut Maze, rng: &mut GameRng, row: i32) -> Result<(), MazeError> {
    let width = maze.width() as i32;
    for x in 1..(width - 1) {
        let pos = Pos { y: row, x };
        if maze.field_at(pos) != FieldKind::Wall {
            continue;
        }
        let attached = maze.field_at(Pos { y: row - 1, x }) == FieldKind::Passage
            || maze.field_at(Pos { y: row, x: x - 1 }) == FieldKind::Passage;
        if attached && rng.uniform(1, 3) == 1 {
            maze.set_field(pos, FieldKind::Passage)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::carve::carve_passages;

    fn carved_maze(width: usize, height: usize, entrance_x: i32, seed: u64) -> (Maze, GameRng) {
        let mut maze = Maze::new(width, height);
        let mut rng = GameRng::seeded(seed);
        carve_passages(&mut maze, &mut rng, entrance_x).unwrap();
        (maze, rng)
    }

    #[test]
    fn even_height_opens_the_cell_above_the_exit() {
        let (mut maze, mut rng) = carved_maze(20, 18, 7, 21);
        let exit_x = 11;
        maze.set_field(Pos { y: 17, x: exit_x }, FieldKind::Exit).unwrap();
        assure_exit_connectivity(&mut maze, &mut rng, exit_x).unwrap();
        assert_eq!(maze.field_at(Pos { y: 16, x: exit_x }), FieldKind::Passage);
    }

    #[test]
    fn odd_height_attaches_the_exit_to_its_lattice_row() {
        let (mut maze, mut rng) = carved_maze(20, 17, 3, 5);
        let exit_x = 10;
        maze.set_field(Pos { y: 16, x: exit_x }, FieldKind::Exit).unwrap();
        assure_exit_connectivity(&mut maze, &mut rng, exit_x).unwrap();

        let above = Pos { y: 15, x: exit_x };
        assert_eq!(maze.field_at(above), FieldKind::Passage);
        let attached = maze.field_at(Pos { y: 15, x: exit_x - 1 }) == FieldKind::Passage
            || maze.field_at(Pos { y: 15, x: exit_x + 1 }) == FieldKind::Passage
            || maze.field_at(Pos { y: 14, x: exit_x }) == FieldKind::Passage;
        assert!(attached, "cell above the exit must join the carved maze");
    }

    #[test]
    fn nearest_passage_scan_prefers_the_positive_side_on_ties() {
        let mut maze = Maze::new(20, 17);
        maze.set_field(Pos { y: 8, x: 12 }, FieldKind::Passage).unwrap();
        maze.set_field(Pos { y: 8, x: 8 }, FieldKind::Passage).unwrap();
        assert_eq!(nearest_passage_column(&maze, 10, 8), Some(12));
    }

    #[test]
    fn nearest_passage_scan_reports_none_on_a_solid_row() {
        let maze = Maze::new(20, 17);
        assert_eq!(nearest_passage_column(&maze, 10, 8), None);
    }
}
