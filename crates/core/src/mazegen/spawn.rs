//! Minotaur start placement.

use crate::maze::Maze;
use crate::rng::GameRng;
use crate::types::{FieldKind, Pos};

/// Pick a uniformly random interior passage cell for the minotaur, away
/// from the avatar's start and on the checkerboard class satisfying
/// `(x + y) % 2 == (avatar_x + 1) % 2` -- the class the carved lattice
/// itself occupies, which keeps the minotaur able to reach orthogonal
/// adjacency with the avatar.
///
/// Candidates are pre-filtered by parity rather than re-drawn until one
/// fits, so an unsatisfiable constraint degrades to `None` (no minotaur)
/// instead of looping.
pub fn minotaur_spawn(maze: &Maze, avatar: Pos, rng: &mut GameRng) -> Option<Pos> {
    let wanted_parity = (avatar.x + 1).rem_euclid(2);

    let mut candidates = Vec::new();
    for x in 1..maze.width() as i32 - 1 {
        for y in 1..maze.height() as i32 - 1 {
            let pos = Pos { y, x };
            if pos == avatar || maze.field_at(pos) != FieldKind::Passage {
                continue;
            }
            if (pos.x + pos.y).rem_euclid(2) == wanted_parity {
                candidates.push(pos);
            }
        }
    }

    rng.pick(&candidates)
}
