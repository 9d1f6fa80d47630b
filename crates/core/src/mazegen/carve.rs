//! Randomized frontier growth over the odd-offset lattice (Prim-style).
//! Produces a perfect maze: a spanning tree with unique paths between the
//! carved lattice cells.

use std::collections::BTreeSet;

use crate::maze::Maze;
use crate::rng::GameRng;
use crate::types::{FieldKind, MazeError, Pos};

pub(super) fn carve_passages(
    maze: &mut Maze,
    rng: &mut GameRng,
    entrance_x: i32,
) -> Result<(), MazeError> {
    // The avatar's starting cell doubles as the growth seed.
    let seed = Pos { y: 1, x: entrance_x };
    maze.set_field(seed, FieldKind::Passage)?;

    // Frontier cells are candidate extensions of the carved region, two
    // cells away from something already carved. The visited set keeps a
    // cell from being enqueued twice.
    let mut frontier: Vec<Pos> = Vec::new();
    let mut visited: BTreeSet<Pos> = BTreeSet::new();

    let below = Pos { y: 3, x: entrance_x };
    frontier.push(below);
    visited.insert(below);
    for start in [Pos { y: 1, x: entrance_x + 2 }, Pos { y: 1, x: entrance_x - 2 }] {
        if !maze.is_boundary_or_outside(start) {
            frontier.push(start);
            visited.insert(start);
        }
    }

    while !frontier.is_empty() {
        let current = frontier.remove(rng.index(frontier.len()));
        maze.set_field(current, FieldKind::Passage)?;

        // Distance-2 neighbors split two ways: already-carved ones are
        // reconnection candidates, the rest feed the frontier.
        let mut reconnection = Vec::with_capacity(4);
        for neighbor in [
            Pos { y: current.y - 2, x: current.x },
            Pos { y: current.y, x: current.x + 2 },
            Pos { y: current.y + 2, x: current.x },
            Pos { y: current.y, x: current.x - 2 },
        ] {
            if maze.is_boundary_or_outside(neighbor) {
                continue;
            }
            if maze.field_at(neighbor) == FieldKind::Passage {
                reconnection.push(neighbor);
            } else if !visited.contains(&neighbor) {
                frontier.push(neighbor);
                visited.insert(neighbor);
            }
        }

        // Every frontier cell was enqueued two cells from something
        // already carved, so at least one reconnection candidate exists.
        if let Some(link) = rng.pick(&reconnection) {
            let mid = Pos { y: (current.y + link.y) / 2, x: (current.x + link.x) / 2 };
            maze.set_field(mid, FieldKind::Passage)?;
        }
    }

    Ok(())
}
