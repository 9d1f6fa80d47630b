//! Relic scattering over the carved maze.

use crate::maze::Maze;
use crate::rng::GameRng;
use crate::types::{FieldKind, ItemKind, MazeError, Pos};

/// Convert up to `item_count` interior passage cells into items, never the
/// avatar's starting cell. Returns how many were actually placed; an empty
/// candidate list is non-fatal and places nothing.
pub(super) fn place_items(
    maze: &mut Maze,
    rng: &mut GameRng,
    item_count: usize,
    avatar_start: Pos,
) -> Result<usize, MazeError> {
    let mut candidates = Vec::new();
    for x in 1..maze.width() as i32 - 1 {
        for y in 1..maze.height() as i32 - 1 {
            let pos = Pos { y, x };
            if pos == avatar_start {
                continue;
            }
            if maze.field_at(pos) == FieldKind::Passage {
                candidates.push(pos);
            }
        }
    }

    if candidates.is_empty() {
        return Ok(0);
    }

    rng.shuffle(&mut candidates);

    let to_place = item_count.min(candidates.len());
    for &pos in &candidates[..to_place] {
        maze.set_field(pos, FieldKind::Item(random_item_kind(rng)))?;
    }

    Ok(to_place)
}

/// Each item is an independent uniform draw; the distribution is not
/// balanced across kinds.
fn random_item_kind(rng: &mut GameRng) -> ItemKind {
    match rng.uniform(1, 4) {
        1 => ItemKind::Sword,
        2 => ItemKind::Shield,
        3 => ItemKind::Hammer,
        _ => ItemKind::FogOfWar,
    }
}
