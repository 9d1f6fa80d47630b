//! The minotaur's turn: a deliberately simple reactive policy with no
//! memory and no pathfinding. Greedy only at orthogonal adjacency,
//! otherwise an unbiased random walk.

use crate::game::effects::EffectState;
use crate::maze::Maze;
use crate::rng::GameRng;
use crate::types::{Direction, ItemKind, Pos, manhattan};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum MinotaurAction {
    /// No walkable destination; a valid terminal micro-state, not an error.
    Stay,
    Step(Pos),
    /// Shield bounce: knocked back to a cell two Manhattan steps from the
    /// avatar.
    Deflected(Pos),
    Slain,
}

/// Orthogonal adjacency; diagonals don't count. On a grid without diagonal
/// passages this also means no wall stands between the two.
pub(super) fn in_eating_range(minotaur: Pos, avatar: Pos) -> bool {
    manhattan(minotaur, avatar) == 1
}

pub(super) fn take_turn(
    maze: &Maze,
    minotaur: Pos,
    avatar: Pos,
    effects: &EffectState,
    rng: &mut GameRng,
) -> MinotaurAction {
    if in_eating_range(minotaur, avatar) {
        if effects.is_active(ItemKind::Sword) {
            return MinotaurAction::Slain;
        }
        if effects.is_active(ItemKind::Shield) {
            return match bounce_target(maze, avatar, rng) {
                Some(to) => MinotaurAction::Deflected(to),
                None => MinotaurAction::Stay,
            };
        }
        return MinotaurAction::Step(avatar);
    }

    let neighbors: Vec<Pos> = Direction::ALL
        .iter()
        .map(|&direction| minotaur.step(direction))
        .filter(|&pos| maze.is_walkable(pos))
        .collect();

    match rng.pick(&neighbors) {
        Some(to) => MinotaurAction::Step(to),
        None => MinotaurAction::Stay,
    }
}

/// Uniform choice among in-bounds walkable cells at Manhattan distance
/// exactly two from the avatar.
fn bounce_target(maze: &Maze, avatar: Pos, rng: &mut GameRng) -> Option<Pos> {
    let ring: Vec<Pos> = [
        (-2, 0),
        (-1, 1),
        (0, 2),
        (1, 1),
        (2, 0),
        (1, -1),
        (0, -2),
        (-1, -1),
    ]
    .iter()
    .map(|&(dy, dx)| Pos { y: avatar.y + dy, x: avatar.x + dx })
    .filter(|&pos| maze.in_bounds(pos) && maze.is_walkable(pos))
    .collect();

    rng.pick(&ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKind;

    fn open_maze() -> Maze {
        let mut maze = Maze::new(16, 16);
        for y in 1..15 {
            for x in 1..15 {
                maze.put(Pos { y, x }, FieldKind::Passage);
            }
        }
        maze
    }

    #[test]
    fn eating_range_is_orthogonal_only() {
        let avatar = Pos { y: 5, x: 5 };
        assert!(in_eating_range(Pos { y: 4, x: 5 }, avatar));
        assert!(in_eating_range(Pos { y: 5, x: 6 }, avatar));
        assert!(!in_eating_range(Pos { y: 4, x: 4 }, avatar));
        assert!(!in_eating_range(Pos { y: 5, x: 7 }, avatar));
        assert!(!in_eating_range(avatar, avatar));
    }

    #[test]
    fn adjacent_minotaur_steps_onto_an_unprotected_avatar() {
        let maze = open_maze();
        let avatar = Pos { y: 5, x: 5 };
        let minotaur = Pos { y: 5, x: 6 };
        let mut rng = GameRng::seeded(1);
        let action = take_turn(&maze, minotaur, avatar, &EffectState::new(), &mut rng);
        assert_eq!(action, MinotaurAction::Step(avatar));
    }

    #[test]
    fn sword_beats_adjacency() {
        let maze = open_maze();
        let mut effects = EffectState::new();
        effects.refresh(ItemKind::Sword);
        let mut rng = GameRng::seeded(1);
        let action =
            take_turn(&maze, Pos { y: 5, x: 6 }, Pos { y: 5, x: 5 }, &effects, &mut rng);
        assert_eq!(action, MinotaurAction::Slain);
    }

    #[test]
    fn sword_takes_priority_over_shield() {
        let maze = open_maze();
        let mut effects = EffectState::new();
        effects.refresh(ItemKind::Sword);
        effects.refresh(ItemKind::Shield);
        let mut rng = GameRng::seeded(1);
        let action =
            take_turn(&maze, Pos { y: 5, x: 6 }, Pos { y: 5, x: 5 }, &effects, &mut rng);
        assert_eq!(action, MinotaurAction::Slain);
    }

    #[test]
    fn shield_bounces_to_manhattan_distance_two() {
        let maze = open_maze();
        let avatar = Pos { y: 5, x: 5 };
        let mut effects = EffectState::new();
        effects.refresh(ItemKind::Shield);
        for seed in 0..32 {
            let mut rng = GameRng::seeded(seed);
            let action = take_turn(&maze, Pos { y: 5, x: 6 }, avatar, &effects, &mut rng);
            let MinotaurAction::Deflected(to) = action else {
                panic!("expected a deflection, got {action:?}");
            };
            assert_eq!(manhattan(to, avatar), 2);
            assert!(maze.is_walkable(to));
        }
    }

    #[test]
    fn shield_bounce_with_no_landing_spot_stays_put() {
        // Corridor one cell wide: the avatar's distance-two ring is all wall.
        let mut maze = Maze::new(16, 16);
        let avatar = Pos { y: 5, x: 5 };
        let minotaur = Pos { y: 5, x: 6 };
        maze.put(avatar, FieldKind::Passage);
        maze.put(minotaur, FieldKind::Passage);
        let mut effects = EffectState::new();
        effects.refresh(ItemKind::Shield);
        let mut rng = GameRng::seeded(9);
        let action = take_turn(&maze, minotaur, avatar, &effects, &mut rng);
        assert_eq!(action, MinotaurAction::Stay);
    }

    #[test]
    fn out_of_range_minotaur_random_walks_to_a_walkable_neighbor() {
        let maze = open_maze();
        let minotaur = Pos { y: 8, x: 8 };
        let mut rng = GameRng::seeded(4);
        for _ in 0..16 {
            let action =
                take_turn(&maze, minotaur, Pos { y: 2, x: 2 }, &EffectState::new(), &mut rng);
            let MinotaurAction::Step(to) = action else {
                panic!("open maze always offers a step, got {action:?}");
            };
            assert_eq!(manhattan(to, minotaur), 1);
            assert!(maze.is_walkable(to));
        }
    }

    #[test]
    fn boxed_in_minotaur_stays() {
        let mut maze = Maze::new(16, 16);
        let minotaur = Pos { y: 5, x: 5 };
        maze.put(minotaur, FieldKind::Passage);
        let mut rng = GameRng::seeded(4);
        let action =
            take_turn(&maze, minotaur, Pos { y: 2, x: 2 }, &EffectState::new(), &mut rng);
        assert_eq!(action, MinotaurAction::Stay);
    }
}
