//! All the prose the game prints: the welcome scroll, per-turn event
//! lines, and the final verdicts.

use labyrinth_core::{GenerationSummary, GenerationWarning, ItemKind, Outcome, TurnEvent};

pub const WELCOME_BANNER: &str =
    "============= Welcome to the Labyrinth of Knossos, Theseus! =============";

pub const HERMES_MESSAGE: &str = r#"- A swift message from Hermes, messenger of the gods:

   "Brave traveler, I guide all who wander through unknown paths.
    Use WASD to move your mechanical companion through this labyrinth -
    W for north, A for west, S for south, D for east.

    Move wisely, for speed and cunning shall serve you well here.
    May the gods favor your journey!"
"#;

pub const HEPHAESTUS_MESSAGE: &str = r#"- Hephaestus, god of forge, warns:

   "Beware, mortal! I have scattered my crafted relics throughout this maze.
    Each 'P' holds a mystery - you won't know what I've forged until you step upon it!

    My divine creations include:
      * Sword - Sharp enough to cut through even a Minotaur's hide!
      * Shield - Defense so strong, it'll make you feel prepared for anything!
      * Hammer - Breaks walls like my legendary smithing breaks expectations!
      * Fog of War - Clouds your vision... I was having a mist-ical day when I made this one!

    Remember: Each blessing lasts but 3 moves. Use them wisely!"
"#;

pub fn item_name(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Sword => "Sword",
        ItemKind::Shield => "Shield",
        ItemKind::Hammer => "Hammer",
        ItemKind::FogOfWar => "Fog of War",
    }
}

pub fn build_trivia(summary: &GenerationSummary) -> String {
    format!(
        "The gods carved this maze in {} microseconds and hid {} relics within.",
        summary.build_time.as_micros(),
        summary.items_placed
    )
}

pub fn warning_line(warning: GenerationWarning) -> &'static str {
    match warning {
        GenerationWarning::NoRoomForItems => {
            "Hephaestus found no corner for his relics; the maze stays bare."
        }
        GenerationWarning::NoRoomForMinotaur => {
            "No lair could hold the minotaur; you walk these halls alone."
        }
    }
}

pub fn event_line(event: &TurnEvent) -> Option<String> {
    match event {
        TurnEvent::ItemPickedUp(kind) => {
            Some(format!("A blessing of Hephaestus! You take up the {}.", item_name(*kind)))
        }
        TurnEvent::WallSmashed(_) => Some("The hammer shatters the wall!".to_string()),
        TurnEvent::MinotaurSlain => {
            Some("Your sword finds its mark. The minotaur falls!".to_string())
        }
        TurnEvent::AttackDeflected { .. } => {
            Some("Your shield hurls the minotaur back into the dark!".to_string())
        }
        // Blocked steps and far-off trampling stay silent on the HUD.
        TurnEvent::MoveBlocked(_) | TurnEvent::ItemCrushed { .. } => None,
    }
}

pub fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Victory => "VICTORY - Reached the exit successfully!",
        Outcome::MinotaurSlain => "MINOTAUR_SLAIN - Defeated the minotaur with sword!",
        Outcome::CaughtByMinotaur => "DEFEATED - Caught by the minotaur!",
        Outcome::Forfeited => "FORFEITED - Player quit the game",
    }
}
