//! The structured result record a finished session hands to persistence.
//! Storage itself lives with the caller; failure to persist never alters
//! the game outcome.

use serde::{Deserialize, Serialize};

use crate::types::{Outcome, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: Outcome,
    pub avatar: Pos,
    /// `None` when the minotaur was slain or never placed.
    pub minotaur: Option<Pos>,
    pub minotaur_slain: bool,
    pub moves_made: u32,
    pub duration_ms: u64,
    pub duration_micros: u64,
    /// Final symbol grid with avatar and minotaur overlays.
    pub grid_rows: Vec<String>,
}
