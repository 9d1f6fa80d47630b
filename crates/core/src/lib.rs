pub mod game;
pub mod maze;
pub mod mazegen;
pub mod report;
pub mod rng;
pub mod types;

pub use game::{GameSession, GenerationSummary, SessionConfig, TurnReport, effects::EffectState};
pub use maze::Maze;
pub use mazegen::{GeneratedMaze, MazeGenerator, minotaur_spawn};
pub use report::GameReport;
pub use rng::GameRng;
pub use types::*;
