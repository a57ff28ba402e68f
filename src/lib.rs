pub mod config;
pub mod engine;
pub mod leaderboard;
pub mod logger;

pub use config::GameConfig;
pub use engine::{
    Direction, Engine, EngineSettings, Food, GridSize, Location, RunState, Segment, SessionRng,
    Snake,
};
pub use leaderboard::{LeaderBoard, ScoreEntry, StoreError};
