mod engine;
mod food;
mod rng;
mod segment;
mod settings;
mod snake;
mod types;

pub use engine::Engine;
pub use food::Food;
pub use rng::SessionRng;
pub use segment::Segment;
pub use settings::EngineSettings;
pub use snake::Snake;
pub use types::{Direction, GridSize, Location, RunState};
