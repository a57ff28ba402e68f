mod entry;
mod store;

pub use entry::ScoreEntry;
pub use store::{LeaderBoard, StoreError};
