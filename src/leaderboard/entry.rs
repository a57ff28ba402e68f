use serde::{Deserialize, Serialize};

/// One finished run: the identity it was played under and its final score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}
