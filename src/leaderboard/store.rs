//! Append-only score store behind the leaderboard queries.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::log;

use super::entry::ScoreEntry;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Encode(serde_json::Error),
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Encode(e) => write!(f, "Encode error: {}", e),
            StoreError::Malformed { line, source } => {
                write!(f, "Malformed score row on line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Rows are newline-delimited JSON, appended one per finished run and never
/// rewritten. A failure here is not recoverable by the game; hosts are
/// expected to abort on any `StoreError` after startup.
pub struct LeaderBoard {
    entries: Vec<ScoreEntry>,
    file: File,
    path: PathBuf,
}

impl LeaderBoard {
    /// Opens the store at `path`, creating it (and missing parent
    /// directories) on first use, and loads every recorded run.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)?;

        let mut entries = Vec::new();
        {
            let reader = BufReader::new(&file);
            for (index, row) in reader.lines().enumerate() {
                let row = row?;
                if row.trim().is_empty() {
                    continue;
                }
                let entry = serde_json::from_str(&row).map_err(|source| StoreError::Malformed {
                    line: index + 1,
                    source,
                })?;
                entries.push(entry);
            }
        }

        log!(
            "Opened score store at {} ({} entries)",
            path.display(),
            entries.len()
        );
        Ok(Self {
            entries,
            file,
            path,
        })
    }

    // The row is written in one call and synced before the entry becomes
    // visible, so a crash mid-insert leaves no applied row behind.
    pub fn add_score(&mut self, name: &str, score: u32) -> Result<(), StoreError> {
        let entry = ScoreEntry {
            name: name.to_string(),
            score,
        };
        let mut row = serde_json::to_string(&entry).map_err(StoreError::Encode)?;
        row.push('\n');
        self.file.write_all(row.as_bytes())?;
        self.file.sync_data()?;

        log!("Recorded score {} for {}", entry.score, entry.name);
        self.entries.push(entry);
        Ok(())
    }

    /// Up to `limit` entries, highest score first.
    pub fn top_scores(&self, limit: usize) -> Vec<ScoreEntry> {
        ranked(self.entries.iter().collect(), limit)
    }

    /// Up to `limit` entries recorded under `name`, highest score first.
    pub fn top_scores_for(&self, name: &str, limit: usize) -> Vec<ScoreEntry> {
        ranked(
            self.entries.iter().filter(|e| e.name == name).collect(),
            limit,
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// Stable sort: equal scores keep their insertion order.
fn ranked(mut rows: Vec<&ScoreEntry>, limit: usize) -> Vec<ScoreEntry> {
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    rows.into_iter().take(limit).cloned().collect()
}
