//! File-backed leaderboard store using one `name,score` record per line.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write as _};
use std::path::PathBuf;

use log::debug;
use maze_chase_core::Score;
use maze_chase_system_scoreboard::{sort_descending, ScoreEntry, ScoreStore, ScoreStoreError};

/// Append-only leaderboard persisted as a plain text file.
///
/// Records are `name,score` lines split on the first comma when read back.
/// Malformed lines are skipped individually so one bad record never hides the
/// rest of the board; a missing file reads as an empty board.
pub(crate) struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn save(&mut self, name: &str, score: Score) -> Result<(), ScoreStoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{},{}", name, score.get())?;
        debug!("recorded {} points for {name}", score.get());
        Ok(())
    }

    fn load(&mut self) -> Result<Vec<ScoreEntry>, ScoreStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        let mut entries = Vec::new();
        for line in contents.lines() {
            let Some((name, score)) = line.split_once(',') else {
                continue;
            };
            let Ok(value) = score.trim().parse::<u32>() else {
                continue;
            };
            entries.push(ScoreEntry::new(name, Score::new(value)));
        }

        sort_descending(&mut entries);
        Ok(entries)
    }
}
