#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Leaderboard contract and the pure system that persists run scores.
//!
//! The engine only needs a save/load contract from its leaderboard; the
//! storage mechanics live behind [`ScoreStore`] so adapters can supply a
//! file-backed implementation while tests use [`MemoryScoreStore`]. The
//! [`Scoreboard`] system observes the event stream and records the score
//! exactly when a run reaches a terminal outcome.

use maze_chase_core::{Event, Score};
use thiserror::Error;

/// Number of entries a leaderboard display shows at most.
pub const DISPLAY_LIMIT: usize = 10;

/// A single recorded leaderboard result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Name the run was played under.
    pub name: String,
    /// Final score of the run.
    pub score: Score,
}

impl ScoreEntry {
    /// Creates a new leaderboard entry.
    #[must_use]
    pub fn new(name: impl Into<String>, score: Score) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Errors surfaced by leaderboard storage backends.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    /// The backing storage could not be read or written.
    #[error("leaderboard storage failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only persistence contract for leaderboard results.
///
/// `load` returns every stored entry sorted descending by score; backends
/// skip records they cannot parse rather than failing the whole load.
pub trait ScoreStore {
    /// Appends a result to the store.
    fn save(&mut self, name: &str, score: Score) -> Result<(), ScoreStoreError>;

    /// Reads back all stored results sorted descending by score.
    fn load(&mut self) -> Result<Vec<ScoreEntry>, ScoreStoreError>;
}

/// Sorts entries descending by score, preserving insertion order on ties.
pub fn sort_descending(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Returns at most [`DISPLAY_LIMIT`] leading entries for presentation.
#[must_use]
pub fn top_entries(entries: &[ScoreEntry]) -> &[ScoreEntry] {
    &entries[..entries.len().min(DISPLAY_LIMIT)]
}

/// In-memory store used by tests and headless sessions.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    entries: Vec<ScoreEntry>,
}

impl MemoryScoreStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn save(&mut self, name: &str, score: Score) -> Result<(), ScoreStoreError> {
        self.entries.push(ScoreEntry::new(name, score));
        Ok(())
    }

    fn load(&mut self) -> Result<Vec<ScoreEntry>, ScoreStoreError> {
        let mut entries = self.entries.clone();
        sort_descending(&mut entries);
        Ok(entries)
    }
}

/// Pure system that persists the run score on terminal events.
#[derive(Debug, Default)]
pub struct Scoreboard;

impl Scoreboard {
    /// Creates a new scoreboard system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Consumes world events, saving the score when a run concludes.
    pub fn handle<S>(
        &self,
        events: &[Event],
        player_name: &str,
        store: &mut S,
    ) -> Result<(), ScoreStoreError>
    where
        S: ScoreStore + ?Sized,
    {
        for event in events {
            match event {
                Event::LevelCleared { score, .. } | Event::GameOver { score } => {
                    store.save(player_name, *score)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_chase_core::LevelNumber;

    #[test]
    fn load_returns_entries_sorted_descending() {
        let mut store = MemoryScoreStore::new();
        store.save("Alice", Score::new(120)).expect("save");
        store.save("Bob", Score::new(90)).expect("save");
        store.save("Carl", Score::new(300)).expect("save");

        let entries = store.load().expect("load");
        assert_eq!(
            entries,
            vec![
                ScoreEntry::new("Carl", Score::new(300)),
                ScoreEntry::new("Alice", Score::new(120)),
                ScoreEntry::new("Bob", Score::new(90)),
            ]
        );
    }

    #[test]
    fn top_entries_caps_the_display_set() {
        let entries: Vec<ScoreEntry> = (0..15)
            .map(|index| ScoreEntry::new(format!("P{index}"), Score::new(index)))
            .collect();
        assert_eq!(top_entries(&entries).len(), DISPLAY_LIMIT);
        assert_eq!(top_entries(&entries[..3]).len(), 3);
    }

    #[test]
    fn terminal_events_persist_the_score() {
        let scoreboard = Scoreboard::new();
        let mut store = MemoryScoreStore::new();

        scoreboard
            .handle(
                &[Event::LevelCleared {
                    level: LevelNumber::new(2),
                    score: Score::new(150),
                }],
                "Ada",
                &mut store,
            )
            .expect("persist");
        scoreboard
            .handle(
                &[Event::GameOver {
                    score: Score::new(40),
                }],
                "Ada",
                &mut store,
            )
            .expect("persist");

        let entries = store.load().expect("load");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].score, Score::new(150));
    }

    #[test]
    fn non_terminal_events_do_not_persist() {
        let scoreboard = Scoreboard::new();
        let mut store = MemoryScoreStore::new();
        scoreboard
            .handle(
                &[Event::SessionStarted {
                    level: LevelNumber::new(1),
                }],
                "Ada",
                &mut store,
            )
            .expect("persist");
        assert!(store.load().expect("load").is_empty());
    }
}
