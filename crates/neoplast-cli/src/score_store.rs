use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entries kept on the board.
pub(crate) const MAX_ENTRIES: usize = 5;

/// A finished game's cumulative score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ScoreEntry {
    pub(crate) score: u32,
    /// When the game ended (ISO 8601 in the file).
    pub(crate) date: DateTime<Utc>,
}

/// The persisted top-5 leaderboard, sorted descending by score.
///
/// The backing file is rewritten in full on every game over: load, append
/// the new entry, re-sort, truncate, save. A missing file is an empty board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read leaderboard file: {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse leaderboard file: {}", path.display()))
    }

    #[must_use]
    pub(crate) fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Appends a score, re-sorts descending and truncates to [`MAX_ENTRIES`].
    ///
    /// The sort is stable, so among equal scores older entries keep their
    /// place ahead of the new one.
    pub(crate) fn record(&mut self, score: u32, date: DateTime<Utc>) {
        self.entries.push(ScoreEntry { score, date });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Rewrites the backing file in full, creating parent directories as
    /// needed.
    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create leaderboard directory: {}", parent.display())
            })?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create leaderboard file: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("Failed to write leaderboard file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_record_sorts_descending_and_truncates() {
        let mut board = Leaderboard::default();
        for (day, score) in [(1, 120), (2, 340), (3, 80), (4, 560), (5, 200), (6, 90)] {
            board.record(score, date(day));
        }

        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![560, 340, 200, 120, 90]);
        assert_eq!(board.entries().len(), MAX_ENTRIES);
    }

    #[test]
    fn test_equal_scores_keep_the_older_entry_first() {
        let mut board = Leaderboard::default();
        board.record(100, date(1));
        board.record(100, date(2));

        assert_eq!(board.entries()[0].date, date(1));
        assert_eq!(board.entries()[1].date, date(2));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut board = Leaderboard::default();
        board.record(420, date(6));
        board.record(77, date(7));

        let json = serde_json::to_string(&board).unwrap();
        let restored: Leaderboard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.entries(), board.entries());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("neoplast-test-{}", std::process::id()));
        let path = dir.join("leaderboard.json");

        let mut board = Leaderboard::default();
        board.record(250, date(8));
        board.save(&path).unwrap();

        let restored = Leaderboard::load(&path).unwrap();
        assert_eq!(restored.entries(), board.entries());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let path = Path::new("./does-not-exist/leaderboard.json");
        let board = Leaderboard::load(path).unwrap();
        assert!(board.entries().is_empty());
    }
}
