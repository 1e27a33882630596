//! SQLite-backed action store.
//!
//! Location: `~/.local/share/verdant/verdant.db` unless overridden.
//! Entries are append-only; the only delete is the bulk reset. Streak and
//! challenge state advance inside the same transaction as the insert, so
//! a failed write leaves all three consistent.

use crate::categories::Category;
use crate::challenges::{self, ChallengeKind, ChallengeProgress};
use crate::error::TrackerError;
use crate::scoring::{self, DailyTotal};
use crate::streaks::{self, StreakSnapshot};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const SCHEMA_VERSION: u32 = 1;

/// A recorded eco-action. Immutable once written.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActionEntry {
    pub id: i64,
    pub category: Category,
    pub points: i64,
    pub logged_at: DateTime<Utc>,
}

/// Action store backed by SQLite.
#[derive(Clone)]
pub struct ActionStore {
    conn: Arc<Mutex<Connection>>,
}

impl ActionStore {
    /// Open or create the store at the default location.
    pub fn open_default() -> Result<Self, TrackerError> {
        Self::open(&Self::default_path())
    }

    /// Open or create the store at a specific path.
    pub fn open(path: &Path) -> Result<Self, TrackerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory store for tests and dry runs.
    pub fn open_in_memory() -> Result<Self, TrackerError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Default database path under the user data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("verdant")
            .join("verdant.db")
    }

    fn init_schema(&self) -> Result<(), TrackerError> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS actions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                points INTEGER NOT NULL,
                logged_at TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS streak_data (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                current_streak INTEGER NOT NULL DEFAULT 0,
                longest_streak INTEGER NOT NULL DEFAULT 0,
                last_action_date TEXT
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS challenges (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL,
                target_count INTEGER NOT NULL,
                current_count INTEGER NOT NULL DEFAULT 0,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                completed_at TEXT
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS schema_meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            "INSERT OR REPLACE INTO schema_meta (key, value) VALUES ('version', ?)",
            params![SCHEMA_VERSION.to_string()],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_actions_logged_at ON actions(logged_at)",
            [],
        )?;

        conn.execute(
            "INSERT OR IGNORE INTO streak_data (id, current_streak, longest_streak) VALUES (1, 0, 0)",
            [],
        )?;

        let seeded: i64 = conn.query_row("SELECT COUNT(*) FROM challenges", [], |row| row.get(0))?;
        if seeded == 0 {
            let created_at = Utc::now().to_rfc3339();
            for seed in challenges::default_challenges() {
                conn.execute(
                    "INSERT INTO challenges (name, description, target_count, created_at) VALUES (?, ?, ?, ?)",
                    params![seed.name, seed.description, seed.target_count, created_at],
                )?;
            }
        }

        Ok(())
    }

    /// Append an entry, advancing streaks and challenge counts in the same
    /// transaction. The category has already been validated by its type.
    pub fn record_action(
        &self,
        category: Category,
        logged_at: DateTime<Utc>,
    ) -> Result<ActionEntry, TrackerError> {
        let points = category.points();
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO actions (category, points, logged_at) VALUES (?, ?, ?)",
            params![category.label(), points, logged_at.to_rfc3339()],
        )?;
        let id = tx.last_insert_rowid();

        advance_streak(&tx, logged_at.date_naive())?;
        refresh_challenges(&tx, category, logged_at)?;

        tx.commit()?;
        Ok(ActionEntry {
            id,
            category,
            points,
            logged_at,
        })
    }

    /// Cumulative points across all entries.
    pub fn total_points(&self) -> Result<i64, TrackerError> {
        let conn = self.conn.lock().unwrap();
        let total: Option<i64> =
            conn.query_row("SELECT SUM(points) FROM actions", [], |row| row.get(0))?;
        Ok(total.unwrap_or(0))
    }

    /// Raw points in the trailing 7-day window. Callers cap for display.
    pub fn weekly_points_raw(&self, now: DateTime<Utc>) -> Result<i64, TrackerError> {
        let cutoff = (now - Duration::days(7)).to_rfc3339();
        let conn = self.conn.lock().unwrap();
        let total: Option<i64> = conn.query_row(
            "SELECT SUM(points) FROM actions WHERE logged_at >= ?",
            params![cutoff],
            |row| row.get(0),
        )?;
        Ok(total.unwrap_or(0))
    }

    /// Points per calendar day for the 7 days ending at `today`, zero-filled.
    pub fn points_per_day(&self, today: NaiveDate) -> Result<Vec<DailyTotal>, TrackerError> {
        let start = today - Duration::days(6);
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT substr(logged_at, 1, 10) AS day, SUM(points) FROM actions \
             WHERE substr(logged_at, 1, 10) BETWEEN ? AND ? \
             GROUP BY day ORDER BY day ASC",
        )?;
        let rows = stmt.query_map(params![start.to_string(), today.to_string()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut sparse = Vec::new();
        for row in rows {
            let (day, points) = row?;
            if let Ok(day) = day.parse::<NaiveDate>() {
                sparse.push((day, points));
            }
        }
        Ok(scoring::fill_week(today, &sparse))
    }

    /// Entries newest first. `None` returns everything.
    pub fn history(&self, limit: Option<usize>) -> Result<Vec<ActionEntry>, TrackerError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, category, points, logged_at FROM actions \
             ORDER BY logged_at DESC, id DESC LIMIT ?",
        )?;
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map(params![limit], row_to_entry)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(TrackerError::from)
    }

    /// Number of recorded entries.
    pub fn action_count(&self) -> Result<i64, TrackerError> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM actions", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Current streak state.
    pub fn streak(&self) -> Result<StreakSnapshot, TrackerError> {
        let conn = self.conn.lock().unwrap();
        let snapshot = conn
            .query_row(
                "SELECT current_streak, longest_streak FROM streak_data WHERE id = 1",
                [],
                |row| {
                    Ok(StreakSnapshot {
                        current_streak: row.get(0)?,
                        longest_streak: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(snapshot.unwrap_or_default())
    }

    /// Challenge progress, open ones first.
    pub fn challenges(&self) -> Result<Vec<ChallengeProgress>, TrackerError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT name, description, current_count, target_count, completed \
             FROM challenges ORDER BY completed ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ChallengeProgress {
                name: row.get(0)?,
                description: row.get(1)?,
                current_count: row.get(2)?,
                target_count: row.get(3)?,
                completed: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(TrackerError::from)
    }

    /// Wipe all entries and zero streaks and challenge progress.
    pub fn reset_all(&self) -> Result<(), TrackerError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM actions", [])?;
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'actions'", [])?;
        tx.execute(
            "UPDATE challenges SET current_count = 0, completed = 0, completed_at = NULL",
            [],
        )?;
        tx.execute(
            "UPDATE streak_data SET current_streak = 0, last_action_date = NULL WHERE id = 1",
            [],
        )?;
        tx.commit()?;
        Ok(())
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<ActionEntry> {
    let category_text: String = row.get(1)?;
    let logged_at_text: String = row.get(3)?;

    let category = category_text.parse::<Category>().map_err(|_| {
        rusqlite::Error::InvalidColumnType(1, "category".to_string(), rusqlite::types::Type::Text)
    })?;
    let logged_at = DateTime::parse_from_rfc3339(&logged_at_text)
        .map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                3,
                "logged_at".to_string(),
                rusqlite::types::Type::Text,
            )
        })?
        .with_timezone(&Utc);

    Ok(ActionEntry {
        id: row.get(0)?,
        category,
        points: row.get(2)?,
        logged_at,
    })
}

fn advance_streak(tx: &Transaction<'_>, action_day: NaiveDate) -> Result<(), TrackerError> {
    let (current, longest, last_day): (u32, u32, Option<String>) = tx.query_row(
        "SELECT current_streak, longest_streak, last_action_date FROM streak_data WHERE id = 1",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    let last = last_day.as_deref().and_then(|d| d.parse::<NaiveDate>().ok());
    if let Some(next) = streaks::next_streak(last, current, action_day) {
        let longest = longest.max(next);
        tx.execute(
            "UPDATE streak_data SET current_streak = ?, longest_streak = ?, last_action_date = ? \
             WHERE id = 1",
            params![next, longest, action_day.to_string()],
        )?;
    }
    Ok(())
}

fn refresh_challenges(
    tx: &Transaction<'_>,
    category: Category,
    logged_at: DateTime<Utc>,
) -> Result<(), TrackerError> {
    let total: i64 = tx.query_row("SELECT COUNT(*) FROM actions", [], |row| row.get(0))?;
    update_counts(tx, ChallengeKind::TotalActions, total)?;

    if category == Category::Recycle {
        let count: i64 = tx.query_row(
            "SELECT COUNT(*) FROM actions WHERE category = ?",
            params![category.label()],
            |row| row.get(0),
        )?;
        update_counts(tx, ChallengeKind::Recycling, count)?;
    }

    if challenges::is_transport(category) {
        let count: i64 = tx.query_row(
            "SELECT COUNT(*) FROM actions WHERE category IN (?, ?, ?)",
            params![
                Category::Bike.label(),
                Category::Walk.label(),
                Category::PublicTransport.label()
            ],
            |row| row.get(0),
        )?;
        update_counts(tx, ChallengeKind::Transport, count)?;
    }

    // Latch completion; completed_at keeps the action's own timestamp.
    tx.execute(
        "UPDATE challenges SET completed = 1, completed_at = ? \
         WHERE current_count >= target_count AND completed = 0",
        params![logged_at.to_rfc3339()],
    )?;
    Ok(())
}

fn update_counts(
    tx: &Transaction<'_>,
    kind: ChallengeKind,
    count: i64,
) -> Result<(), TrackerError> {
    for seed in challenges::default_challenges().iter().filter(|s| s.kind == kind) {
        tx.execute(
            "UPDATE challenges SET current_count = ? WHERE name = ?",
            params![count, seed.name],
        )?;
    }
    Ok(())
}
