use std::fs;
use std::path::PathBuf;

use rusqlite::{Connection, params};

use crate::error::StorageError;
use crate::storage::backend::StorageBackend;
use crate::types::session::Session;

/// Primary backend: one row per session in a SQLite table, with
/// store-assigned ascending integer ids.
///
/// Every operation opens the database fresh, so a transient failure in
/// one call never poisons the next: the facade re-probes this backend
/// on each operation. Schema creation is lazy and idempotent.
pub struct SqliteBackend {
    db_path: PathBuf,
}

impl SqliteBackend {
    pub fn new<P: Into<PathBuf>>(db_path: P) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn open(&self) -> Result<Connection, StorageError> {
        if let Some(parent) = self.db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS practice_sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp INTEGER NOT NULL,
                video_id TEXT NOT NULL,
                video_title TEXT NOT NULL,
                loop_start REAL NOT NULL,
                loop_end REAL NOT NULL,
                playback_rate REAL NOT NULL,
                note TEXT NOT NULL
            )",
            [],
        )?;
        Ok(conn)
    }
}

impl StorageBackend for SqliteBackend {
    fn insert(&self, session: &Session) -> Result<i64, StorageError> {
        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO practice_sessions
                (timestamp, video_id, video_title, loop_start, loop_end, playback_rate, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                session.timestamp,
                session.video_id,
                session.video_title,
                session.loop_start,
                session.loop_end,
                session.playback_rate,
                session.note,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    fn delete(&self, id: i64) -> Result<(), StorageError> {
        let conn = self.open()?;
        // Deleting an absent id matches zero rows, which is fine.
        conn.execute(
            "DELETE FROM practice_sessions WHERE id = ?1",
            params![id],
        )?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Session>, StorageError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, timestamp, video_id, video_title, loop_start, loop_end, playback_rate, note
             FROM practice_sessions
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Session {
                id: Some(row.get(0)?),
                timestamp: row.get(1)?,
                video_id: row.get(2)?,
                video_title: row.get(3)?,
                loop_start: row.get(4)?,
                loop_end: row.get(5)?,
                playback_rate: row.get(6)?,
                note: row.get(7)?,
            })
        })?;

        let mut sessions = Vec::new();
        for session in rows {
            sessions.push(session?);
        }
        Ok(sessions)
    }
}
