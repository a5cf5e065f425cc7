//! Durable persistence for practice sessions.
//!
//! A `SessionStore` fronts two backends: a transactional SQLite store
//! (primary) and a whole-list JSON blob (secondary). Every operation
//! probes the primary fresh and falls back to the secondary within that
//! single call, so a transient primary failure never poisons later
//! calls. The public surface is infallible by contract: failures
//! degrade to a fallback write, a dropped write, or an empty list.

pub mod backend;
pub mod blob;
pub mod sqlite;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::storage::backend::StorageBackend;
use crate::storage::blob::BlobBackend;
use crate::storage::sqlite::SqliteBackend;
use crate::types::session::Session;

const DB_FILE: &str = "practice.db";
const BLOB_FILE: &str = "practice-sessions.json";

/// Facade over the primary and fallback backends.
pub struct SessionStore {
    primary: SqliteBackend,
    fallback: BlobBackend,
}

impl SessionStore {
    /// Store rooted at the platform data directory, or the working
    /// directory when none can be resolved.
    pub fn new() -> Self {
        let dir = match ProjectDirs::from("dev", "woodshed", "woodshed") {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => {
                warn!("no platform data directory, storing sessions in the working directory");
                PathBuf::from(".")
            }
        };
        Self::open(dir)
    }

    /// Store rooted at an explicit directory. Both backend files live
    /// under it; nothing is touched until the first operation.
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            primary: SqliteBackend::new(dir.join(DB_FILE)),
            fallback: BlobBackend::new(dir.join(BLOB_FILE)),
        }
    }

    /// Persist an unsaved session, returning it with the id the backend
    /// assigned. Falls back to the blob store when the primary fails;
    /// when both fail the write is dropped and the session is returned
    /// with `id` still unset.
    pub fn save_session(&self, session: Session) -> Session {
        match self.primary.insert(&session) {
            Ok(id) => {
                debug!(id, "session saved");
                session.with_id(id)
            }
            Err(primary_err) => {
                warn!(error = %primary_err, "primary backend failed, saving to fallback");
                match self.fallback.insert(&session) {
                    Ok(id) => session.with_id(id),
                    Err(fallback_err) => {
                        warn!(error = %fallback_err, "both backends failed, session not saved");
                        session
                    }
                }
            }
        }
    }

    /// Delete by id. A missing id is a no-op in whichever backend ends
    /// up handling the call, and failures are never surfaced.
    pub fn delete_session(&self, id: i64) {
        if let Err(primary_err) = self.primary.delete(id) {
            warn!(error = %primary_err, "primary backend failed, deleting from fallback");
            if let Err(fallback_err) = self.fallback.delete(id) {
                warn!(error = %fallback_err, "both backends failed, delete dropped");
            }
        }
    }

    /// All stored sessions in append order (recency = tail). Reads the
    /// primary first; on failure reads the blob; corrupt or unreadable
    /// blob data yields an empty list.
    pub fn all_sessions(&self) -> Vec<Session> {
        match self.primary.load_all() {
            Ok(sessions) => sessions,
            Err(primary_err) => {
                warn!(error = %primary_err, "primary backend failed, reading fallback");
                self.fallback.load_all().unwrap_or_else(|fallback_err| {
                    warn!(error = %fallback_err, "fallback unreadable, treating as empty");
                    Vec::new()
                })
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
