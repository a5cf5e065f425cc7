use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use crate::error::StorageError;
use crate::storage::backend::StorageBackend;
use crate::types::session::Session;

/// Secondary backend: the entire session list serialized as one JSON
/// blob under a well-known file name.
///
/// Ids are the current timestamp in milliseconds, which is only unique
/// across calls that do not land in the same millisecond. A corrupt or
/// unreadable blob reads as an empty list when preparing a write, so a
/// fallback save never fails on someone else's garbage.
pub struct BlobBackend {
    path: PathBuf,
}

impl BlobBackend {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored list, treating a missing or corrupt blob as empty.
    fn read_lenient(&self) -> Vec<Session> {
        match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    fn write_all(&self, sessions: &[Session]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(sessions)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl StorageBackend for BlobBackend {
    fn insert(&self, session: &Session) -> Result<i64, StorageError> {
        let id = Utc::now().timestamp_millis();
        let mut sessions = self.read_lenient();
        sessions.push(session.clone().with_id(id));
        self.write_all(&sessions)?;
        Ok(id)
    }

    fn delete(&self, id: i64) -> Result<(), StorageError> {
        let mut sessions = self.read_lenient();
        sessions.retain(|s| s.id != Some(id));
        self.write_all(&sessions)
    }

    fn load_all(&self) -> Result<Vec<Session>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}
