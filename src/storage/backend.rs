use crate::error::StorageError;
use crate::types::session::Session;

/// Capability interface over one storage facility.
///
/// Implementations stay honest and return errors; the `SessionStore`
/// facade owns the fallback policy. `insert` returns the id the backend
/// assigned to the record.
pub trait StorageBackend {
    fn insert(&self, session: &Session) -> Result<i64, StorageError>;
    fn delete(&self, id: i64) -> Result<(), StorageError>;
    fn load_all(&self) -> Result<Vec<Session>, StorageError>;
}
