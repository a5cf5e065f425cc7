use thiserror::Error;

/// Errors raised by the individual storage backends.
///
/// These never escape the `SessionStore` facade: a primary-backend error
/// triggers the fallback path, a fallback-backend error degrades to
/// "no data" / "write dropped". The enum exists so the backends stay
/// honest about what went wrong while the facade decides policy.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A SQLite open, transaction, or query failed. An unavailable
    /// backend surfaces here too, as the failed open.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The stored blob could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Reading or writing the backing file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
