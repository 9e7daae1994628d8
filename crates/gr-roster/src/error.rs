//! Error types for roster edits and storage.

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Result type for storage backends.
pub type StorageResult<T> = Result<T, StorageError>;

/// User-facing errors from roster edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The name is blank after trimming.
    #[error("please enter a player name")]
    EmptyName,

    /// Another player already has this name (case-insensitive).
    #[error("player \"{0}\" already exists")]
    DuplicateName(String),

    /// No player matches the given id or name.
    #[error("player not found: {0}")]
    NotFound(String),

    /// An id prefix matches more than one player.
    #[error("\"{0}\" matches more than one player")]
    Ambiguous(String),
}

/// Failures reading or writing the backing key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store's own container format is unreadable.
    #[error("storage format error: {0}")]
    Format(#[from] serde_json::Error),
}
