//! Error types for catalog construction.

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building or loading a god catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no characters.
    #[error("catalog is empty")]
    Empty,

    /// Two characters share a name (compared case-insensitively).
    #[error("duplicate god in catalog: \"{0}\"")]
    DuplicateName(String),

    /// A character has a blank name.
    #[error("catalog entry {0} has no name")]
    BlankName(usize),

    /// The catalog source could not be parsed.
    #[error("invalid catalog: {0}")]
    Parse(String),
}
