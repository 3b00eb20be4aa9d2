//! Types d'erreurs pour melocatalog

/// Erreurs du catalogue de morceaux
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Field cannot be empty: {0}")]
    EmptyField(&'static str),

    #[error("Song already exists: {title} ({file_name})")]
    SongAlreadyExists { file_name: String, title: String },

    #[error("Song not found: {0}")]
    SongNotFound(String),

    #[error(transparent)]
    Store(#[from] melostore::Error),
}

/// Type Result spécialisé pour melocatalog
pub type Result<T> = std::result::Result<T, Error>;
