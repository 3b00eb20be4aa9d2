//! Types d'erreurs pour melostore

/// Erreurs du stockage clé/valeur
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to prepare store directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type Result spécialisé pour melostore
pub type Result<T> = std::result::Result<T, Error>;
