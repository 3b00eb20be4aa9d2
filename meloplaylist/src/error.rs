//! Types d'erreurs pour meloplaylist

/// Erreurs de gestion de playlist
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Field cannot be empty: {0}")]
    EmptyField(&'static str),

    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    #[error("Playlist already exists: {0}")]
    PlaylistAlreadyExists(String),

    #[error("Caller is not the playlist admin: {0}")]
    NotAdmin(String),

    #[error("No songs were added to playlist: {0}")]
    NoSongsAdded(String),

    #[error(transparent)]
    Store(#[from] melostore::Error),

    #[error(transparent)]
    Catalog(#[from] melocatalog::Error),
}

/// Type Result spécialisé pour meloplaylist
pub type Result<T> = std::result::Result<T, Error>;
