//! # meloplaylist - Collection des playlists de MeloMusic
//!
//! Cette crate possède la collection des playlists et la logique qui
//! maintient leur état agrégé cohérent à chaque mutation :
//! - Unicité du nom à la création
//! - Mutations réservées à l'admin (l'identité du créateur)
//! - Appartenance sans doublon et durée totale maintenue à l'ajout et au
//!   retrait de morceaux
//!
//! # Architecture
//!
//! - **PlaylistManager** : gestionnaire de la collection, une table du
//!   store par collection
//! - **Playlist** / **PlaylistPayload** : enregistrement persisté et
//!   champs fournis par l'appelant
//! - Le catalogue (`melocatalog`) est une dépendance explicite, lue
//!   uniquement pour résoudre les durées des morceaux
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use melocatalog::CatalogManager;
//! use meloplaylist::{PlaylistManager, PlaylistPayload};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> meloplaylist::Result<()> {
//! let catalog = Arc::new(CatalogManager::open_with_config()?);
//! let manager = PlaylistManager::open_with_config(catalog)?;
//!
//! // Créer une playlist (l'appelant devient admin)
//! let playlist = manager
//!     .create_playlist(
//!         PlaylistPayload {
//!             name: "Morning Mix".into(),
//!             description: "Wake-up classics".into(),
//!         },
//!         "alice",
//!     )
//!     .await?;
//!
//! // Ajouter des morceaux par identifiant
//! let playlist = manager
//!     .add_songs(&playlist.id, &["song-id".into()], "alice")
//!     .await?;
//!
//! println!("Total duration: {}s", playlist.total_duration);
//! # Ok(())
//! # }
//! ```

mod error;
mod manager;
mod playlist;

#[cfg(feature = "meloconfig")]
mod config_ext;

// Réexports publics
pub use error::{Error, Result};
pub use manager::PlaylistManager;
pub use playlist::{Playlist, PlaylistPayload};

#[cfg(feature = "meloconfig")]
pub use config_ext::PlaylistConfigExt;
