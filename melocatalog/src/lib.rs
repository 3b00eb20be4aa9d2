//! # melocatalog - Collection des morceaux de MeloMusic
//!
//! Cette crate possède la collection des morceaux (`Song`) :
//! - Validation des champs à l'upload (champs obligatoires, interprètes)
//! - Unicité du couple (file_name, title)
//! - Lectures par identifiant ou en totalité, dans l'ordre du store
//!
//! Le catalogue ne supprime jamais de morceau : les playlists référencent
//! les morceaux par identifiant et résolvent les durées à la demande.
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use melocatalog::{CatalogManager, SongPayload};
//!
//! # #[tokio::main]
//! # async fn main() -> melocatalog::Result<()> {
//! let catalog = CatalogManager::open_with_config()?;
//!
//! let song = catalog
//!     .upload_song(SongPayload {
//!         title: "Bohemian Rhapsody".into(),
//!         file_name: "queen/bohemian.flac".into(),
//!         mime_type: "audio/flac".into(),
//!         genre: "Rock".into(),
//!         release_date: "1975-10-31".into(),
//!         singers: vec!["Queen".into()],
//!         duration: 354,
//!     })
//!     .await?;
//!
//! println!("Uploaded: {}", song.id);
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod song;

#[cfg(feature = "meloconfig")]
mod config_ext;

// Réexports publics
pub use catalog::CatalogManager;
pub use error::{Error, Result};
pub use song::{Song, SongPayload};

#[cfg(feature = "meloconfig")]
pub use config_ext::CatalogConfigExt;
