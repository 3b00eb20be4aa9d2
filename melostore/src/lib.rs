//! # melostore - Stockage clé/valeur ordonné pour MeloMusic
//!
//! Cette crate fournit le substrat de persistance commun aux collections
//! de MeloMusic : une table SQLite par collection, des clés textuelles
//! uniques et des enregistrements sérialisés en JSON.
//!
//! ## Vue d'ensemble
//!
//! `melostore` fournit les garanties de base attendues par les managers :
//! - Persistance sur disque (le store se rouvre sur le même chemin)
//! - Itération des valeurs dans l'ordre lexicographique des clés
//! - Insertion/suppression retournant la valeur précédente
//!
//! ## Architecture
//!
//! ```text
//! melostore (générique)
//!     ├── store.rs - Table clé/valeur ordonnée sur SQLite
//!     └── error.rs - Erreurs de stockage et de sérialisation
//!
//! melocatalog (collection des morceaux)
//!     └── Utilise Store<Song> (table "songs")
//!
//! meloplaylist (collection des playlists)
//!     └── Utilise Store<Playlist> (table "playlists")
//! ```
//!
//! ## Utilisation
//!
//! ```rust,no_run
//! use melostore::Store;
//! use serde::{Deserialize, Serialize};
//! use std::path::Path;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Entry {
//!     label: String,
//! }
//!
//! # fn main() -> melostore::Result<()> {
//! let store: Store<Entry> = Store::open(Path::new("data/entries.db"), "entries")?;
//! store.insert("key-1", &Entry { label: "hello".into() })?;
//!
//! for entry in store.values()? {
//!     println!("{}", entry.label);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

// Réexports publics
pub use error::{Error, Result};
pub use store::Store;
