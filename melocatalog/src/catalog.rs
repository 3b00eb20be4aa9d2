//! CatalogManager : gestionnaire de la collection des morceaux

use crate::song::{Song, SongPayload};
use crate::{Error, Result};
use chrono::Utc;
use melostore::Store;
use std::path::Path;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Nom de la table SQLite de la collection
const SONGS_TABLE: &str = "songs";

/// Gestionnaire du catalogue de morceaux
///
/// Les mutations prennent le verrou en écriture pour toute la séquence
/// lecture-calcul-écriture ; les lectures partagent le verrou en lecture.
pub struct CatalogManager {
    store: RwLock<Store<Song>>,
}

impl CatalogManager {
    /// Ouvre le catalogue sur le fichier de base de données donné
    pub fn open(db_path: &Path) -> Result<Self> {
        let store = Store::open(db_path, SONGS_TABLE)?;
        Ok(Self {
            store: RwLock::new(store),
        })
    }

    /// Ouvre le catalogue avec la configuration de meloconfig
    #[cfg(feature = "meloconfig")]
    pub fn open_with_config() -> Result<Self> {
        use crate::config_ext::CatalogConfigExt;

        let config = meloconfig::get_config();
        Self::open(&config.catalog_db_path())
    }

    /// Ajoute un morceau au catalogue
    ///
    /// Valide les champs obligatoires dans un ordre fixe (file_name,
    /// mime_type, title, singers) puis l'unicité du couple
    /// (file_name, title). Les champs textuels sont stockés après trim.
    pub async fn upload_song(&self, payload: SongPayload) -> Result<Song> {
        let store = self.store.write().await;

        let file_name = required("file_name", &payload.file_name)?;
        let mime_type = required("mime_type", &payload.mime_type)?;
        let title = required("title", &payload.title)?;
        if payload.singers.is_empty() {
            return Err(Error::EmptyField("singers"));
        }

        // Unicité : aucun morceau ne partage à la fois file_name et title
        let duplicate = store
            .values()?
            .iter()
            .any(|s| s.file_name == file_name && s.title == title);
        if duplicate {
            return Err(Error::SongAlreadyExists { file_name, title });
        }

        let song = Song {
            id: Uuid::new_v4().to_string(),
            title,
            file_name,
            mime_type,
            genre: payload.genre.trim().to_string(),
            release_date: payload.release_date.trim().to_string(),
            singers: payload.singers,
            duration: payload.duration,
            uploaded_at: Utc::now(),
        };

        store.insert(&song.id, &song)?;
        tracing::info!(song_id=%song.id, title=%song.title, "Song uploaded to catalog");

        Ok(song)
    }

    /// Récupère un morceau par identifiant
    pub async fn get_song(&self, id: &str) -> Result<Song> {
        if id.trim().is_empty() {
            return Err(Error::EmptyField("id"));
        }

        let store = self.store.read().await;
        store
            .get(id)?
            .ok_or_else(|| Error::SongNotFound(id.to_string()))
    }

    /// Récupère tous les morceaux, dans l'ordre du store
    pub async fn get_songs(&self) -> Result<Vec<Song>> {
        let store = self.store.read().await;
        Ok(store.values()?)
    }

    /// Recherche un morceau sans échouer s'il est absent
    ///
    /// Utilisé par les playlists pour résoudre les durées : un morceau
    /// référencé mais disparu ne doit pas faire échouer l'opération.
    pub async fn find_song(&self, id: &str) -> Result<Option<Song>> {
        let store = self.store.read().await;
        Ok(store.get(id)?)
    }

    /// Nombre de morceaux du catalogue
    pub async fn count(&self) -> Result<usize> {
        let store = self.store.read().await;
        Ok(store.count()?)
    }
}

/// Valide qu'un champ obligatoire est non vide après trim
fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
