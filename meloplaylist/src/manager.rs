//! PlaylistManager : gestionnaire de la collection des playlists

use crate::playlist::{Playlist, PlaylistPayload};
use crate::{Error, Result};
use chrono::Utc;
use melocatalog::CatalogManager;
use melostore::Store;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Nom de la table SQLite de la collection
const PLAYLISTS_TABLE: &str = "playlists";

/// Gestionnaire central de playlists
///
/// Toute mutation exige que l'appelant soit l'admin de la playlist, et
/// maintient l'invariant d'agrégat (appartenance + durée totale). Les
/// durées sont résolues en lecture seule via le catalogue ; le manager ne
/// mute jamais un morceau.
///
/// Les mutations prennent le verrou en écriture pour toute la séquence
/// lecture-calcul-écriture : au plus une écriture du store par opération,
/// aucune en cas d'échec.
pub struct PlaylistManager {
    store: RwLock<Store<Playlist>>,
    catalog: Arc<CatalogManager>,
}

impl PlaylistManager {
    /// Ouvre le gestionnaire sur le fichier de base de données donné
    ///
    /// Le catalogue est passé explicitement : il n'y a pas de registre
    /// global, la dépendance est visible et testable.
    pub fn open(db_path: &Path, catalog: Arc<CatalogManager>) -> Result<Self> {
        let store = Store::open(db_path, PLAYLISTS_TABLE)?;
        Ok(Self {
            store: RwLock::new(store),
            catalog,
        })
    }

    /// Ouvre le gestionnaire avec la configuration de meloconfig
    #[cfg(feature = "meloconfig")]
    pub fn open_with_config(catalog: Arc<CatalogManager>) -> Result<Self> {
        use crate::config_ext::PlaylistConfigExt;

        let config = meloconfig::get_config();
        Self::open(&config.playlist_db_path(), catalog)
    }

    /// Crée une playlist (erreur si le nom existe déjà)
    pub async fn create_playlist(
        &self,
        payload: PlaylistPayload,
        caller: &str,
    ) -> Result<Playlist> {
        let store = self.store.write().await;

        let name = required("name", &payload.name)?;
        let description = required("description", &payload.description)?;

        // Unicité du nom parmi toutes les playlists
        if store.values()?.iter().any(|p| p.name == name) {
            return Err(Error::PlaylistAlreadyExists(name));
        }

        let playlist = Playlist {
            id: Uuid::new_v4().to_string(),
            admin: caller.to_string(),
            name,
            description,
            songs: Vec::new(),
            total_duration: 0,
            created_at: Utc::now(),
            updated_at: None,
        };

        store.insert(&playlist.id, &playlist)?;
        tracing::info!(
            playlist_id=%playlist.id,
            name=%playlist.name,
            admin=%playlist.admin,
            "Playlist created"
        );

        Ok(playlist)
    }

    /// Récupère une playlist par identifiant
    pub async fn get_playlist(&self, id: &str) -> Result<Playlist> {
        if id.trim().is_empty() {
            return Err(Error::EmptyField("id"));
        }

        let store = self.store.read().await;
        store
            .get(id)?
            .ok_or_else(|| Error::PlaylistNotFound(id.to_string()))
    }

    /// Récupère toutes les playlists, dans l'ordre du store
    pub async fn get_playlists(&self) -> Result<Vec<Playlist>> {
        let store = self.store.read().await;
        Ok(store.values()?)
    }

    /// Remplace le nom et la description d'une playlist
    ///
    /// Mutation tout-ou-rien : soit l'enregistrement complet est persisté,
    /// soit rien ne l'est.
    pub async fn update_playlist(
        &self,
        id: &str,
        payload: PlaylistPayload,
        caller: &str,
    ) -> Result<Playlist> {
        let store = self.store.write().await;

        let name = required("name", &payload.name)?;
        let description = required("description", &payload.description)?;

        let mut playlist = load_admin(&store, id, caller)?;
        playlist.name = name;
        playlist.description = description;
        playlist.updated_at = Some(Utc::now());

        store.insert(&playlist.id, &playlist)?;
        tracing::info!(playlist_id=%playlist.id, name=%playlist.name, "Playlist updated");

        Ok(playlist)
    }

    /// Ajoute des morceaux à une playlist
    ///
    /// Pour chaque candidat, dans l'ordre d'entrée : ignoré sans erreur
    /// s'il est inconnu du catalogue ou déjà membre ; sinon ajouté, et sa
    /// durée s'ajoute à `total_duration`. Si aucun candidat n'a été
    /// retenu, l'opération échoue et la playlist n'est pas écrite.
    pub async fn add_songs(
        &self,
        id: &str,
        song_ids: &[String],
        caller: &str,
    ) -> Result<Playlist> {
        if song_ids.is_empty() {
            return Err(Error::EmptyField("song_ids"));
        }

        let store = self.store.write().await;
        let mut playlist = load_admin(&store, id, caller)?;

        let mut added = 0usize;
        for song_id in song_ids {
            // Déjà membre : ignoré (déduplique aussi au sein de l'appel)
            if playlist.songs.iter().any(|s| s == song_id) {
                tracing::debug!(
                    playlist_id=%playlist.id,
                    song_id=%song_id,
                    "Song already in playlist, skipped"
                );
                continue;
            }

            // Inconnu du catalogue : ignoré
            let Some(song) = self.catalog.find_song(song_id).await? else {
                tracing::debug!(
                    playlist_id=%playlist.id,
                    song_id=%song_id,
                    "Song not in catalog, skipped"
                );
                continue;
            };

            playlist.songs.push(song_id.clone());
            playlist.total_duration += song.duration;
            added += 1;
        }

        if added == 0 {
            return Err(Error::NoSongsAdded(playlist.id));
        }

        playlist.updated_at = Some(Utc::now());
        store.insert(&playlist.id, &playlist)?;
        tracing::info!(
            playlist_id=%playlist.id,
            added,
            total_duration = playlist.total_duration,
            "Songs added to playlist"
        );

        Ok(playlist)
    }

    /// Retire un morceau d'une playlist
    ///
    /// Si le morceau n'est pas membre, l'opération est un no-op qui rend
    /// l'enregistrement inchangé. Sinon il est retiré ; la durée est
    /// soustraite quand le morceau existe encore au catalogue et que la
    /// soustraction ne passe pas sous zéro, autrement `total_duration`
    /// est remis à zéro (plancher, pas un recalcul).
    pub async fn delete_song(&self, id: &str, song_id: &str, caller: &str) -> Result<Playlist> {
        if id.trim().is_empty() {
            return Err(Error::EmptyField("id"));
        }
        if song_id.trim().is_empty() {
            return Err(Error::EmptyField("song_id"));
        }

        let store = self.store.write().await;
        let mut playlist = load_admin(&store, id, caller)?;

        let Some(pos) = playlist.songs.iter().position(|s| s == song_id) else {
            return Ok(playlist);
        };

        playlist.songs.remove(pos);

        match self.catalog.find_song(song_id).await? {
            Some(song) if playlist.total_duration - song.duration >= 0 => {
                playlist.total_duration -= song.duration;
            }
            _ => {
                playlist.total_duration = 0;
            }
        }

        playlist.updated_at = Some(Utc::now());
        store.insert(&playlist.id, &playlist)?;
        tracing::info!(
            playlist_id=%playlist.id,
            song_id=%song_id,
            total_duration = playlist.total_duration,
            "Song removed from playlist"
        );

        Ok(playlist)
    }

    /// Supprime une playlist définitivement
    ///
    /// Retourne l'enregistrement supprimé en confirmation. État terminal :
    /// il n'y a pas de restauration.
    pub async fn delete_playlist(&self, id: &str, caller: &str) -> Result<Playlist> {
        let store = self.store.write().await;
        let playlist = load_admin(&store, id, caller)?;

        store.remove(&playlist.id)?;
        tracing::info!(playlist_id=%playlist.id, name=%playlist.name, "Playlist deleted");

        Ok(playlist)
    }
}

/// Charge une playlist et vérifie que l'appelant en est l'admin
fn load_admin(store: &Store<Playlist>, id: &str, caller: &str) -> Result<Playlist> {
    if id.trim().is_empty() {
        return Err(Error::EmptyField("id"));
    }

    let playlist = store
        .get(id)?
        .ok_or_else(|| Error::PlaylistNotFound(id.to_string()))?;

    if playlist.admin != caller {
        return Err(Error::NotAdmin(playlist.id));
    }

    Ok(playlist)
}

/// Valide qu'un champ obligatoire est non vide après trim
fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
