//! Playlist : enregistrement d'une playlist et payload de création

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Une playlist
///
/// Cycle de vie : créée une fois, mise à jour en place (chaque mutation
/// pose `updated_at`), supprimée définitivement. Seul `admin` (l'identité
/// du créateur) peut la modifier ou la supprimer.
///
/// Invariant d'agrégat : `total_duration` vaut la somme des durées des
/// morceaux de `songs` encore présents au catalogue au moment du calcul.
/// `songs` ne contient jamais de doublon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Identifiant opaque unique, généré à la création
    pub id: String,

    /// Identité du créateur, seule autorisée à muter la playlist
    pub admin: String,

    /// Nom, unique parmi toutes les playlists
    pub name: String,
    pub description: String,

    /// Identifiants des morceaux, dans l'ordre d'ajout
    pub songs: Vec<String>,

    /// Somme des durées des morceaux référencés, en secondes
    pub total_duration: i64,

    /// Date de création, posée une seule fois
    pub created_at: DateTime<Utc>,

    /// Absent jusqu'à la première mutation, puis posé à chaque mutation
    pub updated_at: Option<DateTime<Utc>>,
}

/// Champs fournis par l'appelant pour créer ou mettre à jour une playlist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistPayload {
    pub name: String,
    pub description: String,
}
