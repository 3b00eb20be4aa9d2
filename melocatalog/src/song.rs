//! Song : enregistrement d'un morceau du catalogue

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Un morceau du catalogue
///
/// `id` et `uploaded_at` sont gérés par le serveur et immuables après
/// création. Aucun couple (file_name, title) n'existe en double dans la
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Identifiant opaque unique, généré à la création
    pub id: String,

    pub title: String,
    pub file_name: String,
    pub mime_type: String,
    pub genre: String,
    pub release_date: String,

    /// Interprètes, au moins un requis
    pub singers: Vec<String>,

    /// Durée en secondes, fournie par l'appelant
    pub duration: i64,

    /// Date d'upload, posée une seule fois
    pub uploaded_at: DateTime<Utc>,
}

/// Champs fournis par l'appelant pour créer un morceau
///
/// Les champs gérés par le serveur (id, uploaded_at) n'y figurent pas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongPayload {
    pub title: String,
    pub file_name: String,
    pub mime_type: String,
    pub genre: String,
    pub release_date: String,
    pub singers: Vec<String>,
    pub duration: i64,
}
