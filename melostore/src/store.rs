//! Table clé/valeur ordonnée sur SQLite
//!
//! Chaque collection de MeloMusic possède sa propre table, nommée par
//! l'appelant. Les clés sont des identifiants opaques uniques ; les
//! valeurs sont des enregistrements sérialisés en JSON.

use crate::Result;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Mutex;

/// Store clé/valeur persistant pour une collection
///
/// L'itération (`values`) suit l'ordre lexicographique des clés, pas
/// l'ordre d'insertion. Les opérations sont synchrones ; la connexion
/// est protégée par un `Mutex`, chaque opération est donc atomique vis
/// à vis des autres accès au même store.
#[derive(Debug)]
pub struct Store<V> {
    conn: Mutex<Connection>,
    table: String,
    _record: PhantomData<fn() -> V>,
}

impl<V> Store<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Ouvre (ou crée) le store sur le fichier et la table donnés
    ///
    /// Le répertoire parent est créé si nécessaire. Rouvrir le même
    /// chemin avec le même nom de table redonne accès aux
    /// enregistrements existants.
    ///
    /// # Arguments
    ///
    /// * `path` - Chemin vers le fichier de base de données SQLite
    /// * `table` - Nom de la table de la collection
    pub fn open(path: &Path, table: &str) -> Result<Self> {
        // Créer le répertoire parent si nécessaire
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        let create_table_sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            table
        );
        conn.execute(&create_table_sql, [])?;

        tracing::debug!(path=%path.display(), table=%table, "Opened store");

        Ok(Self {
            conn: Mutex::new(conn),
            table: table.to_string(),
            _record: PhantomData,
        })
    }

    /// Récupère l'enregistrement associé à une clé
    pub fn get(&self, key: &str) -> Result<Option<V>> {
        let conn = self.conn.lock().unwrap();
        Self::get_locked(&conn, &self.table, key)
    }

    /// Insère ou remplace un enregistrement
    ///
    /// Retourne la valeur précédemment associée à la clé, s'il y en
    /// avait une.
    pub fn insert(&self, key: &str, value: &V) -> Result<Option<V>> {
        let conn = self.conn.lock().unwrap();
        let previous = Self::get_locked(&conn, &self.table, key)?;

        let encoded = serde_json::to_string(value)?;
        let sql = format!(
            "INSERT INTO {} (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            self.table
        );
        conn.execute(&sql, params![key, encoded])?;

        Ok(previous)
    }

    /// Supprime un enregistrement
    ///
    /// Retourne la valeur supprimée si la clé était présente.
    pub fn remove(&self, key: &str) -> Result<Option<V>> {
        let conn = self.conn.lock().unwrap();
        let previous = Self::get_locked(&conn, &self.table, key)?;

        if previous.is_some() {
            let sql = format!("DELETE FROM {} WHERE key = ?1", self.table);
            conn.execute(&sql, [key])?;
        }

        Ok(previous)
    }

    /// Récupère tous les enregistrements, dans l'ordre des clés
    pub fn values(&self) -> Result<Vec<V>> {
        let conn = self.conn.lock().unwrap();
        let sql = format!("SELECT value FROM {} ORDER BY key ASC", self.table);

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut records = Vec::with_capacity(rows.len());
        for encoded in rows {
            records.push(serde_json::from_str(&encoded)?);
        }

        Ok(records)
    }

    /// Compte le nombre d'enregistrements de la collection
    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let sql = format!("SELECT COUNT(*) FROM {}", self.table);
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn get_locked(conn: &Connection, table: &str, key: &str) -> Result<Option<V>> {
        let sql = format!("SELECT value FROM {} WHERE key = ?1", table);

        let encoded: String = match conn.query_row(&sql, [key], |row| row.get(0)) {
            Ok(value) => value,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&encoded)?))
    }
}
