//! Extension de meloconfig pour le catalogue

use std::path::PathBuf;

/// Trait d'extension pour meloconfig::Config
pub trait CatalogConfigExt {
    /// Retourne le chemin de la base de données du catalogue
    fn catalog_db_path(&self) -> PathBuf;
}

impl CatalogConfigExt for meloconfig::Config {
    fn catalog_db_path(&self) -> PathBuf {
        // Utilise get_managed_dir pour créer le répertoire catalog s'il n'existe pas
        let catalog_dir = self
            .get_managed_dir(&["catalog", "directory"], "catalog")
            .expect("Failed to get or create catalog directory");

        PathBuf::from(catalog_dir).join("catalog.db")
    }
}
