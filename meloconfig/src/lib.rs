//! # MeloMusic Configuration Module
//!
//! This module provides configuration management for MeloMusic, including:
//! - Loading configuration from YAML files
//! - Merging with embedded default configuration
//! - Type-safe access to configuration values
//! - Thread-safe singleton access pattern
//!
//! ## Usage
//!
//! ```no_run
//! use meloconfig::get_config;
//!
//! // Get the global configuration
//! let config = get_config();
//!
//! // Access configuration values
//! let catalog_dir = config.get_managed_dir(&["catalog", "directory"], "catalog")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{anyhow, Result};
use dirs::home_dir;
use lazy_static::lazy_static;
use serde_yaml::{Mapping, Value};
use std::{
    env, fs,
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::info;

// Configuration par défaut intégrée
const DEFAULT_CONFIG: &str = include_str!("melomusic.yaml");

lazy_static! {
    static ref CONFIG: Arc<Config> =
        Arc::new(Config::load_config("").expect("Failed to load MeloMusic configuration"));
}

const ENV_CONFIG_DIR: &str = "MELOMUSIC_CONFIG";

/// Configuration manager for MeloMusic
///
/// This structure manages the application configuration, including:
/// - Loading configuration from YAML files
/// - Merging with default configuration
/// - Providing access to configured, managed directories
#[derive(Debug)]
pub struct Config {
    config_dir: String,
    path: String,
    data: Mutex<Value>,
}

impl Config {
    /// Finds a config directory by trying different locations in order
    fn find_config_dir(directory: &str) -> String {
        // 1. Try provided directory
        if !directory.is_empty() {
            return directory.to_string();
        }

        // 2. Try environment variable
        if let Ok(env_path) = env::var(ENV_CONFIG_DIR) {
            info!(env_var=ENV_CONFIG_DIR, path=%env_path, "Trying to load config from env");
            return env_path;
        }

        // 3. Try current directory
        if Path::new(".melomusic").exists() {
            return ".melomusic".to_string();
        }

        // 4. Try home directory
        if let Some(home) = home_dir() {
            let home_config = home.join(".melomusic");
            if home_config.exists() {
                return home_config.to_string_lossy().to_string();
            }
        }

        // Default fallback
        ".melomusic".to_string()
    }

    /// Validates and prepares a config directory
    fn validate_config_dir(path: &Path) -> Result<()> {
        // Create if doesn't exist
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        // Verify it's a directory
        if !path.is_dir() {
            return Err(anyhow!("Le chemin spécifié n'est pas un répertoire"));
        }

        // Test write permission
        let test_file = path.join(".write_test");
        fs::write(&test_file, b"test")?;
        fs::remove_file(&test_file)?;

        Ok(())
    }

    /// Determines and validates the configuration directory
    ///
    /// The directory is searched in the following order:
    /// 1. The provided `directory` parameter if not empty
    /// 2. The `MELOMUSIC_CONFIG` environment variable
    /// 3. `.melomusic` in the current directory
    /// 4. `.melomusic` in the user's home directory
    ///
    /// The directory is created if it doesn't exist, and validated for
    /// read/write permissions.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created or validated
    pub fn config_dir(directory: &str) -> String {
        let dir_path = Self::find_config_dir(directory);
        let path = Path::new(&dir_path);

        Self::validate_config_dir(path)
            .expect("Impossible de valider le répertoire de configuration");

        dir_path
    }

    /// Loads the configuration from the specified directory
    ///
    /// This method:
    /// 1. Determines the configuration directory
    /// 2. Loads the default embedded configuration
    /// 3. Merges it with the external config.yaml file if present
    /// 4. Saves the merged configuration
    ///
    /// # Arguments
    ///
    /// * `directory` - The directory containing the config.yaml file, or
    ///   empty to use defaults
    pub fn load_config(directory: &str) -> Result<Self> {
        // Obtenir le répertoire de configuration
        let config_dir = Self::config_dir(directory);
        info!(config_dir=%config_dir, "Using config directory");

        // Construire le chemin du fichier config.yaml
        let config_file_path = Path::new(&config_dir).join("config.yaml");
        let path = config_file_path.to_string_lossy().to_string();

        // Charger la configuration par défaut
        let mut default_value: Value = serde_yaml::from_str(DEFAULT_CONFIG)?;

        // Essayer de charger le fichier de configuration
        let yaml_data = if let Ok(data) = fs::read(&path) {
            info!(config_file=%path, "Loaded config file");
            data
        } else {
            info!(config_file=%path, "Config file not found, using default embedded config");
            DEFAULT_CONFIG.as_bytes().to_vec()
        };

        // Merger avec la config par défaut
        let external_value: Value = serde_yaml::from_slice(&yaml_data)?;
        merge_yaml(&mut default_value, &external_value);
        let config_value = Self::lower_keys_value(default_value);

        // Créer la configuration
        let config = Config {
            config_dir,
            path,
            data: Mutex::new(config_value),
        };

        // Sauvegarder la configuration
        config.save()?;
        Ok(config)
    }

    /// Saves the current configuration to the config.yaml file
    pub fn save(&self) -> Result<()> {
        let data = self.data.lock().unwrap();
        let yaml = serde_yaml::to_string(&*data)?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Sets a configuration value at the specified path and saves it
    ///
    /// # Arguments
    ///
    /// * `path` - Array of keys representing the path (e.g.,
    ///   `&["playlists", "directory"]`)
    /// * `value` - The YAML value to set
    pub fn set_value(&self, path: &[&str], value: Value) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        Self::set_value_internal(&mut data, path, value)?;
        drop(data);
        self.save()?;
        Ok(())
    }

    fn set_value_internal(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
        if path.is_empty() {
            *data = value;
            return Ok(());
        }
        if let Value::Mapping(map) = data {
            let key = path[0].to_lowercase();
            let key_value = Value::String(key);
            if path.len() == 1 {
                map.insert(key_value, value);
            } else {
                let entry = map
                    .entry(key_value)
                    .or_insert(Value::Mapping(Mapping::new()));
                Self::set_value_internal(entry, &path[1..], value)?;
            }
            Ok(())
        } else {
            Err(anyhow!("Current node is not a map"))
        }
    }

    /// Gets a configuration value at the specified path
    ///
    /// # Arguments
    ///
    /// * `path` - Array of keys representing the path (e.g.,
    ///   `&["playlists", "directory"]`)
    pub fn get_value(&self, path: &[&str]) -> Result<Value> {
        let data = self.data.lock().unwrap();
        Self::get_value_internal(&data, path)
    }

    fn get_value_internal(data: &Value, path: &[&str]) -> Result<Value> {
        let mut current = data;
        for (i, key) in path.iter().enumerate() {
            if let Value::Mapping(map) = current {
                let key = key.to_lowercase();

                if let Some(next) = map.get(&Value::String(key)) {
                    current = next;
                } else {
                    return Err(anyhow!("Path {} does not exist", path[..=i].join(".")));
                }
            } else {
                return Err(anyhow!("Path {} is not a Config", path[..i].join(".")));
            }
        }
        Ok(current.clone())
    }

    fn lower_keys_value(value: Value) -> Value {
        match value {
            Value::Mapping(map) => {
                let mut new_map = Mapping::new();
                for (k, v) in map {
                    if let Value::String(s) = k {
                        let new_key = Value::String(s.to_lowercase());
                        let new_val = Self::lower_keys_value(v);
                        new_map.insert(new_key, new_val);
                    } else {
                        new_map.insert(k, Self::lower_keys_value(v));
                    }
                }
                Value::Mapping(new_map)
            }
            Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Self::lower_keys_value).collect())
            }
            _ => value,
        }
    }

    /// Résout un chemin relatif ou absolu et crée le répertoire si nécessaire
    fn resolve_and_create_dir(&self, dir_path: &str) -> Result<String> {
        let path = Path::new(dir_path);

        // Déterminer si le chemin est relatif ou absolu
        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            // Chemin relatif : le résoudre par rapport à config_dir
            Path::new(&self.config_dir).join(path)
        };

        // Créer le répertoire s'il n'existe pas
        if !absolute_path.exists() {
            fs::create_dir_all(&absolute_path)?;
            info!(directory=%absolute_path.display(), "Created data directory");
        }

        // Retourner le chemin absolu
        Ok(absolute_path.to_string_lossy().to_string())
    }

    /// Récupère un répertoire géré par la configuration
    ///
    /// Cette méthode générique permet de récupérer n'importe quel répertoire
    /// configuré dans le YAML. Le répertoire peut être absolu ou relatif au
    /// répertoire de configuration. Il sera créé s'il n'existe pas.
    ///
    /// # Arguments
    ///
    /// * `path` - Chemin dans l'arbre de configuration (ex: `&["catalog", "directory"]`)
    /// * `default` - Nom de répertoire par défaut si non configuré
    ///
    /// # Returns
    ///
    /// Le chemin absolu du répertoire, créé s'il n'existait pas
    pub fn get_managed_dir(&self, path: &[&str], default: &str) -> Result<String> {
        let dir_path = match self.get_value(path) {
            Ok(Value::String(s)) => s,
            _ => {
                self.set_managed_dir(path, default.to_string())?;
                default.to_string()
            }
        };
        self.resolve_and_create_dir(&dir_path)
    }

    /// Définit un répertoire géré par la configuration
    ///
    /// # Arguments
    ///
    /// * `path` - Chemin dans l'arbre de configuration
    /// * `directory` - Chemin du répertoire (absolu ou relatif au config_dir)
    pub fn set_managed_dir(&self, path: &[&str], directory: String) -> Result<()> {
        self.set_value(path, Value::String(directory))
    }
}

/// Merge récursif de deux arbres YAML (les valeurs de `other` priment)
fn merge_yaml(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Mapping(base_map), Value::Mapping(other_map)) => {
            for (key, other_value) in other_map {
                match base_map.get_mut(key) {
                    Some(base_value) => merge_yaml(base_value, other_value),
                    None => {
                        base_map.insert(key.clone(), other_value.clone());
                    }
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}

/// Returns the global configuration singleton
pub fn get_config() -> Arc<Config> {
    CONFIG.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_yaml_overrides_scalars() {
        let mut base: Value = serde_yaml::from_str("a: 1\nb: { c: 2 }").unwrap();
        let other: Value = serde_yaml::from_str("b: { c: 3, d: 4 }").unwrap();

        merge_yaml(&mut base, &other);

        let get = |path: &[&str]| {
            Config::get_value_internal(&base, path)
                .unwrap()
                .as_i64()
                .unwrap()
        };
        assert_eq!(get(&["a"]), 1);
        assert_eq!(get(&["b", "c"]), 3);
        assert_eq!(get(&["b", "d"]), 4);
    }

    #[test]
    fn test_load_config_in_temp_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_string_lossy().to_string();

        let config = Config::load_config(&dir).unwrap();

        // Le fichier config.yaml est créé au chargement
        assert!(temp_dir.path().join("config.yaml").exists());

        // Les valeurs par défaut sont présentes
        let value = config.get_value(&["catalog", "directory"]).unwrap();
        assert_eq!(value, Value::String("catalog".to_string()));
    }

    #[test]
    fn test_managed_dir_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_string_lossy().to_string();

        let config = Config::load_config(&dir).unwrap();
        let managed = config
            .get_managed_dir(&["catalog", "directory"], "catalog")
            .unwrap();

        assert!(Path::new(&managed).is_dir());
    }
}
