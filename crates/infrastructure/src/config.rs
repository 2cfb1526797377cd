use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Which repository implementation backs the application
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local maps, nothing is persisted
    #[default]
    Memory,
    /// Hand-written SQL through a sqlx pool
    Sqlx,
    /// sea-orm entities over the same pool
    SeaOrm,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}
fn default_max_connections() -> u32 {
    1
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl PersistenceConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let s = Config::builder()
            .set_default("backend", "memory")?
            .set_default("database_url", default_database_url())?
            .set_default("max_connections", i64::from(default_max_connections()))?
            // Optional file, e.g. config/persistence.toml
            .add_source(File::with_name(&format!("{}/persistence", config_dir)).required(false))
            // Environment variables (e.g. SMARTHOME__BACKEND=sqlx)
            .add_source(Environment::with_prefix("SMARTHOME").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn is_persistent(&self) -> bool {
        self.backend != StorageBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = PersistenceConfig::load("/nonexistent/config/dir").unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.max_connections >= 1);
    }

    #[test]
    fn test_backend_names() {
        let config: PersistenceConfig = Config::builder()
            .set_override("backend", "sea_orm")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.backend, StorageBackend::SeaOrm);
        assert!(config.is_persistent());
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result = Config::builder()
            .set_override("backend", "postgres")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<PersistenceConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_memory() {
        let config = PersistenceConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert!(!config.is_persistent());
    }
}
