//! Storage backend selection

use serde::Deserialize;

use super::database::DatabaseConfig;
use super::error::ValidationError;
use super::server::Environment;

/// Which adapter backs the repository ports
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via sqlx, configured by [`StorageConfig::postgres`]
    #[default]
    Postgres,
    /// Process-local store; contents are lost on restart
    Memory,
}

/// Read from `ROOM_BOOKING__STORAGE__*`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Only consulted when `backend = postgres`
    #[serde(default)]
    pub postgres: DatabaseConfig,
}

impl StorageConfig {
    /// PostgreSQL settings when that backend is selected.
    pub fn postgres(&self) -> Option<&DatabaseConfig> {
        match self.backend {
            StorageBackend::Postgres => Some(&self.postgres),
            StorageBackend::Memory => None,
        }
    }

    /// The in-memory store is refused in production; PostgreSQL settings
    /// are checked only when they will be used.
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        match self.postgres() {
            Some(database) => database.validate(),
            None if environment == Environment::Production => {
                Err(ValidationError::MemoryStorageInProduction)
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> StorageConfig {
        StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        }
    }

    #[test]
    fn postgres_is_the_default_backend() {
        assert!(StorageConfig::default().postgres().is_some());
    }

    #[test]
    fn memory_backend_ignores_database_settings() {
        let config = memory();
        assert!(config.postgres().is_none());
        assert_eq!(config.validate(Environment::Development), Ok(()));
    }

    #[test]
    fn memory_backend_refused_in_production() {
        assert_eq!(
            memory().validate(Environment::Production),
            Err(ValidationError::MemoryStorageInProduction)
        );
    }

    #[test]
    fn postgres_backend_validates_url() {
        assert_eq!(
            StorageConfig::default().validate(Environment::Development),
            Err(ValidationError::MissingRequired("STORAGE__POSTGRES__URL"))
        );
    }
}
