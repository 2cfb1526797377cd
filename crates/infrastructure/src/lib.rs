//! Infrastructure layer - Storage backends for the domain repositories

pub mod assembler;
pub mod config;
pub mod database;
pub mod repositories;

pub use config::{PersistenceConfig, StorageBackend};
pub use database::{Database, SeaOrmRepository, SqlxRepository};
pub use repositories::{InMemoryRepository, Repositories};
