//! Repository wiring: one bundle of trait objects per storage backend.

pub mod in_memory;

pub use in_memory::InMemoryRepository;

use crate::assembler::{
    ActuatorModelDataModelAssembler, ActuatorTypeDataModelAssembler, DeviceDataModelAssembler,
    DeviceTypeDataModelAssembler, HouseDataModelAssembler, LogDataModelAssembler,
    RoomDataModelAssembler, SensorModelDataModelAssembler, SensorTypeDataModelAssembler,
    UnitDataModelAssembler,
};
use crate::config::{PersistenceConfig, StorageBackend};
use crate::database::{Database, SeaOrmRepository, SqlxRepository};
use anyhow::Result;
use domain::value_object::{ActuatorTypeId, DeviceTypeId, HouseId, RoomId, SensorTypeId, UnitId};
use domain::{
    ActuatorModelRepository, ActuatorType, DeviceRepository, DeviceType, House, HouseFactoryImpl,
    LogRepository, PostalCodeFactory, Repository, Room, SensorModelRepository, SensorType, Unit,
};
use std::sync::Arc;
use tracing::info;

/// Every repository the application layer needs, all from the same backend
#[derive(Clone)]
pub struct Repositories {
    pub houses: Arc<dyn Repository<HouseId, House>>,
    pub rooms: Arc<dyn Repository<RoomId, Room>>,
    pub devices: Arc<dyn DeviceRepository>,
    pub device_types: Arc<dyn Repository<DeviceTypeId, DeviceType>>,
    pub units: Arc<dyn Repository<UnitId, Unit>>,
    pub sensor_types: Arc<dyn Repository<SensorTypeId, SensorType>>,
    pub actuator_types: Arc<dyn Repository<ActuatorTypeId, ActuatorType>>,
    pub sensor_models: Arc<dyn SensorModelRepository>,
    pub actuator_models: Arc<dyn ActuatorModelRepository>,
    pub logs: Arc<dyn LogRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            houses: Arc::new(InMemoryRepository::<House>::new()),
            rooms: Arc::new(InMemoryRepository::<Room>::new()),
            devices: Arc::new(InMemoryRepository::new()),
            device_types: Arc::new(InMemoryRepository::<DeviceType>::new()),
            units: Arc::new(InMemoryRepository::<Unit>::new()),
            sensor_types: Arc::new(InMemoryRepository::<SensorType>::new()),
            actuator_types: Arc::new(InMemoryRepository::<ActuatorType>::new()),
            sensor_models: Arc::new(InMemoryRepository::new()),
            actuator_models: Arc::new(InMemoryRepository::new()),
            logs: Arc::new(InMemoryRepository::new()),
        }
    }

    pub fn sqlx(database: &Database) -> Self {
        Self::sqlx_with_postal_codes(database, PostalCodeFactory::default())
    }

    /// Houses are rebuilt with `postal_codes`, so every country registered on
    /// it can be read back
    pub fn sqlx_with_postal_codes(database: &Database, postal_codes: PostalCodeFactory) -> Self {
        let pool = database.pool();
        Self {
            houses: Arc::new(SqlxRepository::new(
                pool.clone(),
                HouseDataModelAssembler::new(HouseFactoryImpl, postal_codes),
            )),
            rooms: Arc::new(SqlxRepository::new(
                pool.clone(),
                RoomDataModelAssembler::default(),
            )),
            devices: Arc::new(SqlxRepository::new(
                pool.clone(),
                DeviceDataModelAssembler::default(),
            )),
            device_types: Arc::new(SqlxRepository::new(
                pool.clone(),
                DeviceTypeDataModelAssembler::default(),
            )),
            units: Arc::new(SqlxRepository::new(
                pool.clone(),
                UnitDataModelAssembler::default(),
            )),
            sensor_types: Arc::new(SqlxRepository::new(
                pool.clone(),
                SensorTypeDataModelAssembler::default(),
            )),
            actuator_types: Arc::new(SqlxRepository::new(
                pool.clone(),
                ActuatorTypeDataModelAssembler::default(),
            )),
            sensor_models: Arc::new(SqlxRepository::new(
                pool.clone(),
                SensorModelDataModelAssembler::default(),
            )),
            actuator_models: Arc::new(SqlxRepository::new(
                pool.clone(),
                ActuatorModelDataModelAssembler::default(),
            )),
            logs: Arc::new(SqlxRepository::new(
                pool.clone(),
                LogDataModelAssembler::default(),
            )),
        }
    }

    pub fn sea_orm(database: &Database) -> Self {
        Self::sea_orm_with_postal_codes(database, PostalCodeFactory::default())
    }

    pub fn sea_orm_with_postal_codes(
        database: &Database,
        postal_codes: PostalCodeFactory,
    ) -> Self {
        let db = database.connection();
        Self {
            houses: Arc::new(SeaOrmRepository::new(
                db.clone(),
                HouseDataModelAssembler::new(HouseFactoryImpl, postal_codes),
            )),
            rooms: Arc::new(SeaOrmRepository::new(
                db.clone(),
                RoomDataModelAssembler::default(),
            )),
            devices: Arc::new(SeaOrmRepository::new(
                db.clone(),
                DeviceDataModelAssembler::default(),
            )),
            device_types: Arc::new(SeaOrmRepository::new(
                db.clone(),
                DeviceTypeDataModelAssembler::default(),
            )),
            units: Arc::new(SeaOrmRepository::new(
                db.clone(),
                UnitDataModelAssembler::default(),
            )),
            sensor_types: Arc::new(SeaOrmRepository::new(
                db.clone(),
                SensorTypeDataModelAssembler::default(),
            )),
            actuator_types: Arc::new(SeaOrmRepository::new(
                db.clone(),
                ActuatorTypeDataModelAssembler::default(),
            )),
            sensor_models: Arc::new(SeaOrmRepository::new(
                db.clone(),
                SensorModelDataModelAssembler::default(),
            )),
            actuator_models: Arc::new(SeaOrmRepository::new(
                db.clone(),
                ActuatorModelDataModelAssembler::default(),
            )),
            logs: Arc::new(SeaOrmRepository::new(
                db.clone(),
                LogDataModelAssembler::default(),
            )),
        }
    }

    /// Builds the configured backend, connecting and migrating when it is
    /// relational
    pub async fn from_config(config: &PersistenceConfig) -> Result<Self> {
        Self::from_config_with_postal_codes(config, PostalCodeFactory::default()).await
    }

    /// Same as [`Repositories::from_config`], reading houses back with
    /// `postal_codes`
    pub async fn from_config_with_postal_codes(
        config: &PersistenceConfig,
        postal_codes: PostalCodeFactory,
    ) -> Result<Self> {
        info!(backend = ?config.backend, "Initializing repositories");
        match config.backend {
            StorageBackend::Memory => Ok(Self::in_memory()),
            StorageBackend::Sqlx => {
                let database = Self::open(config).await?;
                Ok(Self::sqlx_with_postal_codes(&database, postal_codes))
            }
            StorageBackend::SeaOrm => {
                let database = Self::open(config).await?;
                Ok(Self::sea_orm_with_postal_codes(&database, postal_codes))
            }
        }
    }

    async fn open(config: &PersistenceConfig) -> Result<Database> {
        let database = Database::connect(&config.database_url, config.max_connections).await?;
        database.migrate().await?;
        Ok(database)
    }
}
