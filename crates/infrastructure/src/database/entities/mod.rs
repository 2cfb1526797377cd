//! Persisted records: one flat, behaviour-free row type per aggregate.
//!
//! Each `Model` doubles as the sea-orm entity and the sqlx row type, so
//! both relational backends read and write the same shape.

pub mod actuator_models;
pub mod actuator_types;
pub mod device_types;
pub mod devices;
pub mod houses;
pub mod logs;
pub mod rooms;
pub mod sensor_models;
pub mod sensor_types;
pub mod units;

pub use super::sea_orm_repository::EntityRecord;
pub use super::sqlx_repository::{SqlRecord, SqliteQuery};

pub type HouseRecord = houses::Model;
pub type RoomRecord = rooms::Model;
pub type DeviceRecord = devices::Model;
pub type DeviceTypeRecord = device_types::Model;
pub type UnitRecord = units::Model;
pub type SensorTypeRecord = sensor_types::Model;
pub type ActuatorTypeRecord = actuator_types::Model;
pub type SensorModelRecord = sensor_models::Model;
pub type ActuatorModelRecord = actuator_models::Model;
pub type LogRecord = logs::Model;

/// Flat storage shape of an aggregate. Built from a valid aggregate and
/// never validated on its own.
pub trait PersistedRecord: Clone + Send + Sync + 'static {
    /// Primary key: the aggregate's identifier string
    fn key(&self) -> &str;
}
