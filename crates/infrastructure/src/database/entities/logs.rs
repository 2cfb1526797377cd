use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::{AggregateRoot, Log};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted form of a [`Log`]. Rows are inserted once and never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub log_id: String,
    pub device_id: String,
    pub sensor_id: String,
    pub timestamp: DateTime,
    pub reading: String,
    pub sensor_type_id: String,
    pub unit_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Log> for Model {
    fn from(log: &Log) -> Self {
        Self {
            log_id: log.id().to_string(),
            device_id: log.device_id().to_string(),
            sensor_id: log.sensor_id().to_string(),
            timestamp: log.timestamp(),
            reading: log.reading().to_string(),
            sensor_type_id: log.sensor_type_id().to_string(),
            unit_id: log.unit_id().to_string(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.log_id
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "logs";
    const COLUMNS: &'static [&'static str] = &[
        "log_id",
        "device_id",
        "sensor_id",
        "timestamp",
        "reading",
        "sensor_type_id",
        "unit_id",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.log_id.as_str())
            .bind(self.device_id.as_str())
            .bind(self.sensor_id.as_str())
            .bind(self.timestamp)
            .bind(self.reading.as_str())
            .bind(self.sensor_type_id.as_str())
            .bind(self.unit_id.as_str())
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            log_id: Set(self.log_id),
            device_id: Set(self.device_id),
            sensor_id: Set(self.sensor_id),
            timestamp: Set(self.timestamp),
            reading: Set(self.reading),
            sensor_type_id: Set(self.sensor_type_id),
            unit_id: Set(self.unit_id),
        }
    }
}
