use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::{AggregateRoot, Device};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted form of a [`Device`]; status kept as `active`
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "devices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub device_id: String,
    pub room_id: String,
    pub name: String,
    pub active: bool,
    pub device_type_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Device> for Model {
    fn from(device: &Device) -> Self {
        Self {
            device_id: device.id().to_string(),
            room_id: device.room_id().to_string(),
            name: device.name().to_string(),
            active: device.is_active(),
            device_type_id: device.device_type_id().to_string(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.device_id
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "devices";
    const COLUMNS: &'static [&'static str] = &[
        "device_id",
        "room_id",
        "name",
        "active",
        "device_type_id",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.device_id.as_str())
            .bind(self.room_id.as_str())
            .bind(self.name.as_str())
            .bind(self.active)
            .bind(self.device_type_id.as_str())
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            device_id: Set(self.device_id),
            room_id: Set(self.room_id),
            name: Set(self.name),
            active: Set(self.active),
            device_type_id: Set(self.device_type_id),
        }
    }
}
