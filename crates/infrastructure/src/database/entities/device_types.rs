use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::{AggregateRoot, DeviceType};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "device_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub device_type_id: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&DeviceType> for Model {
    fn from(device_type: &DeviceType) -> Self {
        Self {
            device_type_id: device_type.id().to_string(),
            description: device_type.description().to_string(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.device_type_id
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "device_types";
    const COLUMNS: &'static [&'static str] = &[
        "device_type_id",
        "description",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.device_type_id.as_str())
            .bind(self.description.as_str())
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            device_type_id: Set(self.device_type_id),
            description: Set(self.description),
        }
    }
}
