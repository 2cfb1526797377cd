use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::{AggregateRoot, SensorType};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "sensor_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sensor_type_id: String,
    pub description: String,
    pub unit_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&SensorType> for Model {
    fn from(sensor_type: &SensorType) -> Self {
        Self {
            sensor_type_id: sensor_type.id().to_string(),
            description: sensor_type.description().to_string(),
            unit_id: sensor_type.unit_id().to_string(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.sensor_type_id
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "sensor_types";
    const COLUMNS: &'static [&'static str] = &[
        "sensor_type_id",
        "description",
        "unit_id",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.sensor_type_id.as_str())
            .bind(self.description.as_str())
            .bind(self.unit_id.as_str())
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            sensor_type_id: Set(self.sensor_type_id),
            description: Set(self.description),
            unit_id: Set(self.unit_id),
        }
    }
}
