use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::{AggregateRoot, ActuatorType};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "actuator_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub actuator_type_id: String,
    pub description: String,
    pub unit_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&ActuatorType> for Model {
    fn from(actuator_type: &ActuatorType) -> Self {
        Self {
            actuator_type_id: actuator_type.id().to_string(),
            description: actuator_type.description().to_string(),
            unit_id: actuator_type.unit_id().to_string(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.actuator_type_id
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "actuator_types";
    const COLUMNS: &'static [&'static str] = &[
        "actuator_type_id",
        "description",
        "unit_id",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.actuator_type_id.as_str())
            .bind(self.description.as_str())
            .bind(self.unit_id.as_str())
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            actuator_type_id: Set(self.actuator_type_id),
            description: Set(self.description),
            unit_id: Set(self.unit_id),
        }
    }
}
