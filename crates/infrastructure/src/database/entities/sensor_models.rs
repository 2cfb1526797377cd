use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::SensorModel;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted form of a [`SensorModel`], keyed by model path
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "sensor_models")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub model_path: String,
    pub name: String,
    pub sensor_type_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&SensorModel> for Model {
    fn from(model: &SensorModel) -> Self {
        Self {
            model_path: model.model_path().to_string(),
            name: model.name().to_string(),
            sensor_type_id: model.sensor_type_id().to_string(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.model_path
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "sensor_models";
    const COLUMNS: &'static [&'static str] = &[
        "model_path",
        "name",
        "sensor_type_id",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.model_path.as_str())
            .bind(self.name.as_str())
            .bind(self.sensor_type_id.as_str())
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            model_path: Set(self.model_path),
            name: Set(self.name),
            sensor_type_id: Set(self.sensor_type_id),
        }
    }
}
