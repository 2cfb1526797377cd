use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::ActuatorModel;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted form of an [`ActuatorModel`], keyed by model path
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "actuator_models")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub model_path: String,
    pub name: String,
    pub actuator_type_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&ActuatorModel> for Model {
    fn from(model: &ActuatorModel) -> Self {
        Self {
            model_path: model.model_path().to_string(),
            name: model.name().to_string(),
            actuator_type_id: model.actuator_type_id().to_string(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.model_path
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "actuator_models";
    const COLUMNS: &'static [&'static str] = &[
        "model_path",
        "name",
        "actuator_type_id",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.model_path.as_str())
            .bind(self.name.as_str())
            .bind(self.actuator_type_id.as_str())
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            model_path: Set(self.model_path),
            name: Set(self.name),
            actuator_type_id: Set(self.actuator_type_id),
        }
    }
}
