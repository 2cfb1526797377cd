use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::{AggregateRoot, Unit};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "units")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unit_id: String,
    pub description: String,
    pub symbol: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Unit> for Model {
    fn from(unit: &Unit) -> Self {
        Self {
            unit_id: unit.id().to_string(),
            description: unit.description().to_string(),
            symbol: unit.symbol().to_string(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.unit_id
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "units";
    const COLUMNS: &'static [&'static str] = &[
        "unit_id",
        "description",
        "symbol",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.unit_id.as_str())
            .bind(self.description.as_str())
            .bind(self.symbol.as_str())
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            unit_id: Set(self.unit_id),
            description: Set(self.description),
            symbol: Set(self.symbol),
        }
    }
}
