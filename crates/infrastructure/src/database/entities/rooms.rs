use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::{AggregateRoot, Room};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted form of a [`Room`]; dimensions flattened into three columns
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: String,
    pub house_id: String,
    pub name: String,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub floor: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Room> for Model {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.id().to_string(),
            house_id: room.house_id().to_string(),
            name: room.name().to_string(),
            width: room.dimension().width(),
            depth: room.dimension().depth(),
            height: room.dimension().height(),
            floor: room.floor().value(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.room_id
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "rooms";
    const COLUMNS: &'static [&'static str] = &[
        "room_id",
        "house_id",
        "name",
        "width",
        "depth",
        "height",
        "floor",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.room_id.as_str())
            .bind(self.house_id.as_str())
            .bind(self.name.as_str())
            .bind(self.width)
            .bind(self.depth)
            .bind(self.height)
            .bind(self.floor)
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            room_id: Set(self.room_id),
            house_id: Set(self.house_id),
            name: Set(self.name),
            width: Set(self.width),
            depth: Set(self.depth),
            height: Set(self.height),
            floor: Set(self.floor),
        }
    }
}
