use super::{EntityRecord, PersistedRecord, SqlRecord, SqliteQuery};
use domain::{AggregateRoot, House};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted form of a [`House`]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, sqlx::FromRow)]
#[sea_orm(table_name = "houses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub house_id: String,
    pub street: String,
    pub door_number: String,
    pub postal_code: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&House> for Model {
    fn from(house: &House) -> Self {
        Self {
            house_id: house.id().to_string(),
            street: house.address().street().to_string(),
            door_number: house.address().door_number().to_string(),
            postal_code: house.address().postal_code().value().to_string(),
            country_code: house.address().country_code().to_string(),
            latitude: house.gps().latitude(),
            longitude: house.gps().longitude(),
        }
    }
}

impl PersistedRecord for Model {
    fn key(&self) -> &str {
        &self.house_id
    }
}

impl SqlRecord for Model {
    const TABLE: &'static str = "houses";
    const COLUMNS: &'static [&'static str] = &[
        "house_id",
        "street",
        "door_number",
        "postal_code",
        "country_code",
        "latitude",
        "longitude",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.house_id.as_str())
            .bind(self.street.as_str())
            .bind(self.door_number.as_str())
            .bind(self.postal_code.as_str())
            .bind(self.country_code.as_str())
            .bind(self.latitude)
            .bind(self.longitude)
    }
}

impl EntityRecord for Model {
    type Entity = Entity;

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            house_id: Set(self.house_id),
            street: Set(self.street),
            door_number: Set(self.door_number),
            postal_code: Set(self.postal_code),
            country_code: Set(self.country_code),
            latitude: Set(self.latitude),
            longitude: Set(self.longitude),
        }
    }
}
