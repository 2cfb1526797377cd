//! Managed repository backed by sea-orm entities.

use crate::assembler::{
    ActuatorModelDataModelAssembler, DataModelAssembler, DeviceDataModelAssembler,
    LogDataModelAssembler, SensorModelDataModelAssembler,
};
use crate::database::entities::{PersistedRecord, actuator_models, devices, logs, sensor_models};
use async_trait::async_trait;
use domain::error::Result;
use domain::value_object::{ActuatorTypeId, DatePeriod, DeviceId, RoomId, SensorTypeId};
use domain::{
    ActuatorModel, ActuatorModelFactory, ActuatorModelRepository, AggregateRoot, Device,
    DeviceFactory, DeviceRepository, DomainError, Identifier, Log, LogFactory, LogRepository,
    Repository, SensorModel, SensorModelFactory, SensorModelRepository,
};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, Order, PrimaryKeyTrait, QueryFilter, QueryOrder, Select, SqlErr,
    TransactionTrait,
};
use tracing::debug;

/// A persisted record that is also the `Model` of a sea-orm entity
pub trait EntityRecord: PersistedRecord + FromQueryResult {
    type Entity: EntityTrait<Model = Self>;

    /// Active model with every column `Set`
    fn into_active(self) -> <Self::Entity as EntityTrait>::ActiveModel;
}

type EntityOf<A> = <<A as DataModelAssembler>::Record as EntityRecord>::Entity;
type ActiveModelOf<A> = <EntityOf<A> as EntityTrait>::ActiveModel;
type KeyOf<A> = <<EntityOf<A> as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub struct SeaOrmRepository<A> {
    db: DatabaseConnection,
    assembler: A,
}

impl<A> SeaOrmRepository<A>
where
    A: DataModelAssembler,
    A::Record: EntityRecord,
{
    pub fn new(db: DatabaseConnection, assembler: A) -> Self {
        Self { db, assembler }
    }

    fn select() -> Select<EntityOf<A>> {
        EntityOf::<A>::find().order_by(Expr::cust("rowid"), Order::Asc)
    }

    fn to_domain_all(&self, records: Vec<A::Record>) -> Result<Vec<A::Aggregate>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        self.assembler.to_domain_list(&records)
    }

    /// Rows matching `filter`, in insertion order
    async fn find_filtered(&self, filter: SimpleExpr) -> Result<Vec<A::Aggregate>> {
        let records = Self::select()
            .filter(filter)
            .all(&self.db)
            .await
            .map_err(database_error)?;
        self.to_domain_all(records)
    }
}

#[async_trait]
impl<A> Repository<<A::Aggregate as AggregateRoot>::Id, A::Aggregate> for SeaOrmRepository<A>
where
    A: DataModelAssembler,
    A::Record: EntityRecord + IntoActiveModel<ActiveModelOf<A>>,
    ActiveModelOf<A>: ActiveModelTrait<Entity = EntityOf<A>> + Send + Sync,
    KeyOf<A>: From<String>,
{
    async fn save(&self, entity: A::Aggregate) -> Result<A::Aggregate> {
        let kind = <A::Aggregate as AggregateRoot>::KIND;
        let record = self.assembler.to_record(&entity);
        let txn = self.db.begin().await.map_err(database_error)?;

        let existing = EntityOf::<A>::find_by_id(KeyOf::<A>::from(record.key().to_string()))
            .one(&txn)
            .await
            .map_err(database_error)?;
        if existing.is_some() {
            return Err(DomainError::duplicate(kind, entity.id()));
        }

        EntityOf::<A>::insert(record.into_active())
            .exec_without_returning(&txn)
            .await
            .map_err(|e| write_error(e, kind, entity.id()))?;
        txn.commit().await.map_err(database_error)?;

        debug!(entity = kind, id = %entity.id(), "Inserted model");
        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<A::Aggregate>> {
        let records = Self::select()
            .all(&self.db)
            .await
            .map_err(database_error)?;
        self.to_domain_all(records)
    }

    async fn of_identity(
        &self,
        id: &<A::Aggregate as AggregateRoot>::Id,
    ) -> Result<Option<A::Aggregate>> {
        let record = EntityOf::<A>::find_by_id(KeyOf::<A>::from(id.as_str().to_string()))
            .one(&self.db)
            .await
            .map_err(database_error)?;

        record
            .map(|record| self.assembler.to_domain(&record))
            .transpose()
    }

    async fn contains_of_identity(&self, id: &<A::Aggregate as AggregateRoot>::Id) -> Result<bool> {
        let record = EntityOf::<A>::find_by_id(KeyOf::<A>::from(id.as_str().to_string()))
            .one(&self.db)
            .await
            .map_err(database_error)?;
        Ok(record.is_some())
    }

    async fn update(&self, entity: A::Aggregate) -> Result<Option<A::Aggregate>> {
        let kind = <A::Aggregate as AggregateRoot>::KIND;
        if <A::Aggregate as AggregateRoot>::APPEND_ONLY {
            return Err(DomainError::UnsupportedOperation("update"));
        }

        let record = self.assembler.to_record(&entity);
        let txn = self.db.begin().await.map_err(database_error)?;

        let existing = EntityOf::<A>::find_by_id(KeyOf::<A>::from(record.key().to_string()))
            .one(&txn)
            .await
            .map_err(database_error)?;
        if existing.is_none() {
            return Ok(None);
        }

        EntityOf::<A>::update(record.into_active())
            .exec(&txn)
            .await
            .map_err(database_error)?;
        txn.commit().await.map_err(database_error)?;

        debug!(entity = kind, id = %entity.id(), "Updated model");
        Ok(Some(entity))
    }
}

#[async_trait]
impl<F> DeviceRepository for SeaOrmRepository<DeviceDataModelAssembler<F>>
where
    F: DeviceFactory + 'static,
{
    async fn find_by_room_id(&self, room_id: &RoomId) -> Result<Vec<Device>> {
        self.find_filtered(devices::Column::RoomId.eq(room_id.as_str())).await
    }
}

#[async_trait]
impl<F> SensorModelRepository for SeaOrmRepository<SensorModelDataModelAssembler<F>>
where
    F: SensorModelFactory + 'static,
{
    async fn find_by_sensor_type_id(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>> {
        self.find_filtered(sensor_models::Column::SensorTypeId.eq(sensor_type_id.as_str()))
            .await
    }
}

#[async_trait]
impl<F> ActuatorModelRepository for SeaOrmRepository<ActuatorModelDataModelAssembler<F>>
where
    F: ActuatorModelFactory + 'static,
{
    async fn find_by_actuator_type_id(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>> {
        self.find_filtered(actuator_models::Column::ActuatorTypeId.eq(actuator_type_id.as_str()))
            .await
    }
}

#[async_trait]
impl<F> LogRepository for SeaOrmRepository<LogDataModelAssembler<F>>
where
    F: LogFactory + 'static,
{
    async fn find_by_device_id(&self, device_id: &DeviceId) -> Result<Vec<Log>> {
        self.find_filtered(logs::Column::DeviceId.eq(device_id.as_str())).await
    }

    async fn find_by_device_id_and_period(
        &self,
        device_id: &DeviceId,
        period: &DatePeriod,
    ) -> Result<Vec<Log>> {
        self.find_filtered(
            logs::Column::DeviceId
                .eq(device_id.as_str())
                .and(logs::Column::Timestamp.between(period.start(), period.end())),
        )
        .await
    }
}

fn database_error(err: DbErr) -> DomainError {
    DomainError::Persistence(err.to_string())
}

fn write_error(err: DbErr, entity: &'static str, id: &impl Identifier) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::duplicate(entity, id),
        _ => database_error(err),
    }
}
