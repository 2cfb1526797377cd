//! Session-style repository: hand-written SQL over a SQLite pool.
//!
//! Every write runs in its own transaction (begin, check, write, commit).
//! A transaction dropped on an error path is rolled back by sqlx, so no
//! half-written row is ever visible. Reads check a connection out of the
//! pool for the duration of the call only.

use crate::assembler::{
    ActuatorModelDataModelAssembler, DataModelAssembler, DeviceDataModelAssembler,
    LogDataModelAssembler, SensorModelDataModelAssembler,
};
use crate::database::entities::PersistedRecord;
use async_trait::async_trait;
use domain::error::Result;
use domain::value_object::{ActuatorTypeId, DatePeriod, DeviceId, RoomId, SensorTypeId};
use domain::{
    ActuatorModel, ActuatorModelFactory, ActuatorModelRepository, AggregateRoot, Device,
    DeviceFactory, DeviceRepository, DomainError, Identifier, Log, LogFactory, LogRepository,
    Repository, SensorModel, SensorModelFactory, SensorModelRepository,
};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteArguments, SqliteConnection, SqlitePool, SqliteRow};
use sqlx::{FromRow, Sqlite};
use tracing::debug;

pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Table mapping of a persisted record
pub trait SqlRecord: PersistedRecord + for<'r> FromRow<'r, SqliteRow> + Unpin {
    const TABLE: &'static str;

    /// Column names, primary key first
    const COLUMNS: &'static [&'static str];

    /// Binds every column, in `COLUMNS` order, as `?1..?n`
    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

struct Statements {
    select: String,
    select_one: String,
    insert: String,
    update: String,
    exists: String,
}

impl Statements {
    fn for_record<R: SqlRecord>() -> Self {
        let table = R::TABLE;
        let key = R::COLUMNS[0];
        let columns = R::COLUMNS.join(", ");
        let params = (1..=R::COLUMNS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let assignments = R::COLUMNS
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            select: format!("SELECT {columns} FROM {table}"),
            select_one: format!("SELECT {columns} FROM {table} WHERE {key} = ?1"),
            insert: format!("INSERT INTO {table} ({columns}) VALUES ({params})"),
            update: format!("UPDATE {table} SET {assignments} WHERE {key} = ?1"),
            exists: format!("SELECT COUNT(*) FROM {table} WHERE {key} = ?1"),
        }
    }
}

pub struct SqlxRepository<A> {
    pool: SqlitePool,
    assembler: A,
    statements: Statements,
}

impl<A> SqlxRepository<A>
where
    A: DataModelAssembler,
    A::Record: SqlRecord,
{
    pub fn new(pool: SqlitePool, assembler: A) -> Self {
        Self {
            pool,
            assembler,
            statements: Statements::for_record::<A::Record>(),
        }
    }

    async fn acquire(&self) -> Result<PoolConnection<Sqlite>> {
        self.pool.acquire().await.map_err(database_error)
    }

    async fn exists(&self, conn: &mut SqliteConnection, key: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(&self.statements.exists)
            .bind(key)
            .fetch_one(conn)
            .await
            .map_err(database_error)?;
        Ok(count > 0)
    }

    fn rows_to_domain(&self, rows: Vec<SqliteRow>) -> Result<Vec<A::Aggregate>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let records = rows
            .iter()
            .map(|row| A::Record::from_row(row))
            .collect::<std::result::Result<Vec<A::Record>, _>>()
            .map_err(database_error)?;
        self.assembler.to_domain_list(&records)
    }

    /// Rows whose `column` equals `value`, in insertion order
    async fn find_where(&self, column: &str, value: &str) -> Result<Vec<A::Aggregate>> {
        let sql = format!(
            "{} WHERE {column} = ?1 ORDER BY rowid",
            self.statements.select
        );
        let mut conn = self.acquire().await?;
        let rows = sqlx::query(&sql)
            .bind(value)
            .fetch_all(&mut *conn)
            .await
            .map_err(database_error)?;
        self.rows_to_domain(rows)
    }
}

#[async_trait]
impl<A> Repository<<A::Aggregate as AggregateRoot>::Id, A::Aggregate> for SqlxRepository<A>
where
    A: DataModelAssembler,
    A::Record: SqlRecord,
{
    async fn save(&self, entity: A::Aggregate) -> Result<A::Aggregate> {
        let record = self.assembler.to_record(&entity);
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        if self.exists(&mut *tx, record.key()).await? {
            return Err(DomainError::duplicate(
                <A::Aggregate as AggregateRoot>::KIND,
                entity.id(),
            ));
        }

        record
            .bind(sqlx::query(&self.statements.insert))
            .execute(&mut *tx)
            .await
            .map_err(|e| write_error(e, <A::Aggregate as AggregateRoot>::KIND, entity.id()))?;
        tx.commit().await.map_err(database_error)?;

        let table = <A::Record as SqlRecord>::TABLE;
        debug!(table, id = %entity.id(), "Inserted row");
        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<A::Aggregate>> {
        let sql = format!("{} ORDER BY rowid", self.statements.select);
        let mut conn = self.acquire().await?;
        let rows = sqlx::query(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(database_error)?;
        self.rows_to_domain(rows)
    }

    async fn of_identity(
        &self,
        id: &<A::Aggregate as AggregateRoot>::Id,
    ) -> Result<Option<A::Aggregate>> {
        let mut conn = self.acquire().await?;
        let row = sqlx::query(&self.statements.select_one)
            .bind(id.as_str())
            .fetch_optional(&mut *conn)
            .await
            .map_err(database_error)?;

        match row {
            Some(row) => {
                let record = A::Record::from_row(&row).map_err(database_error)?;
                self.assembler.to_domain(&record).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn contains_of_identity(&self, id: &<A::Aggregate as AggregateRoot>::Id) -> Result<bool> {
        let mut conn = self.acquire().await?;
        self.exists(&mut *conn, id.as_str()).await
    }

    async fn update(&self, entity: A::Aggregate) -> Result<Option<A::Aggregate>> {
        if <A::Aggregate as AggregateRoot>::APPEND_ONLY {
            return Err(DomainError::UnsupportedOperation("update"));
        }

        let record = self.assembler.to_record(&entity);
        let mut tx = self.pool.begin().await.map_err(database_error)?;
        let result = record
            .bind(sqlx::query(&self.statements.update))
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        tx.commit().await.map_err(database_error)?;

        let table = <A::Record as SqlRecord>::TABLE;
        debug!(table, id = %entity.id(), "Updated row");
        Ok(Some(entity))
    }
}

#[async_trait]
impl<F> DeviceRepository for SqlxRepository<DeviceDataModelAssembler<F>>
where
    F: DeviceFactory + 'static,
{
    async fn find_by_room_id(&self, room_id: &RoomId) -> Result<Vec<Device>> {
        self.find_where("room_id", room_id.as_str()).await
    }
}

#[async_trait]
impl<F> SensorModelRepository for SqlxRepository<SensorModelDataModelAssembler<F>>
where
    F: SensorModelFactory + 'static,
{
    async fn find_by_sensor_type_id(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>> {
        self.find_where("sensor_type_id", sensor_type_id.as_str()).await
    }
}

#[async_trait]
impl<F> ActuatorModelRepository for SqlxRepository<ActuatorModelDataModelAssembler<F>>
where
    F: ActuatorModelFactory + 'static,
{
    async fn find_by_actuator_type_id(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>> {
        self.find_where("actuator_type_id", actuator_type_id.as_str()).await
    }
}

#[async_trait]
impl<F> LogRepository for SqlxRepository<LogDataModelAssembler<F>>
where
    F: LogFactory + 'static,
{
    async fn find_by_device_id(&self, device_id: &DeviceId) -> Result<Vec<Log>> {
        self.find_where("device_id", device_id.as_str()).await
    }

    async fn find_by_device_id_and_period(
        &self,
        device_id: &DeviceId,
        period: &DatePeriod,
    ) -> Result<Vec<Log>> {
        let sql = format!(
            "{} WHERE device_id = ?1 AND timestamp BETWEEN ?2 AND ?3 ORDER BY rowid",
            self.statements.select
        );
        let mut conn = self.acquire().await?;
        let rows = sqlx::query(&sql)
            .bind(device_id.as_str())
            .bind(period.start())
            .bind(period.end())
            .fetch_all(&mut *conn)
            .await
            .map_err(database_error)?;
        self.rows_to_domain(rows)
    }
}

fn database_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

/// A unique violation on insert means another writer stored the same ID first
fn write_error(err: sqlx::Error, entity: &'static str, id: &impl Identifier) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::duplicate(entity, id),
        _ => database_error(err),
    }
}
