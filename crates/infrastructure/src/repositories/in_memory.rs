//! Process-local repository keyed by aggregate ID.
//!
//! Entries keep insertion order, so `find_all` and the filtered queries
//! return aggregates in the order they were saved. Nothing survives the
//! process. Updates are not supported.

use async_trait::async_trait;
use domain::error::Result;
use domain::value_object::{ActuatorTypeId, DatePeriod, DeviceId, RoomId, SensorTypeId};
use domain::{
    ActuatorModel, ActuatorModelRepository, AggregateRoot, Device, DeviceRepository, DomainError,
    Log, LogRepository, Repository, SensorModel, SensorModelRepository,
};
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;

pub struct InMemoryRepository<V: AggregateRoot> {
    items: RwLock<IndexMap<V::Id, V>>,
}

impl<V: AggregateRoot> InMemoryRepository<V> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(IndexMap::new()),
        }
    }

    async fn find_matching(&self, predicate: impl Fn(&V) -> bool) -> Vec<V> {
        self.items
            .read()
            .await
            .values()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

impl<V: AggregateRoot> Default for InMemoryRepository<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V: AggregateRoot> Repository<V::Id, V> for InMemoryRepository<V> {
    async fn save(&self, entity: V) -> Result<V> {
        let mut items = self.items.write().await;
        if items.contains_key(entity.id()) {
            return Err(DomainError::duplicate(V::KIND, entity.id()));
        }
        items.insert(entity.id().clone(), entity.clone());

        debug!(entity = V::KIND, id = %entity.id(), "Stored in memory");
        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<V>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn of_identity(&self, id: &V::Id) -> Result<Option<V>> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn contains_of_identity(&self, id: &V::Id) -> Result<bool> {
        Ok(self.items.read().await.contains_key(id))
    }
}

#[async_trait]
impl DeviceRepository for InMemoryRepository<Device> {
    async fn find_by_room_id(&self, room_id: &RoomId) -> Result<Vec<Device>> {
        Ok(self
            .find_matching(|device| device.room_id() == room_id)
            .await)
    }
}

#[async_trait]
impl SensorModelRepository for InMemoryRepository<SensorModel> {
    async fn find_by_sensor_type_id(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>> {
        Ok(self
            .find_matching(|model| model.sensor_type_id() == sensor_type_id)
            .await)
    }
}

#[async_trait]
impl ActuatorModelRepository for InMemoryRepository<ActuatorModel> {
    async fn find_by_actuator_type_id(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>> {
        Ok(self
            .find_matching(|model| model.actuator_type_id() == actuator_type_id)
            .await)
    }
}

#[async_trait]
impl LogRepository for InMemoryRepository<Log> {
    async fn find_by_device_id(&self, device_id: &DeviceId) -> Result<Vec<Log>> {
        Ok(self.find_matching(|log| log.device_id() == device_id).await)
    }

    async fn find_by_device_id_and_period(
        &self,
        device_id: &DeviceId,
        period: &DatePeriod,
    ) -> Result<Vec<Log>> {
        Ok(self
            .find_matching(|log| log.device_id() == device_id && period.contains(log.timestamp()))
            .await)
    }
}
