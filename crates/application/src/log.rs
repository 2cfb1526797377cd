use chrono::NaiveDateTime;
use domain::error::Result;
use domain::value_object::{DatePeriod, DeviceId, ReadingValue, SensorId, SensorTypeId, UnitId};
use domain::{
    AggregateRoot, DeviceRepository, DomainError, Log, LogFactory, LogReading, LogRepository,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// One sensor measurement as reported by a device
#[derive(Debug, Clone)]
pub struct ReadingInput {
    pub device_id: DeviceId,
    pub sensor_id: String,
    pub timestamp: NaiveDateTime,
    pub value: String,
    pub sensor_type_id: SensorTypeId,
    pub unit_id: UnitId,
}

pub struct LogService {
    logs: Arc<dyn LogRepository>,
    devices: Arc<dyn DeviceRepository>,
    factory: Arc<dyn LogFactory>,
}

impl LogService {
    pub fn new(
        logs: Arc<dyn LogRepository>,
        devices: Arc<dyn DeviceRepository>,
        factory: Arc<dyn LogFactory>,
    ) -> Self {
        Self {
            logs,
            devices,
            factory,
        }
    }

    pub async fn add_log(&self, input: ReadingInput) -> Result<Log> {
        let reading = LogReading {
            sensor_id: SensorId::new(input.sensor_id)?,
            value: ReadingValue::new(input.value)?,
            device_id: input.device_id,
            timestamp: input.timestamp,
            sensor_type_id: input.sensor_type_id,
            unit_id: input.unit_id,
        };

        let log = self.logs.save(self.factory.create_log(reading)).await?;
        debug!(log_id = %log.id(), device_id = %log.device_id(), "Reading logged");
        Ok(log)
    }

    /// Readings of an existing device inside `period`, in the order they
    /// were logged
    pub async fn get_device_logs(
        &self,
        device_id: &DeviceId,
        period: &DatePeriod,
    ) -> Result<Vec<Log>> {
        self.require_device(device_id).await?;
        self.logs.find_by_device_id_and_period(device_id, period).await
    }

    async fn require_device(&self, device_id: &DeviceId) -> Result<()> {
        if self.devices.contains_of_identity(device_id).await? {
            return Ok(());
        }
        warn!(%device_id, "Log query for unknown device");
        Err(DomainError::not_found("Device", device_id))
    }
}
