use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{DeviceId, LogId, ReadingValue, SensorId, SensorTypeId, UnitId};
use chrono::NaiveDateTime;
use serde::Serialize;

/// A reading taken by a sensor of a device. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Log {
    id: LogId,
    device_id: DeviceId,
    sensor_id: SensorId,
    timestamp: NaiveDateTime,
    reading: ReadingValue,
    sensor_type_id: SensorTypeId,
    unit_id: UnitId,
}

impl Log {
    pub(crate) fn new(id: LogId, reading: LogReading) -> Self {
        Self {
            id,
            device_id: reading.device_id,
            sensor_id: reading.sensor_id,
            timestamp: reading.timestamp,
            reading: reading.value,
            sensor_type_id: reading.sensor_type_id,
            unit_id: reading.unit_id,
        }
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn sensor_id(&self) -> &SensorId {
        &self.sensor_id
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn reading(&self) -> &ReadingValue {
        &self.reading
    }

    pub fn sensor_type_id(&self) -> &SensorTypeId {
        &self.sensor_type_id
    }

    pub fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }
}

impl AggregateRoot for Log {
    type Id = LogId;
    const KIND: &'static str = "Log";
    const APPEND_ONLY: bool = true;

    fn id(&self) -> &LogId {
        &self.id
    }
}

identity_equality!(Log);

/// Validated fields of a log entry, everything but its ID
#[derive(Debug, Clone, PartialEq)]
pub struct LogReading {
    pub device_id: DeviceId,
    pub sensor_id: SensorId,
    pub timestamp: NaiveDateTime,
    pub value: ReadingValue,
    pub sensor_type_id: SensorTypeId,
    pub unit_id: UnitId,
}

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait LogFactory: Send + Sync {
    fn create_log(&self, reading: LogReading) -> Log;

    fn create_log_with_id(&self, id: LogId, reading: LogReading) -> Log;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogFactoryImpl;

impl LogFactory for LogFactoryImpl {
    fn create_log(&self, reading: LogReading) -> Log {
        Log::new(LogId::generate(), reading)
    }

    fn create_log_with_id(&self, id: LogId, reading: LogReading) -> Log {
        Log::new(id, reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(value: &str) -> LogReading {
        LogReading {
            device_id: DeviceId::new("D1").unwrap(),
            sensor_id: SensorId::new("S1").unwrap(),
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            value: ReadingValue::new(value).unwrap(),
            sensor_type_id: SensorTypeId::new("Temperature").unwrap(),
            unit_id: UnitId::new("Celsius").unwrap(),
        }
    }

    #[test]
    fn test_create_log() {
        let log = LogFactoryImpl.create_log(reading("21.5"));
        assert_eq!(log.reading().as_str(), "21.5");
        assert_eq!(log.device_id().as_str(), "D1");
        assert_eq!(log.timestamp().to_string(), "2024-03-01 10:30:00");
    }

    #[test]
    fn test_equality_by_log_id() {
        let id = LogId::new("L1").unwrap();
        let a = LogFactoryImpl.create_log_with_id(id.clone(), reading("1"));
        let b = LogFactoryImpl.create_log_with_id(id, reading("2"));
        assert_eq!(a, b);
        assert_ne!(
            LogFactoryImpl.create_log(reading("1")),
            LogFactoryImpl.create_log(reading("1"))
        );
    }

    #[test]
    fn test_log_is_append_only() {
        assert!(<Log as AggregateRoot>::APPEND_ONLY);
        assert!(!<crate::room::Room as AggregateRoot>::APPEND_ONLY);
    }
}
