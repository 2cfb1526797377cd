use super::DataModelAssembler;
use crate::database::entities::LogRecord;
use domain::error::Result;
use domain::value_object::{DeviceId, LogId, ReadingValue, SensorId, SensorTypeId, UnitId};
use domain::{Log, LogFactory, LogFactoryImpl, LogReading};

pub struct LogDataModelAssembler<F = LogFactoryImpl> {
    factory: F,
}

impl<F: LogFactory> LogDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for LogDataModelAssembler {
    fn default() -> Self {
        Self::new(LogFactoryImpl)
    }
}

impl<F: LogFactory + 'static> DataModelAssembler for LogDataModelAssembler<F> {
    type Record = LogRecord;
    type Aggregate = Log;
    const PLURAL: &'static str = "logs";

    fn to_domain(&self, record: &LogRecord) -> Result<Log> {
        let id = LogId::new(record.log_id.as_str())?;
        let reading = LogReading {
            device_id: DeviceId::new(record.device_id.as_str())?,
            sensor_id: SensorId::new(record.sensor_id.as_str())?,
            timestamp: record.timestamp,
            value: ReadingValue::new(record.reading.as_str())?,
            sensor_type_id: SensorTypeId::new(record.sensor_type_id.as_str())?,
            unit_id: UnitId::new(record.unit_id.as_str())?,
        };
        Ok(self.factory.create_log_with_id(id, reading))
    }

    fn to_record(&self, log: &Log) -> LogRecord {
        LogRecord::from(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::AggregateRoot;
    use domain::log::MockLogFactory;

    fn record() -> LogRecord {
        LogRecord {
            log_id: "L1".to_string(),
            device_id: "D1".to_string(),
            sensor_id: "S1".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            reading: "21.5".to_string(),
            sensor_type_id: "Temperature".to_string(),
            unit_id: "U1".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let assembler = LogDataModelAssembler::default();
        let log = assembler.to_domain(&record()).unwrap();
        assert_eq!(log.id().as_str(), "L1");
        assert_eq!(log.reading().as_str(), "21.5");
        assert_eq!(assembler.to_record(&log), record());
    }

    #[test]
    fn test_reconstruction_keeps_stored_id() {
        let mut factory = MockLogFactory::new();
        factory.expect_create_log().never();
        factory
            .expect_create_log_with_id()
            .withf(|id, reading| id.as_str() == "L1" && reading.device_id.as_str() == "D1")
            .times(1)
            .returning(|id, reading| LogFactoryImpl.create_log_with_id(id, reading));

        let log = LogDataModelAssembler::new(factory)
            .to_domain(&record())
            .unwrap();
        assert_eq!(log.device_id().as_str(), "D1");
    }

    #[test]
    fn test_blank_reading_rejected() {
        let mut corrupt = record();
        corrupt.reading = String::new();
        assert!(
            LogDataModelAssembler::default()
                .to_domain(&corrupt)
                .unwrap_err()
                .is_validation()
        );
    }
}
