use super::DataModelAssembler;
use crate::database::entities::{ActuatorModelRecord, SensorModelRecord};
use domain::error::Result;
use domain::value_object::{
    ActuatorModelName, ActuatorTypeId, ModelPath, SensorModelName, SensorTypeId,
};
use domain::{
    ActuatorModel, ActuatorModelFactory, ActuatorModelFactoryImpl, SensorModel,
    SensorModelFactory, SensorModelFactoryImpl,
};

pub struct SensorModelDataModelAssembler<F = SensorModelFactoryImpl> {
    factory: F,
}

impl<F: SensorModelFactory> SensorModelDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for SensorModelDataModelAssembler {
    fn default() -> Self {
        Self::new(SensorModelFactoryImpl)
    }
}

impl<F: SensorModelFactory + 'static> DataModelAssembler for SensorModelDataModelAssembler<F> {
    type Record = SensorModelRecord;
    type Aggregate = SensorModel;
    const PLURAL: &'static str = "sensor models";

    fn to_domain(&self, record: &SensorModelRecord) -> Result<SensorModel> {
        let name = SensorModelName::new(record.name.as_str())?;
        let model_path = ModelPath::new(record.model_path.as_str())?;
        let sensor_type_id = SensorTypeId::new(record.sensor_type_id.as_str())?;
        Ok(self
            .factory
            .create_sensor_model(name, model_path, sensor_type_id))
    }

    fn to_record(&self, model: &SensorModel) -> SensorModelRecord {
        SensorModelRecord::from(model)
    }
}

pub struct ActuatorModelDataModelAssembler<F = ActuatorModelFactoryImpl> {
    factory: F,
}

impl<F: ActuatorModelFactory> ActuatorModelDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for ActuatorModelDataModelAssembler {
    fn default() -> Self {
        Self::new(ActuatorModelFactoryImpl)
    }
}

impl<F: ActuatorModelFactory + 'static> DataModelAssembler for ActuatorModelDataModelAssembler<F> {
    type Record = ActuatorModelRecord;
    type Aggregate = ActuatorModel;
    const PLURAL: &'static str = "actuator models";

    fn to_domain(&self, record: &ActuatorModelRecord) -> Result<ActuatorModel> {
        let name = ActuatorModelName::new(record.name.as_str())?;
        let model_path = ModelPath::new(record.model_path.as_str())?;
        let actuator_type_id = ActuatorTypeId::new(record.actuator_type_id.as_str())?;
        Ok(self
            .factory
            .create_actuator_model(name, model_path, actuator_type_id))
    }

    fn to_record(&self, model: &ActuatorModel) -> ActuatorModelRecord {
        ActuatorModelRecord::from(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::AggregateRoot;
    use domain::sensor_model::MockSensorModelFactory;

    fn sensor_record() -> SensorModelRecord {
        SensorModelRecord {
            model_path: "smarthome.sensors.GA100K".to_string(),
            name: "GA100K".to_string(),
            sensor_type_id: "Temperature".to_string(),
        }
    }

    #[test]
    fn test_model_path_is_identity() {
        let assembler = SensorModelDataModelAssembler::default();
        let model = assembler.to_domain(&sensor_record()).unwrap();
        assert_eq!(model.id().as_str(), "smarthome.sensors.GA100K");
        assert_eq!(assembler.to_record(&model), sensor_record());
    }

    #[test]
    fn test_sensor_model_factory_receives_stored_fields() {
        let mut factory = MockSensorModelFactory::new();
        factory
            .expect_create_sensor_model()
            .withf(|name, path, type_id| {
                name.as_str() == "GA100K"
                    && path.as_str() == "smarthome.sensors.GA100K"
                    && type_id.as_str() == "Temperature"
            })
            .times(1)
            .returning(|name, path, type_id| {
                SensorModelFactoryImpl.create_sensor_model(name, path, type_id)
            });

        assert!(
            SensorModelDataModelAssembler::new(factory)
                .to_domain(&sensor_record())
                .is_ok()
        );
    }

    #[test]
    fn test_actuator_model_round_trip() {
        let assembler = ActuatorModelDataModelAssembler::default();
        let record = ActuatorModelRecord {
            model_path: "smarthome.actuators.BlindRoller".to_string(),
            name: "Blind Roller".to_string(),
            actuator_type_id: "Blind".to_string(),
        };
        let model = assembler.to_domain(&record).unwrap();
        assert_eq!(model.actuator_type_id().as_str(), "Blind");
        assert_eq!(assembler.to_record(&model), record);
    }

    #[test]
    fn test_overlong_name_in_storage() {
        let mut record = sensor_record();
        record.name = "x".repeat(101);
        let err = SensorModelDataModelAssembler::default()
            .to_domain(&record)
            .unwrap_err();
        assert!(err.is_validation());
    }
}
