use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{ModelPath, SensorModelName, SensorTypeId};
use serde::Serialize;

/// Catalogue entry for a sensor implementation, keyed by its model path
#[derive(Debug, Clone, Serialize)]
pub struct SensorModel {
    model_path: ModelPath,
    name: SensorModelName,
    sensor_type_id: SensorTypeId,
}

impl SensorModel {
    pub(crate) fn new(
        model_path: ModelPath,
        name: SensorModelName,
        sensor_type_id: SensorTypeId,
    ) -> Self {
        Self {
            model_path,
            name,
            sensor_type_id,
        }
    }

    pub fn model_path(&self) -> &ModelPath {
        &self.model_path
    }

    pub fn name(&self) -> &SensorModelName {
        &self.name
    }

    pub fn sensor_type_id(&self) -> &SensorTypeId {
        &self.sensor_type_id
    }
}

impl AggregateRoot for SensorModel {
    type Id = ModelPath;
    const KIND: &'static str = "Sensor model";

    fn id(&self) -> &ModelPath {
        &self.model_path
    }
}

identity_equality!(SensorModel);

/// The model path is the identity, so both construction paths take it.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait SensorModelFactory: Send + Sync {
    fn create_sensor_model(
        &self,
        name: SensorModelName,
        model_path: ModelPath,
        sensor_type_id: SensorTypeId,
    ) -> SensorModel;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SensorModelFactoryImpl;

impl SensorModelFactory for SensorModelFactoryImpl {
    fn create_sensor_model(
        &self,
        name: SensorModelName,
        model_path: ModelPath,
        sensor_type_id: SensorTypeId,
    ) -> SensorModel {
        SensorModel::new(model_path, name, sensor_type_id)
    }
}
