use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{SensorTypeId, TypeDescription, UnitId};
use serde::Serialize;

/// Kind of sensor, measured in one unit
#[derive(Debug, Clone, Serialize)]
pub struct SensorType {
    id: SensorTypeId,
    description: TypeDescription,
    unit_id: UnitId,
}

impl SensorType {
    pub(crate) fn new(id: SensorTypeId, description: TypeDescription, unit_id: UnitId) -> Self {
        Self {
            id,
            description,
            unit_id,
        }
    }

    pub fn description(&self) -> &TypeDescription {
        &self.description
    }

    pub fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }
}

impl AggregateRoot for SensorType {
    type Id = SensorTypeId;
    const KIND: &'static str = "Sensor type";

    fn id(&self) -> &SensorTypeId {
        &self.id
    }
}

identity_equality!(SensorType);

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait SensorTypeFactory: Send + Sync {
    fn create_sensor_type(&self, description: TypeDescription, unit_id: UnitId) -> SensorType;

    fn create_sensor_type_with_id(
        &self,
        id: SensorTypeId,
        description: TypeDescription,
        unit_id: UnitId,
    ) -> SensorType;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SensorTypeFactoryImpl;

impl SensorTypeFactory for SensorTypeFactoryImpl {
    fn create_sensor_type(&self, description: TypeDescription, unit_id: UnitId) -> SensorType {
        SensorType::new(SensorTypeId::generate(), description, unit_id)
    }

    fn create_sensor_type_with_id(
        &self,
        id: SensorTypeId,
        description: TypeDescription,
        unit_id: UnitId,
    ) -> SensorType {
        SensorType::new(id, description, unit_id)
    }
}
