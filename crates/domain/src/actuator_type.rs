use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{ActuatorTypeId, TypeDescription, UnitId};
use serde::Serialize;

/// Kind of actuator, measured in one unit
#[derive(Debug, Clone, Serialize)]
pub struct ActuatorType {
    id: ActuatorTypeId,
    description: TypeDescription,
    unit_id: UnitId,
}

impl ActuatorType {
    pub(crate) fn new(id: ActuatorTypeId, description: TypeDescription, unit_id: UnitId) -> Self {
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

impl AggregateRoot for ActuatorType {
    type Id = ActuatorTypeId;
    const KIND: &'static str = "Actuator type";

    fn id(&self) -> &ActuatorTypeId {
        &self.id
    }
}

identity_equality!(ActuatorType);

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait ActuatorTypeFactory: Send + Sync {
    fn create_actuator_type(&self, description: TypeDescription, unit_id: UnitId) -> ActuatorType;

    fn create_actuator_type_with_id(
        &self,
        id: ActuatorTypeId,
        description: TypeDescription,
        unit_id: UnitId,
    ) -> ActuatorType;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ActuatorTypeFactoryImpl;

impl ActuatorTypeFactory for ActuatorTypeFactoryImpl {
    fn create_actuator_type(&self, description: TypeDescription, unit_id: UnitId) -> ActuatorType {
        ActuatorType::new(ActuatorTypeId::generate(), description, unit_id)
    }

    fn create_actuator_type_with_id(
        &self,
        id: ActuatorTypeId,
        description: TypeDescription,
        unit_id: UnitId,
    ) -> ActuatorType {
        ActuatorType::new(id, description, unit_id)
    }
}
