use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{ActuatorModelName, ActuatorTypeId, ModelPath};
use serde::Serialize;

/// Catalogue entry for an actuator implementation, keyed by its model path
#[derive(Debug, Clone, Serialize)]
pub struct ActuatorModel {
    model_path: ModelPath,
    name: ActuatorModelName,
    actuator_type_id: ActuatorTypeId,
}

impl ActuatorModel {
    pub(crate) fn new(
        model_path: ModelPath,
        name: ActuatorModelName,
        actuator_type_id: ActuatorTypeId,
    ) -> Self {
        Self {
            model_path,
            name,
            actuator_type_id,
        }
    }

    pub fn model_path(&self) -> &ModelPath {
        &self.model_path
    }

    pub fn name(&self) -> &ActuatorModelName {
        &self.name
    }

    pub fn actuator_type_id(&self) -> &ActuatorTypeId {
        &self.actuator_type_id
    }
}

impl AggregateRoot for ActuatorModel {
    type Id = ModelPath;
    const KIND: &'static str = "Actuator model";

    fn id(&self) -> &ModelPath {
        &self.model_path
    }
}

identity_equality!(ActuatorModel);

/// The model path is the identity, so both construction paths take it.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait ActuatorModelFactory: Send + Sync {
    fn create_actuator_model(
        &self,
        name: ActuatorModelName,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
    ) -> ActuatorModel;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ActuatorModelFactoryImpl;

impl ActuatorModelFactory for ActuatorModelFactoryImpl {
    fn create_actuator_model(
        &self,
        name: ActuatorModelName,
        model_path: ModelPath,
        actuator_type_id: ActuatorTypeId,
    ) -> ActuatorModel {
        ActuatorModel::new(model_path, name, actuator_type_id)
    }
}
