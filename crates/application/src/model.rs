use domain::error::Result;
use domain::value_object::{
    ActuatorModelName, ActuatorTypeId, ModelPath, SensorModelName, SensorTypeId,
};
use domain::{
    ActuatorModel, ActuatorModelFactory, ActuatorModelRepository, ActuatorType, AggregateRoot,
    DomainError,
    Repository, SensorModel, SensorModelFactory, SensorModelRepository, SensorType,
};
use std::sync::Arc;
use tracing::{info, warn};

pub struct SensorModelService {
    repository: Arc<dyn SensorModelRepository>,
    sensor_types: Arc<dyn Repository<SensorTypeId, SensorType>>,
    factory: Arc<dyn SensorModelFactory>,
}

impl SensorModelService {
    pub fn new(
        repository: Arc<dyn SensorModelRepository>,
        sensor_types: Arc<dyn Repository<SensorTypeId, SensorType>>,
        factory: Arc<dyn SensorModelFactory>,
    ) -> Self {
        Self {
            repository,
            sensor_types,
            factory,
        }
    }

    /// Registers a sensor model under its model path
    pub async fn create_sensor_model(
        &self,
        name: &str,
        model_path: &str,
        sensor_type_id: &SensorTypeId,
    ) -> Result<SensorModel> {
        let name = SensorModelName::new(name)?;
        let model_path = ModelPath::new(model_path)?;

        if !self.sensor_types.contains_of_identity(sensor_type_id).await? {
            warn!(%sensor_type_id, "Rejected model for unknown sensor type");
            return Err(DomainError::not_found("Sensor type", sensor_type_id));
        }

        let model = self
            .repository
            .save(
                self.factory
                    .create_sensor_model(name, model_path, sensor_type_id.clone()),
            )
            .await?;
        info!(model_path = %model.id(), "Sensor model created");
        Ok(model)
    }

    pub async fn get_sensor_models_by_type(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>> {
        self.repository.find_by_sensor_type_id(sensor_type_id).await
    }
}

pub struct ActuatorModelService {
    repository: Arc<dyn ActuatorModelRepository>,
    actuator_types: Arc<dyn Repository<ActuatorTypeId, ActuatorType>>,
    factory: Arc<dyn ActuatorModelFactory>,
}

impl ActuatorModelService {
    pub fn new(
        repository: Arc<dyn ActuatorModelRepository>,
        actuator_types: Arc<dyn Repository<ActuatorTypeId, ActuatorType>>,
        factory: Arc<dyn ActuatorModelFactory>,
    ) -> Self {
        Self {
            repository,
            actuator_types,
            factory,
        }
    }

    pub async fn create_actuator_model(
        &self,
        name: &str,
        model_path: &str,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<ActuatorModel> {
        let name = ActuatorModelName::new(name)?;
        let model_path = ModelPath::new(model_path)?;

        if !self
            .actuator_types
            .contains_of_identity(actuator_type_id)
            .await?
        {
            warn!(%actuator_type_id, "Rejected model for unknown actuator type");
            return Err(DomainError::not_found("Actuator type", actuator_type_id));
        }

        let model = self
            .repository
            .save(
                self.factory
                    .create_actuator_model(name, model_path, actuator_type_id.clone()),
            )
            .await?;
        info!(model_path = %model.id(), "Actuator model created");
        Ok(model)
    }

    pub async fn get_actuator_models_by_type(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>> {
        self.repository.find_by_actuator_type_id(actuator_type_id).await
    }
}
