//! Reference data services: device types, units, sensor and actuator types.

use domain::error::Result;
use domain::value_object::{
    ActuatorTypeId, DeviceTypeId, SensorTypeId, TypeDescription, UnitDescription, UnitId,
    UnitSymbol,
};
use domain::{
    ActuatorType, ActuatorTypeFactory, AggregateRoot, DeviceType, DeviceTypeFactory, DomainError,
    Repository, SensorType, SensorTypeFactory, Unit, UnitFactory,
};
use std::sync::Arc;
use tracing::{info, warn};

pub struct DeviceTypeService {
    repository: Arc<dyn Repository<DeviceTypeId, DeviceType>>,
    factory: Arc<dyn DeviceTypeFactory>,
}

impl DeviceTypeService {
    pub fn new(
        repository: Arc<dyn Repository<DeviceTypeId, DeviceType>>,
        factory: Arc<dyn DeviceTypeFactory>,
    ) -> Self {
        Self {
            repository,
            factory,
        }
    }

    pub async fn create_device_type(&self, description: &str) -> Result<DeviceType> {
        let description = TypeDescription::new(description)?;
        let device_type = self
            .repository
            .save(self.factory.create_device_type(description))
            .await?;
        info!(device_type_id = %device_type.id(), "Device type created");
        Ok(device_type)
    }

    pub async fn get_device_types(&self) -> Result<Vec<DeviceType>> {
        self.repository.find_all().await
    }
}

pub struct UnitService {
    repository: Arc<dyn Repository<UnitId, Unit>>,
    factory: Arc<dyn UnitFactory>,
}

impl UnitService {
    pub fn new(
        repository: Arc<dyn Repository<UnitId, Unit>>,
        factory: Arc<dyn UnitFactory>,
    ) -> Self {
        Self {
            repository,
            factory,
        }
    }

    pub async fn create_unit(&self, description: &str, symbol: &str) -> Result<Unit> {
        let description = UnitDescription::new(description)?;
        let symbol = UnitSymbol::new(symbol)?;
        let unit = self
            .repository
            .save(self.factory.create_unit(description, symbol))
            .await?;
        info!(unit_id = %unit.id(), symbol = %unit.symbol(), "Unit created");
        Ok(unit)
    }

    pub async fn get_units(&self) -> Result<Vec<Unit>> {
        self.repository.find_all().await
    }
}

pub struct SensorTypeService {
    repository: Arc<dyn Repository<SensorTypeId, SensorType>>,
    units: Arc<dyn Repository<UnitId, Unit>>,
    factory: Arc<dyn SensorTypeFactory>,
}

impl SensorTypeService {
    pub fn new(
        repository: Arc<dyn Repository<SensorTypeId, SensorType>>,
        units: Arc<dyn Repository<UnitId, Unit>>,
        factory: Arc<dyn SensorTypeFactory>,
    ) -> Self {
        Self {
            repository,
            units,
            factory,
        }
    }

    pub async fn create_sensor_type(
        &self,
        description: &str,
        unit_id: &UnitId,
    ) -> Result<SensorType> {
        let description = TypeDescription::new(description)?;
        require_unit(self.units.as_ref(), unit_id).await?;

        let sensor_type = self
            .repository
            .save(self.factory.create_sensor_type(description, unit_id.clone()))
            .await?;
        info!(sensor_type_id = %sensor_type.id(), %unit_id, "Sensor type created");
        Ok(sensor_type)
    }

    pub async fn get_sensor_types(&self) -> Result<Vec<SensorType>> {
        self.repository.find_all().await
    }
}

pub struct ActuatorTypeService {
    repository: Arc<dyn Repository<ActuatorTypeId, ActuatorType>>,
    units: Arc<dyn Repository<UnitId, Unit>>,
    factory: Arc<dyn ActuatorTypeFactory>,
}

impl ActuatorTypeService {
    pub fn new(
        repository: Arc<dyn Repository<ActuatorTypeId, ActuatorType>>,
        units: Arc<dyn Repository<UnitId, Unit>>,
        factory: Arc<dyn ActuatorTypeFactory>,
    ) -> Self {
        Self {
            repository,
            units,
            factory,
        }
    }

    pub async fn create_actuator_type(
        &self,
        description: &str,
        unit_id: &UnitId,
    ) -> Result<ActuatorType> {
        let description = TypeDescription::new(description)?;
        require_unit(self.units.as_ref(), unit_id).await?;

        let actuator_type = self
            .repository
            .save(self.factory.create_actuator_type(description, unit_id.clone()))
            .await?;
        info!(actuator_type_id = %actuator_type.id(), %unit_id, "Actuator type created");
        Ok(actuator_type)
    }

    pub async fn get_actuator_types(&self) -> Result<Vec<ActuatorType>> {
        self.repository.find_all().await
    }
}

async fn require_unit(units: &dyn Repository<UnitId, Unit>, unit_id: &UnitId) -> Result<()> {
    if units.contains_of_identity(unit_id).await? {
        return Ok(());
    }
    warn!(%unit_id, "Rejected type for unknown unit");
    Err(DomainError::not_found("Unit", unit_id))
}
