//! Assemblers for the reference catalogue: device types, units, sensor
//! types and actuator types.

use super::DataModelAssembler;
use crate::database::entities::{
    ActuatorTypeRecord, DeviceTypeRecord, SensorTypeRecord, UnitRecord,
};
use domain::error::Result;
use domain::value_object::{
    ActuatorTypeId, DeviceTypeId, SensorTypeId, TypeDescription, UnitDescription, UnitId,
    UnitSymbol,
};
use domain::{
    ActuatorType, ActuatorTypeFactory, ActuatorTypeFactoryImpl, DeviceType, DeviceTypeFactory,
    DeviceTypeFactoryImpl, SensorType, SensorTypeFactory, SensorTypeFactoryImpl, Unit,
    UnitFactory, UnitFactoryImpl,
};

pub struct DeviceTypeDataModelAssembler<F = DeviceTypeFactoryImpl> {
    factory: F,
}

impl<F: DeviceTypeFactory> DeviceTypeDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for DeviceTypeDataModelAssembler {
    fn default() -> Self {
        Self::new(DeviceTypeFactoryImpl)
    }
}

impl<F: DeviceTypeFactory + 'static> DataModelAssembler for DeviceTypeDataModelAssembler<F> {
    type Record = DeviceTypeRecord;
    type Aggregate = DeviceType;
    const PLURAL: &'static str = "device types";

    fn to_domain(&self, record: &DeviceTypeRecord) -> Result<DeviceType> {
        let id = DeviceTypeId::new(record.device_type_id.as_str())?;
        let description = TypeDescription::new(record.description.as_str())?;
        Ok(self.factory.create_device_type_with_id(id, description))
    }

    fn to_record(&self, device_type: &DeviceType) -> DeviceTypeRecord {
        DeviceTypeRecord::from(device_type)
    }
}

pub struct UnitDataModelAssembler<F = UnitFactoryImpl> {
    factory: F,
}

impl<F: UnitFactory> UnitDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for UnitDataModelAssembler {
    fn default() -> Self {
        Self::new(UnitFactoryImpl)
    }
}

impl<F: UnitFactory + 'static> DataModelAssembler for UnitDataModelAssembler<F> {
    type Record = UnitRecord;
    type Aggregate = Unit;
    const PLURAL: &'static str = "units";

    fn to_domain(&self, record: &UnitRecord) -> Result<Unit> {
        let id = UnitId::new(record.unit_id.as_str())?;
        let description = UnitDescription::new(record.description.as_str())?;
        let symbol = UnitSymbol::new(record.symbol.as_str())?;
        Ok(self.factory.create_unit_with_id(id, description, symbol))
    }

    fn to_record(&self, unit: &Unit) -> UnitRecord {
        UnitRecord::from(unit)
    }
}

pub struct SensorTypeDataModelAssembler<F = SensorTypeFactoryImpl> {
    factory: F,
}

impl<F: SensorTypeFactory> SensorTypeDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for SensorTypeDataModelAssembler {
    fn default() -> Self {
        Self::new(SensorTypeFactoryImpl)
    }
}

impl<F: SensorTypeFactory + 'static> DataModelAssembler for SensorTypeDataModelAssembler<F> {
    type Record = SensorTypeRecord;
    type Aggregate = SensorType;
    const PLURAL: &'static str = "sensor types";

    fn to_domain(&self, record: &SensorTypeRecord) -> Result<SensorType> {
        let id = SensorTypeId::new(record.sensor_type_id.as_str())?;
        let description = TypeDescription::new(record.description.as_str())?;
        let unit_id = UnitId::new(record.unit_id.as_str())?;
        Ok(self
            .factory
            .create_sensor_type_with_id(id, description, unit_id))
    }

    fn to_record(&self, sensor_type: &SensorType) -> SensorTypeRecord {
        SensorTypeRecord::from(sensor_type)
    }
}

pub struct ActuatorTypeDataModelAssembler<F = ActuatorTypeFactoryImpl> {
    factory: F,
}

impl<F: ActuatorTypeFactory> ActuatorTypeDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for ActuatorTypeDataModelAssembler {
    fn default() -> Self {
        Self::new(ActuatorTypeFactoryImpl)
    }
}

impl<F: ActuatorTypeFactory + 'static> DataModelAssembler for ActuatorTypeDataModelAssembler<F> {
    type Record = ActuatorTypeRecord;
    type Aggregate = ActuatorType;
    const PLURAL: &'static str = "actuator types";

    fn to_domain(&self, record: &ActuatorTypeRecord) -> Result<ActuatorType> {
        let id = ActuatorTypeId::new(record.actuator_type_id.as_str())?;
        let description = TypeDescription::new(record.description.as_str())?;
        let unit_id = UnitId::new(record.unit_id.as_str())?;
        Ok(self
            .factory
            .create_actuator_type_with_id(id, description, unit_id))
    }

    fn to_record(&self, actuator_type: &ActuatorType) -> ActuatorTypeRecord {
        ActuatorTypeRecord::from(actuator_type)
    }
}
