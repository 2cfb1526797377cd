use crate::{
    ActuatorModelService, ActuatorTypeService, DeviceService, DeviceTypeService, HouseService,
    LogService, RoomService, SensorModelService, SensorTypeService, UnitService,
};
use domain::{
    ActuatorModelFactoryImpl, ActuatorTypeFactoryImpl, DeviceFactoryImpl, DeviceTypeFactoryImpl,
    HouseFactoryImpl, LogFactoryImpl, PostalCodeFactory, RoomFactoryImpl, SensorModelFactoryImpl,
    SensorTypeFactoryImpl, UnitFactoryImpl,
};
use infrastructure::Repositories;
use std::sync::Arc;

/// Every use case, wired to one set of repositories and the default factories
pub struct Services {
    pub houses: HouseService,
    pub rooms: RoomService,
    pub devices: DeviceService,
    pub device_types: DeviceTypeService,
    pub units: UnitService,
    pub sensor_types: SensorTypeService,
    pub actuator_types: ActuatorTypeService,
    pub sensor_models: SensorModelService,
    pub actuator_models: ActuatorModelService,
    pub logs: LogService,
}

impl Services {
    pub fn new(repos: &Repositories) -> Self {
        Self::with_postal_codes(repos, PostalCodeFactory::default())
    }

    pub fn with_postal_codes(repos: &Repositories, postal_codes: PostalCodeFactory) -> Self {
        Self {
            houses: HouseService::new(
                repos.houses.clone(),
                Arc::new(HouseFactoryImpl),
                postal_codes,
            ),
            rooms: RoomService::new(
                repos.rooms.clone(),
                repos.houses.clone(),
                Arc::new(RoomFactoryImpl),
            ),
            devices: DeviceService::new(
                repos.devices.clone(),
                repos.rooms.clone(),
                Arc::new(DeviceFactoryImpl),
            ),
            device_types: DeviceTypeService::new(
                repos.device_types.clone(),
                Arc::new(DeviceTypeFactoryImpl),
            ),
            units: UnitService::new(repos.units.clone(), Arc::new(UnitFactoryImpl)),
            sensor_types: SensorTypeService::new(
                repos.sensor_types.clone(),
                repos.units.clone(),
                Arc::new(SensorTypeFactoryImpl),
            ),
            actuator_types: ActuatorTypeService::new(
                repos.actuator_types.clone(),
                repos.units.clone(),
                Arc::new(ActuatorTypeFactoryImpl),
            ),
            sensor_models: SensorModelService::new(
                repos.sensor_models.clone(),
                repos.sensor_types.clone(),
                Arc::new(SensorModelFactoryImpl),
            ),
            actuator_models: ActuatorModelService::new(
                repos.actuator_models.clone(),
                repos.actuator_types.clone(),
                Arc::new(ActuatorModelFactoryImpl),
            ),
            logs: LogService::new(
                repos.logs.clone(),
                repos.devices.clone(),
                Arc::new(LogFactoryImpl),
            ),
        }
    }
}
