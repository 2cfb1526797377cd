//! Domain layer - Smart home model with no persistence concerns
//!
//! This crate contains:
//! - Value objects (names, descriptions, coordinates, dimensions)
//! - Identifiers and aggregate roots with identity-based equality
//! - Factories, one per aggregate, plus the postal code registry
//! - Repository interfaces (traits)
//!
//! Principles:
//! - Invalid input never produces an object
//! - Aggregates reference each other by ID, never by object graph
//! - Storage backends are interchangeable behind the repository traits

pub mod actuator_model;
pub mod actuator_type;
pub mod aggregate;
pub mod device;
pub mod device_type;
pub mod error;
pub mod house;
pub mod log;
pub mod postal_code;
pub mod repository;
pub mod room;
pub mod sensor_model;
pub mod sensor_type;
pub mod unit;
pub mod value_object;

// Re-export commonly used types
pub use actuator_model::{
    ActuatorModel, ActuatorModelFactory, ActuatorModelFactoryImpl, ActuatorModelRepository,
};
pub use actuator_type::{ActuatorType, ActuatorTypeFactory, ActuatorTypeFactoryImpl};
pub use aggregate::{AggregateRoot, Identifier};
pub use device::{Device, DeviceFactory, DeviceFactoryImpl, DeviceRepository};
pub use device_type::{DeviceType, DeviceTypeFactory, DeviceTypeFactoryImpl};
pub use error::DomainError;
pub use house::{House, HouseFactory, HouseFactoryImpl};
pub use log::{Log, LogFactory, LogFactoryImpl, LogReading, LogRepository};
pub use postal_code::{PostalCode, PostalCodeFactory};
pub use repository::Repository;
pub use room::{Room, RoomFactory, RoomFactoryImpl};
pub use sensor_model::{
    SensorModel, SensorModelFactory, SensorModelFactoryImpl, SensorModelRepository,
};
pub use sensor_type::{SensorType, SensorTypeFactory, SensorTypeFactoryImpl};
pub use unit::{Unit, UnitFactory, UnitFactoryImpl};
