//! Immutable, self-validating value objects
//!
//! Every constructor validates its input and fails with
//! [`DomainError::Validation`](crate::DomainError::Validation); there is no
//! way to hold an invalid instance.

pub mod identifiers;
pub mod location;
pub mod measures;
pub mod status;
pub mod text;
mod validation;

pub use identifiers::{
    ActuatorTypeId, DeviceId, DeviceTypeId, HouseId, LogId, ModelPath, RoomId, SensorId,
    SensorTypeId, UnitId,
};
pub use location::{Address, Gps};
pub use measures::{Dimension, RoomFloor};
pub use status::{DatePeriod, DeviceStatus};
pub use text::{
    ActuatorModelName, DeviceName, ReadingValue, RoomName, SensorModelName, TypeDescription,
    UnitDescription, UnitSymbol,
};
