//! Application layer - Use cases over the smart home aggregates
//!
//! Services validate raw input through the domain value objects, check
//! that referenced aggregates exist and persist through the repository
//! traits. They never see persisted records.

pub mod catalogue;
pub mod device;
pub mod house;
pub mod log;
pub mod model;
pub mod room;
pub mod services;

pub use catalogue::{ActuatorTypeService, DeviceTypeService, SensorTypeService, UnitService};
pub use device::DeviceService;
pub use house::HouseService;
pub use log::LogService;
pub use model::{ActuatorModelService, SensorModelService};
pub use room::RoomService;
pub use services::Services;
