pub mod entity;
pub mod factory;
pub mod repository;

pub use entity::Device;
#[cfg(any(test, feature = "mocks"))]
pub use factory::MockDeviceFactory;
pub use factory::{DeviceFactory, DeviceFactoryImpl};
pub use repository::DeviceRepository;
