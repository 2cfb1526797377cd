mod aggregate;
mod repository;

#[cfg(any(test, feature = "mocks"))]
pub use aggregate::MockSensorModelFactory;
pub use aggregate::{SensorModel, SensorModelFactory, SensorModelFactoryImpl};
pub use repository::SensorModelRepository;
