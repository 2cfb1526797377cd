mod aggregate;
mod repository;

#[cfg(any(test, feature = "mocks"))]
pub use aggregate::MockActuatorModelFactory;
pub use aggregate::{ActuatorModel, ActuatorModelFactory, ActuatorModelFactoryImpl};
pub use repository::ActuatorModelRepository;
