mod aggregate;
mod repository;

#[cfg(any(test, feature = "mocks"))]
pub use aggregate::MockLogFactory;
pub use aggregate::{Log, LogFactory, LogFactoryImpl, LogReading};
pub use repository::LogRepository;
