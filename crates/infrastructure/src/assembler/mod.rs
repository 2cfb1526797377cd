//! Conversion between aggregates and their persisted records.
//!
//! `to_domain` rebuilds every value object from the stored primitives, so
//! corrupt rows fail with the same validation errors as bad user input,
//! and hands them to the factory's reconstruction path.

mod catalogue;
mod device;
mod house;
mod log;
mod model;
mod room;

pub use catalogue::{
    ActuatorTypeDataModelAssembler, DeviceTypeDataModelAssembler, SensorTypeDataModelAssembler,
    UnitDataModelAssembler,
};
pub use device::DeviceDataModelAssembler;
pub use house::HouseDataModelAssembler;
pub use log::LogDataModelAssembler;
pub use model::{ActuatorModelDataModelAssembler, SensorModelDataModelAssembler};
pub use room::RoomDataModelAssembler;

use crate::database::entities::PersistedRecord;
use domain::error::Result;
use domain::{AggregateRoot, DomainError};

pub trait DataModelAssembler: Send + Sync + 'static {
    type Record: PersistedRecord;
    type Aggregate: AggregateRoot;

    /// Plural noun used when rejecting an empty list
    const PLURAL: &'static str;

    fn to_domain(&self, record: &Self::Record) -> Result<Self::Aggregate>;

    fn to_record(&self, aggregate: &Self::Aggregate) -> Self::Record;

    /// Converts every record, failing on the first invalid one.
    ///
    /// An empty input is a caller error ([`DomainError::EmptyList`]), not an
    /// empty result.
    fn to_domain_list(&self, records: &[Self::Record]) -> Result<Vec<Self::Aggregate>> {
        if records.is_empty() {
            return Err(DomainError::EmptyList(Self::PLURAL));
        }
        records.iter().map(|record| self.to_domain(record)).collect()
    }
}
