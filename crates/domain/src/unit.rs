use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{UnitDescription, UnitId, UnitSymbol};
use serde::Serialize;

/// Measurement unit, e.g. Celsius / C
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    id: UnitId,
    description: UnitDescription,
    symbol: UnitSymbol,
}

impl Unit {
    pub(crate) fn new(id: UnitId, description: UnitDescription, symbol: UnitSymbol) -> Self {
        Self {
            id,
            description,
            symbol,
        }
    }

    pub fn description(&self) -> &UnitDescription {
        &self.description
    }

    pub fn symbol(&self) -> &UnitSymbol {
        &self.symbol
    }
}

impl AggregateRoot for Unit {
    type Id = UnitId;
    const KIND: &'static str = "Unit";

    fn id(&self) -> &UnitId {
        &self.id
    }
}

identity_equality!(Unit);

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait UnitFactory: Send + Sync {
    fn create_unit(&self, description: UnitDescription, symbol: UnitSymbol) -> Unit;

    fn create_unit_with_id(
        &self,
        id: UnitId,
        description: UnitDescription,
        symbol: UnitSymbol,
    ) -> Unit;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitFactoryImpl;

impl UnitFactory for UnitFactoryImpl {
    fn create_unit(&self, description: UnitDescription, symbol: UnitSymbol) -> Unit {
        Unit::new(UnitId::generate(), description, symbol)
    }

    fn create_unit_with_id(
        &self,
        id: UnitId,
        description: UnitDescription,
        symbol: UnitSymbol,
    ) -> Unit {
        Unit::new(id, description, symbol)
    }
}
