use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{Address, Gps, HouseId};
use serde::Serialize;

/// The house being automated, located by address and GPS position
#[derive(Debug, Clone, Serialize)]
pub struct House {
    id: HouseId,
    address: Address,
    gps: Gps,
}

impl House {
    pub(crate) fn new(id: HouseId, address: Address, gps: Gps) -> Self {
        Self { id, address, gps }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn gps(&self) -> &Gps {
        &self.gps
    }
}

impl AggregateRoot for House {
    type Id = HouseId;
    const KIND: &'static str = "House";

    fn id(&self) -> &HouseId {
        &self.id
    }
}

identity_equality!(House);

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait HouseFactory: Send + Sync {
    fn create_house(&self, address: Address, gps: Gps) -> House;

    fn create_house_with_id(&self, id: HouseId, address: Address, gps: Gps) -> House;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HouseFactoryImpl;

impl HouseFactory for HouseFactoryImpl {
    fn create_house(&self, address: Address, gps: Gps) -> House {
        House::new(HouseId::generate(), address, gps)
    }

    fn create_house_with_id(&self, id: HouseId, address: Address, gps: Gps) -> House {
        House::new(id, address, gps)
    }
}
