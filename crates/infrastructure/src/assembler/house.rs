use super::DataModelAssembler;
use crate::database::entities::HouseRecord;
use domain::error::Result;
use domain::value_object::{Address, Gps, HouseId};
use domain::{House, HouseFactory, HouseFactoryImpl, PostalCodeFactory};

/// Needs the postal code registry to rebuild the address
pub struct HouseDataModelAssembler<F = HouseFactoryImpl> {
    factory: F,
    postal_codes: PostalCodeFactory,
}

impl<F: HouseFactory> HouseDataModelAssembler<F> {
    pub fn new(factory: F, postal_codes: PostalCodeFactory) -> Self {
        Self {
            factory,
            postal_codes,
        }
    }
}

impl Default for HouseDataModelAssembler {
    fn default() -> Self {
        Self::new(HouseFactoryImpl, PostalCodeFactory::default())
    }
}

impl<F: HouseFactory + 'static> DataModelAssembler for HouseDataModelAssembler<F> {
    type Record = HouseRecord;
    type Aggregate = House;
    const PLURAL: &'static str = "houses";

    fn to_domain(&self, record: &HouseRecord) -> Result<House> {
        let id = HouseId::new(record.house_id.as_str())?;
        let address = Address::from_raw(
            record.street.as_str(),
            record.door_number.as_str(),
            &record.postal_code,
            &record.country_code,
            &self.postal_codes,
        )?;
        let gps = Gps::new(record.latitude, record.longitude)?;

        Ok(self.factory.create_house_with_id(id, address, gps))
    }

    fn to_record(&self, house: &House) -> HouseRecord {
        HouseRecord::from(house)
    }
}
