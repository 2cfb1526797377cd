use domain::error::Result;
use domain::value_object::{Address, Gps, HouseId};
use domain::{AggregateRoot, House, HouseFactory, PostalCodeFactory, Repository};
use std::sync::Arc;
use tracing::info;

/// Raw house input as entered by a user
#[derive(Debug, Clone)]
pub struct HouseInput {
    pub street: String,
    pub door_number: String,
    pub postal_code: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

pub struct HouseService {
    repository: Arc<dyn Repository<HouseId, House>>,
    factory: Arc<dyn HouseFactory>,
    postal_codes: PostalCodeFactory,
}

impl HouseService {
    pub fn new(
        repository: Arc<dyn Repository<HouseId, House>>,
        factory: Arc<dyn HouseFactory>,
        postal_codes: PostalCodeFactory,
    ) -> Self {
        Self {
            repository,
            factory,
            postal_codes,
        }
    }

    pub async fn configure_house(&self, input: HouseInput) -> Result<House> {
        let address = Address::from_raw(
            input.street,
            input.door_number,
            &input.postal_code,
            &input.country_code,
            &self.postal_codes,
        )?;
        let gps = Gps::new(input.latitude, input.longitude)?;

        let house = self.repository.save(self.factory.create_house(address, gps)).await?;
        info!(
            house_id = %house.id(),
            postal_code = %house.address().postal_code(),
            "House configured"
        );
        Ok(house)
    }

    pub async fn get_houses(&self) -> Result<Vec<House>> {
        self.repository.find_all().await
    }
}
