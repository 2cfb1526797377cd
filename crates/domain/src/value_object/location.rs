use super::validation;
use crate::error::Result;
use crate::postal_code::{PostalCode, PostalCodeFactory};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Geographic coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gps {
    latitude: f64,
    longitude: f64,
}

impl Gps {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            latitude: validation::within("latitude", latitude, -90.0, 90.0)?,
            longitude: validation::within("longitude", longitude, -180.0, 180.0)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Eq for Gps {}

impl Hash for Gps {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 and 0.0 compare equal, so hash them alike
        (self.latitude + 0.0).to_bits().hash(state);
        (self.longitude + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Gps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Street address of a house
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    street: String,
    door_number: String,
    postal_code: PostalCode,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        door_number: impl Into<String>,
        postal_code: PostalCode,
    ) -> Result<Self> {
        Ok(Self {
            street: validation::trimmed("street", street.into())?,
            door_number: validation::trimmed("door number", door_number.into())?,
            postal_code,
        })
    }

    /// Builds the address from raw input, resolving the postal code through
    /// the country registry.
    pub fn from_raw(
        street: impl Into<String>,
        door_number: impl Into<String>,
        postal_code: &str,
        country_code: &str,
        postal_codes: &PostalCodeFactory,
    ) -> Result<Self> {
        let street = street.into();
        let door_number = door_number.into();
        let postal_code = postal_codes.create(postal_code, country_code)?;
        Self::new(street, door_number, postal_code)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn door_number(&self) -> &str {
        &self.door_number
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn country_code(&self) -> &str {
        self.postal_code.country_code()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.street,
            self.door_number,
            self.postal_code,
            self.country_code()
        )
    }
}
