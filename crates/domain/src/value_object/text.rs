use super::validation;
use crate::error::{DomainError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Declares a trimmed, non-blank string value object of at most `$max` chars.
macro_rules! bounded_text {
    ($(#[$meta:meta])* $name:ident, $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MAX_CHARS: usize = $max;

            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = validation::trimmed($field, value.into())?;
                validation::max_chars($field, &value, Self::MAX_CHARS)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_text!(RoomName, "room name", 50);
bounded_text!(
    /// Description shared by device, sensor and actuator types
    TypeDescription,
    "description",
    50
);
bounded_text!(UnitDescription, "unit description", 50);
bounded_text!(
    /// Short unit symbol such as "C" or "kWh"
    UnitSymbol,
    "unit symbol",
    5
);
bounded_text!(SensorModelName, "sensor model name", 100);
bounded_text!(ActuatorModelName, "actuator model name", 100);
bounded_text!(
    /// Raw reading recorded in a log entry
    ReadingValue,
    "reading value",
    255
);

static DEVICE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9 ]+$").expect("device name pattern is valid"));

/// Device name: letters, digits and spaces only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceName(String);

impl DeviceName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = validation::trimmed("device name", name.into())?;
        if !DEVICE_NAME.is_match(&name) {
            return Err(DomainError::validation(
                "device name",
                "may only contain letters, digits and spaces",
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DeviceName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DeviceName> for String {
    fn from(name: DeviceName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_name_trimmed() {
        let name = RoomName::new("  Living Room ").unwrap();
        assert_eq!(name.as_str(), "Living Room");
    }

    #[test]
    fn test_unit_symbol_length() {
        assert!(UnitSymbol::new("kWh").is_ok());
        assert!(UnitSymbol::new("12345").is_ok());
        let err = UnitSymbol::new("123456").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_unit_description_length() {
        assert!(UnitDescription::new("Celsius").is_ok());
        assert!(UnitDescription::new("a".repeat(51)).is_err());
    }

    #[test]
    fn test_type_description_blank() {
        assert!(TypeDescription::new("").is_err());
        assert!(TypeDescription::new("  ").is_err());
    }

    #[test]
    fn test_device_name() {
        assert_eq!(DeviceName::new(" Lamp 2 ").unwrap().as_str(), "Lamp 2");
        assert!(DeviceName::new("Lamp#2").is_err());
        assert!(DeviceName::new("").is_err());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(
            SensorModelName::new("GA100K").unwrap(),
            SensorModelName::new("GA100K").unwrap()
        );
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<UnitSymbol>("\"toolong\"").is_err());
        let symbol: UnitSymbol = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(symbol.as_str(), "C");
    }
}
