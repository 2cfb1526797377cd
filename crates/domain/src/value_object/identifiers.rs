use super::validation;
use crate::aggregate::Identifier;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declares a string identifier that rejects blank input.
///
/// Fresh identifiers come from [`generate`](HouseId::generate) (UUID v4),
/// reconstructed ones from `new`.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Result<Self> {
                validation::not_blank($field, id.into()).map(Self)
            }

            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Identifier for $name {
            fn as_str(&self) -> &str {
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
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(HouseId, "house ID");
define_id!(RoomId, "room ID");
define_id!(DeviceId, "device ID");
define_id!(
    /// Identifies a device type, e.g. "Thermostat" or a generated token
    DeviceTypeId,
    "device type ID"
);
define_id!(
    /// Identifies a measurement unit, e.g. "Celsius"
    UnitId,
    "unit ID"
);
define_id!(SensorTypeId, "sensor type ID");
define_id!(ActuatorTypeId, "actuator type ID");
define_id!(SensorId, "sensor ID");
define_id!(LogId, "log ID");

/// Natural key of sensor and actuator models
///
/// Never generated: the path is chosen by whoever registers the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelPath(String);

impl ModelPath {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        validation::trimmed("model path", path.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Identifier for ModelPath {
    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ModelPath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ModelPath> for String {
    fn from(path: ModelPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id() {
        let id = RoomId::new("R1").unwrap();
        assert_eq!(id.as_str(), "R1");
        assert_eq!(id.to_string(), "R1");
    }

    #[test]
    fn test_blank_id_rejected() {
        for raw in ["", "   ", "\t"] {
            let err = LogId::new(raw).unwrap_err();
            assert_eq!(
                err,
                DomainError::validation("log ID", "should not be null, blank, or empty")
            );
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = DeviceId::generate();
        let b = DeviceId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(
            SensorTypeId::new("Temperature").unwrap(),
            SensorTypeId::new("Temperature").unwrap()
        );
        assert_ne!(UnitId::new("Celsius").unwrap(), UnitId::new("Kelvin").unwrap());
    }

    #[test]
    fn test_model_path_trimmed() {
        let path = ModelPath::new(" sensors.TemperatureSensor ").unwrap();
        assert_eq!(path.as_str(), "sensors.TemperatureSensor");
        assert!(ModelPath::new(" ").is_err());
    }

    #[test]
    fn test_serde_revalidates() {
        let id: HouseId = serde_json::from_str("\"H1\"").unwrap();
        assert_eq!(id.as_str(), "H1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"H1\"");
        assert!(serde_json::from_str::<HouseId>("\"  \"").is_err());
    }
}
