use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A value object rejected its raw input
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{entity} with ID {id} already exists.")]
    DuplicateIdentity { entity: &'static str, id: String },

    /// A referenced aggregate is missing (raised by use cases, never by lookups)
    #[error("{entity} with ID {id} not found.")]
    NotFound { entity: &'static str, id: String },

    #[error("Postal code implementation not found for country code: {0}")]
    UnsupportedRegion(String),

    #[error("Could not create postal code for country code {country_code}: {reason}")]
    PostalCodeConstruction {
        country_code: String,
        reason: String,
    },

    #[error("Operation not supported: {0}")]
    UnsupportedOperation(&'static str),

    #[error("The list of {0} cannot be null or empty.")]
    EmptyList(&'static str),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn duplicate(entity: &'static str, id: impl ToString) -> Self {
        Self::DuplicateIdentity {
            entity,
            id: id.to_string(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
