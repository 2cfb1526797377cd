//! Country-specific postal codes
//!
//! The set of supported countries is open: [`PostalCodeFactory`] is a
//! registry from ISO country code to a parser, filled once when the factory
//! is built and extendable through [`PostalCodeFactory::register`].

use crate::error::{DomainError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Validates a raw postal code for one country and returns its canonical form.
pub type PostalCodeParser = fn(&str) -> std::result::Result<String, String>;

/// Postal code already validated against the rules of its country
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostalCode {
    value: String,
    country_code: String,
}

impl PostalCode {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Builds [`PostalCode`]s by dispatching on the country code
#[derive(Clone)]
pub struct PostalCodeFactory {
    parsers: HashMap<String, PostalCodeParser>,
}

impl PostalCodeFactory {
    /// Registry without any country
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Registers (or replaces) the parser for `country_code`
    pub fn register(&mut self, country_code: &str, parser: PostalCodeParser) -> &mut Self {
        self.parsers.insert(normalize_country(country_code), parser);
        self
    }

    pub fn supports(&self, country_code: &str) -> bool {
        self.parsers.contains_key(&normalize_country(country_code))
    }

    pub fn create(&self, postal_code: &str, country_code: &str) -> Result<PostalCode> {
        let country_code = normalize_country(country_code);
        if country_code.is_empty() {
            return Err(DomainError::validation(
                "country code",
                "should not be null, blank, or empty",
            ));
        }

        let parser = self
            .parsers
            .get(&country_code)
            .ok_or_else(|| DomainError::UnsupportedRegion(country_code.clone()))?;

        match parser(postal_code.trim()) {
            Ok(value) => Ok(PostalCode {
                value,
                country_code,
            }),
            Err(reason) => Err(DomainError::PostalCodeConstruction {
                country_code,
                reason,
            }),
        }
    }
}

impl Default for PostalCodeFactory {
    /// Registry with PT, ES, US and CA
    fn default() -> Self {
        let mut factory = Self::empty();
        factory
            .register("PT", portugal)
            .register("ES", spain)
            .register("US", united_states)
            .register("CA", canada);
        factory
    }
}

impl fmt::Debug for PostalCodeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut countries: Vec<_> = self.parsers.keys().collect();
        countries.sort();
        f.debug_struct("PostalCodeFactory")
            .field("countries", &countries)
            .finish()
    }
}

fn normalize_country(country_code: &str) -> String {
    country_code.trim().to_ascii_uppercase()
}

static PT: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d{4}-\d{3}$"));
static ES: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d{5}$"));
static US: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d{5}(-\d{4})?$"));
static CA: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Z]\d[A-Z] ?\d[A-Z]\d$"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("postal code patterns are valid")
}

fn portugal(raw: &str) -> std::result::Result<String, String> {
    if PT.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(format!("'{raw}' does not match NNNN-NNN"))
    }
}

fn spain(raw: &str) -> std::result::Result<String, String> {
    if ES.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(format!("'{raw}' does not match NNNNN"))
    }
}

fn united_states(raw: &str) -> std::result::Result<String, String> {
    if US.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(format!("'{raw}' is not a ZIP or ZIP+4 code"))
    }
}

fn canada(raw: &str) -> std::result::Result<String, String> {
    let upper = raw.to_ascii_uppercase();
    if !CA.is_match(&upper) {
        return Err(format!("'{raw}' does not match ANA NAN"));
    }
    let compact: String = upper.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(format!("{} {}", &compact[..3], &compact[3..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_postal_code() {
        let factory = PostalCodeFactory::default();
        let code = factory.create("4000-009", "PT").unwrap();
        assert_eq!(code.value(), "4000-009");
        assert_eq!(code.country_code(), "PT");
    }

    #[test]
    fn test_unknown_country() {
        let factory = PostalCodeFactory::default();
        assert_eq!(
            factory.create("4000-009", "ZZ").unwrap_err(),
            DomainError::UnsupportedRegion("ZZ".to_string())
        );
    }

    #[test]
    fn test_malformed_value() {
        let factory = PostalCodeFactory::default();
        let err = factory.create("40000", "PT").unwrap_err();
        assert!(matches!(
            err,
            DomainError::PostalCodeConstruction { ref country_code, .. } if country_code == "PT"
        ));
    }

    #[test]
    fn test_country_code_case_insensitive() {
        let factory = PostalCodeFactory::default();
        assert_eq!(factory.create("28012", "es").unwrap().country_code(), "ES");
    }

    #[test]
    fn test_canadian_code_normalized() {
        let factory = PostalCodeFactory::default();
        assert_eq!(factory.create("k1a0b1", "CA").unwrap().value(), "K1A 0B1");
        assert_eq!(factory.create("K1A 0B1", "CA").unwrap().value(), "K1A 0B1");
    }

    #[test]
    fn test_us_zip_plus_four() {
        let factory = PostalCodeFactory::default();
        assert!(factory.create("94043", "US").is_ok());
        assert!(factory.create("94043-1351", "US").is_ok());
        assert!(factory.create("9404", "US").is_err());
    }

    #[test]
    fn test_register_new_country() {
        fn france(raw: &str) -> std::result::Result<String, String> {
            if raw.len() == 5 && raw.chars().all(|c| c.is_ascii_digit()) {
                Ok(raw.to_string())
            } else {
                Err("expected five digits".to_string())
            }
        }

        let mut factory = PostalCodeFactory::empty();
        assert!(!factory.supports("FR"));
        factory.register("fr", france);
        assert!(factory.supports("FR"));
        assert_eq!(factory.create("75001", "FR").unwrap().value(), "75001");
    }

    #[test]
    fn test_blank_country_code() {
        let factory = PostalCodeFactory::default();
        assert!(factory.create("4000-009", " ").unwrap_err().is_validation());
    }
}
