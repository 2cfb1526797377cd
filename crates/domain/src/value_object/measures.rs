use super::validation;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Room dimensions in metres; every side strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    width: f64,
    depth: f64,
    height: f64,
}

impl Dimension {
    pub fn new(width: f64, depth: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: validation::positive("width", width)?,
            depth: validation::positive("depth", depth)?,
            height: validation::positive("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

// NaN and signed zero are rejected at construction, so bitwise hashing
// agrees with `==`.
impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.depth.to_bits().hash(state);
        self.height.to_bits().hash(state);
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.depth, self.height)
    }
}

/// Floor number; negative values are basements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomFloor(i32);

impl RoomFloor {
    pub fn new(floor: i32) -> Self {
        Self(floor)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for RoomFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use std::collections::HashSet;

    #[test]
    fn test_valid_dimension() {
        let dimension = Dimension::new(10.0, 10.0, 10.0).unwrap();
        assert_eq!(dimension.width(), 10.0);
        assert_eq!(dimension.to_string(), "10x10x10");
    }

    #[test]
    fn test_non_positive_sides_rejected() {
        assert_eq!(
            Dimension::new(0.0, 1.0, 1.0).unwrap_err(),
            DomainError::validation("width", "must be positive")
        );
        assert!(Dimension::new(1.0, -2.0, 1.0).is_err());
        assert!(Dimension::new(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_dimension_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(Dimension::new(2.0, 3.0, 4.0).unwrap());
        assert!(set.contains(&Dimension::new(2.0, 3.0, 4.0).unwrap()));
        assert!(!set.contains(&Dimension::new(2.0, 3.0, 5.0).unwrap()));
    }

    #[test]
    fn test_room_floor() {
        assert_eq!(RoomFloor::new(-1).value(), -1);
        assert_eq!(RoomFloor::new(1), RoomFloor::new(1));
    }
}
