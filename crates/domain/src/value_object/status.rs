use crate::error::{DomainError, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Whether a device is in service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceStatus(bool);

impl DeviceStatus {
    pub const ACTIVE: Self = Self(true);
    pub const INACTIVE: Self = Self(false);

    pub fn new(active: bool) -> Self {
        Self(active)
    }

    pub fn is_active(&self) -> bool {
        self.0
    }
}

impl From<DeviceStatus> for bool {
    fn from(status: DeviceStatus) -> Self {
        status.0
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "Active" } else { "Inactive" })
    }
}

/// Closed time window `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DatePeriod {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DatePeriod {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(DomainError::validation(
                "time period",
                format!("start {start} is after end {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}
