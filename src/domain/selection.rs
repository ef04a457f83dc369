// Control selections: launch site dropdown and payload range slider
use crate::domain::error::DashboardError;
use serde::Serialize;

pub const ALL_SITES: &str = "ALL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value. `ALL` selects every site; an empty value falls back to `ALL`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | ALL_SITES => Self::All,
            site => Self::Site(site.to_string()),
        }
    }

    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => site == launch_site,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, DashboardError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(DashboardError::InvalidPayloadRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}
