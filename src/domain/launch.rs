// Launch record domain model
use crate::domain::error::DashboardError;

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const CLASS_COLUMN: &str = "class";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchOutcome {
    Success,
    Failure,
}

impl LaunchOutcome {
    pub fn from_class(row: usize, raw: &str) -> Result<Self, DashboardError> {
        // Accept both integer and float spellings of the flag
        match raw.trim() {
            "1" | "1.0" => Ok(Self::Success),
            "0" | "0.0" => Ok(Self::Failure),
            other => Err(DashboardError::InvalidClass {
                row,
                value: other.to_string(),
            }),
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Self::Success => 1,
            Self::Failure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub outcome: LaunchOutcome,
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        outcome: LaunchOutcome,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            outcome,
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn class(&self) -> u8 {
        self.outcome.class()
    }

    pub fn is_success(&self) -> bool {
        self.outcome == LaunchOutcome::Success
    }
}
