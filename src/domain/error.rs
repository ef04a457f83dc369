// Domain errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: class must be 0 or 1, got '{value}'")]
    InvalidClass { row: usize, value: String },

    #[error("row {row}: payload mass '{value}' is not a number")]
    InvalidPayload { row: usize, value: String },

    #[error("dataset contains no launch records")]
    EmptyDataset,

    #[error("invalid payload range [{low}, {high}]")]
    InvalidPayloadRange { low: f64, high: f64 },
}
