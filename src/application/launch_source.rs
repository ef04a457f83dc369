// Source trait for launch data access
use crate::domain::launch::LaunchRecord;
use async_trait::async_trait;

#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Human readable location of the data, used in logs
    fn location(&self) -> &str;

    /// Load every launch record from the source
    async fn load_records(&self) -> anyhow::Result<Vec<LaunchRecord>>;
}
