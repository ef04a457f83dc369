// CSV launch source - Remote or local launch dataset
use crate::application::launch_source::LaunchSource;
use crate::domain::error::DashboardError;
use crate::domain::launch::{
    BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, LAUNCH_SITE_COLUMN, LaunchOutcome, LaunchRecord,
    PAYLOAD_MASS_COLUMN,
};
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct CsvLaunchSource {
    location: String,
}

impl CsvLaunchSource {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    fn is_remote(&self) -> bool {
        self.location.starts_with("http://") || self.location.starts_with("https://")
    }

    async fn fetch_bytes(&self) -> Result<Vec<u8>> {
        if !self.is_remote() {
            return tokio::fs::read(&self.location)
                .await
                .with_context(|| format!("Failed to read dataset file {}", self.location));
        }

        let response = reqwest::Client::new()
            .get(&self.location)
            .header("Accept", "text/csv")
            .send()
            .await
            .context("Failed to send request for launch dataset")?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Dataset download failed with status {}", status);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read launch dataset body")?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl LaunchSource for CsvLaunchSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn load_records(&self) -> Result<Vec<LaunchRecord>> {
        let bytes = self.fetch_bytes().await?;
        tracing::debug!("Fetched {} bytes from {}", bytes.len(), self.location);
        parse_launch_csv(&decode_latin1(&bytes))
    }
}

/// ISO-8859-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse launch records out of CSV text. Columns other than the required ones are ignored.
pub fn parse_launch_csv(text: &str) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DashboardError::MissingColumn(name))
    };

    let site_idx = column(LAUNCH_SITE_COLUMN)?;
    let class_idx = column(CLASS_COLUMN)?;
    let payload_idx = column(PAYLOAD_MASS_COLUMN)?;
    let booster_idx = column(BOOSTER_CATEGORY_COLUMN)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        // Header is line 1
        let line = i + 2;
        let row = row.with_context(|| format!("Malformed CSV row at line {}", line))?;
        let field = |idx: usize| row.get(idx).unwrap_or_default();

        let payload_raw = field(payload_idx);
        let invalid_payload = || DashboardError::InvalidPayload {
            row: line,
            value: payload_raw.to_string(),
        };
        // f64 parsing accepts "inf" and "NaN"; neither is a usable payload bound
        let payload_mass_kg = payload_raw
            .parse::<f64>()
            .ok()
            .filter(|mass| mass.is_finite())
            .ok_or_else(invalid_payload)?;

        records.push(LaunchRecord::new(
            field(site_idx),
            LaunchOutcome::from_class(line, field(class_idx))?,
            payload_mass_kg,
            field(booster_idx),
        ));
    }

    Ok(records)
}
