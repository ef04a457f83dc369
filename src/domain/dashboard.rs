// Dashboard layout domain model
use serde::Serialize;

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SUCCESS_PIE_CHART_ID: &str = "success-pie-chart";
pub const PAYLOAD_SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteDropdown {
    pub id: &'static str,
    pub options: Vec<SiteOption>,
    pub value: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    /// Initial selection: the payload bounds of the loaded table
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: RangeSlider,
    pub chart_ids: Vec<&'static str>,
}
