// HTTP request handlers
use crate::domain::chart::Chart;
use crate::domain::dashboard::DashboardLayout;
use crate::domain::error::DashboardError;
use crate::domain::selection::{ALL_SITES, PayloadRange, SiteSelection};
use crate::infrastructure::plotly_mapper::chart_to_figure;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SiteQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

pub struct ApiError(DashboardError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected chart request: {}", self.0);
        let body = Json(json!({ "error": self.0.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        Self(err)
    }
}

fn site_selection(site: Option<&str>) -> SiteSelection {
    SiteSelection::parse(site.unwrap_or(ALL_SITES))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page_html.clone())
}

/// Declarative layout: dropdown options, slider settings and chart slots
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.layout.clone())
}

/// Success pie chart for the selected site
pub async fn success_pie(
    Query(query): Query<SiteQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Value> {
    let site = site_selection(query.site.as_deref());
    let chart = Chart::Pie(state.chart_service.success_pie(&site));
    tracing::debug!("Rendering chart '{}'", chart.title());
    Json(chart_to_figure(&chart))
}

/// Payload vs. outcome scatter plot for the selected site and payload range
pub async fn payload_scatter(
    Query(query): Query<ScatterQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let site = site_selection(query.site.as_deref());
    let bounds = state.chart_service.table().full_payload_range();
    let range = PayloadRange::new(
        query.low.unwrap_or(bounds.low),
        query.high.unwrap_or(bounds.high),
    )?;

    let scatter = state.chart_service.payload_scatter(&site, &range);
    tracing::debug!("Rendering chart '{}' with {} points", scatter.title, scatter.point_count());
    Ok(Json(chart_to_figure(&Chart::Scatter(scatter))))
}
