// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::domain::dashboard::DashboardLayout;

#[derive(Clone)]
pub struct AppState {
    pub chart_service: ChartService,
    pub layout: DashboardLayout,
    /// Rendered once at startup
    pub page_html: String,
}
