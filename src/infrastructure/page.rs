// HTML page rendering for the dashboard layout
use crate::domain::dashboard::{DashboardLayout, PAYLOAD_SCATTER_CHART_ID, SUCCESS_PIE_CHART_ID};
use anyhow::Context;
use minijinja::{Environment, context};

const DASHBOARD_TEMPLATE: &str = include_str!("../../templates/dashboard.html");

pub fn render_page(layout: &DashboardLayout) -> anyhow::Result<String> {
    let mut env = Environment::new();
    env.add_template("dashboard.html", DASHBOARD_TEMPLATE)
        .context("Failed to parse dashboard template")?;

    env.get_template("dashboard.html")?
        .render(context! {
            layout => layout,
            pie_chart_id => SUCCESS_PIE_CHART_ID,
            scatter_chart_id => PAYLOAD_SCATTER_CHART_ID,
        })
        .context("Failed to render dashboard page")
}
