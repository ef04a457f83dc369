// Layout service - Builds the declarative page layout once at startup
use crate::domain::dashboard::{
    DashboardLayout, PAYLOAD_SCATTER_CHART_ID, PAYLOAD_SLIDER_ID, RangeSlider, SITE_DROPDOWN_ID,
    SUCCESS_PIE_CHART_ID, SiteDropdown, SiteOption,
};
use crate::domain::selection::ALL_SITES;
use crate::domain::table::LaunchTable;
use crate::infrastructure::config::DashboardSettings;

pub fn build_layout(table: &LaunchTable, settings: &DashboardSettings) -> DashboardLayout {
    let mut options = vec![SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(table.sites().into_iter().map(|site| SiteOption {
        label: site.to_string(),
        value: site.to_string(),
    }));

    let (min_payload, max_payload) = table.payload_bounds();

    DashboardLayout {
        title: settings.title.clone(),
        site_dropdown: SiteDropdown {
            id: SITE_DROPDOWN_ID,
            options,
            value: ALL_SITES.to_string(),
            placeholder: "Select a Launch Site".to_string(),
        },
        payload_slider: RangeSlider {
            id: PAYLOAD_SLIDER_ID,
            min: settings.slider_min,
            max: settings.slider_max,
            step: settings.slider_step,
            marks: slider_marks(settings),
            value: [min_payload, max_payload],
        },
        chart_ids: vec![SUCCESS_PIE_CHART_ID, PAYLOAD_SCATTER_CHART_ID],
    }
}

fn slider_marks(settings: &DashboardSettings) -> Vec<f64> {
    // Tolerate rounding in the division so a fractional step still reaches the max mark
    let span = (settings.slider_max - settings.slider_min) / settings.slider_step;
    let steps = (span + 1e-9).floor() as usize;
    (0..=steps)
        .map(|i| settings.slider_min + i as f64 * settings.slider_step)
        .collect()
}
