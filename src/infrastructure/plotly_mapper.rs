// Mapper to convert chart domain models to plotly.js figures
use crate::domain::chart::{Chart, PieChart, ScatterChart, ScatterSeries};
use serde_json::{Value, json};

pub fn chart_to_figure(chart: &Chart) -> Value {
    match chart {
        Chart::Pie(pie) => pie_to_figure(pie),
        Chart::Scatter(scatter) => scatter_to_figure(scatter),
    }
}

pub fn pie_to_figure(pie: &PieChart) -> Value {
    let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<f64> = pie.slices.iter().map(|s| s.value).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
        }],
        "layout": {
            "title": { "text": pie.title },
        },
    })
}

pub fn scatter_to_figure(scatter: &ScatterChart) -> Value {
    let traces: Vec<Value> = scatter.series.iter().map(series_to_trace).collect();

    json!({
        "data": traces,
        "layout": {
            "title": { "text": scatter.title },
            "xaxis": { "title": { "text": scatter.x_label } },
            "yaxis": { "title": { "text": scatter.y_label } },
            "legend": { "title": { "text": "Booster Version Category" } },
        },
    })
}

fn series_to_trace(series: &ScatterSeries) -> Value {
    let x: Vec<f64> = series.points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = series.points.iter().map(|p| p.y).collect();

    json!({
        "type": "scatter",
        "mode": "markers",
        "name": series.name,
        "x": x,
        "y": y,
    })
}
