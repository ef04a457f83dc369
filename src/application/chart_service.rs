// Chart service - Recomputes the two dashboard charts from the control values
use crate::domain::chart::{PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
use crate::domain::launch::{CLASS_COLUMN, LaunchRecord, PAYLOAD_MASS_COLUMN};
use crate::domain::selection::{PayloadRange, SiteSelection};
use crate::domain::table::LaunchTable;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    table: Arc<LaunchTable>,
}

impl ChartService {
    pub fn new(table: Arc<LaunchTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    /// Successful launches per site for `ALL`, otherwise the outcome split of one site.
    pub fn success_pie(&self, site: &SiteSelection) -> PieChart {
        match site {
            SiteSelection::All => {
                let successes: Vec<&LaunchRecord> = self
                    .table
                    .records()
                    .iter()
                    .filter(|r| r.is_success())
                    .collect();

                let mut slices: Vec<PieSlice> = Vec::new();
                for record in successes {
                    let class = f64::from(record.class());
                    match slices.iter_mut().find(|s| s.label == record.launch_site) {
                        Some(slice) => slice.value += class,
                        None => slices.push(PieSlice {
                            label: record.launch_site.clone(),
                            value: class,
                        }),
                    }
                }

                PieChart {
                    title: "Total Successful Launches by Site".to_string(),
                    slices,
                }
            }
            SiteSelection::Site(name) => {
                let mut slices: Vec<PieSlice> = Vec::new();
                for record in self.table.filter(site, None) {
                    let label = record.outcome.label();
                    match slices.iter_mut().find(|s| s.label == label) {
                        Some(slice) => slice.value += 1.0,
                        None => slices.push(PieSlice {
                            label: label.to_string(),
                            value: 1.0,
                        }),
                    }
                }

                tracing::debug!("Outcome pie for {}: {} slices", name, slices.len());

                PieChart {
                    title: format!("Launch Outcomes for {}", name),
                    slices,
                }
            }
        }
    }

    /// Payload mass against outcome, one series per booster version category.
    pub fn payload_scatter(&self, site: &SiteSelection, range: &PayloadRange) -> ScatterChart {
        let rows = self.table.filter(site, Some(range));

        let mut series: Vec<ScatterSeries> = Vec::new();
        for record in &rows {
            let point = ScatterPoint {
                x: record.payload_mass_kg,
                y: f64::from(record.class()),
            };
            match series
                .iter_mut()
                .find(|s| s.name == record.booster_version_category)
            {
                Some(existing) => existing.points.push(point),
                None => series.push(ScatterSeries {
                    name: record.booster_version_category.clone(),
                    points: vec![point],
                }),
            }
        }

        let title = match site {
            SiteSelection::All => "Payload vs. Success Outcomes for All Sites".to_string(),
            SiteSelection::Site(name) => format!("Payload vs. Success Outcomes for {}", name),
        };

        tracing::debug!(
            "Scatter [{}, {}] for {:?}: {} rows",
            range.low,
            range.high,
            site,
            rows.len()
        );

        ScatterChart {
            title,
            x_label: PAYLOAD_MASS_COLUMN.to_string(),
            y_label: CLASS_COLUMN.to_string(),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::launch::LaunchOutcome;
    use crate::domain::table::tests::sample_table;

    fn service() -> ChartService {
        ChartService::new(Arc::new(sample_table()))
    }

    fn value_of(pie: &PieChart, label: &str) -> Option<f64> {
        pie.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }

    #[test]
    fn test_all_sites_pie_counts_successes_per_site() {
        let pie = service().success_pie(&SiteSelection::All);

        assert_eq!(pie.title, "Total Successful Launches by Site");
        assert_eq!(value_of(&pie, "CCAFS LC-40"), Some(1.0));
        assert_eq!(value_of(&pie, "KSC LC-39A"), Some(2.0));
        assert_eq!(value_of(&pie, "VAFB SLC-4E"), Some(1.0));
        assert_eq!(value_of(&pie, "CCAFS SLC-40"), Some(1.0));

        let total: f64 = pie.slices.iter().map(|s| s.value).sum();
        assert_eq!(total, 5.0);
    }

    #[test]
    fn test_all_sites_pie_skips_sites_without_success() {
        let mut records = sample_table().records().to_vec();
        records.push(LaunchRecord::new("Boca Chica", LaunchOutcome::Failure, 1200.0, "Starship"));
        records.push(LaunchRecord::new("Boca Chica", LaunchOutcome::Failure, 800.0, "Starship"));
        let service = ChartService::new(Arc::new(LaunchTable::new(records).unwrap()));

        let pie = service.success_pie(&SiteSelection::All);
        assert_eq!(value_of(&pie, "Boca Chica"), None);
        assert_eq!(pie.slices.len(), 4);
    }

    #[test]
    fn test_site_pie_splits_outcomes() {
        let site = SiteSelection::Site("KSC LC-39A".to_string());
        let pie = service().success_pie(&site);

        assert_eq!(pie.title, "Launch Outcomes for KSC LC-39A");
        assert_eq!(value_of(&pie, "Success"), Some(2.0));
        assert_eq!(value_of(&pie, "Failure"), Some(1.0));
    }

    #[test]
    fn test_site_pie_omits_missing_outcome() {
        let site = SiteSelection::Site("CCAFS SLC-40".to_string());
        let pie = service().success_pie(&site);
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(value_of(&pie, "Failure"), None);
    }

    #[test]
    fn test_unknown_site_pie_is_empty() {
        let pie = service().success_pie(&SiteSelection::Site("Boca Chica".to_string()));
        assert!(pie.slices.is_empty());
        assert_eq!(pie.title, "Launch Outcomes for Boca Chica");
    }

    #[test]
    fn test_unknown_site_scatter_is_empty() {
        let service = service();
        let range = service.table().full_payload_range();
        let scatter = service.payload_scatter(&SiteSelection::Site("Boca Chica".to_string()), &range);

        assert!(scatter.series.is_empty());
        assert_eq!(scatter.point_count(), 0);
        assert_eq!(scatter.title, "Payload vs. Success Outcomes for Boca Chica");
    }

    #[test]
    fn test_scatter_groups_by_booster_category() {
        let service = service();
        let range = service.table().full_payload_range();
        let scatter = service.payload_scatter(&SiteSelection::All, &range);

        assert_eq!(scatter.title, "Payload vs. Success Outcomes for All Sites");
        assert_eq!(scatter.x_label, "Payload Mass (kg)");
        assert_eq!(scatter.y_label, "class");
        assert_eq!(scatter.point_count(), 8);

        let names: Vec<&str> = scatter.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "v1.1", "FT", "B4"]);
    }

    #[test]
    fn test_scatter_respects_site_and_range() {
        let site = SiteSelection::Site("KSC LC-39A".to_string());
        let range = PayloadRange::new(2000.0, 5500.0).unwrap();
        let scatter = service().payload_scatter(&site, &range);

        assert_eq!(scatter.title, "Payload vs. Success Outcomes for KSC LC-39A");
        assert_eq!(scatter.series.len(), 1);
        assert_eq!(
            scatter.series[0].points,
            vec![ScatterPoint { x: 2490.0, y: 1.0 }, ScatterPoint { x: 5300.0, y: 1.0 }]
        );
    }

    #[test]
    fn test_scatter_narrower_range_has_fewer_or_equal_points() {
        let service = service();
        let wide = PayloadRange::new(0.0, 10000.0).unwrap();
        let narrow = PayloadRange::new(1000.0, 6000.0).unwrap();

        let wide_count = service.payload_scatter(&SiteSelection::All, &wide).point_count();
        let narrow_count = service.payload_scatter(&SiteSelection::All, &narrow).point_count();
        assert!(narrow_count <= wide_count);
        assert_eq!(narrow_count, 3);
    }
}
