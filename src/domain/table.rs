// Immutable launch table, loaded once at startup
use crate::domain::error::DashboardError;
use crate::domain::launch::LaunchRecord;
use crate::domain::selection::{PayloadRange, SiteSelection};

#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
}

impl LaunchTable {
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self, DashboardError> {
        if records.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Distinct launch sites in first-appearance order
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(&record.launch_site);
            }
        }
        sites
    }

    /// Minimum and maximum payload mass over the whole table
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), r| (min.min(r.payload_mass_kg), max.max(r.payload_mass_kg)),
        )
    }

    pub fn full_payload_range(&self) -> PayloadRange {
        let (low, high) = self.payload_bounds();
        PayloadRange { low, high }
    }

    /// Rows matching the site selection and, if given, the payload range. Order is preserved.
    pub fn filter(&self, site: &SiteSelection, range: Option<&PayloadRange>) -> Vec<&LaunchRecord> {
        self.records
            .iter()
            .filter(|r| range.is_none_or(|range| range.contains(r.payload_mass_kg)))
            .filter(|r| site.matches(&r.launch_site))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::launch::LaunchOutcome::{Failure, Success};

    pub(crate) fn sample_table() -> LaunchTable {
        LaunchTable::new(vec![
            LaunchRecord::new("CCAFS LC-40", Failure, 0.0, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", Success, 525.0, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", Failure, 500.0, "v1.1"),
            LaunchRecord::new("KSC LC-39A", Success, 2490.0, "FT"),
            LaunchRecord::new("KSC LC-39A", Success, 5300.0, "FT"),
            LaunchRecord::new("KSC LC-39A", Failure, 6070.0, "FT"),
            LaunchRecord::new("CCAFS SLC-40", Success, 3669.0, "B4"),
            LaunchRecord::new("VAFB SLC-4E", Success, 9600.0, "B4"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert_eq!(LaunchTable::new(vec![]).unwrap_err(), DashboardError::EmptyDataset);
    }

    #[test]
    fn test_sites_in_first_appearance_order() {
        let table = sample_table();
        assert_eq!(
            table.sites(),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
    }

    #[test]
    fn test_payload_bounds() {
        assert_eq!(sample_table().payload_bounds(), (0.0, 9600.0));
    }

    #[test]
    fn test_filter_all_returns_full_table() {
        let table = sample_table();
        let rows = table.filter(&SiteSelection::All, None);
        assert_eq!(rows.len(), table.len());
    }

    #[test]
    fn test_filter_by_site_returns_only_that_site() {
        let table = sample_table();
        let rows = table.filter(&SiteSelection::Site("KSC LC-39A".to_string()), None);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.launch_site == "KSC LC-39A"));
    }

    #[test]
    fn test_filter_unknown_site_is_empty() {
        let table = sample_table();
        assert!(table
            .filter(&SiteSelection::Site("Boca Chica".to_string()), None)
            .is_empty());
    }

    #[test]
    fn test_narrowing_range_never_grows_result() {
        let table = sample_table();
        let ranges = [(0.0, 10000.0), (0.0, 6000.0), (500.0, 6000.0), (2000.0, 5300.0), (2500.0, 2500.0)];

        let mut previous = usize::MAX;
        for (low, high) in ranges {
            let range = PayloadRange::new(low, high).unwrap();
            let count = table.filter(&SiteSelection::All, Some(&range)).len();
            assert!(count <= previous, "range [{low}, {high}] grew the result");
            previous = count;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_filter_combines_site_and_range() {
        let table = sample_table();
        let range = PayloadRange::new(0.0, 5500.0).unwrap();
        let rows = table.filter(&SiteSelection::Site("KSC LC-39A".to_string()), Some(&range));
        let payloads: Vec<f64> = rows.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![2490.0, 5300.0]);
    }
}
