//! Export writers shared by the headless CLI flags and the TUI export keys.

use crate::figures::FigureReport;
use crate::model::LaunchRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Write a figure report as pretty-printed JSON.
pub fn write_figures_json(path: &Path, report: &FigureReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize figure report")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Write filtered records as CSV with the same column contract as the input
/// dataset.
pub fn write_records_csv(path: &Path, records: &[&LaunchRecord]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("write record to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Timestamp slug for generated export filenames, filesystem-safe.
pub fn timestamp_slug() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown-time".to_string())
        .replace(':', "-")
        .replace('T', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures;
    use crate::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteFilter};

    fn record(site: &str, payload: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            flight_number: Some(1),
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            class,
            booster_category: "FT".to_string(),
        }
    }

    #[test]
    fn records_csv_round_trips_through_the_loader() {
        let records = vec![record("KSC LC-39A", 5300.0, 1), record("CCAFS LC-40", 500.0, 0)];
        let refs: Vec<&LaunchRecord> = records.iter().collect();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("filtered.csv");
        write_records_csv(&path, &refs).expect("write csv");

        let reloaded = crate::data::load_dataset(&path).expect("reload exported csv");
        assert_eq!(reloaded.records.len(), 2);
        assert_eq!(reloaded.records[0].launch_site, "KSC LC-39A");
        assert_eq!(reloaded.records[0].payload_mass_kg, 5300.0);
    }

    #[test]
    fn figures_json_contains_both_figures() {
        let data = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 5300.0, 1),
            record("CCAFS LC-40", 500.0, 0),
        ]);
        let report = figures::build_report(
            &data,
            &SiteFilter::AllSites,
            PayloadRange::new(0.0, 10_000.0),
        )
        .expect("report");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("figures.json");
        write_figures_json(&path, &report).expect("write json");

        let text = std::fs::read_to_string(&path).expect("read back");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert!(value.get("pie").is_some());
        assert!(value.get("scatter").is_some());
        assert_eq!(value["dataset"]["records"], 2);
    }

    #[test]
    fn timestamp_slug_has_no_path_separators_or_colons() {
        let slug = timestamp_slug();
        assert!(!slug.contains(':'));
        assert!(!slug.contains('/'));
    }
}
