//! Text summary builder for CLI output.
//!
//! This module formats human-readable lines for text mode: the dataset shape,
//! the per-site success breakdown, and the figures for the selected controls.

use crate::figures;
use crate::model::{LaunchDataset, PayloadRange, SiteFilter};
use anyhow::Result;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary for the selected site and payload range.
pub(crate) fn build_text_summary(
    data: &LaunchDataset,
    site: &SiteFilter,
    range: PayloadRange,
) -> Result<TextSummary> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Dataset: {} launches across {} sites (payload {:.0}-{:.0} kg)",
        data.records.len(),
        data.sites.len(),
        data.payload_min,
        data.payload_max
    ));

    let pie = figures::success_pie(data, site)?;
    lines.push(format!("{}:", pie.title));
    let total = pie.total().max(1);
    for slice in &pie.slices {
        lines.push(format!(
            "  {:<14} {:>3}  ({:.0}%)",
            slice.label,
            slice.value,
            (slice.value as f64 / total as f64) * 100.0
        ));
    }

    let scatter = figures::payload_scatter(data, site, range)?;
    lines.push(format!(
        "{} (payload {:.0}-{:.0} kg, exclusive): {} launches",
        scatter.title,
        range.low,
        range.high,
        scatter.points.len()
    ));
    for (category, points) in scatter.series() {
        let successes = points.iter().filter(|(_, y)| *y >= 1.0).count();
        lines.push(format!(
            "  {:<10} {:>3} launches, {} successful",
            category,
            points.len(),
            successes
        ));
    }

    Ok(TextSummary { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LaunchRecord;

    fn record(site: &str, payload: f64, class: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            class,
            booster_category: booster.to_string(),
        }
    }

    #[test]
    fn summary_reports_dataset_shape_and_slice_counts() {
        let data = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, 0, "v1.0"),
            record("KSC LC-39A", 5300.0, 1, "FT"),
        ]);
        let summary = build_text_summary(
            &data,
            &SiteFilter::AllSites,
            PayloadRange::new(0.0, 10_000.0),
        )
        .expect("summary");
        assert!(summary.lines[0].contains("2 launches across 2 sites"));
        assert!(summary
            .lines
            .iter()
            .any(|l| l.contains("KSC LC-39A") && l.contains("1")));
        assert!(summary
            .lines
            .iter()
            .any(|l| l.contains("2 launches") && l.contains("exclusive")));
    }

    #[test]
    fn unknown_site_propagates_as_an_error() {
        let data = LaunchDataset::from_records(vec![record("KSC LC-39A", 100.0, 1, "FT")]);
        let site = SiteFilter::Site("nowhere".to_string());
        assert!(build_text_summary(&data, &site, PayloadRange::new(0.0, 1.0)).is_err());
    }
}
