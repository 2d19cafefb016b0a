//! Chart handlers.
//!
//! Both handlers are pure: dataset plus control values in, a figure
//! description out. Presentation layers (TUI panels, JSON report, exports)
//! consume the descriptions without recomputing anything.

use crate::filter;
use crate::model::{LaunchDataset, PayloadRange, SiteFilter};
use anyhow::{bail, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Pie figure description: slice labels and counts, no geometry.
#[derive(Debug, Clone, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// Outcome class, the y value: 1 success, 0 failure.
    pub class: u8,
    /// Series key for color grouping.
    pub booster_category: String,
}

/// Scatter figure description: payload on x, outcome class on y, points
/// keyed by booster version category for color encoding.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterFigure {
    /// Points grouped by booster category, in stable sorted order, shaped for
    /// chart series construction.
    pub fn series(&self) -> Vec<(String, Vec<(f64, f64)>)> {
        let mut grouped: std::collections::BTreeMap<&str, Vec<(f64, f64)>> = Default::default();
        for p in &self.points {
            grouped
                .entry(p.booster_category.as_str())
                .or_default()
                .push((p.payload_mass_kg, f64::from(p.class)));
        }
        grouped
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

fn ensure_known_site<'a>(data: &LaunchDataset, site: &'a SiteFilter) -> Result<&'a SiteFilter> {
    if let SiteFilter::Site(name) = site {
        if !data.contains_site(name) {
            bail!(
                "unknown launch site {:?} (expected one of: {})",
                name,
                data.sites.join(", ")
            );
        }
    }
    Ok(site)
}

/// Pie chart handler.
///
/// All sites: one slice per site holding that site's successful-launch count.
/// Specific site: success vs. failure counts for that site alone. An
/// unrecognized site is an error; the caller decides how to surface it.
pub fn success_pie(data: &LaunchDataset, site: &SiteFilter) -> Result<PieFigure> {
    let site = ensure_known_site(data, site)?;
    match site {
        SiteFilter::AllSites => {
            let slices = data
                .sites
                .iter()
                .map(|name| {
                    let successes = data
                        .records
                        .iter()
                        .filter(|r| r.launch_site == *name && r.is_success())
                        .count() as u64;
                    PieSlice {
                        label: name.clone(),
                        value: successes,
                    }
                })
                .collect();
            Ok(PieFigure {
                title: "Successful launches by site".to_string(),
                slices,
            })
        }
        SiteFilter::Site(name) => {
            let records = filter::filter_records(&data.records, site, None);
            let successes = records.iter().filter(|r| r.is_success()).count() as u64;
            let failures = records.len() as u64 - successes;
            Ok(PieFigure {
                title: format!("Launch outcomes for {name}"),
                slices: vec![
                    PieSlice {
                        label: "Success".to_string(),
                        value: successes,
                    },
                    PieSlice {
                        label: "Failure".to_string(),
                        value: failures,
                    },
                ],
            })
        }
    }
}

/// Scatter chart handler.
///
/// Keeps exactly the records with `low < payload < high` (strict on both
/// ends), intersected with the site filter.
pub fn payload_scatter(
    data: &LaunchDataset,
    site: &SiteFilter,
    range: PayloadRange,
) -> Result<ScatterFigure> {
    let site = ensure_known_site(data, site)?;
    let points = filter::filter_records(&data.records, site, Some(range))
        .into_iter()
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            class: r.class,
            booster_category: r.booster_category.clone(),
        })
        .collect();
    let title = match site {
        SiteFilter::AllSites => "Payload vs. outcome for all sites".to_string(),
        SiteFilter::Site(name) => format!("Payload vs. outcome for {name}"),
    };
    Ok(ScatterFigure { title, points })
}

/// Dataset summary carried by the JSON report and figure exports.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub sites: Vec<String>,
    pub payload_min_kg: f64,
    pub payload_max_kg: f64,
}

/// Everything the headless JSON mode and the figure export emit: the dataset
/// summary, the selected controls, and both figures.
#[derive(Debug, Clone, Serialize)]
pub struct FigureReport {
    pub dataset: DatasetSummary,
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
    pub pie: PieFigure,
    pub scatter: ScatterFigure,
}

pub fn build_report(
    data: &LaunchDataset,
    site: &SiteFilter,
    range: PayloadRange,
) -> Result<FigureReport> {
    Ok(FigureReport {
        dataset: DatasetSummary {
            records: data.records.len(),
            sites: data.sites.clone(),
            payload_min_kg: data.payload_min,
            payload_max_kg: data.payload_max,
        },
        site: site.clone(),
        payload_range: range,
        pie: success_pie(data, site)?,
        scatter: payload_scatter(data, site, range)?,
    })
}
