use serde::{Deserialize, Serialize};

/// Fixed external contract of the payload range control.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;
/// Labeled tick marks rendered under the range control.
pub const PAYLOAD_SLIDER_MARKS: [f64; 7] = [0.0, 100.0, 1000.0, 2000.0, 5000.0, 7500.0, 10_000.0];

/// One launch attempt, deserialized straight from the dataset CSV.
/// The column names are a fixed external contract; extra columns are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub class: u8,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

/// Current site selection: either every site or one specific site by name.
/// Controls bind to the real site names from the dataset, never to positional
/// identifiers, so the same equality predicate serves every selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteFilter {
    AllSites,
    Site(String),
}

impl SiteFilter {
    pub const ALL_LABEL: &'static str = "All Sites";

    pub fn label(&self) -> &str {
        match self {
            SiteFilter::AllSites => Self::ALL_LABEL,
            SiteFilter::Site(name) => name,
        }
    }
}

/// Payload mass bounds selected by the range control. Invariant: low <= high,
/// maintained by the control's clamped adjustments rather than checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Strict on both ends: records exactly at either bound are excluded.
    pub fn admits(&self, payload_kg: f64) -> bool {
        self.low < payload_kg && payload_kg < self.high
    }
}

/// The loaded dataset: immutable records plus values derived once at startup.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites, sorted, as the site selector enumerates them.
    pub sites: Vec<String>,
    pub payload_min: f64,
    pub payload_max: f64,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = records.iter().map(|r| r.launch_site.clone()).collect();
        sites.sort();
        sites.dedup();
        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);
        Self {
            records,
            sites,
            payload_min,
            payload_max,
        }
    }

    /// Default range control value: the observed payload bounds, clamped into
    /// the control's own bounds.
    pub fn default_range(&self) -> PayloadRange {
        let low = self.payload_min.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
        let high = self.payload_max.clamp(low, PAYLOAD_SLIDER_MAX);
        PayloadRange::new(low, high)
    }

    /// Resolve a user-supplied site name against the dataset's site list.
    /// Exact match wins; otherwise a case-insensitive match is accepted.
    pub fn resolve_site(&self, name: &str) -> Option<SiteFilter> {
        if let Some(site) = self.sites.iter().find(|s| s.as_str() == name) {
            return Some(SiteFilter::Site(site.clone()));
        }
        self.sites
            .iter()
            .find(|s| s.eq_ignore_ascii_case(name))
            .map(|s| SiteFilter::Site(s.clone()))
    }

    pub fn contains_site(&self, name: &str) -> bool {
        self.sites.iter().any(|s| s == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn dataset_derives_sites_and_payload_bounds() {
        let data = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 2500.0, 0, "v1.0"),
            record("KSC LC-39A", 5300.0, 1, "FT"),
            record("CCAFS LC-40", 500.0, 1, "v1.0"),
        ]);
        assert_eq!(data.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(data.payload_min, 500.0);
        assert_eq!(data.payload_max, 5300.0);
    }

    #[test]
    fn default_range_clamps_into_slider_bounds() {
        let data = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 300.0, 1, "FT"),
            record("KSC LC-39A", 15_600.0, 1, "FT"),
        ]);
        let range = data.default_range();
        assert_eq!(range.low, 300.0);
        assert_eq!(range.high, PAYLOAD_SLIDER_MAX);
    }

    #[test]
    fn resolve_site_prefers_exact_then_case_insensitive() {
        let data = LaunchDataset::from_records(vec![record("KSC LC-39A", 100.0, 1, "FT")]);
        assert_eq!(
            data.resolve_site("KSC LC-39A"),
            Some(SiteFilter::Site("KSC LC-39A".to_string()))
        );
        assert_eq!(
            data.resolve_site("ksc lc-39a"),
            Some(SiteFilter::Site("KSC LC-39A".to_string()))
        );
        assert_eq!(data.resolve_site("VAFB SLC-4E"), None);
    }

    #[test]
    fn payload_range_is_strict_on_both_ends() {
        let range = PayloadRange::new(5000.0, 6000.0);
        assert!(range.admits(5500.0));
        assert!(!range.admits(5000.0));
        assert!(!range.admits(6000.0));
    }
}
