use crate::figures::{self, PieFigure, ScatterFigure};
use crate::filter;
use crate::model::{
    LaunchDataset, LaunchRecord, PayloadRange, SiteFilter, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN,
};

pub struct UiState {
    pub tab: usize,
    /// Site selector position: 0 is "All Sites", 1..=N picks sites[i - 1].
    pub site_index: usize,
    pub payload_range: PayloadRange,
    pub default_site_index: usize,
    pub default_range: PayloadRange,
    pub info: String,

    // Figures for the current controls; recomputed on control change, kept
    // as-is when a handler reports an error.
    pub pie: Option<PieFigure>,
    pub scatter: Option<ScatterFigure>,

    // Records tab state
    pub records_selected: usize,
    pub records_scroll_offset: usize,

    pub last_exported_path: Option<String>,
}

impl UiState {
    pub fn new(data: &LaunchDataset, site: SiteFilter, range: PayloadRange) -> Self {
        let site_index = match &site {
            SiteFilter::AllSites => 0,
            SiteFilter::Site(name) => data
                .sites
                .iter()
                .position(|s| s == name)
                .map(|i| i + 1)
                .unwrap_or(0),
        };
        Self {
            tab: 0,
            site_index,
            payload_range: range,
            default_site_index: site_index,
            default_range: range,
            info: String::new(),
            pie: None,
            scatter: None,
            records_selected: 0,
            records_scroll_offset: 0,
            last_exported_path: None,
        }
    }

    /// Selector position count: "All Sites" plus one per dataset site.
    pub fn site_count(&self, data: &LaunchDataset) -> usize {
        data.sites.len() + 1
    }

    pub fn site_filter(&self, data: &LaunchDataset) -> SiteFilter {
        if self.site_index == 0 {
            SiteFilter::AllSites
        } else {
            SiteFilter::Site(data.sites[self.site_index - 1].clone())
        }
    }

    /// Cycle the site selector, wrapping at either end. Both figures depend
    /// on the selection, so both recompute.
    pub fn cycle_site(&mut self, data: &LaunchDataset, step: isize) {
        let count = self.site_count(data) as isize;
        self.site_index = (self.site_index as isize + step).rem_euclid(count) as usize;
        self.records_selected = 0;
        self.records_scroll_offset = 0;
        self.recompute_pie(data);
        self.recompute_scatter(data);
    }

    /// Move the lower bound by `delta`, clamped so low <= high always holds.
    /// Only the scatter depends on the range.
    pub fn adjust_low(&mut self, data: &LaunchDataset, delta: f64) {
        self.payload_range.low =
            (self.payload_range.low + delta).clamp(PAYLOAD_SLIDER_MIN, self.payload_range.high);
        self.records_selected = 0;
        self.records_scroll_offset = 0;
        self.recompute_scatter(data);
    }

    /// Move the upper bound by `delta`, clamped so low <= high always holds.
    pub fn adjust_high(&mut self, data: &LaunchDataset, delta: f64) {
        self.payload_range.high =
            (self.payload_range.high + delta).clamp(self.payload_range.low, PAYLOAD_SLIDER_MAX);
        self.records_selected = 0;
        self.records_scroll_offset = 0;
        self.recompute_scatter(data);
    }

    /// Reset both controls to their startup values.
    pub fn reset_filters(&mut self, data: &LaunchDataset) {
        self.site_index = self.default_site_index;
        self.payload_range = self.default_range;
        self.records_selected = 0;
        self.records_scroll_offset = 0;
        self.recompute_pie(data);
        self.recompute_scatter(data);
        self.info = "Filters reset".into();
    }

    /// Run the pie handler for the current selection. On error the previous
    /// figure stays in place and the message goes to the status line.
    pub fn recompute_pie(&mut self, data: &LaunchDataset) {
        match figures::success_pie(data, &self.site_filter(data)) {
            Ok(fig) => self.pie = Some(fig),
            Err(e) => self.info = format!("Pie chart failed: {e:#}"),
        }
    }

    /// Run the scatter handler for the current selection and range.
    pub fn recompute_scatter(&mut self, data: &LaunchDataset) {
        match figures::payload_scatter(data, &self.site_filter(data), self.payload_range) {
            Ok(fig) => self.scatter = Some(fig),
            Err(e) => self.info = format!("Scatter chart failed: {e:#}"),
        }
    }

    /// Records matching the current controls, for the records tab and the
    /// CSV export.
    pub fn filtered_records<'a>(&self, data: &'a LaunchDataset) -> Vec<&'a LaunchRecord> {
        filter::filter_records(
            &data.records,
            &self.site_filter(data),
            Some(self.payload_range),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LaunchRecord;

    fn record(site: &str, payload: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            class,
            booster_category: "FT".to_string(),
        }
    }

    fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, 0),
            record("KSC LC-39A", 5300.0, 1),
            record("VAFB SLC-4E", 9600.0, 1),
        ])
    }

    #[test]
    fn cycling_the_site_selector_wraps_and_recomputes_both_figures() {
        let data = sample_dataset();
        let mut state = UiState::new(&data, SiteFilter::AllSites, data.default_range());
        assert_eq!(state.site_count(&data), 4);

        state.cycle_site(&data, -1);
        assert_eq!(
            state.site_filter(&data),
            SiteFilter::Site("VAFB SLC-4E".to_string())
        );
        let pie = state.pie.as_ref().expect("pie recomputed");
        assert_eq!(pie.slices.len(), 2);

        state.cycle_site(&data, 1);
        assert_eq!(state.site_filter(&data), SiteFilter::AllSites);
    }

    #[test]
    fn range_adjustments_keep_low_at_most_high() {
        let data = sample_dataset();
        let mut state = UiState::new(&data, SiteFilter::AllSites, PayloadRange::new(4000.0, 5000.0));
        state.adjust_low(&data, 2000.0);
        assert_eq!(state.payload_range.low, 5000.0);
        state.adjust_high(&data, -3000.0);
        assert_eq!(state.payload_range.high, 5000.0);
        state.adjust_high(&data, 20_000.0);
        assert_eq!(state.payload_range.high, PAYLOAD_SLIDER_MAX);
        state.adjust_low(&data, -20_000.0);
        assert_eq!(state.payload_range.low, PAYLOAD_SLIDER_MIN);
    }

    #[test]
    fn narrowing_the_range_shrinks_the_scatter_figure() {
        let data = sample_dataset();
        let mut state = UiState::new(&data, SiteFilter::AllSites, PayloadRange::new(0.0, 10_000.0));
        state.recompute_scatter(&data);
        let wide = state.scatter.as_ref().expect("scatter").points.len();
        state.adjust_high(&data, -5000.0);
        let narrow = state.scatter.as_ref().expect("scatter").points.len();
        assert!(narrow <= wide);
        assert_eq!(narrow, 1);
    }

    #[test]
    fn reset_restores_defaults() {
        let data = sample_dataset();
        let default = data.default_range();
        let mut state = UiState::new(&data, SiteFilter::AllSites, default);
        state.cycle_site(&data, 2);
        state.adjust_low(&data, 1000.0);
        state.reset_filters(&data);
        assert_eq!(state.site_filter(&data), SiteFilter::AllSites);
        assert_eq!(state.payload_range, default);
    }
}
