//! Record filtering shared by both chart handlers.
//!
//! A single parameterized predicate covers "all sites" and every specific
//! site, so there is no per-site branch ladder to drift out of sync with the
//! site selector's options.

use crate::model::{LaunchRecord, PayloadRange, SiteFilter};

/// Combined predicate for the current controls. The payload bounds are strict
/// on both ends; records exactly at either bound are excluded.
pub fn matches(record: &LaunchRecord, site: &SiteFilter, range: Option<PayloadRange>) -> bool {
    let site_ok = match site {
        SiteFilter::AllSites => true,
        SiteFilter::Site(name) => record.launch_site == *name,
    };
    site_ok && range.map_or(true, |r| r.admits(record.payload_mass_kg))
}

/// Filter the record table by site and (optionally) payload range, preserving
/// dataset order.
pub fn filter_records<'a>(
    records: &'a [LaunchRecord],
    site: &SiteFilter,
    range: Option<PayloadRange>,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| matches(r, site, range))
        .collect()
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

    #[test]
    fn all_sites_admits_every_record() {
        let records = vec![
            record("CCAFS LC-40", 500.0, 0),
            record("KSC LC-39A", 5300.0, 1),
        ];
        let got = filter_records(&records, &SiteFilter::AllSites, None);
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn specific_site_matches_by_name_equality() {
        let records = vec![
            record("CCAFS LC-40", 500.0, 0),
            record("KSC LC-39A", 5300.0, 1),
            record("KSC LC-39A", 2200.0, 1),
        ];
        let site = SiteFilter::Site("KSC LC-39A".to_string());
        let got = filter_records(&records, &site, None);
        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|r| r.launch_site == "KSC LC-39A"));
    }

    #[test]
    fn payload_bounds_are_exclusive() {
        let records = vec![
            record("CCAFS LC-40", 5000.0, 1),
            record("CCAFS LC-40", 5500.0, 1),
            record("CCAFS LC-40", 6000.0, 1),
        ];
        let range = PayloadRange::new(5000.0, 6000.0);
        let got = filter_records(&records, &SiteFilter::AllSites, Some(range));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].payload_mass_kg, 5500.0);
    }

    #[test]
    fn narrowing_the_range_only_removes_records() {
        let records: Vec<LaunchRecord> = (1..=9)
            .map(|i| record("CCAFS LC-40", i as f64 * 1000.0, 1))
            .collect();
        let wide = filter_records(
            &records,
            &SiteFilter::AllSites,
            Some(PayloadRange::new(0.0, 10_000.0)),
        );
        let narrow = filter_records(
            &records,
            &SiteFilter::AllSites,
            Some(PayloadRange::new(2000.0, 7000.0)),
        );
        assert!(narrow.len() <= wide.len());
        for r in &narrow {
            assert!(wide
                .iter()
                .any(|w| w.payload_mass_kg == r.payload_mass_kg));
        }
    }
}
