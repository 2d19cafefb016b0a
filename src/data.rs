//! Dataset loader.
//!
//! Reads the launch-record CSV exactly once at startup. A missing or
//! malformed dataset is fatal; the process reports the error and exits.

use crate::model::{LaunchDataset, LaunchRecord};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Load the dataset and derive the values the layout needs (site list,
/// payload bounds). The returned dataset is read-only for the rest of the
/// process lifetime.
pub fn load_dataset(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open dataset {}", path.display()))?;

    let mut records: Vec<LaunchRecord> = Vec::new();
    for (idx, row) in reader.deserialize().enumerate() {
        let record: LaunchRecord =
            row.with_context(|| format!("parse dataset row {}", idx + 1))?;
        records.push(record);
    }

    if records.is_empty() {
        bail!("dataset {} contains no launch records", path.display());
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0
31,KSC LC-39A,1,5300,F9 FT B1031.1,FT
46,VAFB SLC-4E,1,9600,F9 FT  B1036,FT
";

    fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn loads_records_and_payload_bounds() {
        let file = write_temp_csv(SAMPLE);
        let data = load_dataset(file.path()).expect("load dataset");
        assert_eq!(data.records.len(), 4);
        assert_eq!(data.sites, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
        assert_eq!(data.payload_min, 0.0);
        assert_eq!(data.payload_max, 9600.0);
        assert_eq!(data.records[2].flight_number, Some(31));
        assert!(data.records[2].is_success());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_dataset(Path::new("does-not-exist.csv")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.csv"));
    }

    #[test]
    fn malformed_row_is_an_error() {
        let file = write_temp_csv(
            "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             1,CCAFS LC-40,not-a-class,500,v1.0\n",
        );
        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let file = write_temp_csv(
            "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n",
        );
        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("no launch records"));
    }
}
