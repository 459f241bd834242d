//! Presentation boundary for analysis results.
//!
//! Supports pretty-printing, JSON logging, and CSV export for charting.

use anyhow::Result;
use csv::Writer;
use serde::Serialize;
use std::fmt::Debug;
use std::path::Path;
use tracing::{debug, info};

/// Logs a result using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl Debug) {
    debug!("{:#?}", value);
}

/// Logs a result as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes `rows` to a fresh CSV file at `path`, header first.
///
/// Overwrites any existing file.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV export");

    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{CorrelationReport, DistributionPoint, NeighborhoodAverage};
    use std::fs;

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&vec![0usize, 3, 1]);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = CorrelationReport {
            samples: 3,
            correlation: -1.0,
            p_value: 0.0,
        };
        print_json(&report).unwrap();
    }

    #[test]
    fn test_write_csv_distribution_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts.csv");

        let points = vec![
            DistributionPoint {
                listings: 1,
                hosts: 4,
            },
            DistributionPoint {
                listings: 2,
                hosts: 1,
            },
        ];
        write_csv(&path, &points).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["listings,hosts", "1,4", "2,1"]);
    }

    #[test]
    fn test_write_csv_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neighborhoods.csv");

        let rows = vec![NeighborhoodAverage {
            neighborhood: "Astoria".into(),
            average_price: 150.0,
        }];
        write_csv(&path, &rows).unwrap();
        write_csv(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("Astoria,150.0"));
    }
}
