use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::analyzers::change::largest_change;
use crate::analyzers::correlation::{correlation, price_satisfaction_samples};
use crate::analyzers::distribution::listing_count_distribution;
use crate::analyzers::hosts::host_listings;
use crate::analyzers::neighborhood::average_price_by_neighborhood;
use crate::analyzers::series::room_price_series;
use crate::analyzers::types::{ChangeSummary, CorrelationReport};
use crate::error::Result;
use crate::record::RoomType;
use crate::snapshot::{ReaderOptions, Snapshot};

/// Price vs. satisfaction correlation for one snapshot file.
pub fn analyze_correlation(path: &Path, options: &ReaderOptions) -> Result<CorrelationReport> {
    let snapshot = Snapshot::load(path, options)?;
    let samples = price_satisfaction_samples(&snapshot)?;
    correlation(&samples)
}

/// Listings-per-host histogram for one snapshot file.
pub fn analyze_host_distribution(path: &Path, options: &ReaderOptions) -> Result<Vec<usize>> {
    let snapshot = Snapshot::load(path, options)?;
    let index = host_listings(&snapshot)?;
    Ok(listing_count_distribution(&index))
}

/// Average "Entire home/apt" price per neighborhood for one snapshot file.
pub fn analyze_neighborhoods(
    path: &Path,
    options: &ReaderOptions,
) -> Result<BTreeMap<String, f64>> {
    let snapshot = Snapshot::load(path, options)?;
    average_price_by_neighborhood(&snapshot)
}

/// Largest per-room price change across a set of dated snapshot files.
pub fn analyze_price_change<P: AsRef<Path>>(
    paths: &[P],
    room_type: RoomType,
    options: &ReaderOptions,
) -> Result<ChangeSummary> {
    let series = room_price_series(paths, room_type, options)?;
    info!(
        files = paths.len(),
        rooms = series.len(),
        room_type = %room_type,
        "Room price series built"
    );
    Ok(largest_change(&series))
}
