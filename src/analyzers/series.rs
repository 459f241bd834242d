//! Room price time series across dated snapshot files.
//!
//! Snapshot files carry their capture date as a `YYYY-MM-DD` suffix right
//! before the extension, e.g. `tomslee_airbnb_new_york_1318_2017-06-12.csv`.
//! Files are replayed oldest first so that each room's prices read from its
//! earliest observation to its latest.

use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::analyzers::types::RoomPriceSeries;
use crate::error::{AnalysisError, Result};
use crate::record::RoomType;
use crate::snapshot::{ReaderOptions, Snapshot};
use crate::validate::{ROOM_PRICE_FIELDS, room_price};

const DATE_LEN: usize = "YYYY-MM-DD".len();

/// Capture date embedded in a snapshot file name.
///
/// Ordering compares year, then month, then day as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapshotDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SnapshotDate {
    /// Extracts the date from the last ten characters of the file stem.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::SnapshotDate`] when the stem does not end in a
    /// `YYYY-MM-DD` calendar date.
    pub fn from_path(path: &Path) -> Result<Self> {
        let invalid = || AnalysisError::SnapshotDate {
            filename: path.display().to_string(),
        };

        let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;
        let start = stem.len().checked_sub(DATE_LEN).ok_or_else(invalid)?;
        let raw = stem.get(start..).ok_or_else(invalid)?;

        let well_formed = raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !well_formed {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
        Ok(Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })
    }
}

/// Pairs each path with its snapshot date and sorts oldest first.
///
/// Files sharing a date keep their relative input order.
pub fn order_chronologically<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<(SnapshotDate, PathBuf)>> {
    let mut dated = paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            Ok((SnapshotDate::from_path(path)?, path.to_path_buf()))
        })
        .collect::<Result<Vec<_>>>()?;

    dated.sort_by_key(|(date, _)| *date);
    Ok(dated)
}

/// Appends the snapshot's `room_type` prices to `series`.
#[tracing::instrument(skip_all, fields(snapshot = %snapshot.name(), room_type = %room_type))]
pub fn accumulate_room_prices(
    series: &mut RoomPriceSeries,
    snapshot: &Snapshot,
    room_type: RoomType,
) -> Result<()> {
    let columns = snapshot.columns(ROOM_PRICE_FIELDS)?;
    let mut accepted = 0usize;

    for row in snapshot.rows() {
        if let Some(obs) = room_price(row, &columns, room_type) {
            series.push(obs.room_id, obs.price);
            accepted += 1;
        }
    }

    info!(
        accepted,
        skipped = snapshot.rows().len() - accepted,
        rooms = series.len(),
        "Room prices accumulated"
    );
    Ok(())
}

/// Builds per-room price histories for `room_type` across `paths`.
///
/// Every file name is dated before any file is opened. When more than one
/// file is given, a file lacking a required column is skipped with a warning;
/// with a single file the schema error is returned.
pub fn room_price_series<P: AsRef<Path>>(
    paths: &[P],
    room_type: RoomType,
    options: &ReaderOptions,
) -> Result<RoomPriceSeries> {
    let ordered = order_chronologically(paths)?;
    let multi_file = ordered.len() > 1;
    let mut series = RoomPriceSeries::new();

    for (date, path) in &ordered {
        debug!(?date, path = %path.display(), "Processing snapshot");
        let snapshot = Snapshot::load(path, options)?;

        match accumulate_room_prices(&mut series, &snapshot, room_type) {
            Ok(()) => {}
            Err(e @ AnalysisError::Schema { .. }) if multi_file => {
                warn!(error = %e, "Skipping snapshot without required columns");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(series)
}
