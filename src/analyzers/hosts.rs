use tracing::info;

use crate::analyzers::types::HostListingIndex;
use crate::error::Result;
use crate::snapshot::Snapshot;
use crate::validate::{HOST_LISTING_FIELDS, host_listing};

/// Groups the snapshot's room ids by host.
///
/// Every valid row contributes one entry, so a `(host_id, room_id)` pair that
/// appears twice is counted twice.
#[tracing::instrument(skip_all, fields(snapshot = %snapshot.name()))]
pub fn host_listings(snapshot: &Snapshot) -> Result<HostListingIndex> {
    let columns = snapshot.columns(HOST_LISTING_FIELDS)?;
    let mut index = HostListingIndex::default();
    let mut rejected = 0usize;

    for row in snapshot.rows() {
        match host_listing(row, &columns) {
            Some(listing) => index.push(listing.host_id, listing.room_id),
            None => rejected += 1,
        }
    }

    info!(hosts = index.len(), rejected, "Host listings aggregated");
    Ok(index)
}
