use std::collections::BTreeMap;
use tracing::info;

use crate::analyzers::types::{NeighborhoodAverage, NeighborhoodPriceIndex};
use crate::error::Result;
use crate::snapshot::Snapshot;
use crate::validate::{NEIGHBORHOOD_PRICE_FIELDS, neighborhood_price};

/// Collects "Entire home/apt" prices per neighborhood.
#[tracing::instrument(skip_all, fields(snapshot = %snapshot.name()))]
pub fn neighborhood_prices(snapshot: &Snapshot) -> Result<NeighborhoodPriceIndex> {
    let columns = snapshot.columns(NEIGHBORHOOD_PRICE_FIELDS)?;
    let mut index = NeighborhoodPriceIndex::default();
    let mut accepted = 0usize;

    for row in snapshot.rows() {
        if let Some(obs) = neighborhood_price(row, &columns) {
            index.push(obs.neighborhood, obs.price);
            accepted += 1;
        }
    }

    info!(
        accepted,
        rejected = snapshot.rows().len() - accepted,
        "Neighborhood prices aggregated"
    );
    Ok(index)
}

/// Average whole-unit price per neighborhood, keyed by the neighborhood
/// cell exactly as written.
pub fn average_price_by_neighborhood(snapshot: &Snapshot) -> Result<BTreeMap<String, f64>> {
    Ok(neighborhood_prices(snapshot)?.averages())
}

/// Flattens the averages into rows for export.
pub fn average_rows(averages: &BTreeMap<String, f64>) -> Vec<NeighborhoodAverage> {
    averages
        .iter()
        .map(|(neighborhood, &average_price)| NeighborhoodAverage {
            neighborhood: neighborhood.clone(),
            average_price,
        })
        .collect()
}
