use crate::analyzers::types::{DistributionPoint, HostListingIndex};

/// Dense histogram of listings per host: `counts[i]` is the number of hosts
/// with exactly `i` listings, for every `i` up to the largest listing count.
///
/// Index 0 is always present and, since every indexed host has at least one
/// listing, always zero.
pub fn listing_count_distribution(index: &HostListingIndex) -> Vec<usize> {
    let largest = index.iter().map(|(_, rooms)| rooms.len()).max().unwrap_or(0);

    let mut counts = vec![0; largest + 1];
    for (_, rooms) in index.iter() {
        counts[rooms.len()] += 1;
    }
    counts
}

/// Chart points for the histogram, starting at one listing per host.
pub fn distribution_points(counts: &[usize]) -> Vec<DistributionPoint> {
    counts
        .iter()
        .enumerate()
        .skip(1)
        .map(|(listings, &hosts)| DistributionPoint { listings, hosts })
        .collect()
}
