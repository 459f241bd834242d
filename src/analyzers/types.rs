//! Aggregate structures and the reports derived from them.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::analyzers::utility::mean;
use crate::error::AnalysisError;

/// Room ids operated by each host, in file order. Duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HostListingIndex {
    hosts: HashMap<i64, Vec<i64>>,
}

impl HostListingIndex {
    pub fn push(&mut self, host_id: i64, room_id: i64) {
        self.hosts.entry(host_id).or_default().push(room_id);
    }

    pub fn listings(&self, host_id: i64) -> Option<&[i64]> {
        self.hosts.get(&host_id).map(Vec::as_slice)
    }

    /// Number of distinct hosts.
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &[i64])> {
        self.hosts.iter().map(|(&h, rooms)| (h, rooms.as_slice()))
    }
}

/// Whole-unit prices observed per neighborhood.
///
/// A neighborhood only becomes a key once it has a price, so every key
/// averages over at least one observation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NeighborhoodPriceIndex {
    prices: HashMap<String, Vec<f64>>,
}

impl NeighborhoodPriceIndex {
    pub fn push(&mut self, neighborhood: String, price: f64) {
        self.prices.entry(neighborhood).or_default().push(price);
    }

    pub fn observations(&self, neighborhood: &str) -> Option<&[f64]> {
        self.prices.get(neighborhood).map(Vec::as_slice)
    }

    /// Collapses each neighborhood to its arithmetic mean price.
    pub fn averages(&self) -> BTreeMap<String, f64> {
        self.prices
            .iter()
            .map(|(name, prices)| (name.clone(), mean(prices)))
            .collect()
    }
}

/// Per-room price observations ordered oldest to newest.
///
/// Rooms iterate in first-seen order, which is the order the change analysis
/// uses to break ties.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoomPriceSeries {
    rooms: Vec<(i64, Vec<f64>)>,
    positions: HashMap<i64, usize>,
}

impl RoomPriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, room_id: i64, price: f64) {
        let rooms = &mut self.rooms;
        let at = *self.positions.entry(room_id).or_insert_with(|| {
            rooms.push((room_id, Vec::new()));
            rooms.len() - 1
        });
        self.rooms[at].1.push(price);
    }

    pub fn prices(&self, room_id: i64) -> Option<&[f64]> {
        self.positions
            .get(&room_id)
            .map(|&at| self.rooms[at].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[f64])> {
        self.rooms.iter().map(|(id, p)| (*id, p.as_slice()))
    }
}

impl<const N: usize> From<[(i64, Vec<f64>); N]> for RoomPriceSeries {
    fn from(rooms: [(i64, Vec<f64>); N]) -> Self {
        let mut series = Self::new();
        for (room_id, prices) in rooms {
            for price in prices {
                series.push(room_id, price);
            }
        }
        series
    }
}

/// Price change between a room's first and last observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtremalChangeReport {
    pub percentage_change: f64,
    pub starting_price: f64,
    pub ending_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomChange {
    pub room_id: i64,
    #[serde(flatten)]
    pub change: ExtremalChangeReport,
}

/// Outcome of scanning a [`RoomPriceSeries`] for its largest change.
#[derive(Debug)]
pub struct ChangeSummary {
    /// Room with the largest absolute change; `None` when no room could be evaluated.
    pub extremal: Option<RoomChange>,
    /// Rooms excluded from the selection, one error per room.
    pub failures: Vec<AnalysisError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub samples: usize,
    pub correlation: f64,
    pub p_value: f64,
}

/// One point of the listings-per-host chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistributionPoint {
    pub listings: usize,
    pub hosts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborhoodAverage {
    pub neighborhood: String,
    pub average_price: f64,
}
