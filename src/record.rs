//! Column vocabulary and the typed records extracted from validated rows.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// A column consumed by one of the analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Price,
    Reviews,
    OverallSatisfaction,
    HostId,
    RoomId,
    RoomType,
    Neighborhood,
}

impl Field {
    /// Header name exactly as it appears in snapshot files.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::Reviews => "reviews",
            Field::OverallSatisfaction => "overall_satisfaction",
            Field::HostId => "host_id",
            Field::RoomId => "room_id",
            Field::RoomType => "room_type",
            Field::Neighborhood => "neighborhood",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoomType {
    #[serde(rename = "Entire home/apt")]
    EntireHomeApt,
    #[serde(rename = "Private room")]
    PrivateRoom,
    #[serde(rename = "Shared room")]
    SharedRoom,
}

impl RoomType {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::EntireHomeApt => "Entire home/apt",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = AnalysisError;

    /// Exact, case-sensitive match against the three listing categories.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Entire home/apt" => Ok(RoomType::EntireHomeApt),
            "Private room" => Ok(RoomType::PrivateRoom),
            "Shared room" => Ok(RoomType::SharedRoom),
            other => Err(AnalysisError::InvalidRoomType(other.to_string())),
        }
    }
}

/// One `(price, overall_satisfaction)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSatisfaction {
    pub price: f64,
    pub satisfaction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostListing {
    pub host_id: i64,
    pub room_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeighborhoodPrice {
    pub neighborhood: String,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomPrice {
    pub room_id: i64,
    pub price: f64,
}
