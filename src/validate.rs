//! Row validation and typed extraction.
//!
//! Each extractor is a pure function of `(row, columns)`: `Some(record)` means
//! the row is usable for that analysis, `None` means it is skipped. A row is
//! skipped when its field count differs from the header's, when a required
//! cell is empty, when a numeric cell does not parse to a finite number, or
//! when an analysis-specific filter (room type, review count) rejects it.

use csv::StringRecord;

use crate::record::{
    Field, HostListing, NeighborhoodPrice, PriceSatisfaction, RoomPrice, RoomType,
};
use crate::schema::ColumnIndex;

/// Columns read by [`price_satisfaction`].
pub const PRICE_SATISFACTION_FIELDS: &[Field] =
    &[Field::Price, Field::Reviews, Field::OverallSatisfaction];
/// Columns read by [`host_listing`].
pub const HOST_LISTING_FIELDS: &[Field] = &[Field::HostId, Field::RoomId];
/// Columns read by [`neighborhood_price`].
pub const NEIGHBORHOOD_PRICE_FIELDS: &[Field] =
    &[Field::Neighborhood, Field::RoomType, Field::Price];
/// Columns read by [`room_price`].
pub const ROOM_PRICE_FIELDS: &[Field] = &[Field::Price, Field::RoomId, Field::RoomType];

/// Non-empty cell for `field`, or `None`.
fn cell<'r>(row: &'r StringRecord, columns: &ColumnIndex, field: Field) -> Option<&'r str> {
    let value = row.get(columns.position(field)?)?;
    (!value.is_empty()).then_some(value)
}

fn float(row: &StringRecord, columns: &ColumnIndex, field: Field) -> Option<f64> {
    let value: f64 = cell(row, columns, field)?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

fn integer(row: &StringRecord, columns: &ColumnIndex, field: Field) -> Option<i64> {
    cell(row, columns, field)?.trim().parse().ok()
}

fn has_header_width(row: &StringRecord, columns: &ColumnIndex) -> bool {
    row.len() == columns.width()
}

fn is_room_type(row: &StringRecord, columns: &ColumnIndex, room_type: RoomType) -> bool {
    cell(row, columns, Field::RoomType) == Some(room_type.as_str())
}

/// Price and satisfaction for a listing with a strictly positive review count.
pub fn price_satisfaction(row: &StringRecord, columns: &ColumnIndex) -> Option<PriceSatisfaction> {
    if !has_header_width(row, columns) {
        return None;
    }
    let price = float(row, columns, Field::Price)?;
    let satisfaction = float(row, columns, Field::OverallSatisfaction)?;
    let reviews = float(row, columns, Field::Reviews)?;
    if reviews <= 0.0 {
        return None;
    }

    Some(PriceSatisfaction {
        price,
        satisfaction,
    })
}

pub fn host_listing(row: &StringRecord, columns: &ColumnIndex) -> Option<HostListing> {
    if !has_header_width(row, columns) {
        return None;
    }

    Some(HostListing {
        host_id: integer(row, columns, Field::HostId)?,
        room_id: integer(row, columns, Field::RoomId)?,
    })
}

/// Price of an "Entire home/apt" listing together with its neighborhood,
/// taken verbatim as the grouping key.
pub fn neighborhood_price(row: &StringRecord, columns: &ColumnIndex) -> Option<NeighborhoodPrice> {
    if !has_header_width(row, columns) || !is_room_type(row, columns, RoomType::EntireHomeApt) {
        return None;
    }

    Some(NeighborhoodPrice {
        price: float(row, columns, Field::Price)?,
        neighborhood: cell(row, columns, Field::Neighborhood)?.to_string(),
    })
}

pub fn room_price(
    row: &StringRecord,
    columns: &ColumnIndex,
    room_type: RoomType,
) -> Option<RoomPrice> {
    if !has_header_width(row, columns) || !is_room_type(row, columns, room_type) {
        return None;
    }

    Some(RoomPrice {
        room_id: integer(row, columns, Field::RoomId)?,
        price: float(row, columns, Field::Price)?,
    })
}
