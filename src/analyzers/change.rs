use tracing::{debug, info};

use crate::analyzers::types::{ChangeSummary, ExtremalChangeReport, RoomChange, RoomPriceSeries};
use crate::error::{AnalysisError, Result};

/// Change from a room's first to its last observed price, in percent.
///
/// # Errors
///
/// [`AnalysisError::DivisionByZero`] when the first price is exactly zero,
/// [`AnalysisError::NonFiniteChange`] when the ratio overflows.
/// A room with no observations has no change and yields `Ok(None)`.
pub fn percentage_change(room_id: i64, prices: &[f64]) -> Result<Option<RoomChange>> {
    let (Some(&first), Some(&last)) = (prices.first(), prices.last()) else {
        return Ok(None);
    };
    if first == 0.0 {
        return Err(AnalysisError::DivisionByZero { room_id });
    }

    let percentage_change = 100.0 * (last - first) / first;
    if !percentage_change.is_finite() {
        return Err(AnalysisError::NonFiniteChange {
            room_id,
            first,
            last,
        });
    }

    Ok(Some(RoomChange {
        room_id,
        change: ExtremalChangeReport {
            percentage_change,
            starting_price: first,
            ending_price: last,
        },
    }))
}

/// Finds the room whose price moved the most, in either direction.
///
/// Rooms are visited in series order. A later room only displaces the current
/// holder when its absolute change is strictly larger, so ties go to the room
/// seen first; if every change is 0% the first evaluable room is reported.
/// Rooms that cannot be evaluated are collected in `failures` and do not stop
/// the scan.
pub fn largest_change(series: &RoomPriceSeries) -> ChangeSummary {
    let mut extremal: Option<RoomChange> = None;
    let mut failures = Vec::new();

    for (room_id, prices) in series.iter() {
        match percentage_change(room_id, prices) {
            Ok(Some(candidate)) => {
                let replace = extremal.is_none_or(|held| {
                    candidate.change.percentage_change.abs() > held.change.percentage_change.abs()
                });
                if replace {
                    extremal = Some(candidate);
                }
            }
            Ok(None) => {}
            Err(e) => {
                debug!(error = %e, "Room excluded from change analysis");
                failures.push(e);
            }
        }
    }

    info!(
        rooms = series.len(),
        excluded = failures.len(),
        room_id = extremal.map(|c| c.room_id),
        "Largest price change located"
    );
    ChangeSummary { extremal, failures }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_change_rise() {
        let change = percentage_change(7, &[100.0, 150.0]).unwrap().unwrap();
        assert_eq!(
            change.change,
            ExtremalChangeReport {
                percentage_change: 50.0,
                starting_price: 100.0,
                ending_price: 150.0
            }
        );
    }

    #[test]
    fn test_percentage_change_uses_endpoints_only() {
        let change = percentage_change(1, &[200.0, 10.0, 900.0, 150.0])
            .unwrap()
            .unwrap();
        assert_eq!(change.change.percentage_change, -25.0);
    }

    #[test]
    fn test_percentage_change_zero_start_is_error() {
        let err = percentage_change(7, &[0.0, 150.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionByZero { room_id: 7 }));
    }

    #[test]
    fn test_percentage_change_overflow_is_error() {
        let err = percentage_change(1, &[1e-320, 1e300]).unwrap_err();
        assert!(matches!(err, AnalysisError::NonFiniteChange { room_id: 1, .. }));
    }

    #[test]
    fn test_largest_change_excludes_overflowing_rooms() {
        let summary = largest_change(&RoomPriceSeries::from([
            (1, vec![1e-320, 1e300]),
            (2, vec![100.0, 130.0]),
        ]));

        let extremal = summary.extremal.unwrap();
        assert_eq!(extremal.room_id, 2);
        assert_eq!(extremal.change.percentage_change, 30.0);
        assert!(matches!(
            summary.failures[..],
            [AnalysisError::NonFiniteChange { room_id: 1, .. }]
        ));
    }

    #[test]
    fn test_single_observation_is_zero_change() {
        let change = percentage_change(3, &[80.0]).unwrap().unwrap();
        assert_eq!(change.change.percentage_change, 0.0);
    }

    #[test]
    fn test_largest_change_single_room() {
        let summary = largest_change(&RoomPriceSeries::from([(7, vec![100.0, 150.0])]));
        let extremal = summary.extremal.unwrap();

        assert_eq!(extremal.room_id, 7);
        assert_eq!(extremal.change.percentage_change, 50.0);
        assert_eq!(extremal.change.starting_price, 100.0);
        assert_eq!(extremal.change.ending_price, 150.0);
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn test_largest_change_keeps_sign_and_compares_magnitude() {
        let summary = largest_change(&RoomPriceSeries::from([
            (1, vec![100.0, 140.0]),
            (2, vec![200.0, 60.0]),
            (3, vec![50.0, 60.0]),
        ]));
        let extremal = summary.extremal.unwrap();

        assert_eq!(extremal.room_id, 2);
        assert_eq!(extremal.change.percentage_change, -70.0);
    }

    #[test]
    fn test_largest_change_tie_goes_to_first_room() {
        let summary = largest_change(&RoomPriceSeries::from([
            (5, vec![100.0, 150.0]),
            (2, vec![100.0, 50.0]),
            (9, vec![10.0, 15.0]),
        ]));
        assert_eq!(summary.extremal.unwrap().room_id, 5);
    }

    #[test]
    fn test_largest_change_all_flat_reports_first_room() {
        let summary = largest_change(&RoomPriceSeries::from([
            (4, vec![100.0, 100.0]),
            (8, vec![50.0]),
        ]));
        let extremal = summary.extremal.unwrap();

        assert_eq!(extremal.room_id, 4);
        assert_eq!(extremal.change.percentage_change, 0.0);
    }

    #[test]
    fn test_largest_change_skips_zero_start_rooms() {
        let summary = largest_change(&RoomPriceSeries::from([
            (7, vec![0.0, 150.0]),
            (8, vec![100.0, 120.0]),
        ]));

        assert_eq!(summary.extremal.unwrap().room_id, 8);
        assert_eq!(summary.failures.len(), 1);
        assert!(matches!(
            summary.failures[0],
            AnalysisError::DivisionByZero { room_id: 7 }
        ));
    }

    #[test]
    fn test_largest_change_nothing_evaluable() {
        let summary = largest_change(&RoomPriceSeries::from([(7, vec![0.0, 150.0])]));
        assert!(summary.extremal.is_none());
        assert_eq!(summary.failures.len(), 1);

        let empty = largest_change(&RoomPriceSeries::new());
        assert!(empty.extremal.is_none());
        assert!(empty.failures.is_empty());
    }
}
