use tracing::info;

use crate::analyzers::types::CorrelationReport;
use crate::error::Result;
use crate::record::PriceSatisfaction;
use crate::snapshot::Snapshot;
use crate::stats::spearman;
use crate::validate::{PRICE_SATISFACTION_FIELDS, price_satisfaction};

/// One `(price, satisfaction)` pair per reviewed listing in the snapshot.
#[tracing::instrument(skip_all, fields(snapshot = %snapshot.name()))]
pub fn price_satisfaction_samples(snapshot: &Snapshot) -> Result<Vec<PriceSatisfaction>> {
    let columns = snapshot.columns(PRICE_SATISFACTION_FIELDS)?;
    let samples: Vec<_> = snapshot
        .rows()
        .iter()
        .filter_map(|row| price_satisfaction(row, &columns))
        .collect();

    info!(
        samples = samples.len(),
        rejected = snapshot.rows().len() - samples.len(),
        "Price/satisfaction samples collected"
    );
    Ok(samples)
}

/// Spearman correlation between price and satisfaction.
///
/// # Errors
///
/// [`crate::error::AnalysisError::Statistics`] when fewer than two samples are
/// given or either column is constant.
pub fn correlation(samples: &[PriceSatisfaction]) -> Result<CorrelationReport> {
    let (prices, ratings): (Vec<f64>, Vec<f64>) =
        samples.iter().map(|s| (s.price, s.satisfaction)).unzip();
    let result = spearman(&prices, &ratings)?;

    Ok(CorrelationReport {
        samples: samples.len(),
        correlation: result.coefficient,
        p_value: result.p_value,
    })
}
