//! Rank correlation and the Student-t tail used for its significance.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{AnalysisError, Result};

/// Spearman rank correlation with a two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spearman {
    pub coefficient: f64,
    pub p_value: f64,
}

/// 1-based ranks of `values`, averaging the ranks of tied values.
pub fn ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end share the mean of ranks start+1..=end
        let rank = (start + end + 1) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = rank;
        }
        start = end;
    }
    ranks
}

/// Pearson correlation of two equal-length samples, `None` when either has
/// zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Spearman's rho over paired samples.
///
/// The p-value tests rho against zero with a Student-t statistic on `n - 2`
/// degrees of freedom. With exactly two samples there are no degrees of
/// freedom left and the p-value is reported as 1.0.
///
/// # Errors
///
/// [`AnalysisError::Statistics`] when the samples differ in length, when
/// there are fewer than two pairs, or when either sample is constant.
pub fn spearman(x: &[f64], y: &[f64]) -> Result<Spearman> {
    if x.len() != y.len() {
        return Err(AnalysisError::Statistics(format!(
            "samples differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(AnalysisError::Statistics(format!(
            "at least 2 samples are required, got {}",
            x.len()
        )));
    }

    let coefficient = pearson(&ranks(x), &ranks(y)).ok_or_else(|| {
        AnalysisError::Statistics("correlation is undefined for a constant sample".into())
    })?;

    let df = (x.len() - 2) as f64;
    let p_value = if df == 0.0 {
        1.0
    } else if coefficient.abs() == 1.0 {
        0.0
    } else {
        let t = coefficient * (df / ((1.0 + coefficient) * (1.0 - coefficient))).sqrt();
        student_t_two_sided(t, df)?
    };

    Ok(Spearman {
        coefficient,
        p_value,
    })
}

/// Two-sided tail probability `P(|T| >= |t|)` for Student's t with `df`
/// degrees of freedom.
pub fn student_t_two_sided(t: f64, df: f64) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| AnalysisError::Statistics(format!("Student-t with {df} df: {e}")))?;
    Ok((2.0 * dist.sf(t.abs())).min(1.0))
}
