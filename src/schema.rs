//! Header resolution: maps the columns an analysis needs onto positions in
//! one file's header.

use csv::StringRecord;
use std::collections::HashMap;

use crate::error::{AnalysisError, Result};
use crate::record::Field;

/// Resolved column positions for one file header.
///
/// `width` is the header's field count; every data row must match it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<Field, usize>,
    width: usize,
}

impl ColumnIndex {
    /// Resolves each of `required` against `header`.
    ///
    /// Matching is exact and case-sensitive; when a name repeats, the first
    /// occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Schema`] listing every required field that is
    /// absent from the header.
    pub fn resolve(source_name: &str, header: &StringRecord, required: &[Field]) -> Result<Self> {
        let mut positions = HashMap::with_capacity(required.len());
        let mut missing = Vec::new();

        for &field in required {
            match header.iter().position(|name| name == field.as_str()) {
                Some(i) => {
                    positions.insert(field, i);
                }
                None => missing.push(field.as_str().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(AnalysisError::Schema {
                source_name: source_name.to_string(),
                missing,
            });
        }

        Ok(Self {
            positions,
            width: header.len(),
        })
    }

    /// Position of `field`, if it was part of the resolved set.
    pub fn position(&self, field: Field) -> Option<usize> {
        self.positions.get(&field).copied()
    }

    pub fn width(&self) -> usize {
        self.width
    }
}
