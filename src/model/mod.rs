//! Aggregation model: group one operation's log rows by container type.

use crate::catalog::{CONTAINER_TYPES, Operation};
use crate::error::ConvertError;
use crate::log::classify_line;
use std::collections::BTreeMap;
use tracing::debug;

/// Container type -> measurements in log order, for a single operation.
///
/// Keys iterate in ascending lexicographic order so the data file is
/// reproducible regardless of the order container types appear in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationTable {
    pub operation: Operation,
    pub series: BTreeMap<String, Vec<i64>>,
}

impl AggregationTable {
    /// Empty table seeded with every known container type.
    pub fn new(operation: Operation) -> Self {
        let series = CONTAINER_TYPES
            .iter()
            .map(|name| (name.to_string(), Vec::new()))
            .collect();
        Self { operation, series }
    }

    /// Build the table for `operation` from the whole log.
    ///
    /// Fails on the first line that mentions the operation but carries no
    /// parsable measurement.
    pub fn build<S: AsRef<str>>(lines: &[S], operation: Operation) -> Result<Self, ConvertError> {
        let mut table = Self::new(operation);

        for (idx, line) in lines.iter().enumerate() {
            if let Some(row) = classify_line(idx + 1, line.as_ref(), operation)? {
                if !table.series.contains_key(&row.container) {
                    debug!(
                        "{}: unknown container type {:?} at line {}",
                        operation, row.container, row.line
                    );
                }
                table
                    .series
                    .entry(row.container)
                    .or_default()
                    .push(row.measurement);
            }
        }

        Ok(table)
    }

    pub fn measurement_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Container types with at least one measurement.
    pub fn populated(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.series
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}
