//! Per-run report: what was written for each operation.

use crate::Result;
use crate::plot::PlotOutcome;
use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct OperationSummary {
    pub operation: String,
    pub title: String,
    pub data_file: PathBuf,
    pub script_file: PathBuf,
    pub image_file: PathBuf,
    /// Container types in data file order.
    pub blocks: Vec<String>,
    /// Known container types with no block in the data file.
    pub missing: Vec<String>,
    pub rows: usize,
    /// None when plotting was skipped.
    pub plot: Option<PlotOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub output_root: PathBuf,
    pub operations: Vec<OperationSummary>,
}

impl RunSummary {
    pub fn failed_plots(&self) -> impl Iterator<Item = &OperationSummary> {
        self.operations
            .iter()
            .filter(|op| op.plot.as_ref().is_some_and(|p| !p.success))
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("write summary file {}", path.display()))?;
        Ok(())
    }
}
