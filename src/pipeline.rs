//! One report run: read inputs, then data file, script and plot per operation.

use crate::Result;
use crate::catalog::{Operation, WORKLOAD_SIZES};
use crate::error::ConvertError;
use crate::layout::{OutputLayout, write_file};
use crate::log::{read_log_lines, read_template};
use crate::model::AggregationTable;
use crate::plot::Plotter;
use crate::render::{render_data_file, render_script};
use crate::summary::{OperationSummary, RunSummary};
use anyhow::Context;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub log: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    /// None skips the external plotter.
    pub plotter: Option<Plotter>,
    /// Treat a non-zero plotter exit as fatal.
    pub fail_on_plot_error: bool,
}

impl RunConfig {
    pub fn new(log: impl Into<PathBuf>, template: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            log: log.into(),
            template: template.into(),
            output: output.into(),
            plotter: Some(Plotter::default()),
            fail_on_plot_error: false,
        }
    }
}

/// Process every operation in order. The first error aborts the run.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let lines = read_log_lines(&config.log)?;
    let template = read_template(&config.template)?;
    let layout = OutputLayout::prepare(&config.output)?;

    info!(
        "{} log lines, {} workload sizes up to {}, writing to {}",
        lines.len(),
        WORKLOAD_SIZES.len(),
        WORKLOAD_SIZES.last().map_or(0, |size| size.elements),
        layout.root.display()
    );

    let mut operations = Vec::with_capacity(Operation::ALL.len());
    for operation in Operation::ALL {
        let summary = run_operation(config, &layout, &lines, &template, operation)
            .with_context(|| format!("operation {}", operation))?;
        operations.push(summary);
    }

    Ok(RunSummary {
        output_root: layout.root,
        operations,
    })
}

fn run_operation(
    config: &RunConfig,
    layout: &OutputLayout,
    lines: &[String],
    template: &str,
    operation: Operation,
) -> Result<OperationSummary> {
    let table = AggregationTable::build(lines, operation)?;
    if table.measurement_count() == 0 {
        warn!("{}: no measurements in log", operation);
    }

    let data = render_data_file(&table, &WORKLOAD_SIZES);
    let data_file = layout.data_file(operation);
    write_file(&data_file, &data.text)?;

    let script_file = layout.script_file(operation);
    write_file(&script_file, &render_script(template, operation))?;

    let plot = match &config.plotter {
        Some(plotter) => {
            let outcome = plotter.run(&layout.gnuplots, &operation.script_file_name())?;
            if !outcome.success && config.fail_on_plot_error {
                return Err(ConvertError::Process(format!(
                    "{} {} exited with code {:?}",
                    plotter.program(),
                    operation.script_file_name(),
                    outcome.exit_code
                ))
                .into());
            }
            Some(outcome)
        }
        None => None,
    };

    info!("{}: {} blocks, {} rows", operation, data.blocks.len(), data.rows);

    Ok(OperationSummary {
        operation: operation.name().to_string(),
        title: operation.title().to_string(),
        data_file,
        script_file,
        image_file: layout.image_file(operation),
        blocks: data.blocks,
        missing: data.missing,
        rows: data.rows,
        plot,
    })
}
