use crate::catalog::{CONTAINER_TYPES, WorkloadSize};
use crate::model::AggregationTable;
use tracing::warn;

/// Separator between container blocks: two blank lines, which gnuplot reads
/// as an index boundary.
const BLOCK_SEPARATOR: &str = "\n\n\n";

/// Rendered data table plus what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    pub text: String,
    /// Container types written, in file order (gnuplot `index` order).
    pub blocks: Vec<String>,
    /// Known container types without measurements; every block after one of
    /// these sits one gnuplot `index` lower than a fixed-index template expects.
    pub missing: Vec<String>,
    pub rows: usize,
}

/// Render one block per populated container type.
///
/// Row i pairs `sizes[i]` with the i-th measurement. Surplus measurements are
/// dropped and short series end early; both are reported with `warn!`.
/// Container types without measurements are omitted so no empty gnuplot
/// index is produced; known ones are listed in `missing` and reported with
/// `warn!`, since later blocks shift down one index.
pub fn render_data_file(table: &AggregationTable, sizes: &[WorkloadSize]) -> DataFile {
    let mut text = String::new();
    let mut blocks = Vec::new();
    let mut rows = 0;

    let missing: Vec<String> = CONTAINER_TYPES
        .iter()
        .filter(|name| table.series.get(**name).is_none_or(|values| values.is_empty()))
        .map(|name| name.to_string())
        .collect();
    for name in &missing {
        warn!(
            "{}: no measurements for {}, later data blocks shift down one index",
            table.operation, name
        );
    }

    for (container, values) in table.populated() {
        if values.len() != sizes.len() {
            warn!(
                "{}: {} has {} measurements for {} workload sizes",
                table.operation,
                container,
                values.len(),
                sizes.len()
            );
        }

        if !blocks.is_empty() {
            text.push_str(BLOCK_SEPARATOR);
        }

        let block: Vec<String> = sizes
            .iter()
            .zip(values)
            .map(|(size, value)| format!("{} {}", size.label, value))
            .collect();
        rows += block.len();
        text.push_str(&block.join("\n"));
        blocks.push(container.to_string());
    }

    DataFile {
        text,
        blocks,
        missing,
        rows,
    }
}
