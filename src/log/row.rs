/// A single measurement extracted from the benchmark log for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    /// 1-based line number in the log file.
    pub line: usize,
    pub container: String,
    pub measurement: i64,
}
