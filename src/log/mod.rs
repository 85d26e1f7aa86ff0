//! Benchmark log input: reading and per-operation line classification.

pub mod parse;
pub mod read;
pub mod row;

pub use parse::classify_line;
pub use read::{read_log_lines, read_template};
