//! Text rendering: gnuplot data tables and per-operation plot scripts.

pub mod data;
pub mod script;

pub use data::render_data_file;
pub use script::render_script;
