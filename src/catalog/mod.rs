//! Catalog layer: the fixed benchmark vocabulary.
//!
//! This module is separate from log parsing and rendering.
//! It owns:
//! - Operation (benchmark method name + plot title)
//! - Container types (list implementations under test)
//! - Workload sizes (x axis of every plot)

pub mod container;
pub mod operation;
pub mod workload;

pub use container::CONTAINER_TYPES;
pub use operation::Operation;
pub use workload::{WORKLOAD_SIZES, WorkloadSize};
