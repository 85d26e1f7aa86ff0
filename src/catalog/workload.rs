//! Workload sizes the benchmark was run at.
//!
//! The i-th measurement of a container type belongs to the i-th size; the log
//! carries no size column, so this order is the only pairing there is.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadSize {
    pub elements: u32,
    /// Left-aligned, padded to the width of the widest size.
    pub label: &'static str,
}

impl WorkloadSize {
    pub const fn new(elements: u32, label: &'static str) -> Self {
        Self { elements, label }
    }
}

pub const WORKLOAD_SIZES: [WorkloadSize; 10] = [
    WorkloadSize::new(100_000, "100000 "),
    WorkloadSize::new(200_000, "200000 "),
    WorkloadSize::new(300_000, "300000 "),
    WorkloadSize::new(400_000, "400000 "),
    WorkloadSize::new(500_000, "500000 "),
    WorkloadSize::new(600_000, "600000 "),
    WorkloadSize::new(700_000, "700000 "),
    WorkloadSize::new(800_000, "800000 "),
    WorkloadSize::new(900_000, "900000 "),
    WorkloadSize::new(1_000_000, "1000000"),
];
