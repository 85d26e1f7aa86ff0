//! External plotter invocation.

use crate::error::ConvertError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

pub const DEFAULT_PLOTTER: &str = "gnuplot";

/// Result of one plotter run. `exit_code` is `None` when the process was
/// terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotOutcome {
    pub script: PathBuf,
    pub success: bool,
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct Plotter {
    program: String,
}

impl Default for Plotter {
    fn default() -> Self {
        Self::new(DEFAULT_PLOTTER)
    }
}

impl Plotter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `<program> <script_name>` inside `workdir` and wait for it.
    ///
    /// Only a failure to launch is an error; the exit status is reported in
    /// the outcome.
    pub fn run(&self, workdir: &Path, script_name: &str) -> Result<PlotOutcome, ConvertError> {
        debug!("running {} {} in {}", self.program, script_name, workdir.display());

        let status = Command::new(&self.program)
            .arg(script_name)
            .current_dir(workdir)
            .status()
            .map_err(|e| ConvertError::Process(format!("failed to launch {}: {}", self.program, e)))?;

        if !status.success() {
            warn!("{} {} exited with {}", self.program, script_name, status);
        }

        Ok(PlotOutcome {
            script: workdir.join(script_name),
            success: status.success(),
            exit_code: status.code(),
        })
    }
}
