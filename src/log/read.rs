use crate::error::ConvertError;
use std::fs;
use std::path::Path;

/// Read the benchmark log and split it into lines (`\n` or `\r\n`).
pub fn read_log_lines(path: &Path) -> Result<Vec<String>, ConvertError> {
    let text = fs::read_to_string(path).map_err(|e| ConvertError::file_access(path, e))?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Read the plot script template verbatim.
pub fn read_template(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|e| ConvertError::file_access(path, e))
}
