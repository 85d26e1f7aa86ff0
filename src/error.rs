use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("format error at line {line}: {reason}: {text:?}")]
    Format {
        line: usize,
        reason: &'static str,
        text: String,
    },
    #[error("plotter error: {0}")]
    Process(String),
}

impl ConvertError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
