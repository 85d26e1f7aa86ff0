//! Output directory tree: `<root>/{data,gnuplots,pngs}`.

use crate::catalog::Operation;
use crate::error::ConvertError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DATA_DIR: &str = "data";
pub const GNUPLOTS_DIR: &str = "gnuplots";
pub const PNGS_DIR: &str = "pngs";

#[derive(Debug, Clone)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub data: PathBuf,
    pub gnuplots: PathBuf,
    pub pngs: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data: root.join(DATA_DIR),
            gnuplots: root.join(GNUPLOTS_DIR),
            pngs: root.join(PNGS_DIR),
            root,
        }
    }

    /// Create the root and its three subdirectories, leaving existing ones alone.
    pub fn prepare(root: impl Into<PathBuf>) -> Result<Self, ConvertError> {
        let layout = Self::new(root);
        for dir in [&layout.root, &layout.data, &layout.gnuplots, &layout.pngs] {
            ensure_dir(dir)?;
        }
        Ok(layout)
    }

    pub fn data_file(&self, operation: Operation) -> PathBuf {
        self.data.join(operation.data_file_name())
    }

    pub fn script_file(&self, operation: Operation) -> PathBuf {
        self.gnuplots.join(operation.script_file_name())
    }

    pub fn image_file(&self, operation: Operation) -> PathBuf {
        self.pngs.join(operation.image_file_name())
    }
}

fn ensure_dir(dir: &Path) -> Result<(), ConvertError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ConvertError::InvalidArgument(format!(
            "{} exists but is not a directory",
            dir.display()
        ))),
        Err(_) => {
            debug!("creating {}", dir.display());
            fs::create_dir(dir).map_err(|e| ConvertError::file_access(dir, e))
        }
    }
}

/// Whole-buffer write, replacing any previous file.
pub fn write_file(path: &Path, contents: &str) -> Result<(), ConvertError> {
    fs::write(path, contents).map_err(|e| ConvertError::file_access(path, e))
}
