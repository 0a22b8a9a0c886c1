use super::{InventoryStore, LoadReport, StorageFormat};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
    format: StorageFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, format: StorageFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::new(path, StorageFormat::Json)
    }

    pub fn lines(path: impl Into<PathBuf>) -> Self {
        Self::new(path, StorageFormat::Lines)
    }
}

impl InventoryStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no inventory file yet, starting empty");
            return Ok(LoadReport::default());
        }

        let content = fs::read_to_string(&self.path).map_err(StockError::Io)?;
        let report = self.format.decode(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            loaded = report.inventory.len(),
            skipped = report.skipped.len(),
            "inventory loaded"
        );
        Ok(report)
    }

    fn save(&self, inventory: &Inventory) -> Result<()> {
        let content = self.format.encode(inventory)?;
        write_atomic(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), products = inventory.len(), "inventory saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Write `content` next to `target` and rename it into place.
///
/// The parent directory must exist. On failure the temp file is removed and
/// `target` is left as it was.
fn write_atomic(target: &Path, content: &str) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = target
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("inventory");
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    let written = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, target));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(StockError::Io(e));
    }
    Ok(())
}
