use super::{InventoryStore, LoadReport, StorageFormat};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use std::cell::{Cell, RefCell};
use std::io;

/// In-memory storage for testing.
///
/// Holds the encoded document instead of the `Inventory` itself, so saves and
/// loads go through the same codecs as [`super::fs::FileStore`]. Uses `RefCell`
/// since the store is single-threaded and the trait takes `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    format: StorageFormat,
    contents: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: StorageFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Start from an already encoded document.
    pub fn with_contents(format: StorageFormat, contents: impl Into<String>) -> Self {
        Self {
            format,
            contents: RefCell::new(Some(contents.into())),
            simulate_write_error: Cell::new(false),
        }
    }

    /// The last saved document, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Make every following `save` fail with an I/O error.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl InventoryStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        match self.contents.borrow().as_deref() {
            Some(contents) => self.format.decode(contents),
            None => Ok(LoadReport::default()),
        }
    }

    fn save(&self, inventory: &Inventory) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StockError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write failure",
            )));
        }
        let encoded = self.format.encode(inventory)?;
        *self.contents.borrow_mut() = Some(encoded);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---
