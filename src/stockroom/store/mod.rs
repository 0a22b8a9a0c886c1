//! # Storage Layer
//!
//! The [`InventoryStore`] trait is the save/load boundary between an [`Inventory`]
//! and wherever it is persisted. The application works against the trait so the
//! API can be exercised without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per inventory.
//!   - Saves go to a temp file in the same directory which is then renamed over
//!     the target, so a failed save never truncates the previous file.
//!   - A missing file loads as an empty inventory.
//!
//! - [`memory::InMemoryStore`]: keeps the encoded document in memory, for tests.
//!   It runs the same codecs as `FileStore`.
//!
//! ## Storage Formats
//!
//! ```text
//! json (default)                         lines
//! {                                      P1;Mouse;10;9.99
//!   "P1": {                              P2;Teclado;3;25.5
//!     "id": "P1",
//!     "name": "Mouse",
//!     "quantity": 10,
//!     "price": 9.99
//!   }
//! }
//! ```
//!
//! Loading is tolerant per record: a malformed entry is skipped and reported in
//! [`LoadReport::skipped`], the rest still load. Only file-level problems (unreadable
//! file, a JSON document that is not an object) fail the whole load.

use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod fs;
pub mod json;
pub mod lines;
pub mod memory;

/// Outcome of a load: the rebuilt inventory plus every record that was dropped.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub inventory: Inventory,
    pub skipped: Vec<StockError>,
}

/// Abstract interface for inventory persistence.
pub trait InventoryStore {
    /// Rebuild an inventory from storage. Missing storage is an empty inventory.
    fn load(&self) -> Result<LoadReport>;

    /// Replace the stored inventory with `inventory`.
    fn save(&self, inventory: &Inventory) -> Result<()>;

    /// Human readable description of where data lives
    fn location(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Lines,
}

impl StorageFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            StorageFormat::Json => "inventory.json",
            StorageFormat::Lines => "inventory.txt",
        }
    }

    pub fn encode(self, inventory: &Inventory) -> Result<String> {
        match self {
            StorageFormat::Json => json::encode(inventory),
            StorageFormat::Lines => lines::encode(inventory),
        }
    }

    pub fn decode(self, content: &str) -> Result<LoadReport> {
        match self {
            StorageFormat::Json => json::decode(content),
            StorageFormat::Lines => lines::decode(content),
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageFormat::Json => write!(f, "json"),
            StorageFormat::Lines => write!(f, "lines"),
        }
    }
}

impl FromStr for StorageFormat {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(StorageFormat::Json),
            "lines" | "txt" => Ok(StorageFormat::Lines),
            other => Err(StockError::Api(format!(
                "Unknown storage format: {} (expected json or lines)",
                other
            ))),
        }
    }
}
