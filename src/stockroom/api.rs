//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every inventory operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the in-memory [`Inventory`] and the [`InventoryStore`] it is persisted to
//! - **Dispatches** to the matching command function
//! - **Persists** after each successful mutation when autosave is on
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no prompting; that belongs to the client.
//!
//! ## Generic Over InventoryStore
//!
//! - Production: `StockroomApi<FileStore>`
//! - Testing: `StockroomApi<InMemoryStore>`
//!
//! ## Autosave Failures
//!
//! A mutation is applied in memory before it is saved. If the save fails, the I/O
//! error is returned and the change stays in memory; the next successful save
//! (explicit, or from a later mutation) writes it out.

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Scope;
use crate::store::InventoryStore;

pub struct StockroomApi<S: InventoryStore> {
    store: S,
    inventory: Inventory,
    autosave: bool,
    paths: commands::StockroomPaths,
}

impl<S: InventoryStore> StockroomApi<S> {
    /// A facade over an empty inventory. Call [`StockroomApi::load`] to read the store.
    pub fn new(store: S, paths: commands::StockroomPaths) -> Self {
        Self {
            store,
            inventory: Inventory::new(),
            autosave: true,
            paths,
        }
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Replace the in-memory inventory with the stored one.
    ///
    /// Records that could not be read are reported as warnings, not errors.
    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let report = self.store.load()?;
        self.inventory = report.inventory;

        let mut result = commands::CmdResult::default();
        for skipped in &report.skipped {
            result.add_message(commands::CmdMessage::warning(format!(
                "Skipped record: {}",
                skipped
            )));
        }
        result.add_message(commands::CmdMessage::info(format!(
            "Loaded {} products from {}",
            self.inventory.len(),
            self.store.location()
        )));
        Ok(result)
    }

    pub fn save(&self) -> Result<commands::CmdResult> {
        self.store.save(&self.inventory)?;
        let mut result = commands::CmdResult::default();
        result.add_message(commands::CmdMessage::success(format!(
            "Inventory saved to {}",
            self.store.location()
        )));
        Ok(result)
    }

    pub fn generate_id(&self) -> String {
        self.inventory.generate_id()
    }

    pub fn add_product(
        &mut self,
        id: Option<String>,
        name: String,
        quantity: i64,
        price: f64,
    ) -> Result<commands::CmdResult> {
        self.mutate(|inventory| commands::add::run(inventory, id, name, quantity, price))
    }

    pub fn remove_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        self.mutate(|inventory| commands::remove::run(inventory, id))
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<commands::CmdResult> {
        self.mutate(|inventory| commands::update::quantity(inventory, id, quantity))
    }

    pub fn update_price(&mut self, id: &str, price: f64) -> Result<commands::CmdResult> {
        self.mutate(|inventory| commands::update::price(inventory, id, price))
    }

    pub fn rename_product(&mut self, id: &str, name: String) -> Result<commands::CmdResult> {
        self.mutate(|inventory| commands::update::rename(inventory, id, name))
    }

    pub fn find_by_name(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.inventory, term)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn get_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.inventory, id)
    }

    pub fn inventory_value(&self) -> Result<commands::CmdResult> {
        commands::value::run(&self.inventory)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn autosave(&self) -> bool {
        self.autosave
    }

    fn mutate<F>(&mut self, op: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&mut Inventory) -> Result<commands::CmdResult>,
    {
        let result = op(&mut self.inventory)?;
        if self.autosave {
            self.store.save(&self.inventory)?;
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockroomPaths};
