use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let listed: Vec<_> = inventory.list_all().into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("The inventory is empty."));
    }
    Ok(result.with_listed_products(listed))
}
