use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

/// Inventory valuation: sum of quantity × price over all products.
pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let total = inventory.total_value();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} products, total value ${:.2}",
        inventory.len(),
        total
    )));
    Ok(result.with_total_value(total))
}
