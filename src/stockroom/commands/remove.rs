use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &mut Inventory, id: &str) -> Result<CmdResult> {
    let product = inventory.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product removed ({}): {}",
        product.id(),
        product.name()
    )));
    Ok(result.with_affected_products(vec![product]))
}
