use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;

pub fn quantity(inventory: &mut Inventory, id: &str, quantity: i64) -> Result<CmdResult> {
    inventory.update_quantity(id, quantity)?;
    updated(
        inventory,
        id,
        format!("Quantity of {} set to {}", id, quantity),
    )
}

pub fn price(inventory: &mut Inventory, id: &str, price: f64) -> Result<CmdResult> {
    inventory.update_price(id, price)?;
    updated(inventory, id, format!("Price of {} set to ${:.2}", id, price))
}

pub fn rename(inventory: &mut Inventory, id: &str, name: String) -> Result<CmdResult> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(StockError::Api("Product name cannot be empty".into()));
    }
    inventory.rename(id, name.clone())?;
    updated(inventory, id, format!("Product {} renamed to {}", id, name))
}

fn updated(inventory: &Inventory, id: &str, message: String) -> Result<CmdResult> {
    let product = inventory
        .get(id)
        .cloned()
        .ok_or_else(|| StockError::NotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_products(vec![product]))
}
