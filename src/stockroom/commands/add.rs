use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::Product;

/// Add a product. Without an explicit id one is generated.
pub fn run(
    inventory: &mut Inventory,
    id: Option<String>,
    name: String,
    quantity: i64,
    price: f64,
) -> Result<CmdResult> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(StockError::Api("Product name cannot be empty".into()));
    }

    let id = match id.map(|id| id.trim().to_string()) {
        Some(id) if id.is_empty() => {
            return Err(StockError::Api("Product ID cannot be empty".into()));
        }
        Some(id) => id,
        None => inventory.generate_id(),
    };

    let product = Product::new(id, name, quantity, price)?;
    inventory.add(product.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.id(),
        product.name()
    )));
    Ok(result.with_affected_products(vec![product]))
}
