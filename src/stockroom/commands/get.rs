use crate::commands::CmdResult;
use crate::error::{Result, StockError};
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory, id: &str) -> Result<CmdResult> {
    let product = inventory
        .get(id)
        .cloned()
        .ok_or_else(|| StockError::NotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn returns_single_product() {
        let mut inv = Inventory::new();
        add::run(&mut inv, Some("P1".into()), "Mouse".into(), 1, 1.0).unwrap();

        let result = run(&inv, "P1").unwrap();
        assert_eq!(result.listed_products.len(), 1);
        assert!(matches!(run(&inv, "P2"), Err(StockError::NotFound(_))));
    }
}
