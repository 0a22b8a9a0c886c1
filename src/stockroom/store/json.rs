use super::LoadReport;
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::Product;
use serde_json::{Map, Value};

/// Encode as one pretty-printed JSON object keyed by product id, in listing order.
pub fn encode(inventory: &Inventory) -> Result<String> {
    let mut entries = Map::new();
    for product in inventory.list_all() {
        entries.insert(
            product.id().to_string(),
            serde_json::to_value(product.to_record())?,
        );
    }
    Ok(serde_json::to_string_pretty(&Value::Object(entries))?)
}

pub fn decode(content: &str) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    if content.trim().is_empty() {
        return Ok(report);
    }

    let document: Value = serde_json::from_str(content)
        .map_err(|e| StockError::format("document", e.to_string()))?;
    let Value::Object(entries) = document else {
        return Err(StockError::format(
            "document",
            "expected an object keyed by product id",
        ));
    };

    for (key, value) in entries {
        let outcome = Product::from_value(&key, value).and_then(|product| {
            if product.id() != key {
                return Err(StockError::format(
                    format!("record {}", key),
                    format!("key does not match id '{}'", product.id()),
                ));
            }
            report.inventory.add(product)
        });

        if let Err(e) = outcome {
            tracing::warn!(record = %key, error = %e, "skipping product record");
            report.skipped.push(e);
        }
    }

    Ok(report)
}
