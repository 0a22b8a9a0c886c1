//! Line format: one product per line as `id;name;quantity;price`, no header.

use super::LoadReport;
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::Product;

const SEPARATOR: char = ';';

fn representable(value: &str) -> bool {
    !value.contains(SEPARATOR) && !value.contains('\n') && !value.contains('\r')
}

pub fn encode(inventory: &Inventory) -> Result<String> {
    let mut out = String::new();
    for product in inventory.list_all() {
        for (field, value) in [("id", product.id()), ("name", product.name())] {
            if !representable(value) {
                return Err(StockError::format(
                    format!("record {}", product.id()),
                    format!("{} contains '{}' or a line break", field, SEPARATOR),
                ));
            }
        }
        out.push_str(&format!(
            "{id}{sep}{name}{sep}{quantity}{sep}{price}\n",
            id = product.id(),
            name = product.name(),
            quantity = product.quantity(),
            price = product.price(),
            sep = SEPARATOR,
        ));
    }
    Ok(out)
}

pub fn decode(content: &str) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let context = format!("line {}", n + 1);
        let outcome = parse_line(line, &context).and_then(|p| report.inventory.add(p));

        if let Err(e) = outcome {
            tracing::warn!(record = %context, error = %e, "skipping product line");
            report.skipped.push(e);
        }
    }

    Ok(report)
}

fn parse_line(line: &str, context: &str) -> Result<Product> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    let [id, name, quantity, price] = fields.as_slice() else {
        return Err(StockError::format(
            context,
            format!("expected 4 fields, found {}", fields.len()),
        ));
    };

    let quantity: i64 = quantity
        .trim()
        .parse()
        .map_err(|_| StockError::format(context, format!("invalid quantity '{}'", quantity)))?;
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| StockError::format(context, format!("invalid price '{}'", price)))?;

    Product::new(*id, *name, quantity, price).map_err(|e| match e {
        StockError::Validation(v) => StockError::format(context, v.to_string()),
        other => other,
    })
}
