use crate::error::{Result, StockError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// A single inventory entry.
///
/// The id is fixed at construction. Quantity and price can only change through
/// the validated setters, so a `Product` never holds an out-of-range value.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    quantity: i64,
    price: f64,
}

/// Plain serialized shape of a [`Product`].
///
/// The Spanish keys are accepted on input so files written by the older
/// inventory scripts still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "cantidad")]
    pub quantity: i64,
    #[serde(alias = "precio")]
    pub price: f64,
}

fn check_quantity(quantity: i64) -> std::result::Result<(), ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity(quantity));
    }
    Ok(())
}

fn check_price(price: f64) -> std::result::Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::NonPositivePrice(price));
    }
    Ok(())
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Result<Self> {
        check_quantity(quantity)?;
        check_price(price)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_quantity(&mut self, quantity: i64) -> Result<()> {
        check_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> Result<()> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }

    // Only the inventory renames products, it owns the name index.
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Stock valuation: quantity times unit price.
    pub fn total_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }

    pub fn from_record(record: ProductRecord) -> Result<Self> {
        Self::new(record.id, record.name, record.quantity, record.price)
    }

    /// Rebuild a product from an untyped JSON value.
    ///
    /// Every failure, including out-of-range values, is reported as
    /// [`StockError::Format`] with `key` as context.
    pub fn from_value(key: &str, value: serde_json::Value) -> Result<Self> {
        let record: ProductRecord = serde_json::from_value(value)
            .map_err(|e| StockError::format(format!("record {}", key), e.to_string()))?;
        Self::from_record(record).map_err(|e| match e {
            StockError::Validation(v) => {
                StockError::format(format!("record {}", key), v.to_string())
            }
            other => other,
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Nombre: {} | Cantidad: {} | Precio: ${:.2}",
            self.id, self.name, self.quantity, self.price
        )
    }
}
