//! # Inventory
//!
//! The in-memory product collection. Besides the primary id → product map it keeps:
//!
//! - the insertion order, so listings are stable;
//! - the set of ids in use, for uniqueness checks and id generation;
//! - a name index: lower-cased name → ids, used by [`Inventory::find_by_name`].
//!
//! Every id in the primary map sits in exactly one name bucket, the one for its
//! current lower-cased name. All mutations go through this type so that holds after
//! each call. Nothing here touches the filesystem; persistence lives in [`crate::store`].

use crate::error::{Result, StockError};
use crate::model::Product;
use chrono::{Local, NaiveDateTime};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Default, Clone)]
pub struct Inventory {
    products: HashMap<String, Product>,
    order: Vec<String>,
    used_ids: HashSet<String>,
    name_index: BTreeMap<String, Vec<String>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used_ids.contains(id)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Insert a product. Fails without touching the inventory if the id is taken.
    pub fn add(&mut self, product: Product) -> Result<()> {
        if self.used_ids.contains(product.id()) {
            return Err(StockError::DuplicateId(product.id().to_string()));
        }

        let id = product.id().to_string();
        self.index(product.name().to_lowercase(), &id);
        self.used_ids.insert(id.clone());
        self.order.push(id.clone());
        self.products.insert(id, product);
        Ok(())
    }

    /// Remove a product and hand it back to the caller.
    pub fn remove(&mut self, id: &str) -> Result<Product> {
        let product = self
            .products
            .remove(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;

        self.used_ids.remove(id);
        self.order.retain(|existing| existing != id);
        self.unindex(&product.name().to_lowercase(), id);
        Ok(product)
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<()> {
        self.product_mut(id)?.set_quantity(quantity)
    }

    pub fn update_price(&mut self, id: &str, price: f64) -> Result<()> {
        self.product_mut(id)?.set_price(price)
    }

    /// Change a product's name, moving it to the matching name bucket.
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let new_key = name.to_lowercase();

        let product = self.product_mut(id)?;
        let old_key = product.name().to_lowercase();
        product.set_name(name);

        if old_key != new_key {
            self.unindex(&old_key, id);
            self.index(new_key, id);
        }
        Ok(())
    }

    /// Case-insensitive name search.
    ///
    /// Products whose name equals `term` come first, followed by every product
    /// whose name contains it, bucket by bucket in lexicographic order of the
    /// lower-cased name. Each product appears at most once.
    pub fn find_by_name(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();

        let exact = self.name_index.get(&needle).into_iter().flatten();
        let partial = self
            .name_index
            .iter()
            .filter(|(key, _)| key.as_str() != needle && key.contains(needle.as_str()))
            .flat_map(|(_, ids)| ids);

        let mut seen = HashSet::new();
        exact
            .chain(partial)
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| self.products.get(id))
            .collect()
    }

    /// A fresh id based on the current local time.
    pub fn generate_id(&self) -> String {
        self.generate_id_at(Local::now().naive_local())
    }

    /// `P` + `YYYYMMDDHHMMSS` + a zero-padded counter, bumped past every id in use.
    pub fn generate_id_at(&self, at: NaiveDateTime) -> String {
        let stamp = at.format("%Y%m%d%H%M%S").to_string();
        let mut counter: u32 = 1;
        loop {
            let candidate = format!("P{}{:03}", stamp, counter);
            if !self.used_ids.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// All products in insertion order.
    pub fn list_all(&self) -> Vec<&Product> {
        self.order
            .iter()
            .filter_map(|id| self.products.get(id))
            .collect()
    }

    pub fn total_value(&self) -> f64 {
        self.products.values().map(Product::total_value).sum()
    }

    /// Verify that the primary map, the order, the used-id set and the name index agree.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.order.len() != self.products.len() {
            return Err(format!(
                "order has {} ids, map has {}",
                self.order.len(),
                self.products.len()
            ));
        }
        if self.used_ids.len() != self.products.len()
            || !self.products.keys().all(|id| self.used_ids.contains(id))
        {
            return Err("used-id set does not match the product map".to_string());
        }

        let mut indexed = HashSet::new();
        for (key, ids) in &self.name_index {
            if ids.is_empty() {
                return Err(format!("empty bucket left for '{}'", key));
            }
            for id in ids {
                let product = self
                    .products
                    .get(id)
                    .ok_or_else(|| format!("index holds unknown id {}", id))?;
                if product.name().to_lowercase() != *key {
                    return Err(format!("id {} indexed under '{}'", id, key));
                }
                if !indexed.insert(id.as_str()) {
                    return Err(format!("id {} indexed twice", id));
                }
            }
        }
        if indexed.len() != self.products.len() {
            return Err("some products are missing from the name index".to_string());
        }
        Ok(())
    }

    fn product_mut(&mut self, id: &str) -> Result<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))
    }

    fn index(&mut self, key: String, id: &str) {
        self.name_index.entry(key).or_default().push(id.to_string());
    }

    fn unindex(&mut self, key: &str, id: &str) {
        if let Some(ids) = self.name_index.get_mut(key) {
            ids.retain(|existing| existing != id);
            if ids.is_empty() {
                self.name_index.remove(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use chrono::NaiveDate;

    fn product(id: &str, name: &str) -> Product {
        Product::new(id, name, 1, 1.0).unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn duplicate_add_fails_and_leaves_inventory_unchanged() {
        let mut inv = Inventory::new();
        inv.add(Product::new("P1", "Mouse", 10, 9.99).unwrap()).unwrap();

        let err = inv.add(Product::new("P1", "Teclado", 1, 1.0).unwrap());
        assert!(matches!(err, Err(StockError::DuplicateId(id)) if id == "P1"));
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.get("P1").unwrap().name(), "Mouse");
        assert!(inv.find_by_name("teclado").is_empty());
        inv.check_invariants().unwrap();
    }

    #[test]
    fn remove_on_empty_inventory_is_not_found() {
        let mut inv = Inventory::new();
        assert!(matches!(inv.remove("P1"), Err(StockError::NotFound(_))));
        assert!(inv.is_empty());
    }

    #[test]
    fn remove_prunes_empty_bucket() {
        let mut inv = Inventory::new();
        inv.add(product("P1", "Mouse")).unwrap();
        inv.add(product("P2", "mouse")).unwrap();

        let removed = inv.remove("P1").unwrap();
        assert_eq!(removed.id(), "P1");
        assert_eq!(ids(&inv.find_by_name("mouse")), vec!["P2"]);
        inv.check_invariants().unwrap();

        inv.remove("P2").unwrap();
        assert!(inv.find_by_name("mouse").is_empty());
        assert!(!inv.contains("P2"));
        inv.check_invariants().unwrap();
    }

    #[test]
    fn invalid_price_update_keeps_original() {
        let mut inv = Inventory::new();
        inv.add(Product::new("P1", "Mouse", 10, 9.99).unwrap()).unwrap();

        let err = inv.update_price("P1", -5.0);
        assert!(matches!(
            err,
            Err(StockError::Validation(ValidationError::NonPositivePrice(_)))
        ));
        assert_eq!(inv.list_all()[0].price(), 9.99);

        assert!(inv.update_quantity("P1", -1).is_err());
        assert_eq!(inv.list_all()[0].quantity(), 10);
    }

    #[test]
    fn updates_on_missing_id_are_not_found() {
        let mut inv = Inventory::new();
        assert!(matches!(
            inv.update_quantity("nope", 3),
            Err(StockError::NotFound(_))
        ));
        assert!(matches!(
            inv.update_price("nope", 3.0),
            Err(StockError::NotFound(_))
        ));
    }

    #[test]
    fn finds_by_name_case_insensitively_with_substrings() {
        let mut inv = Inventory::new();
        inv.add(product("P1", "Mouse")).unwrap();
        inv.add(product("P2", "Mousepad")).unwrap();
        inv.add(product("P3", "Teclado")).unwrap();

        let found = inv.find_by_name("mouse");
        assert_eq!(ids(&found), vec!["P1", "P2"]);

        assert_eq!(ids(&inv.find_by_name("PAD")), vec!["P2"]);
        assert!(inv.find_by_name("monitor").is_empty());
    }

    #[test]
    fn exact_matches_come_before_partial_ones() {
        let mut inv = Inventory::new();
        inv.add(product("P1", "Cable USB")).unwrap();
        inv.add(product("P2", "USB")).unwrap();
        inv.add(product("P3", "Hub USB")).unwrap();

        assert_eq!(ids(&inv.find_by_name("usb")), vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn empty_term_matches_everything_once() {
        let mut inv = Inventory::new();
        inv.add(product("P1", "Mouse")).unwrap();
        inv.add(product("P2", "Mouse")).unwrap();
        inv.add(product("P3", "Teclado")).unwrap();

        assert_eq!(inv.find_by_name("").len(), 3);
    }

    #[test]
    fn rename_moves_product_between_buckets() {
        let mut inv = Inventory::new();
        inv.add(product("P1", "Mouse")).unwrap();
        inv.rename("P1", "Trackball").unwrap();

        assert!(inv.find_by_name("mouse").is_empty());
        assert_eq!(ids(&inv.find_by_name("track")), vec!["P1"]);
        inv.check_invariants().unwrap();

        // case-only change stays in the same bucket
        inv.rename("P1", "TRACKBALL").unwrap();
        assert_eq!(inv.get("P1").unwrap().name(), "TRACKBALL");
        inv.check_invariants().unwrap();

        assert!(matches!(
            inv.rename("P9", "x"),
            Err(StockError::NotFound(_))
        ));
    }

    #[test]
    fn lists_in_insertion_order() {
        let mut inv = Inventory::new();
        for (id, name) in [("P3", "c"), ("P1", "a"), ("P2", "b")] {
            inv.add(product(id, name)).unwrap();
        }
        inv.remove("P1").unwrap();
        assert_eq!(ids(&inv.list_all()), vec!["P3", "P2"]);
    }

    #[test]
    fn generated_ids_skip_used_ones() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();
        let mut inv = Inventory::new();
        assert_eq!(inv.generate_id_at(at), "P20240517093005001");

        inv.add(product("P20240517093005001", "a")).unwrap();
        inv.add(product("P20240517093005002", "b")).unwrap();
        assert_eq!(inv.generate_id_at(at), "P20240517093005003");

        inv.remove("P20240517093005001").unwrap();
        assert_eq!(inv.generate_id_at(at), "P20240517093005001");
    }

    #[test]
    fn generated_ids_are_distinct_when_added() {
        let mut inv = Inventory::new();
        for i in 0..50 {
            let id = inv.generate_id();
            assert!(!inv.contains(&id));
            inv.add(product(&id, &format!("item {}", i))).unwrap();
        }
        assert_eq!(inv.len(), 50);
        inv.check_invariants().unwrap();
    }

    #[test]
    fn total_value_sums_all_products() {
        let mut inv = Inventory::new();
        inv.add(Product::new("P1", "a", 2, 1.5).unwrap()).unwrap();
        inv.add(Product::new("P2", "b", 0, 99.0).unwrap()).unwrap();
        inv.add(Product::new("P3", "c", 4, 0.25).unwrap()).unwrap();
        assert_eq!(inv.total_value(), 4.0);
    }
}
