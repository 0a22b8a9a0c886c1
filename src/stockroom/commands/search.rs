use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory, term: &str) -> Result<CmdResult> {
    let listed: Vec<_> = inventory
        .find_by_name(term)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products match '{}'.",
            term
        )));
    }
    Ok(result.with_listed_products(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn finds_substring_matches_ignoring_case() {
        let mut inv = Inventory::new();
        add::run(&mut inv, Some("P1".into()), "Mouse".into(), 1, 1.0).unwrap();
        add::run(&mut inv, Some("P2".into()), "Mousepad".into(), 1, 1.0).unwrap();
        add::run(&mut inv, Some("P3".into()), "Monitor".into(), 1, 1.0).unwrap();

        let result = run(&inv, "mouse").unwrap();
        assert_eq!(result.listed_products.len(), 2);
        assert_eq!(result.listed_products[0].name(), "Mouse");
        assert_eq!(result.listed_products[1].name(), "Mousepad");
    }

    #[test]
    fn no_match_reports_info() {
        let result = run(&Inventory::new(), "cable").unwrap();
        assert!(result.listed_products.is_empty());
        assert!(result.messages[0].content.contains("cable"));
    }
}
