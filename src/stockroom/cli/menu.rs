//! Interactive numbered menu.
//!
//! Reads from any `BufRead` and writes to any `Write` so it can be driven from
//! tests. Domain errors are printed and the menu keeps going; only I/O failures
//! on the terminal itself end the session early. End of input behaves like
//! choosing "Exit". A failed save on exit is printed and returned.

use super::print::{write_error, write_messages, write_products};
use std::io::{BufRead, Write};
use std::str::FromStr;
use stockroom::api::{CmdResult, StockroomApi};
use stockroom::error::Result;
use stockroom::store::InventoryStore;

enum Flow {
    Continue,
    Quit,
}

const MENU: &str = "
==================================================
    INVENTORY MANAGEMENT
==================================================
1. Add product
2. Remove product
3. Update product quantity
4. Update product price
5. Search products by name
6. Show all products
7. Save inventory
8. Exit
==================================================";

pub fn run<S, R, W>(api: &mut StockroomApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: InventoryStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Select an option (1-8): ")? else {
            break;
        };

        let flow = match choice.as_str() {
            "1" => add_product(api, input, out)?,
            "2" => remove_product(api, input, out)?,
            "3" => update_quantity(api, input, out)?,
            "4" => update_price(api, input, out)?,
            "5" => search(api, input, out)?,
            "6" => show_all(api, out)?,
            "7" => {
                report(out, api.save())?;
                Flow::Continue
            }
            "8" => break,
            _ => {
                writeln!(out, "Invalid option. Please try again.")?;
                Flow::Continue
            }
        };

        if let Flow::Quit = flow {
            break;
        }
    }

    writeln!(out, "Saving inventory before exit...")?;
    match api.save() {
        Ok(result) => write_messages(out, &result.messages)?,
        Err(e) => {
            write_error(out, &e)?;
            return Err(e);
        }
    }
    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn add_product<S: InventoryStore, R: BufRead, W: Write>(
    api: &mut StockroomApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let id = api.generate_id();
    writeln!(out, "Assigned ID: {}", id)?;

    let Some(name) = prompt(input, out, "Product name: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(quantity) = prompt_parsed::<i64, _, _>(input, out, "Quantity in stock: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(price) = prompt_parsed::<f64, _, _>(input, out, "Unit price: $")? else {
        return Ok(Flow::Quit);
    };

    report(out, api.add_product(Some(id), name, quantity, price))?;
    Ok(Flow::Continue)
}

fn remove_product<S: InventoryStore, R: BufRead, W: Write>(
    api: &mut StockroomApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let Some(id) = prompt(input, out, "ID of the product to remove: ")? else {
        return Ok(Flow::Quit);
    };
    if !show_product(api, &id, out)? {
        return Ok(Flow::Continue);
    }

    let Some(answer) = prompt(input, out, "Remove this product? (y/n): ")? else {
        return Ok(Flow::Quit);
    };
    if matches!(answer.to_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí") {
        report(out, api.remove_product(&id))?;
    } else {
        writeln!(out, "Operation cancelled.")?;
    }
    Ok(Flow::Continue)
}

fn update_quantity<S: InventoryStore, R: BufRead, W: Write>(
    api: &mut StockroomApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let Some(id) = prompt(input, out, "Product ID: ")? else {
        return Ok(Flow::Quit);
    };
    if !show_product(api, &id, out)? {
        return Ok(Flow::Continue);
    }
    let Some(quantity) = prompt_parsed::<i64, _, _>(input, out, "New quantity: ")? else {
        return Ok(Flow::Quit);
    };

    report(out, api.update_quantity(&id, quantity))?;
    Ok(Flow::Continue)
}

fn update_price<S: InventoryStore, R: BufRead, W: Write>(
    api: &mut StockroomApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let Some(id) = prompt(input, out, "Product ID: ")? else {
        return Ok(Flow::Quit);
    };
    if !show_product(api, &id, out)? {
        return Ok(Flow::Continue);
    }
    let Some(price) = prompt_parsed::<f64, _, _>(input, out, "New price: $")? else {
        return Ok(Flow::Quit);
    };

    report(out, api.update_price(&id, price))?;
    Ok(Flow::Continue)
}

fn search<S: InventoryStore, R: BufRead, W: Write>(
    api: &StockroomApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let Some(term) = prompt(input, out, "Name or part of the name: ")? else {
        return Ok(Flow::Quit);
    };
    let result = api.find_by_name(&term)?;
    if !result.listed_products.is_empty() {
        writeln!(out, "Found {} products:", result.listed_products.len())?;
    }
    write_products(out, &result.listed_products)?;
    write_messages(out, &result.messages)?;
    Ok(Flow::Continue)
}

fn show_all<S: InventoryStore, W: Write>(api: &StockroomApi<S>, out: &mut W) -> Result<Flow> {
    let result = api.list_products()?;
    if !result.listed_products.is_empty() {
        writeln!(out, "Total products: {}", result.listed_products.len())?;
    }
    write_products(out, &result.listed_products)?;
    write_messages(out, &result.messages)?;
    Ok(Flow::Continue)
}

/// Print the product if it exists. Returns false (after printing the error) if not.
fn show_product<S: InventoryStore, W: Write>(
    api: &StockroomApi<S>,
    id: &str,
    out: &mut W,
) -> Result<bool> {
    match api.get_product(id) {
        Ok(result) => {
            for product in &result.listed_products {
                writeln!(out, "Product found: {}", product)?;
            }
            Ok(true)
        }
        Err(e) => {
            write_error(out, &e)?;
            Ok(false)
        }
    }
}

/// Print the outcome of an operation. Domain errors are shown, not propagated.
fn report<W: Write>(out: &mut W, result: Result<CmdResult>) -> Result<()> {
    match result {
        Ok(result) => write_messages(out, &result.messages)?,
        Err(e) => write_error(out, &e)?,
    }
    Ok(())
}

/// Read one trimmed line. `None` means the input is exhausted.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keep asking until the answer parses as `T`.
fn prompt_parsed<T, R, W>(input: &mut R, out: &mut W, label: &str) -> Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = prompt(input, out, label)? else {
            return Ok(None);
        };
        match answer.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Please enter a valid number.")?,
        }
    }
}
