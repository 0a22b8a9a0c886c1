use colored::Colorize;
use std::io::{self, Write};
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::config::{StockroomConfig, CONFIG_KEYS};
use stockroom::error::StockError;
use stockroom::model::Product;

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Numbered listing in the canonical product format.
pub fn write_products<W: Write>(out: &mut W, products: &[Product]) -> io::Result<()> {
    for (i, product) in products.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, product)?;
    }
    Ok(())
}

pub fn write_config<W: Write>(out: &mut W, config: &StockroomConfig) -> io::Result<()> {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, error: &StockError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}
