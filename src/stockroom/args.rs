use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom", version)]
#[command(about = "Product inventory with flat-file persistence", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global inventory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this inventory file instead of the scope's default
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product (an ID is generated unless --id is given)
    #[command(alias = "a")]
    Add {
        /// Product name
        name: String,

        /// Units in stock
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Unit price
        #[arg(allow_negative_numbers = true)]
        price: f64,

        /// Explicit product ID
        #[arg(long)]
        id: Option<String>,
    },

    /// Remove a product
    #[command(alias = "rm")]
    Remove { id: String },

    /// Set the quantity of a product
    SetQuantity {
        id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Set the unit price of a product
    SetPrice {
        id: String,

        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Rename a product
    Rename { id: String, name: String },

    /// Search products by name (case-insensitive, partial match)
    #[command(alias = "find")]
    Search { term: String },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Show a single product
    Show { id: String },

    /// Show the total stock value
    Value,

    /// Get or set configuration
    Config {
        /// Configuration key (format, autosave, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the inventory directory for the current scope
    Init,

    /// Interactive numbered menu (default)
    Menu,
}
