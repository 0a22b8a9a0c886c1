//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory library** with a small CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + cli/, wired by main.rs)               │
//! │  - Subcommands and the interactive numbered menu            │
//! │  - The ONLY place that prints, prompts or sets exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Inventory and its store                         │
//! │  - Dispatches to commands, autosaves after mutations        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain + Storage (model.rs, inventory.rs, store/)          │
//! │  - Product, Inventory with its name index                   │
//! │  - InventoryStore: FileStore (production), InMemoryStore    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns `Result<CmdResult>`
//! or domain types. It never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; installing a subscriber is the binary's job.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`inventory`]: the in-memory collection and name index
//! - [`model`]: `Product`, its serialized form, `Scope`
//! - [`store`]: persistence trait, file and in-memory stores, JSON and line codecs
//! - [`config`]: per-scope configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
