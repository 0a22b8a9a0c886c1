use clap::Parser;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use stockroom::api::{CmdResult, ConfigAction, MessageLevel, StockroomApi, StockroomPaths};
use stockroom::config::StockroomConfig;
use stockroom::error::{Result, StockError};
use stockroom::model::Scope;
use stockroom::store::fs::FileStore;
use stockroom::store::StorageFormat;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{write_config, write_messages, write_products};

const GLOBAL_DATA_ENV: &str = "STOCKROOM_DATA";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockroomApi<FileStore>,
    scope: Scope,
    /// Directory to create before the first write; `None` when `--file` is used.
    data_dir: Option<PathBuf>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::logging::setup_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            quantity,
            price,
            id,
        }) => handle_mutation(&mut ctx, |api| api.add_product(id, name, quantity, price)),
        Some(Commands::Remove { id }) => handle_mutation(&mut ctx, |api| api.remove_product(&id)),
        Some(Commands::SetQuantity { id, quantity }) => {
            handle_mutation(&mut ctx, |api| api.update_quantity(&id, quantity))
        }
        Some(Commands::SetPrice { id, price }) => {
            handle_mutation(&mut ctx, |api| api.update_price(&id, price))
        }
        Some(Commands::Rename { id, name }) => {
            handle_mutation(&mut ctx, |api| api.rename_product(&id, name))
        }
        Some(Commands::Search { term }) => handle_query(&mut ctx, |api| api.find_by_name(&term)),
        Some(Commands::List) => handle_query(&mut ctx, |api| api.list_products()),
        Some(Commands::Show { id }) => handle_query(&mut ctx, |api| api.get_product(&id)),
        Some(Commands::Value) => handle_query(&mut ctx, |api| api.inventory_value()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".stockroom");

    let global_dir = match std::env::var_os(GLOBAL_DATA_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "stockroom", "stockroom")
            .ok_or_else(|| StockError::Api("Could not determine the data directory".into()))?
            .data_dir()
            .to_path_buf(),
    };

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let paths = StockroomPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let scope_dir = paths.scope_dir(scope)?;

    let config = match StockroomConfig::load(&scope_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
            StockroomConfig::default()
        }
    };

    let (store, data_dir) = match &cli.file {
        Some(path) => {
            let format = format_for_path(path).unwrap_or(config.format);
            (FileStore::new(path.clone(), format), None)
        }
        None => (
            FileStore::new(scope_dir.join(config.data_file_name()), config.format),
            Some(scope_dir),
        ),
    };

    let api = StockroomApi::new(store, paths).with_autosave(config.autosave);
    Ok(AppContext {
        api,
        scope,
        data_dir,
    })
}

/// Pick the format from a `--file` extension, if it names one.
fn format_for_path(path: &Path) -> Option<StorageFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
}

fn ensure_data_dir(ctx: &AppContext) -> Result<()> {
    if let Some(dir) = &ctx.data_dir {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(StockError::Io)?;
        }
    }
    Ok(())
}

/// Load the inventory. Skipped records are reported by the store through `tracing`.
fn load(ctx: &mut AppContext) -> Result<()> {
    ctx.api.load()?;
    Ok(())
}

fn handle_mutation<F>(ctx: &mut AppContext, op: F) -> Result<()>
where
    F: FnOnce(&mut StockroomApi<FileStore>) -> Result<CmdResult>,
{
    let mut out = io::stdout().lock();
    ensure_data_dir(ctx)?;
    load(ctx)?;

    let result = op(&mut ctx.api)?;
    // A one-shot process ends here, so the change is written even with autosave off.
    if !ctx.api.autosave() {
        ctx.api.save()?;
    }
    write_products(&mut out, &result.affected_products)?;
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_query<F>(ctx: &mut AppContext, op: F) -> Result<()>
where
    F: FnOnce(&StockroomApi<FileStore>) -> Result<CmdResult>,
{
    let mut out = io::stdout().lock();
    load(ctx)?;

    let result = op(&ctx.api)?;
    write_products(&mut out, &result.listed_products)?;
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let mut out = io::stdout().lock();
    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        write_config(&mut out, config)?;
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    ensure_data_dir(ctx)?;
    let mut out = io::stdout().lock();
    let loaded = ctx.api.load()?;
    let summary: Vec<_> = loaded
        .messages
        .into_iter()
        .filter(|m| m.level != MessageLevel::Warning)
        .collect();
    write_messages(&mut out, &summary)?;

    let mut input = io::stdin().lock();
    cli::menu::run(&mut ctx.api, &mut input, &mut out)
}
