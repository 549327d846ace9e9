//! # CLI Layer
//!
//! This module is **one possible UI client** for homeseek. It is the only
//! place that parses arguments, touches stdout/stderr, installs the log
//! subscriber and decides where the catalog and data directory live.
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: resolves paths and config, builds the `PropertyApi`
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{render_detail, render_listing, render_messages, render_types};
use super::setup::{Cli, Commands, FavCommands, SearchArgs};
use clap::Parser;
use directories::ProjectDirs;
use homeseek::api::{CmdResult, ConfigAction, PropertyApi};
use homeseek::catalog::Catalog;
use homeseek::commands;
use homeseek::config::HomeseekConfig;
use homeseek::error::{HomeseekError, Result};
use homeseek::filter::SearchForm;
use homeseek::store::fs_backend::FsBackend;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "HOMESEEK_DATA";
const LOG_ENV: &str = "HOMESEEK_LOG";
const DEFAULT_CATALOG_FILE: &str = "properties.json";

struct AppContext {
    api: PropertyApi<FsBackend>,
    list_width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command {
        // Config does not need a catalog
        Some(Commands::Config { key, value }) => handle_config(&data_dir, key, value),
        command => {
            let mut ctx = init_context(cli.catalog, data_dir)?;
            match command {
                Some(Commands::Search(args)) => handle_search(&ctx, args),
                Some(Commands::View { id }) => handle_view(&ctx, &id),
                Some(Commands::Fav { action }) => handle_fav(&mut ctx, action),
                Some(Commands::Types) => handle_types(&ctx),
                Some(Commands::Config { .. }) | None => {
                    handle_search(&ctx, SearchArgs::default())
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "homeseek=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "homeseek", "homeseek")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HomeseekError::Api("Could not determine data directory".into()))
}

fn init_context(catalog: Option<PathBuf>, data_dir: PathBuf) -> Result<AppContext> {
    let config = HomeseekConfig::load(&data_dir)?;

    let catalog_path = catalog
        .or_else(|| config.catalog_path.clone())
        .unwrap_or_else(|| data_dir.join(DEFAULT_CATALOG_FILE));
    if !catalog_path.exists() {
        return Err(HomeseekError::Api(format!(
            "Catalog not found at {} (use --catalog or `homeseek config catalog <PATH>`)",
            catalog_path.display()
        )));
    }
    let catalog = Catalog::load(&catalog_path)?;

    let backend = FsBackend::new(data_dir.clone());
    let api = PropertyApi::new(catalog, backend, &config.favorites_key);

    Ok(AppContext {
        api,
        list_width: config.list_width,
    })
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    if !result.listed.is_empty() {
        let favorites = ctx.api.favorites().ids();
        print!(
            "{}",
            render_listing(&result.listed, &favorites, ctx.list_width)
        );
    }
    if let Some(detail) = &result.detail {
        print!("{}", render_detail(detail));
    }
    print!("{}", render_messages(&result.messages));
}

fn handle_search(ctx: &AppContext, args: SearchArgs) -> Result<()> {
    let result = ctx.api.search(&SearchForm::from(args));
    // Always render, so a search with no hits says so
    let favorites = ctx.api.favorites().ids();
    print!(
        "{}",
        render_listing(&result.listed, &favorites, ctx.list_width)
    );
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view(id);
    print_result(ctx, &result);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, action: Option<FavCommands>) -> Result<()> {
    let result = match action {
        None | Some(FavCommands::List) => {
            let result = ctx.api.list_favorites();
            if result.listed.is_empty() {
                println!("No favorites yet.");
            }
            result
        }
        Some(FavCommands::Toggle { id }) => ctx.api.toggle_favorite(&id)?,
        Some(FavCommands::Add { id }) => ctx.api.add_favorite(&id)?,
        Some(FavCommands::Remove { id }) => ctx.api.remove_favorite(&id)?,
        Some(FavCommands::Clear) => ctx.api.clear_favorites()?,
    };

    print_result(ctx, &result);
    Ok(())
}

fn handle_types(ctx: &AppContext) -> Result<()> {
    print!("{}", render_types(&ctx.api.catalog().property_types()));
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(data_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in HomeseekConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}
