//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `inventory_core` wiring end to end: logging, store, repository.
//! - Print the current inventory in a deterministic, line-oriented form.
//!
//! Reads `INVENTORY_DATA_DIR` (default: system temp dir) and
//! `INVENTORY_LOG_LEVEL` (default: build-mode level).

use futures::StreamExt;
use inventory_core::{
    default_log_level, init_logging, AppContainer, AppContext, AppDataContainer,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("inventory_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    println!("inventory_core ping={}", inventory_core::ping());
    println!("inventory_core version={}", inventory_core::core_version());

    let context = AppContext::new(resolve_data_dir()?);
    std::fs::create_dir_all(context.data_dir())?;
    let level = env_or("INVENTORY_LOG_LEVEL", default_log_level());
    init_logging(&level, context.data_dir().join("logs"))?;

    println!("inventory_core store={}", context.database_path().display());

    let container = AppDataContainer::new(context);
    let repository = container.items_repository()?;
    let items = repository
        .get_all_items_stream()
        .next()
        .await
        .ok_or("item stream ended before its first snapshot")??;

    info!("event=cli_smoke module=cli status=ok items={}", items.len());
    println!("inventory_core items={}", items.len());
    for item in items {
        println!(
            "{}\t{}\t{:.2}\t{}",
            item.id, item.name, item.price, item.quantity
        );
    }
    Ok(())
}

// Log directories must be absolute, so relative overrides resolve against cwd.
fn resolve_data_dir() -> std::io::Result<PathBuf> {
    let raw = env_or("INVENTORY_DATA_DIR", "");
    if raw.is_empty() {
        return Ok(std::env::temp_dir().join("inventory"));
    }
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
