//! casement: drive a window session against a shared directory store.
//!
//! Run `casement open ...` in several terminals pointing at the same
//! `--dir` to watch the registry and commander converge.

mod cli;
mod input;
mod inspect;
mod open;
mod render;
mod store;

use std::process::ExitCode;

use casement_common::Geometry;
use casement_config::CasementConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;

fn load_config(args: &cli::Args) -> CasementConfig {
    let loaded = match &args.config {
        Some(path) => casement_config::toml_loader::load_from_path(path),
        None => casement_config::load_config(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        CasementConfig::default()
    });
    if let Some(dir) = &args.dir {
        config.store.dir = Some(dir.clone());
    }
    config
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let config = load_config(&args);

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("casement={level}"))),
        )
        .init();

    let store = match store::open_store(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("failed to open store: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match args.command {
        Command::Open {
            x,
            y,
            width,
            height,
        } => open::run(store, &config, Geometry::new(x, y, width, height)).await,
        Command::List => inspect::list(store, &config),
        Command::SaveState {
            command,
            target_point,
            mesh_position,
            mesh_rotation,
        } => inspect::save_state(
            store,
            &config,
            casement_common::SharedState {
                target_point,
                mesh_position,
                mesh_rotation,
                command: command.map(casement_common::BrowserId),
            },
        ),
        Command::Reset => inspect::reset(store, &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
