use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// casement: coordinate windows of one application through a shared store.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Shared store directory override.
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Register a window and keep it in sync until quit.
    Open {
        #[arg(long, allow_hyphen_values = true)]
        x: i32,
        #[arg(long, allow_hyphen_values = true)]
        y: i32,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
    /// Print counter, registry and shared state as JSON.
    List,
    /// Overwrite the shared 3D state.
    SaveState {
        /// Commanding window id; omit for no commander.
        #[arg(long)]
        command: Option<u64>,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        target_point: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        mesh_position: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        mesh_rotation: f64,
    },
    /// Remove all three slots.
    Reset,
}

pub fn parse() -> Args {
    Args::parse()
}
