//! trcheck library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Batch { .. } => cli::commands::batch::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE (test mode never touches the filesystem)
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()
    };

    // 3️⃣ apply config file override from the command line
    if let Some(custom) = &cli.config {
        cfg = Config::load_from(&utils::path::expand_tilde(custom));
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
