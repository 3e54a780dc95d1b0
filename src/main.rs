mod app;
mod config;
mod data;
mod keys;
mod log;
mod pane;
mod ui;

use clap::{Parser, Subcommand};
use data::storage::{DataStore, FileStore};

#[derive(Parser)]
#[command(
    name = "panedeck",
    about = "Keep notes in mode-aware terminal panes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete saved notes
    Reset,
    /// Show debug information
    Debug,
    /// Write a default config file if none exists
    Init,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_dir = config::get_config_dir()?;
    log::initialize(Some(&log::log_file_path(&config_dir)));
    let config = config::Config::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!("using default config: {}", e);
        config::Config::default()
    });

    match cli.command {
        Some(Commands::Reset) => {
            let store = FileStore::new(&config_dir);
            store.clear()?;
            println!("Saved notes reset.");
            Ok(())
        }
        Some(Commands::Debug) => {
            let store = FileStore::new(&config_dir);
            println!("Debug information:");
            println!("  Config directory: {}", config_dir.display());
            println!("  Data file: {}", store.path().display());
            println!("  Log file: {}", log::log_file_path(&config_dir).display());
            println!("  Title: {}", config.title);
            println!("  Tick rate: {}ms", config.tick_rate_ms);
            println!("  Initial mode: {}", config.initial_mode);
            Ok(())
        }
        Some(Commands::Init) => {
            let path = config::config_path(&config_dir);
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                config.save(&config_dir)?;
                println!("Wrote default config to {}", path.display());
            }
            Ok(())
        }
        None => app::run(config, config_dir),
    }
}
