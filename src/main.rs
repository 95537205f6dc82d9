use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use todoit::config;
use todoit::store::Store;
use todoit::tui;

#[derive(Parser)]
#[command(
    name = "todoit",
    version = env!("TODOIT_VERSION"),
    about = "A small terminal to-do list"
)]
struct Cli {
    /// Task file to use (overrides `data_file` in the config)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Config file (default: ~/.todoit/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive list (default)
    Tui,
    /// Create the config directory and an empty task file if missing
    Init,
    /// Print the tasks
    List,
    /// Append a task without opening the TUI
    Add {
        /// Task title
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = config::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui);

    // Only `init` creates ~/.todoit/; other commands log there once it exists.
    if matches!(command, Commands::Init) {
        config::ensure_dirs()?;
    }
    config::init_logging(&cfg.log);

    let data_file = cli.file.unwrap_or_else(|| cfg.data_file.clone());

    match command {
        Commands::Init => {
            let store = Store::create(&data_file)?;
            println!("todoit initialized, tasks in {}", store.path().display());
            Ok(())
        }
        Commands::List => {
            let store = Store::open(&data_file)?;
            let items = store.load()?;
            if items.is_empty() {
                println!("No tasks. Use `todoit add <title>` to add one.");
            } else {
                for (i, item) in items.iter().enumerate() {
                    println!("  {}. {}", i + 1, item.title);
                }
            }
            Ok(())
        }
        Commands::Add { title } => {
            let store = Store::open(&data_file)?;
            let item = store.append(&title)?;
            println!("Added '{}' to {}", item.title, store.path().display());
            Ok(())
        }
        Commands::Tui => {
            let store = Store::open(&data_file)?;
            tracing::info!("starting TUI on {}", store.path().display());
            tui::run(store, &cfg)
        }
    }
}
