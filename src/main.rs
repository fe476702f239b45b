use anyhow::{Context, Result};
use clap::Parser;
use log::info;

mod cli;

use cli::{Cli, Commands};
use swapi_browser::characters::Direction;
use swapi_browser::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // `config init` may target a file that does not exist yet
    let config = match (&cli.command, cli.config.as_deref()) {
        (Some(Commands::Config(_)), Some(path)) if !path.exists() => Config::default(),
        (_, path) => Config::load(path)?,
    };

    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.logging.file)
        .with_context(|| format!("Failed to open log file: {}", config.logging.file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting swapi-browser");

    match cli.command.unwrap_or(Commands::Tui(Default::default())) {
        Commands::Tui(args) => cli::commands::tui_command(&config, args).await?,
        Commands::Search(args) => cli::commands::handle_search_command(&config, args).await?,
        Commands::Show(args) => cli::commands::handle_show_command(&config, args).await?,
        Commands::Next(args) => cli::commands::handle_walk_command(&config, args, Direction::Next).await?,
        Commands::Previous(args) => {
            cli::commands::handle_walk_command(&config, args, Direction::Previous).await?
        }
        Commands::List(args) => cli::commands::handle_list_command(&config, args).await?,
        Commands::Config(args) => cli::commands::handle_config_command(&config, cli.config.clone(), args)?,
    }

    Ok(())
}
