use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use std::path::PathBuf;

use swapi_browser::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Print the default config file location
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn handle_config_command(config: &Config, explicit_path: Option<PathBuf>, args: ConfigCommands) -> Result<()> {
    let path = match explicit_path {
        Some(path) => path,
        None => Config::get_config_path()?,
    };

    match args.command {
        ConfigSubcommands::Path => {
            println!("{}", path.display());
        }
        ConfigSubcommands::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigSubcommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!("Config file already exists: {} (use --force to overwrite)", path.display());
            }
            Config::default().save_to(&path)?;
            println!("✅ Wrote default config to {}", path.display().to_string().cyan());
        }
    }
    Ok(())
}
