use super::commands::{ConfigCommands, ListArgs, SearchArgs, ShowArgs, TuiArgs, WalkArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "swapi-browser")]
#[command(about = "Search, browse and page through Star Wars characters")]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive TUI (default)
    Tui(TuiArgs),
    /// Search a character by name and print the best match
    Search(SearchArgs),
    /// Print the character with the given numeric ID
    Show(ShowArgs),
    /// Print the next existing character after the given ID
    Next(WalkArgs),
    /// Print the previous existing character before the given ID
    Previous(WalkArgs),
    /// Print one page of the character listing
    List(ListArgs),
    /// Configuration file management
    Config(ConfigCommands),
}
