pub mod character;
pub mod config;
pub mod list;
pub mod output;
pub mod tui;

use anyhow::Result;
use std::sync::Arc;

use swapi_browser::api::{StarWarsSource, SwapiClient};
use swapi_browser::config::Config;

pub use character::{SearchArgs, ShowArgs, WalkArgs, handle_search_command, handle_show_command, handle_walk_command};
pub use config::{ConfigCommands, handle_config_command};
pub use list::{ListArgs, handle_list_command};
pub use tui::{TuiArgs, tui_command};

/// Build the shared data source from config
pub fn build_source(config: &Config) -> Result<Arc<dyn StarWarsSource>> {
    Ok(Arc::new(SwapiClient::from_config(config)?))
}
