pub mod api;
pub mod characters;
pub mod config;
pub mod tui;
