use anyhow::{Context, Result};
use clap::Args;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::{Duration, Instant};

use swapi_browser::config::Config;
use swapi_browser::tui::apps::CharacterSearchApp;
use swapi_browser::tui::apps::character_search::Params;
use swapi_browser::tui::{Runtime, Theme};

use super::build_source;

#[derive(Args, Default)]
pub struct TuiArgs {}

pub async fn tui_command(config: &Config, _args: TuiArgs) -> Result<()> {
    let params = Params {
        source: build_source(config)?,
        bounds: config.navigation.bounds(),
    };
    let theme = Theme::new(config.ui.theme);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting TUI");
    let result = match Runtime::<CharacterSearchApp>::new(params, theme) {
        Ok(mut runtime) => run_tui(&mut terminal, &mut runtime).await,
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_tui<B: Backend>(terminal: &mut Terminal<B>, runtime: &mut Runtime<CharacterSearchApp>) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        // Process all pending events FIRST for minimal input latency
        let mut should_quit = false;
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    should_quit = true;
                    break;
                }

                if !runtime.handle_key(key)? {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit || !runtime.poll_async()? {
            break;
        }

        terminal.draw(|frame| runtime.render(frame))?;

        // Sleep for remainder of 16ms frame (60 FPS); spawned requests make
        // progress while we wait.
        if let Some(remaining) = Duration::from_millis(16).checked_sub(frame_start.elapsed()) {
            tokio::time::sleep(remaining).await;
        }
    }

    Ok(())
}
