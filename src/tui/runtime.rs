use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::collections::HashMap;
use tokio::sync::mpsc;

use crate::tui::{App, Command, Subscription, Theme};

/// The runtime manages app state, event routing, and command execution.
///
/// `Perform` futures are spawned on the tokio runtime and their messages are
/// fed back through a channel, so `update` only ever runs on the UI loop.
pub struct Runtime<A: App> {
    /// Current app state
    state: A::State,

    theme: Theme,

    /// Keyboard subscriptions
    key_subscriptions: HashMap<KeyCode, A::Msg>,

    /// Key bindings for the help line, in subscription order
    key_bindings: Vec<(KeyCode, String)>,

    /// Fallback for keys no subscription claimed
    input_handler: Option<Box<dyn Fn(KeyCode) -> Option<A::Msg> + Send>>,

    msg_tx: mpsc::UnboundedSender<A::Msg>,
    msg_rx: mpsc::UnboundedReceiver<A::Msg>,

    /// Async commands spawned but not yet delivered
    in_flight: usize,
}

impl<A: App> Runtime<A> {
    pub fn new(params: A::Params, theme: Theme) -> Result<Self> {
        let (state, init_command) = A::init(params);
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        let mut runtime = Self {
            state,
            theme,
            key_subscriptions: HashMap::new(),
            key_bindings: Vec::new(),
            input_handler: None,
            msg_tx,
            msg_rx,
            in_flight: 0,
        };

        runtime.update_subscriptions();
        runtime.execute_command(init_command)?;

        Ok(runtime)
    }

    /// Get a reference to the app's state
    pub fn state(&self) -> &A::State {
        &self.state
    }

    /// Number of async commands still running
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn key_bindings(&self) -> &[(KeyCode, String)] {
        &self.key_bindings
    }

    /// Handle a keyboard event. Returns false when the app asked to quit.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(true);
        }

        if let Some(msg) = self.key_subscriptions.get(&key_event.code).cloned() {
            return self.dispatch(msg);
        }

        let msg = self.input_handler.as_ref().and_then(|handler| handler(key_event.code));
        match msg {
            Some(msg) => self.dispatch(msg),
            None => Ok(true),
        }
    }

    /// Deliver every message that finished since the last poll
    pub fn poll_async(&mut self) -> Result<bool> {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if !self.dispatch(msg)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Wait for the next async message and deliver it.
    /// Returns `Ok(None)` when nothing is in flight.
    pub async fn process_next(&mut self) -> Result<Option<bool>> {
        if self.in_flight == 0 {
            return Ok(None);
        }
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.in_flight -= 1;
                self.dispatch(msg).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Run `update` for a message and execute the resulting command
    pub fn dispatch(&mut self, msg: A::Msg) -> Result<bool> {
        let command = A::update(&mut self.state, msg);
        self.update_subscriptions();
        self.execute_command(command)
    }

    /// Subscriptions depend on state, so they are rebuilt after every update
    fn update_subscriptions(&mut self) {
        self.key_subscriptions.clear();
        self.key_bindings.clear();
        self.input_handler = None;

        for sub in A::subscriptions(&self.state) {
            match sub {
                Subscription::Keyboard { key, msg, description } => {
                    self.key_bindings.push((key, description));
                    self.key_subscriptions.insert(key, msg);
                }
                Subscription::Input { handler } => {
                    self.input_handler = Some(handler);
                }
            }
        }
    }

    fn execute_command(&mut self, command: Command<A::Msg>) -> Result<bool> {
        match command {
            Command::None => Ok(true),

            Command::Batch(commands) => {
                for cmd in commands {
                    if !self.execute_command(cmd)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Command::Quit => Ok(false),

            Command::Perform(future) => {
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                tokio::spawn(async move {
                    let msg = future.await;
                    if tx.send(msg).is_err() {
                        debug!("Runtime closed before async result arrived");
                    }
                });
                Ok(true)
            }
        }
    }

    /// Render title bar, app body and the key binding/status line
    pub fn render(&self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(A::title(), self.theme.title_style()))),
            header,
        );

        A::view(&self.state, frame, body, &self.theme);

        self.render_footer(frame, footer);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (key, description) in &self.key_bindings {
            spans.push(Span::styled(format!("{} ", key_label(key)), self.theme.info_style()));
            spans.push(Span::styled(format!("{}  ", description), self.theme.muted_style()));
        }
        spans.push(Span::styled("Ctrl-Q ", self.theme.info_style()));
        spans.push(Span::styled("quit", self.theme.muted_style()));

        if let Some(status) = A::status(&self.state, &self.theme) {
            spans.push(Span::raw("  │ "));
            spans.extend(status.spans);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn key_label(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        other => format!("{:?}", other),
    }
}
