//! Character search screen: query box, error line, character detail and
//! the listing page, dispatching search/reset/next/previous intents.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use std::sync::Arc;

use crate::api::StarWarsSource;
use crate::characters::{
    Activity, BrowserSession, CatalogIndex, CharacterDetails, DetailAggregator, DetailsRequest,
    Direction, IdBounds, NavigationOutcome, Navigator, PageCursor, PageFetcher, PageState,
    RequestToken, ResolveOutcome, Resolver,
};
use crate::tui::{App, Command, Subscription, Theme};

/// Tooltip shown until the first search
pub const SEARCH_HINT: &str = "Enter the name of a Star Wars character to search.";

pub struct CharacterSearchApp;

pub struct Params {
    pub source: Arc<dyn StarWarsSource>,
    pub bounds: IdBounds,
}

pub struct State {
    pub session: BrowserSession,
    source: Arc<dyn StarWarsSource>,
    catalog: Arc<CatalogIndex>,
    catalog_loaded: bool,
}

impl State {
    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn catalog_loaded(&self) -> bool {
        self.catalog_loaded
    }
}

#[derive(Clone)]
pub enum Msg {
    CatalogLoaded(Arc<CatalogIndex>),
    QueryInput(char),
    QueryBackspace,
    Search,
    SearchCompleted { token: RequestToken, outcome: Option<ResolveOutcome> },
    Navigate(Direction),
    NavigationCompleted { token: RequestToken, outcome: NavigationOutcome },
    DetailsLoaded { token: RequestToken, details: CharacterDetails },
    LoadPage(PageCursor),
    PageLoaded { token: RequestToken, result: Result<PageState, String> },
    SelectNextRow,
    SelectPreviousRow,
    Reset,
}

impl CharacterSearchApp {
    fn load_details(state: &State, request: Option<DetailsRequest>) -> Command<Msg> {
        let Some(DetailsRequest { token, character }) = request else {
            return Command::None;
        };
        let aggregator = DetailAggregator::new(state.source.clone());

        Command::perform(
            async move { aggregator.aggregate(&character).await },
            move |details| Msg::DetailsLoaded { token, details },
        )
    }

    fn load_page(state: &mut State, cursor: PageCursor) -> Command<Msg> {
        let Some((token, url)) = state.session.begin_page(cursor) else {
            return Command::None;
        };
        let fetcher = PageFetcher::new(state.source.clone());

        Command::perform(
            async move { fetcher.fetch(url.as_deref()).await.map_err(|e| e.to_string()) },
            move |result| Msg::PageLoaded { token, result },
        )
    }
}

impl App for CharacterSearchApp {
    type State = State;
    type Msg = Msg;
    type Params = Params;

    fn init(params: Params) -> (State, Command<Msg>) {
        let mut state = State {
            session: BrowserSession::new(params.bounds),
            source: params.source,
            catalog: Arc::new(CatalogIndex::default()),
            catalog_loaded: false,
        };

        let source = state.source.clone();
        let load_catalog = Command::perform(
            async move { CatalogIndex::load(source.as_ref()).await },
            |index| Msg::CatalogLoaded(Arc::new(index)),
        );
        let load_page = Self::load_page(&mut state, PageCursor::First);

        (state, Command::batch(vec![load_catalog, load_page]))
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::CatalogLoaded(index) => {
                state.catalog = index;
                state.catalog_loaded = true;
                Command::None
            }

            Msg::QueryInput(c) => {
                state.session.push_query_char(c);
                Command::None
            }

            Msg::QueryBackspace => {
                state.session.pop_query_char();
                Command::None
            }

            Msg::Search => {
                let Some((token, query)) = state.session.begin_search() else {
                    return Command::None;
                };
                let resolver = Resolver::new(state.source.clone(), state.catalog.clone());

                Command::perform(
                    async move { resolver.resolve(&query).await },
                    move |outcome| Msg::SearchCompleted { token, outcome },
                )
            }

            Msg::SearchCompleted { token, outcome } => match outcome {
                Some(outcome) => {
                    let request = state.session.apply_search(token, outcome);
                    Self::load_details(state, request)
                }
                None => Command::None,
            },

            Msg::Navigate(direction) => {
                let Some((token, from)) = state.session.begin_navigation(direction) else {
                    return Command::None;
                };
                let navigator = Navigator::new(state.source.clone(), state.catalog.clone(), state.session.bounds());

                Command::perform(
                    async move { navigator.walk(from, direction).await },
                    move |outcome| Msg::NavigationCompleted { token, outcome },
                )
            }

            Msg::NavigationCompleted { token, outcome } => {
                let request = state.session.apply_navigation(token, outcome);
                Self::load_details(state, request)
            }

            Msg::DetailsLoaded { token, details } => {
                state.session.apply_details(token, details);
                Command::None
            }

            Msg::LoadPage(cursor) => Self::load_page(state, cursor),

            Msg::PageLoaded { token, result } => {
                state.session.apply_page(token, result);
                Command::None
            }

            Msg::SelectNextRow => {
                state.session.page_mut().select_next();
                Command::None
            }

            Msg::SelectPreviousRow => {
                state.session.page_mut().select_previous();
                Command::None
            }

            Msg::Reset => {
                state.session.reset();
                Command::None
            }
        }
    }

    fn view(state: &State, frame: &mut Frame, area: Rect, theme: &Theme) {
        match state.session.character() {
            Some(_) => render_character(state, frame, area, theme),
            None => render_search(state, frame, area, theme),
        }
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        if state.session.character().is_some() {
            vec![
                Subscription::keyboard(KeyCode::Left, "previous", Msg::Navigate(Direction::Previous)),
                Subscription::keyboard(KeyCode::Right, "next", Msg::Navigate(Direction::Next)),
                Subscription::keyboard(KeyCode::Char('p'), "previous", Msg::Navigate(Direction::Previous)),
                Subscription::keyboard(KeyCode::Char('n'), "next", Msg::Navigate(Direction::Next)),
                Subscription::keyboard(KeyCode::Esc, "new search", Msg::Reset),
                Subscription::keyboard(KeyCode::Char('r'), "new search", Msg::Reset),
            ]
        } else {
            vec![
                Subscription::keyboard(KeyCode::Enter, "search", Msg::Search),
                Subscription::keyboard(KeyCode::Esc, "clear", Msg::Reset),
                Subscription::keyboard(KeyCode::Up, "row up", Msg::SelectPreviousRow),
                Subscription::keyboard(KeyCode::Down, "row down", Msg::SelectNextRow),
                Subscription::keyboard(KeyCode::PageUp, "prev page", Msg::LoadPage(PageCursor::Previous)),
                Subscription::keyboard(KeyCode::PageDown, "next page", Msg::LoadPage(PageCursor::Next)),
                Subscription::input(|key| match key {
                    KeyCode::Char(c) => Some(Msg::QueryInput(c)),
                    KeyCode::Backspace => Some(Msg::QueryBackspace),
                    _ => None,
                }),
            ]
        }
    }

    fn title() -> &'static str {
        "Star Wars Character Search"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        let session = &state.session;
        let text = match session.activity() {
            Some(Activity::Searching) => "Searching...",
            Some(Activity::Navigating(Direction::Next)) => "Looking for the next character...",
            Some(Activity::Navigating(Direction::Previous)) => "Looking for the previous character...",
            None if session.details_loading() => "Loading details...",
            None if session.page_loading() => "Loading characters...",
            None if !state.catalog_loaded => "Loading portraits...",
            None => return None,
        };
        Some(Line::from(Span::styled(text, theme.info_style())))
    }
}

fn render_search(state: &State, frame: &mut Frame, area: Rect, theme: &Theme) {
    let session = &state.session;
    let [hint_area, input_area, error_area, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    if !session.has_searched() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("ⓘ ", theme.info_style()),
                Span::styled(SEARCH_HINT, theme.muted_style()),
            ])),
            hint_area,
        );
    }

    let input = if session.query().is_empty() {
        Line::from(Span::styled("Enter character name", theme.muted_style()))
    } else {
        Line::from(format!("{}▏", session.query()))
    };
    frame.render_widget(
        Paragraph::new(input).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(true))
                .title(" Search "),
        ),
        input_area,
    );

    render_error(session, frame, error_area, theme);

    let page = session.page();
    let items: Vec<ListItem> = page
        .characters
        .iter()
        .map(|record| ListItem::new(record.name.clone()))
        .collect();

    let mut cursors = Vec::new();
    if page.previous.is_some() {
        cursors.push("◀ PgUp");
    }
    if page.next.is_some() {
        cursors.push("PgDn ▶");
    }
    let title = if cursors.is_empty() {
        " Characters ".to_string()
    } else {
        format!(" Characters ({}) ", cursors.join("  "))
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false))
                .title(title),
        )
        .highlight_style(theme.selected_style());

    let mut list_state = ListState::default();
    if !page.characters.is_empty() {
        list_state.select(Some(page.current_index));
    }
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn render_character(state: &State, frame: &mut Frame, area: Rect, theme: &Theme) {
    let session = &state.session;
    let Some(character) = session.character() else {
        return;
    };

    let [error_area, body_area, nav_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_error(session, frame, error_area, theme);

    let attribute = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", format!("{}:", label)), theme.label_style()),
            Span::raw(value),
        ])
    };

    let mut lines = vec![
        attribute("Height", format!("{}cm", character.height)),
        attribute("Mass", format!("{}kg", character.mass)),
        attribute("Hair Color", character.hair_color.clone()),
        attribute("Skin Color", character.skin_color.clone()),
        attribute("Eye Color", character.eye_color.clone()),
        attribute("Birth Year", character.birth_year.clone()),
        attribute("Gender", character.gender.clone()),
        Line::default(),
    ];

    match &character.portrait_url {
        Some(url) => lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", "Portrait:"), theme.label_style()),
            Span::styled(url.clone(), theme.link_style()),
        ])),
        None => lines.push(Line::from(Span::styled("No portrait available.", theme.muted_style()))),
    }
    lines.push(Line::default());

    let details = session.details();
    let loading = session.details_loading();
    let sections: [(&str, &str, Option<&Vec<String>>); 3] = [
        ("Films", "No films found.", details.map(|d| &d.films)),
        ("Vehicles", "No vehicles found.", details.map(|d| &d.vehicles)),
        ("Starships", "No starships found.", details.map(|d| &d.starships)),
    ];
    for (label, empty, names) in sections {
        let value = match names {
            _ if loading => Span::styled("Loading...", theme.muted_style()),
            Some(names) if !names.is_empty() => Span::raw(names.join(", ")),
            _ => Span::styled(empty, theme.muted_style()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", format!("{}:", label)), theme.label_style()),
            value,
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(true))
                .title(Span::styled(format!(" {} ", character.name), theme.title_style())),
        ),
        body_area,
    );

    let bounds = session.bounds();
    let previous_enabled = bounds.can_move(character.id, Direction::Previous);
    let next_enabled = bounds.can_move(character.id, Direction::Next) && !session.page().next_blocked();
    let style_for = |enabled: bool| if enabled { theme.info_style() } else { theme.muted_style() };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("◀ Previous", style_for(previous_enabled)),
            Span::raw("    "),
            Span::styled("Next ▶", style_for(next_enabled)),
        ])),
        nav_area,
    );
}

fn render_error(session: &BrowserSession, frame: &mut Frame, area: Rect, theme: &Theme) {
    if !session.error().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(session.error().to_string(), theme.error_style())),
            area,
        );
    }
}
