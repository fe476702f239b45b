mod common;

use common::person;
use swapi_browser::characters::{
    BrowserSession, Character, CharacterDetails, Direction, IdBounds, NOT_FOUND_MESSAGE, NavigationOutcome,
    PageCursor, PageState, ResolveOutcome, SEARCH_FAILED_MESSAGE,
};

fn character(id: u32, name: &str) -> Character {
    Character::from_record(person(id, name), None).unwrap()
}

fn details_for(character: &Character, film: &str) -> CharacterDetails {
    CharacterDetails {
        character_id: character.id,
        films: vec![film.to_string()],
        vehicles: Vec::new(),
        starships: Vec::new(),
    }
}

/// Session already showing the given character
fn showing(id: u32, name: &str) -> BrowserSession {
    let mut session = BrowserSession::new(IdBounds::default());
    session.set_query(name);
    let (token, _) = session.begin_search().unwrap();
    session.apply_search(token, ResolveOutcome::Found(character(id, name))).unwrap();
    session
}

#[test]
fn test_blank_search_changes_nothing() {
    let mut session = BrowserSession::new(IdBounds::default());
    session.set_query("   ");

    assert!(session.begin_search().is_none());
    assert!(!session.has_searched());
    assert!(session.activity().is_none());
}

#[test]
fn test_found_character_replaces_query_and_clears_error() {
    let mut session = BrowserSession::new(IdBounds::default());
    session.set_query("  luke ");
    let (token, query) = session.begin_search().unwrap();
    assert_eq!(query, "luke");
    assert!(session.has_searched());

    let luke = character(1, "Luke Skywalker");
    let request = session.apply_search(token, ResolveOutcome::Found(luke.clone())).unwrap();

    assert_eq!(request.character, luke);
    assert_eq!(session.query(), "Luke Skywalker");
    assert_eq!(session.error(), "");
    assert!(session.details_loading());
    assert_eq!(session.details().unwrap().character_id, luke.id);
    assert!(session.details().unwrap().films.is_empty());
}

#[test]
fn test_not_found_clears_character() {
    let mut session = showing(1, "Luke Skywalker");
    session.set_query("Zzyx Nobody");
    let (token, _) = session.begin_search().unwrap();

    assert!(session.apply_search(token, ResolveOutcome::NotFound).is_none());
    assert!(session.character().is_none());
    assert!(session.details().is_none());
    assert_eq!(session.error(), NOT_FOUND_MESSAGE);
}

#[test]
fn test_search_failure_keeps_character() {
    let mut session = showing(1, "Luke Skywalker");
    let (token, _) = session.begin_search().unwrap();

    let failed = ResolveOutcome::SearchFailed { message: SEARCH_FAILED_MESSAGE.to_string() };
    assert!(session.apply_search(token, failed).is_none());
    assert_eq!(session.character().unwrap().name, "Luke Skywalker");
    assert_eq!(session.error(), SEARCH_FAILED_MESSAGE);
}

#[test]
fn test_late_search_result_loses_to_later_search() {
    let mut session = BrowserSession::new(IdBounds::default());
    session.set_query("luke");
    let (first, _) = session.begin_search().unwrap();
    session.set_query("leia");
    let (second, _) = session.begin_search().unwrap();

    session.apply_search(second, ResolveOutcome::Found(character(5, "Leia Organa"))).unwrap();
    assert!(session.apply_search(first, ResolveOutcome::Found(character(1, "Luke Skywalker"))).is_none());

    assert_eq!(session.character().unwrap().name, "Leia Organa");
    assert_eq!(session.query(), "Leia Organa");
}

#[test]
fn test_late_search_result_loses_to_later_navigation() {
    let mut session = showing(1, "Luke Skywalker");
    let (search, _) = session.begin_search().unwrap();
    let (navigation, from) = session.begin_navigation(Direction::Next).unwrap();
    assert_eq!(from.value(), 1);

    session
        .apply_navigation(navigation, NavigationOutcome::Moved(character(2, "C-3PO")))
        .unwrap();
    assert!(session.apply_search(search, ResolveOutcome::NotFound).is_none());

    assert_eq!(session.character().unwrap().name, "C-3PO");
    assert_eq!(session.error(), "");
}

#[test]
fn test_details_of_previous_character_never_shown() {
    let mut session = BrowserSession::new(IdBounds::default());
    session.set_query("luke");
    let (token, _) = session.begin_search().unwrap();
    let luke = character(1, "Luke Skywalker");
    let luke_details = session.apply_search(token, ResolveOutcome::Found(luke.clone())).unwrap();

    let (token, _) = session.begin_navigation(Direction::Next).unwrap();
    let threepio = character(2, "C-3PO");
    let threepio_details = session
        .apply_navigation(token, NavigationOutcome::Moved(threepio.clone()))
        .unwrap();

    assert!(!session.apply_details(luke_details.token, details_for(&luke, "A New Hope")));
    assert_eq!(session.details().unwrap().character_id, threepio.id);
    assert!(session.details().unwrap().films.is_empty());

    assert!(session.apply_details(threepio_details.token, details_for(&threepio, "The Phantom Menace")));
    assert_eq!(session.details().unwrap().films, vec!["The Phantom Menace"]);
    assert!(!session.details_loading());
}

#[test]
fn test_boundary_and_abort_keep_character() {
    let mut session = showing(3, "R2-D2");

    let (token, _) = session.begin_navigation(Direction::Next).unwrap();
    assert!(session.apply_navigation(token, NavigationOutcome::BoundaryReached).is_none());
    assert_eq!(session.character().unwrap().id.value(), 3);

    let (token, _) = session.begin_navigation(Direction::Previous).unwrap();
    let aborted = NavigationOutcome::Aborted { reason: "HTTP 500".to_string() };
    assert!(session.apply_navigation(token, aborted).is_none());
    assert_eq!(session.character().unwrap().id.value(), 3);
    assert!(session.activity().is_none());
}

#[test]
fn test_navigation_refused_at_bounds_and_without_character() {
    let mut empty = BrowserSession::new(IdBounds::default());
    assert!(empty.begin_navigation(Direction::Next).is_none());

    let mut first = showing(1, "Luke Skywalker");
    assert!(first.begin_navigation(Direction::Previous).is_none());

    let mut last = showing(100, "Last One");
    assert!(last.begin_navigation(Direction::Next).is_none());
    assert!(last.begin_navigation(Direction::Previous).is_some());
}

#[test]
fn test_next_disabled_on_last_row_of_final_page() {
    let mut session = showing(1, "Luke Skywalker");
    let (token, _) = session.begin_page(PageCursor::First).unwrap();
    let page = PageState {
        characters: vec![person(81, "Tarfful"), person(82, "Raymus Antilles")],
        next: None,
        previous: Some(format!("{}/people/?page=8", common::BASE)),
        current_index: 0,
    };
    assert!(session.apply_page(token, Ok(page)));
    assert!(session.begin_navigation(Direction::Next).is_some());

    session.page_mut().select_next();
    assert!(session.begin_navigation(Direction::Next).is_none());
    assert!(session.begin_navigation(Direction::Previous).is_some());
}

#[test]
fn test_reset_discards_in_flight_results() {
    let mut session = showing(1, "Luke Skywalker");
    session.set_query("leia");
    let (search, _) = session.begin_search().unwrap();

    session.reset();
    assert_eq!(session.query(), "");
    assert!(session.character().is_none());
    assert!(!session.has_searched());
    assert_eq!(session.error(), "");

    assert!(session.apply_search(search, ResolveOutcome::Found(character(5, "Leia Organa"))).is_none());
    assert!(session.character().is_none());
    assert_eq!(session.query(), "");
}

#[test]
fn test_page_load_keeps_character_and_stale_pages_dropped() {
    let mut session = showing(1, "Luke Skywalker");

    let (first, url) = session.begin_page(PageCursor::First).unwrap();
    assert_eq!(url, None);
    let (second, _) = session.begin_page(PageCursor::First).unwrap();
    assert!(session.page_loading());

    assert!(session.apply_page(second, Ok(PageState::default())));
    assert!(!session.apply_page(first, Err("late".to_string())));
    assert!(!session.page_loading());
    assert_eq!(session.character().unwrap().name, "Luke Skywalker");

    assert!(session.begin_page(PageCursor::Next).is_none());
}
