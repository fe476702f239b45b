//! Browsing session state: query, current character, error text, detail
//! lists and the listing page.
//!
//! Every asynchronous operation goes through a `begin_*` call that captures a
//! `RequestToken` and an `apply_*` call that drops the result unless the token
//! is still the latest. Search and navigation share one sequencer, so
//! whichever was issued last wins regardless of completion order.

use log::{debug, info, warn};

use super::details::CharacterDetails;
use super::model::{Character, CharacterId};
use super::navigator::{Direction, IdBounds, NavigationOutcome};
use super::pages::{PageCursor, PageState};
use super::resolver::{NOT_FOUND_MESSAGE, ResolveOutcome};
use super::sequence::{RequestSequencer, RequestToken};

/// Request for the detail lists of a freshly displayed character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsRequest {
    pub token: RequestToken,
    pub character: Character,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Searching,
    Navigating(Direction),
}

#[derive(Debug, Default)]
pub struct BrowserSession {
    query: String,
    character: Option<Character>,
    error: String,
    has_searched: bool,
    details: Option<CharacterDetails>,
    details_loading: bool,
    page: PageState,
    page_loading: bool,
    activity: Option<Activity>,
    bounds: IdBounds,
    character_requests: RequestSequencer,
    detail_requests: RequestSequencer,
    page_requests: RequestSequencer,
}

impl BrowserSession {
    pub fn new(bounds: IdBounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Detail lists, only ever for the current character
    pub fn details(&self) -> Option<&CharacterDetails> {
        self.details.as_ref()
    }

    pub fn details_loading(&self) -> bool {
        self.details_loading
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    pub fn page_loading(&self) -> bool {
        self.page_loading
    }

    pub fn activity(&self) -> Option<Activity> {
        self.activity
    }

    pub fn bounds(&self) -> IdBounds {
        self.bounds
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// Start a search for the current query. Blank queries are a no-op.
    pub fn begin_search(&mut self) -> Option<(RequestToken, String)> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_string();

        self.has_searched = true;
        self.activity = Some(Activity::Searching);
        let token = self.character_requests.issue();
        debug!("Search #{} issued for '{}'", token.value(), query);
        Some((token, query))
    }

    /// Apply a search result. Returns the follow-up detail request when a
    /// new character is displayed.
    pub fn apply_search(&mut self, token: RequestToken, outcome: ResolveOutcome) -> Option<DetailsRequest> {
        if !self.character_requests.is_current(token) {
            debug!("Discarding stale search result #{}", token.value());
            return None;
        }
        self.activity = None;

        match outcome {
            ResolveOutcome::Found(character) => Some(self.show(character)),
            ResolveOutcome::NotFound => {
                info!("Search for '{}' found nothing", self.query);
                self.character = None;
                self.details = None;
                self.details_loading = false;
                self.detail_requests.invalidate();
                self.error = NOT_FOUND_MESSAGE.to_string();
                None
            }
            ResolveOutcome::SearchFailed { message } => {
                self.error = message;
                None
            }
        }
    }

    /// Start a walk from the current character. `None` when nothing is
    /// displayed, when the walk would start at the bound, or when "next" is
    /// disabled by the listing state.
    pub fn begin_navigation(&mut self, direction: Direction) -> Option<(RequestToken, CharacterId)> {
        let from = self.character.as_ref()?.id;

        if direction == Direction::Next && self.page.next_blocked() {
            debug!("Next is disabled by the listing state");
            return None;
        }
        if !self.bounds.can_move(from, direction) {
            debug!("Character {} is at the {:?} bound", from, direction);
            return None;
        }

        self.activity = Some(Activity::Navigating(direction));
        let token = self.character_requests.issue();
        debug!("Navigation #{} issued: {:?} from {}", token.value(), direction, from);
        Some((token, from))
    }

    pub fn apply_navigation(&mut self, token: RequestToken, outcome: NavigationOutcome) -> Option<DetailsRequest> {
        if !self.character_requests.is_current(token) {
            debug!("Discarding stale navigation result #{}", token.value());
            return None;
        }
        self.activity = None;

        match outcome {
            NavigationOutcome::Moved(character) => Some(self.show(character)),
            NavigationOutcome::BoundaryReached => None,
            NavigationOutcome::Aborted { reason } => {
                warn!("Navigation aborted, keeping current character: {}", reason);
                None
            }
        }
    }

    /// Apply detail lists. Dropped unless they belong to the latest detail
    /// request and to the character still on screen.
    pub fn apply_details(&mut self, token: RequestToken, details: CharacterDetails) -> bool {
        if !self.detail_requests.is_current(token) {
            debug!("Discarding stale details #{}", token.value());
            return false;
        }
        if self.character.as_ref().map(|c| c.id) != Some(details.character_id) {
            debug!("Discarding details for {}, no longer displayed", details.character_id);
            return false;
        }

        self.details = Some(details);
        self.details_loading = false;
        true
    }

    /// Start fetching a listing page. `None` when the cursor is absent.
    pub fn begin_page(&mut self, cursor: PageCursor) -> Option<(RequestToken, Option<String>)> {
        let url = self.page.cursor_url(cursor)?;
        self.page_loading = true;
        Some((self.page_requests.issue(), url))
    }

    /// Apply a fetched page; failures keep the current page
    pub fn apply_page(&mut self, token: RequestToken, result: Result<PageState, String>) -> bool {
        if !self.page_requests.is_current(token) {
            debug!("Discarding stale page #{}", token.value());
            return false;
        }
        self.page_loading = false;

        match result {
            Ok(page) => {
                self.page = page;
                true
            }
            Err(e) => {
                warn!("Keeping current listing page: {}", e);
                false
            }
        }
    }

    /// Back to the initial empty search state. Anything in flight for the
    /// character or its details is superseded.
    pub fn reset(&mut self) {
        self.query.clear();
        self.character = None;
        self.error.clear();
        self.has_searched = false;
        self.details = None;
        self.details_loading = false;
        self.activity = None;
        self.character_requests.invalidate();
        self.detail_requests.invalidate();
    }

    /// Display a character: query, error and detail lists are replaced in
    /// the same step.
    fn show(&mut self, character: Character) -> DetailsRequest {
        info!("Displaying character {} ({})", character.name, character.id);

        self.query = character.name.clone();
        self.error.clear();
        self.details = Some(CharacterDetails::empty(character.id));
        self.details_loading = true;
        self.character = Some(character.clone());

        DetailsRequest {
            token: self.detail_requests.issue(),
            character,
        }
    }
}
