//! Character search, navigation and aggregation

pub mod catalog;
pub mod details;
pub mod model;
pub mod navigator;
pub mod pages;
pub mod resolver;
pub mod sequence;
pub mod session;

pub use catalog::CatalogIndex;
pub use details::{CharacterDetails, DetailAggregator};
pub use model::{Character, CharacterId};
pub use navigator::{Direction, IdBounds, NavigationOutcome, Navigator};
pub use pages::{PageCursor, PageFetcher, PageState};
pub use resolver::{NOT_FOUND_MESSAGE, ResolveOutcome, Resolver, SEARCH_FAILED_MESSAGE};
pub use sequence::{RequestSequencer, RequestToken};
pub use session::{Activity, BrowserSession, DetailsRequest};
