pub mod character_search;

pub use character_search::CharacterSearchApp;
