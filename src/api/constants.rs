//! API constants and endpoint builders for the Star Wars data sources

/// Default base URL of the primary people/films/vehicles/starships catalog
pub const DEFAULT_PEOPLE_BASE_URL: &str = "https://swapi.dev/api";

/// Default URL of the one-shot portrait catalog dump
pub const DEFAULT_CATALOG_URL: &str = "https://akabab.github.io/starwars-api/api/all.json";

/// Path of the people collection
pub const PEOPLE_PATH: &str = "/people/";

/// Lowest numeric person ID the upstream catalog is known to use
pub const MIN_PERSON_ID: u32 = 1;

/// Highest numeric person ID the upstream catalog is known to use
pub const MAX_PERSON_ID: u32 = 100;

/// Default user agent sent with every request
pub const USER_AGENT: &str = concat!("swapi-browser/", env!("CARGO_PKG_VERSION"));

/// Standard headers
pub mod headers {
    /// Accept header for JSON responses
    pub const ACCEPT_JSON: &str = "application/json";
}

/// Build the default listing endpoint (first page of people)
pub fn people_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PEOPLE_PATH)
}

/// Build the name search endpoint, URL-encoding the query
pub fn search_endpoint(base_url: &str, query: &str) -> String {
    format!("{}?search={}", people_endpoint(base_url), urlencoding::encode(query))
}

/// Build a single person endpoint
pub fn person_endpoint(base_url: &str, id: u32) -> String {
    format!("{}{}/", people_endpoint(base_url), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_normalize_trailing_slash() {
        assert_eq!(people_endpoint("https://swapi.dev/api/"), "https://swapi.dev/api/people/");
        assert_eq!(person_endpoint("https://swapi.dev/api", 17), "https://swapi.dev/api/people/17/");
    }

    #[test]
    fn test_search_endpoint_encodes_query() {
        let url = search_endpoint(DEFAULT_PEOPLE_BASE_URL, "Luke Skywalker");
        assert_eq!(url, "https://swapi.dev/api/people/?search=Luke%20Skywalker");
    }
}
