use std::time::Duration;

pub const DEFAULT_SOURCE: &str = "MetObjects.csv";
pub const DEFAULT_START: i64 = 1400;
pub const DEFAULT_END: i64 = 1499;
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_SPECIES: &str = "Human";
pub const DEFAULT_SNAPSHOT: &str = "personInfo.json";

/// Limits applied to every request made against the API.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub max_pages: usize,
    pub user_agent: String,
    pub retry_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout: Duration::from_secs(30),
            max_pages: 100,
            user_agent: format!("datasift/{}", env!("CARGO_PKG_VERSION")),
            retry_delay: Duration::from_secs(30),
        }
    }
}
