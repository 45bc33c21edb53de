use crate::location::Bounds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub graphql_url: String,
    pub places_base_url: String,
    pub google_api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub lookup_timeout_secs: u64,
    pub user_agent: String,
    pub photo_max_height: u32,
    pub search_country: String,
    pub search_bounds: Bounds,
    pub default_place_id: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("graphql_url", &self.graphql_url)
            .field("places_base_url", &self.places_base_url)
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("lookup_timeout_secs", &self.lookup_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("photo_max_height", &self.photo_max_height)
            .field("search_country", &self.search_country)
            .field("search_bounds", &self.search_bounds)
            .field("default_place_id", &self.default_place_id)
            .finish()
    }
}
