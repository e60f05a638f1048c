use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// CSV file holding the movie catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Upper bound on catalog size; larger catalogs are rejected
    #[serde(default = "default_max_catalog_size")]
    pub max_catalog_size: usize,

    /// Serve an empty catalog instead of failing the load
    #[serde(default)]
    pub allow_empty_catalog: bool,

    /// Recommendations returned when a request sets no limit
    #[serde(default = "default_recommendation_limit")]
    pub default_recommendation_limit: usize,

    /// Largest limit a request may ask for
    #[serde(default = "default_max_recommendation_limit")]
    pub max_recommendation_limit: usize,

    /// Maximum autocomplete search results
    #[serde(default = "default_search_result_limit")]
    pub search_result_limit: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_catalog_path() -> String {
    "movies.txt".to_string()
}

fn default_max_catalog_size() -> usize {
    500
}

fn default_recommendation_limit() -> usize {
    20
}

fn default_max_recommendation_limit() -> usize {
    100
}

fn default_search_result_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: default_catalog_path(),
            max_catalog_size: default_max_catalog_size(),
            allow_empty_catalog: false,
            default_recommendation_limit: default_recommendation_limit(),
            max_recommendation_limit: default_max_recommendation_limit(),
            search_result_limit: default_search_result_limit(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
