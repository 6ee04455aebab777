use toolshelf_core::limits::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL URL for the document store. Without it the server keeps
    /// documents in memory.
    pub database_url: Option<String>,
    /// Entities per collection shown on the home page (default: `10`).
    pub list_limit: usize,
    /// Categories offered in the add-tool selector (default: `100`).
    pub category_options_limit: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `DATABASE_URL`           | unset (in-memory store)    |
    /// | `LIST_LIMIT`             | `10`                       |
    /// | `CATEGORY_OPTIONS_LIMIT` | `100`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let list_limit = parse_limit("LIST_LIMIT", DEFAULT_LIST_LIMIT);
        let category_options_limit = parse_limit("CATEGORY_OPTIONS_LIMIT", MAX_LIST_LIMIT);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            list_limit,
            category_options_limit,
        }
    }
}

/// Read a positive list size, panicking at startup on invalid values.
fn parse_limit(var: &str, default: usize) -> usize {
    let value: usize = std::env::var(var)
        .map(|raw| {
            raw.parse()
                .unwrap_or_else(|_| panic!("{var} must be a positive integer"))
        })
        .unwrap_or(default);
    assert!(value > 0, "{var} must be a positive integer");
    value
}
