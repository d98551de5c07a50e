use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// The single origin allowed to call the API with credentials.
    pub frontend_url: String,
    /// Postgres connection string, or `memory://` for an in-process store.
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JSON file with site content; the built-in copy is used when unset.
    pub site_content_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `4000`                     |
    /// | `FRONTEND_URL`         | `http://localhost:5173`    |
    /// | `DATABASE_URL`         | required                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SITE_CONTENT_PATH`    | unset                      |
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Panics on missing or malformed required values so misconfiguration
    /// stops the process before it binds a port.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = var("PORT")
            .unwrap_or_else(|| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let frontend_url = var("FRONTEND_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "http://localhost:5173".into());

        let database_url = var("DATABASE_URL").expect("DATABASE_URL must be set");

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let site_content_path = var("SITE_CONTENT_PATH")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            frontend_url,
            database_url,
            request_timeout_secs,
            site_content_path,
        }
    }

    /// Whether the in-process store was requested instead of Postgres.
    pub fn uses_memory_store(&self) -> bool {
        self.database_url.starts_with("memory://")
    }
}
