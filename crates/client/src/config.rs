/// Where the form client sends reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API server, without trailing slash.
    pub base_url: String,
    /// Origin the requests claim, matching the server's allowed origin.
    pub origin: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `RESERVATION_API_URL` | `http://localhost:4000` |
    /// | `FRONTEND_URL`        | `http://localhost:5173` |
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("RESERVATION_API_URL").unwrap_or_else(|_| "http://localhost:4000".into()),
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".into()),
        )
    }

    pub fn new(base_url: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            origin: origin.into(),
        }
    }

    /// Full URL of the reservation endpoint.
    pub fn send_url(&self) -> String {
        format!("{}/api/v1/reservation/send", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_url_ignores_trailing_slash() {
        let config = ClientConfig::new("http://api.bistro.test/", "http://bistro.test");
        assert_eq!(
            config.send_url(),
            "http://api.bistro.test/api/v1/reservation/send"
        );
    }
}
