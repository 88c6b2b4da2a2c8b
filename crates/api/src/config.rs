/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface the listener binds to.
    pub host: String,
    /// Port the listener binds to.
    pub port: u16,
    /// Origins the CORS layer accepts.
    pub cors_origins: Vec<String>,
    /// Per-request timeout enforced by the middleware stack, in seconds.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to local
    /// development defaults:
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    ///
    /// `CORS_ORIGINS` is comma-separated. Unparseable numeric values
    /// panic rather than being silently replaced.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse::<u64>()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}
