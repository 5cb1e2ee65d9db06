use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Database connection and seeding settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite URL (default: `sqlite://racebook.db`).
    pub url: String,
    /// Pool size (default: `10`).
    pub max_connections: u32,
    /// How long a request waits for a pooled connection (default: `5`).
    pub acquire_timeout_secs: u64,
    /// Seed demo races and events at startup (default: `false`).
    pub seed_demo_data: bool,
    /// Alternative sports events seed file. The bundled file is used when unset.
    pub events_seed_path: Option<PathBuf>,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Loaded once at
/// startup and passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log output format (default: `text`).
    pub log_format: LogFormat,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `8000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `LOG_FORMAT`              | `text`                     |
    /// | `DATABASE_URL`            | `sqlite://racebook.db`     |
    /// | `DB_MAX_CONNECTIONS`      | `10`                       |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                        |
    /// | `SEED_DEMO_DATA`          | `false`                    |
    /// | `EVENTS_SEED_PATH`        | unset                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", 8000, "a valid u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "a valid u64")?;
        let log_format = parse_var(&lookup, "LOG_FORMAT", LogFormat::Text, "'text' or 'json'")?;

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://racebook.db".into()),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 10, "a valid u32")?,
            acquire_timeout_secs: parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5, "a valid u64")?,
            seed_demo_data: parse_var(&lookup, "SEED_DEMO_DATA", false, "'true' or 'false'")?,
            events_seed_path: lookup("EVENTS_SEED_PATH")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_format,
            database,
        })
    }
}

/// Parse `var` when set, otherwise fall back to `default`.
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            value,
            expected,
        }),
    }
}
