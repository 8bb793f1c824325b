//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use generation_client::config::DEFAULT_BASE_URL;

/// Which generator answers chat questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// The generation backend over HTTP.
    Api,
    /// Canned offline answers with simulated latency.
    Mock,
}

impl GeneratorKind {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "api" => Some(GeneratorKind::Api),
            "mock" => Some(GeneratorKind::Mock),
            _ => None,
        }
    }
}

/// Where the identity provider's hosted pages live.
#[derive(Debug, Clone)]
pub struct AuthLinks {
    pub sign_in_url: String,
    pub sign_up_url: String,
    pub sign_out_url: String,
}

impl Default for AuthLinks {
    fn default() -> Self {
        Self {
            sign_in_url: "/oauth2/sign_in".to_string(),
            sign_up_url: "/oauth2/sign_in".to_string(),
            sign_out_url: "/oauth2/sign_out?rd=/".to_string(),
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Generation backend base URL.
    pub api_url: String,
    pub generator: GeneratorKind,
    pub auth: AuthLinks,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Maximum number of chat page views and browser sessions kept in memory.
    pub max_sessions: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `EDUDIFF_ADDR` | Server bind address | `127.0.0.1:3000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:edudiff.db?mode=rwc` |
    /// | `EDUDIFF_API_URL` | Generation backend URL | `http://localhost:5001` |
    /// | `EDUDIFF_GENERATOR` | `api` or `mock` | `api` |
    /// | `AUTH_SIGN_IN_URL` | Identity provider sign-in page | `/oauth2/sign_in` |
    /// | `AUTH_SIGN_UP_URL` | Identity provider sign-up page | `/oauth2/sign_in` |
    /// | `AUTH_SIGN_OUT_URL` | Identity provider sign-out link | `/oauth2/sign_out?rd=/` |
    /// | `EDUDIFF_STATIC_DIR` | Static asset directory | `static` |
    /// | `EDUDIFF_MAX_SESSIONS` | In-memory session limit | `1000` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("EDUDIFF_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:edudiff.db?mode=rwc".to_string());

        let api_url = env::var("EDUDIFF_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let generator = match env::var("EDUDIFF_GENERATOR") {
            Ok(value) => {
                GeneratorKind::parse(&value).ok_or(ConfigError::UnknownGenerator(value))?
            }
            Err(_) => GeneratorKind::Api,
        };

        let defaults = AuthLinks::default();
        let auth = AuthLinks {
            sign_in_url: env::var("AUTH_SIGN_IN_URL").unwrap_or(defaults.sign_in_url),
            sign_up_url: env::var("AUTH_SIGN_UP_URL").unwrap_or(defaults.sign_up_url),
            sign_out_url: env::var("AUTH_SIGN_OUT_URL").unwrap_or(defaults.sign_out_url),
        };

        let static_dir = env::var("EDUDIFF_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let max_sessions = match env::var("EDUDIFF_MAX_SESSIONS") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidMaxSessions(value))?,
            Err(_) => 1000,
        };

        Ok(Self {
            addr,
            database_url,
            api_url,
            generator,
            auth,
            static_dir,
            max_sessions,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid EDUDIFF_ADDR format")]
    InvalidAddr,

    #[error("Unknown EDUDIFF_GENERATOR '{0}' (expected 'api' or 'mock')")]
    UnknownGenerator(String),

    #[error("EDUDIFF_MAX_SESSIONS must be a number, got '{0}'")]
    InvalidMaxSessions(String),
}
