use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";
const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Runtime configuration loaded from the environment.
pub struct Config {
    /// Connection URL for the relational store, credentials included.
    pub database_url: String,

    /// Address the HTTP server binds to.
    pub listen_host: String,
    /// Port the HTTP server binds to.
    pub listen_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; `LISTEN_HOST` and `LISTEN_PORT` fall back
    /// to `0.0.0.0:8080` when unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All settings resolved
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or `LISTEN_PORT` unparseable
    pub fn from_env() -> Result<Self, AppError> {
        let listen_port = match std::env::var("LISTEN_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "LISTEN_PORT".to_string(),
                    value: raw,
                })?,
            Err(_) => DEFAULT_LISTEN_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_host: std::env::var("LISTEN_HOST")
                .unwrap_or_else(|_| DEFAULT_LISTEN_HOST.to_string()),
            listen_port,
        })
    }
}
