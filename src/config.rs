//! Configuration management for the gateway.
//!
//! Settings are taken from environment variables, optionally loaded from a `.env` file.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use crate::error::ConfigError;
use crate::net::StatusClient;
use crate::net::pipeline::DEFAULT_MAX_FRAME_SIZE;

/// Runtime configuration of the gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket the http server listens on
    pub bind: SocketAddr,
    /// Directory containing `index.html`, `icon.png` and the `assets` folder
    pub static_dir: PathBuf,
    pub dial_timeout: Duration,
    /// Timeout for every single packet read from a minecraft server
    pub read_timeout: Duration,
    /// Largest packet accepted from a minecraft server
    pub max_packet_size: usize,
    /// Base of the favicon urls in api responses, e.g. `https://mcping.me`.
    /// The request's host header is used when unset.
    pub icon_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            static_dir: PathBuf::from("static"),
            dial_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
            max_packet_size: DEFAULT_MAX_FRAME_SIZE,
            icon_base_url: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    /// Unset variables keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // The .env file is optional
        dotenv::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let mut config = Config::default();

        if let Some(bind) = lookup("MCPING_BIND") {
            config.bind = bind.parse().map_err(|_| ConfigError::InvalidValue {
                name: "MCPING_BIND",
                expected: "a socket address such as 0.0.0.0:8080",
                value: bind.clone(),
            })?;
        }
        if let Some(static_dir) = lookup("MCPING_STATIC_DIR") {
            config.static_dir = PathBuf::from(static_dir);
        }
        if let Some(millis) = lookup("MCPING_DIAL_TIMEOUT_MS") {
            config.dial_timeout = Duration::from_millis(positive("MCPING_DIAL_TIMEOUT_MS", millis)?);
        }
        if let Some(millis) = lookup("MCPING_READ_TIMEOUT_MS") {
            config.read_timeout = Duration::from_millis(positive("MCPING_READ_TIMEOUT_MS", millis)?);
        }
        if let Some(size) = lookup("MCPING_MAX_PACKET_SIZE") {
            config.max_packet_size = positive("MCPING_MAX_PACKET_SIZE", size)? as usize;
        }
        config.icon_base_url = lookup("MCPING_ICON_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(config)
    }

    /// The status client configured with the timeouts and limits of this configuration.
    pub fn status_client(&self) -> StatusClient {
        StatusClient {
            dial_timeout: self.dial_timeout,
            read_timeout: self.read_timeout,
            max_packet_size: self.max_packet_size,
        }
    }
}

fn positive(name: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ConfigError::InvalidValue { name, expected: "a positive integer", value }),
    }
}
