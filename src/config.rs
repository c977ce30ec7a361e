//! Runtime configuration read from the environment.
//!
//! | Variable                   | Default                                   |
//! |----------------------------|-------------------------------------------|
//! | `PORT`                     | `10000`                                   |
//! | `STATIC_DIR`               | `.`                                       |
//! | `SLAYER_API_URL`           | `https://demon-slayer-api.onrender.com/v1` |
//! | `SLAYER_ROUTE_LAYOUT`      | `per-category` (or `flat`)                |
//! | `SLAYER_HTTP_TIMEOUT_SECS` | unset (transport default)                 |
//! | `PLACEHOLDER_IMAGE`        | `./imgs/placeholder.jpg`                  |

use crate::error::LookupError;
use crate::network::{DEFAULT_API_URL, DEFAULT_PORT, PLACEHOLDER_IMAGE};
use crate::shared::RouteLayout;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub route_layout: RouteLayout,
    /// `None` leaves request deadlines to the transport.
    pub http_timeout: Option<Duration>,
    pub placeholder_image: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            route_layout: RouteLayout::PerCategory,
            http_timeout: None,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, LookupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LookupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(url) = get("SLAYER_API_URL") {
            config.api_url = url;
        }
        if let Some(layout) = get("SLAYER_ROUTE_LAYOUT") {
            config.route_layout = layout.parse::<RouteLayout>().map_err(LookupError::Config)?;
        }
        if let Some(secs) = get("SLAYER_HTTP_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                LookupError::Config(format!("SLAYER_HTTP_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.http_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(image) = get("PLACEHOLDER_IMAGE") {
            config.placeholder_image = image;
        }
        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| LookupError::Config(format!("PORT is not a valid port: {}", port)))?;
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
