use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::env;
use std::time::Duration;

pub const DEFAULT_GEO_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
pub const DEFAULT_AIR_POLLUTION_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub geo_url: String,
    pub air_pollution_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from an optional `.env` file layered over the
    /// process environment; `.env` values win. A missing API key is an error.
    pub fn from_env() -> Result<Self> {
        let dotenv: HashMap<String, String> = dotenvy::dotenv_iter()
            .map(|iter| iter.filter_map(|entry| entry.ok()).collect())
            .unwrap_or_default();
        Self::from_lookup(layered(&dotenv, |key| env::var(key).ok()))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENWEATHER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "OPENWEATHER_API_KEY not found. \
                     Set it in the environment or a .env file and restart the server."
                )
            })?;

        let port: u16 = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{port}'"))?,
            None => 8000,
        };

        let timeout_secs: u64 = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => secs.parse().with_context(|| {
                format!("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds, got '{secs}'")
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            api_key,
            geo_url: lookup("OPENWEATHER_GEO_URL").unwrap_or_else(|| DEFAULT_GEO_URL.to_string()),
            air_pollution_url: lookup("OPENWEATHER_AIR_POLLUTION_URL")
                .unwrap_or_else(|| DEFAULT_AIR_POLLUTION_URL.to_string()),
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Look a key up in `overrides` first, then in `fallback`.
fn layered<'a, F>(
    overrides: &'a HashMap<String, String>,
    fallback: F,
) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'a,
{
    move |key| overrides.get(key).cloned().or_else(|| fallback(key))
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"***API_KEY***")
            .field("geo_url", &self.geo_url)
            .field("air_pollution_url", &self.air_pollution_url)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}
