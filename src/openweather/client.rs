use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::{AirQualityProvider, Coordinates, PollutantReading};
use crate::config::Config;

/// OpenWeather geocoding and air pollution client.
///
/// Holds one pooled `reqwest::Client` with the configured per-request timeout,
/// so it can be shared across requests.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    geo_url: String,
    air_pollution_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to build OpenWeather HTTP client")?;

        Ok(Self {
            api_key: config.api_key.clone(),
            geo_url: config.geo_url.clone(),
            air_pollution_url: config.air_pollution_url.clone(),
            http,
        })
    }

    /// Error text must never carry the API key.
    fn redact(&self, text: &str) -> String {
        text.replace(&self.api_key, "***API_KEY***")
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)], what: &str) -> Result<String> {
        let res = self
            .http
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to send request to OpenWeather ({what})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to read OpenWeather {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                what,
                status,
                truncate_body(&self.redact(&body)),
            ));
        }

        debug!("OpenWeather {} response: {}", what, truncate_body(&body));
        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoEntry {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwPollutionMain {
    aqi: u8,
}

#[derive(Debug, Deserialize)]
struct OwPollutionEntry {
    main: OwPollutionMain,
    components: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct OwPollutionResponse {
    list: Vec<OwPollutionEntry>,
}

fn parse_geocode(body: &str) -> Result<Option<Coordinates>> {
    let entries: Vec<OwGeoEntry> =
        serde_json::from_str(body).context("Failed to parse OpenWeather geocoding JSON")?;

    Ok(entries
        .into_iter()
        .next()
        .map(|entry| Coordinates {
            lat: entry.lat,
            lon: entry.lon,
        }))
}

fn parse_pollution(body: &str) -> Result<PollutantReading> {
    let parsed: OwPollutionResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather air pollution JSON")?;

    let entry = parsed
        .list
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("OpenWeather air pollution response contained no data"))?;

    Ok(PollutantReading {
        index: entry.main.aqi,
        components: entry.components,
    })
}

#[async_trait]
impl AirQualityProvider for OpenWeatherClient {
    async fn geocode(&self, city: &str) -> Result<Option<Coordinates>> {
        info!("Geocoding city '{}'", city);
        let body = self
            .get_json(&self.geo_url, &[("q", city), ("limit", "1")], "geocoding")
            .await?;
        parse_geocode(&body)
    }

    async fn fetch_pollutants(&self, coords: Coordinates) -> Result<PollutantReading> {
        info!("Fetching air pollution for ({}, {})", coords.lat, coords.lon);
        let (lat, lon) = (coords.lat.to_string(), coords.lon.to_string());
        let body = self
            .get_json(
                &self.air_pollution_url,
                &[("lat", lat.as_str()), ("lon", lon.as_str())],
                "air pollution",
            )
            .await?;
        parse_pollution(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
