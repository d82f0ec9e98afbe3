pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use client::OpenWeatherClient;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One air pollution reading: OpenWeather's 1–5 index plus raw component
/// concentrations in µg/m³, keyed by pollutant name (`pm2_5`, `pm10`, `co`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct PollutantReading {
    pub index: u8,
    pub components: BTreeMap<String, f64>,
}

impl PollutantReading {
    pub fn component(&self, name: &str) -> anyhow::Result<f64> {
        self.components.get(name).copied().ok_or_else(|| {
            anyhow::anyhow!("Air pollution response is missing the '{name}' component")
        })
    }
}

/// Upstream lookups needed to build an air quality report.
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Resolve a city name to coordinates. `Ok(None)` means the city is unknown.
    async fn geocode(&self, city: &str) -> anyhow::Result<Option<Coordinates>>;

    async fn fetch_pollutants(&self, coords: Coordinates) -> anyhow::Result<PollutantReading>;
}
