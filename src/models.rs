use serde::{Deserialize, Serialize};

use crate::aqi::{RiskLevel, UsAqi};
use crate::openweather::Coordinates;

/// Query string for the air quality endpoints
#[derive(Debug, Deserialize)]
pub struct AirQualityQuery {
    pub city: String,
}

impl AirQualityQuery {
    /// Validates if the city is not empty or just whitespace
    pub fn is_valid(&self) -> bool {
        !self.city.trim().is_empty()
    }
}

/// Pollutant concentrations as reported to clients.
/// `pm2_5` and `pm10` are µg/m³, `co` is mg/m³.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pollutants {
    pub pm2_5: f64,
    pub pm10: f64,
    pub co: f64,
}

/// Response payload for `GET /air-quality`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityReport {
    pub city: String,
    pub aqi: UsAqi,
    pub risk_level: RiskLevel,
    pub pollutants: Pollutants,
    pub health_recommendations: Vec<String>,
}

/// Response payload for `GET /air-quality/details`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityDetails {
    pub city: String,
    pub coordinates: Coordinates,
    /// OpenWeather's own 1–5 index
    pub aqi_index: u8,
    pub us_aqi: UsAqi,
    pub category: RiskLevel,
    pub meaning: String,
    pub pollutants: Pollutants,
    pub health_recommendations: Vec<String>,
}

/// Response payload for the liveness endpoints
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn running() -> Self {
        Self {
            status: "Backend running successfully".to_string(),
        }
    }

    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_validation() {
        assert!(AirQualityQuery { city: "Delhi".into() }.is_valid());
        assert!(!AirQualityQuery { city: "".into() }.is_valid());
        assert!(!AirQualityQuery { city: "   ".into() }.is_valid());
    }

    #[test]
    fn test_report_serialization_shape() {
        let report = AirQualityReport {
            city: "Delhi".into(),
            aqi: UsAqi::new(112).unwrap(),
            risk_level: RiskLevel::UnhealthyForSensitiveGroups,
            pollutants: Pollutants {
                pm2_5: 40.0,
                pm10: 80.0,
                co: 0.3,
            },
            health_recommendations: vec!["Wear a mask if outdoors".into()],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "city": "Delhi",
                "aqi": 112,
                "risk_level": "Unhealthy for Sensitive Groups",
                "pollutants": {"pm2_5": 40.0, "pm10": 80.0, "co": 0.3},
                "health_recommendations": ["Wear a mask if outdoors"]
            })
        );
    }
}
