//! Builds air quality reports: geocode, fetch pollutants, convert PM2.5 to
//! US AQI, then attach health advice.

use tracing::{info, warn};

use crate::aqi::{self, HealthAdvice, UsAqi};
use crate::error::{AppError, AppResult};
use crate::models::{AirQualityDetails, AirQualityReport, Pollutants};
use crate::openweather::{AirQualityProvider, Coordinates, PollutantReading};

pub const CITY_NOT_FOUND: &str = "Invalid city name or data not available";

/// Everything gathered for one city before it is shaped into a response.
struct Assessment {
    city: String,
    coords: Coordinates,
    reading: PollutantReading,
    pollutants: Pollutants,
    aqi: UsAqi,
    advice: HealthAdvice,
}

/// Uppercase the first character, leave the rest untouched.
pub fn display_city(city: &str) -> String {
    let city = city.trim();
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// µg/m³ to mg/m³, rounded to two decimals.
pub fn co_to_mg(co_ug: f64) -> f64 {
    (co_ug / 1000.0 * 100.0).round() / 100.0
}

fn upstream(err: anyhow::Error) -> AppError {
    AppError::UpstreamError(format!("{err:#}"))
}

async fn assess(provider: &dyn AirQualityProvider, city: &str) -> AppResult<Assessment> {
    let city = city.trim();

    let coords = provider
        .geocode(city)
        .await
        .map_err(upstream)?
        .ok_or_else(|| {
            info!("No geocoding match for '{}'", city);
            AppError::NotFound(CITY_NOT_FOUND.to_string())
        })?;

    let reading = provider.fetch_pollutants(coords).await.map_err(upstream)?;

    let pm2_5 = reading.component("pm2_5").map_err(upstream)?;
    let pollutants = Pollutants {
        pm2_5,
        pm10: reading.component("pm10").map_err(upstream)?,
        co: co_to_mg(reading.component("co").map_err(upstream)?),
    };

    let us_aqi = aqi::convert(pm2_5).ok_or_else(|| {
        warn!("PM2.5 of {} for '{}' has no AQI breakpoint", pm2_5, city);
        AppError::ComputationError(format!(
            "PM2.5 concentration {pm2_5} µg/m³ is outside the US AQI breakpoint range"
        ))
    })?;
    let advice = aqi::advise(us_aqi);

    info!(
        "Air quality for '{}': US AQI {} ({})",
        city, us_aqi, advice.risk_level
    );

    Ok(Assessment {
        city: display_city(city),
        coords,
        reading,
        pollutants,
        aqi: us_aqi,
        advice,
    })
}

fn recommendations(advice: &HealthAdvice) -> Vec<String> {
    advice
        .recommendations
        .iter()
        .map(|r| r.to_string())
        .collect()
}

pub async fn build_report(
    provider: &dyn AirQualityProvider,
    city: &str,
) -> AppResult<AirQualityReport> {
    let assessment = assess(provider, city).await?;

    Ok(AirQualityReport {
        city: assessment.city,
        aqi: assessment.aqi,
        risk_level: assessment.advice.risk_level,
        pollutants: assessment.pollutants,
        health_recommendations: recommendations(&assessment.advice),
    })
}

/// Like [`build_report`], plus coordinates and OpenWeather's own 1–5 index.
pub async fn build_details(
    provider: &dyn AirQualityProvider,
    city: &str,
) -> AppResult<AirQualityDetails> {
    let assessment = assess(provider, city).await?;
    let index_info = aqi::interpret_index(assessment.reading.index);

    Ok(AirQualityDetails {
        city: assessment.city,
        coordinates: assessment.coords,
        aqi_index: assessment.reading.index,
        us_aqi: assessment.aqi,
        category: assessment.advice.risk_level,
        meaning: index_info.meaning.to_string(),
        pollutants: assessment.pollutants,
        health_recommendations: recommendations(&assessment.advice),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::RiskLevel;
    use crate::openweather::testing::FakeProvider;

    fn delhi() -> FakeProvider {
        FakeProvider::found(28.6, 77.2, &[("pm2_5", 40.0), ("pm10", 80.0), ("co", 300.0)])
    }

    #[test]
    fn test_display_city() {
        assert_eq!(display_city("delhi"), "Delhi");
        assert_eq!(display_city("  new delhi "), "New delhi");
        assert_eq!(display_city("sÃO PAULO"), "SÃO PAULO");
        assert_eq!(display_city("éire"), "Éire");
        assert_eq!(display_city(""), "");
    }

    #[test]
    fn test_co_to_mg() {
        assert_eq!(co_to_mg(1234.5), 1.23);
        assert_eq!(co_to_mg(300.0), 0.3);
        assert_eq!(co_to_mg(0.0), 0.0);
    }

    #[tokio::test]
    async fn test_build_report_for_delhi() {
        let report = build_report(&delhi(), "delhi").await.unwrap();
        let expected_aqi = aqi::convert(40.0).unwrap();
        let advice = aqi::advise(expected_aqi);

        assert_eq!(report.city, "Delhi");
        assert_eq!(report.aqi, expected_aqi);
        assert_eq!(report.aqi.value(), 112);
        assert_eq!(report.risk_level, advice.risk_level);
        assert_eq!(report.risk_level, RiskLevel::UnhealthyForSensitiveGroups);
        assert_eq!(
            report.pollutants,
            Pollutants {
                pm2_5: 40.0,
                pm10: 80.0,
                co: 0.3
            }
        );
        assert_eq!(report.health_recommendations, advice.recommendations);
    }

    #[tokio::test]
    async fn test_unknown_city_is_not_found() {
        let err = build_report(&FakeProvider::default(), "nowhereville")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == CITY_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_masked() {
        let provider = FakeProvider {
            fail_geocode: true,
            ..delhi()
        };
        let err = build_report(&provider, "delhi").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamError(ref msg) if msg.contains("503")));

        let provider = FakeProvider {
            reading: None,
            ..delhi()
        };
        let err = build_report(&provider, "delhi").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamError(_)));
    }

    #[tokio::test]
    async fn test_missing_component_is_upstream_error() {
        let provider = FakeProvider::found(1.0, 2.0, &[("pm2_5", 10.0), ("co", 100.0)]);
        let err = build_report(&provider, "x").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamError(ref msg) if msg.contains("pm10")));
    }

    #[tokio::test]
    async fn test_out_of_range_pm25_is_computation_error() {
        for pm2_5 in [600.0, -1.0, 12.05] {
            let provider =
                FakeProvider::found(1.0, 2.0, &[("pm2_5", pm2_5), ("pm10", 1.0), ("co", 1.0)]);
            let err = build_report(&provider, "smogtown").await.unwrap_err();
            assert!(
                matches!(err, AppError::ComputationError(_)),
                "{pm2_5} gave {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_build_details_adds_coordinates_and_index() {
        let details = build_details(&delhi(), "delhi").await.unwrap();

        assert_eq!(details.city, "Delhi");
        assert_eq!(details.coordinates, Coordinates { lat: 28.6, lon: 77.2 });
        assert_eq!(details.aqi_index, 3);
        assert_eq!(details.meaning, "Sensitive groups affected");
        assert_eq!(details.us_aqi.value(), 112);
        assert_eq!(details.category, RiskLevel::UnhealthyForSensitiveGroups);
        assert_eq!(details.pollutants.co, 0.3);
    }
}
