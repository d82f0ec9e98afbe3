use serde::{Serialize, Serializer};

use super::UsAqi;

/// Risk category for a US AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Good => "Good",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            RiskLevel::Unhealthy => "Unhealthy",
            RiskLevel::VeryUnhealthy => "Very Unhealthy",
            RiskLevel::Hazardous => "Hazardous",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Risk level plus guidance, most important recommendation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthAdvice {
    pub risk_level: RiskLevel,
    pub recommendations: &'static [&'static str],
}

struct AdviceBand {
    /// Inclusive.
    upper: u16,
    advice: HealthAdvice,
}

const ADVICE_BANDS: &[AdviceBand] = &[
    AdviceBand {
        upper: 50,
        advice: HealthAdvice {
            risk_level: RiskLevel::Good,
            recommendations: &["Enjoy outdoor activities", "No health precautions needed"],
        },
    },
    AdviceBand {
        upper: 100,
        advice: HealthAdvice {
            risk_level: RiskLevel::Moderate,
            recommendations: &[
                "Sensitive individuals should be cautious",
                "Reduce prolonged outdoor exertion",
            ],
        },
    },
    AdviceBand {
        upper: 150,
        advice: HealthAdvice {
            risk_level: RiskLevel::UnhealthyForSensitiveGroups,
            recommendations: &[
                "Wear a mask if outdoors",
                "Avoid outdoor exercise",
                "Children and elderly should stay indoors",
            ],
        },
    },
    AdviceBand {
        upper: 200,
        advice: HealthAdvice {
            risk_level: RiskLevel::Unhealthy,
            recommendations: &[
                "Wear N95 mask",
                "Avoid morning walks",
                "Keep windows closed",
                "Use air purifiers if available",
            ],
        },
    },
    AdviceBand {
        upper: 300,
        advice: HealthAdvice {
            risk_level: RiskLevel::VeryUnhealthy,
            recommendations: &[
                "Stay indoors",
                "Avoid all outdoor activities",
                "Use air purifiers",
                "High risk for everyone",
            ],
        },
    },
];

/// Everything above the last bounded band.
const HAZARDOUS: HealthAdvice = HealthAdvice {
    risk_level: RiskLevel::Hazardous,
    recommendations: &[
        "Health emergency conditions",
        "Stay indoors at all times",
        "Seek medical advice if symptoms occur",
        "Avoid any physical exertion",
    ],
};

/// Map a US AQI value to its risk level and recommendations.
///
/// Bands are scanned in ascending order and the first band whose upper bound
/// is at least `aqi` wins. Values past every band are hazardous.
pub fn advise(aqi: UsAqi) -> HealthAdvice {
    match ADVICE_BANDS.iter().find(|band| aqi.value() <= band.upper) {
        Some(band) => band.advice,
        None => HAZARDOUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u16) -> RiskLevel {
        advise(UsAqi::new(value).unwrap()).risk_level
    }

    #[test]
    fn test_band_transitions() {
        assert_eq!(level(0), RiskLevel::Good);
        assert_eq!(level(50), RiskLevel::Good);
        assert_eq!(level(51), RiskLevel::Moderate);
        assert_eq!(level(100), RiskLevel::Moderate);
        assert_eq!(level(101), RiskLevel::UnhealthyForSensitiveGroups);
        assert_eq!(level(150), RiskLevel::UnhealthyForSensitiveGroups);
        assert_eq!(level(151), RiskLevel::Unhealthy);
        assert_eq!(level(200), RiskLevel::Unhealthy);
        assert_eq!(level(201), RiskLevel::VeryUnhealthy);
        assert_eq!(level(300), RiskLevel::VeryUnhealthy);
        assert_eq!(level(301), RiskLevel::Hazardous);
        assert_eq!(level(500), RiskLevel::Hazardous);
    }

    #[test]
    fn test_hazardous_recommendations() {
        let advice = advise(UsAqi::new(420).unwrap());
        assert_eq!(advice.risk_level, RiskLevel::Hazardous);
        assert_eq!(advice.recommendations[0], "Health emergency conditions");
        assert_eq!(advice.recommendations.len(), 4);
    }

    #[test]
    fn test_recommendations_keep_their_order() {
        let advice = advise(UsAqi::new(175).unwrap());
        assert_eq!(
            advice.recommendations,
            [
                "Wear N95 mask",
                "Avoid morning walks",
                "Keep windows closed",
                "Use air purifiers if available",
            ]
        );

        let advice = advise(UsAqi::new(20).unwrap());
        assert_eq!(
            advice.recommendations,
            ["Enjoy outdoor activities", "No health precautions needed"]
        );
    }

    #[test]
    fn test_risk_level_serializes_as_label() {
        let json = serde_json::to_string(&RiskLevel::UnhealthyForSensitiveGroups).unwrap();
        assert_eq!(json, "\"Unhealthy for Sensitive Groups\"");
        assert_eq!(RiskLevel::VeryUnhealthy.to_string(), "Very Unhealthy");
    }
}
