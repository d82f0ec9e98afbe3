pub mod advice;
pub mod breakpoints;
pub mod openweather_index;

use serde::Serialize;

pub use advice::{HealthAdvice, RiskLevel, advise};
pub use breakpoints::convert;
pub use openweather_index::{IndexInfo, interpret_index};

/// Upper end of the US AQI scale.
pub const MAX_US_AQI: u16 = 500;

/// A US Air Quality Index value on the 0–500 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UsAqi(u16);

impl UsAqi {
    pub fn new(value: u16) -> Option<Self> {
        (value <= MAX_US_AQI).then_some(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for UsAqi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
