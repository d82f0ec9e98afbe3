use super::UsAqi;

/// A PM2.5 concentration interval (µg/m³) mapped linearly onto an index interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub c_lo: f64,
    pub c_hi: f64,
    pub i_lo: u16,
    pub i_hi: u16,
}

impl Breakpoint {
    const fn new(c_lo: f64, c_hi: f64, i_lo: u16, i_hi: u16) -> Self {
        Self {
            c_lo,
            c_hi,
            i_lo,
            i_hi,
        }
    }

    /// Closed-interval containment. Values in the seam between two bands
    /// (e.g. 12.05) are contained by neither.
    pub fn contains(&self, pm25: f64) -> bool {
        self.c_lo <= pm25 && pm25 <= self.c_hi
    }

    fn interpolate(&self, pm25: f64) -> f64 {
        let (i_lo, i_hi) = (f64::from(self.i_lo), f64::from(self.i_hi));
        (i_hi - i_lo) / (self.c_hi - self.c_lo) * (pm25 - self.c_lo) + i_lo
    }
}

/// US EPA PM2.5 breakpoints, ascending.
pub const PM25_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(12.1, 35.4, 51, 100),
    Breakpoint::new(35.5, 55.4, 101, 150),
    Breakpoint::new(55.5, 150.4, 151, 200),
    Breakpoint::new(150.5, 250.4, 201, 300),
    Breakpoint::new(250.5, 500.4, 301, 500),
];

/// Convert a PM2.5 concentration in µg/m³ into a US AQI value.
///
/// Returns `None` when the concentration is outside every band: negative,
/// above 500.4, NaN, or inside a seam between two bands.
pub fn convert(pm25: f64) -> Option<UsAqi> {
    let band = PM25_BREAKPOINTS.iter().find(|b| b.contains(pm25))?;
    let value = band.interpolate(pm25).round_ties_even();
    UsAqi::new(value as u16)
}
