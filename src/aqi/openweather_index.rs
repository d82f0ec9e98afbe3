use serde::Serialize;

/// Human-readable reading of OpenWeather's own 1–5 air quality index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexInfo {
    pub category: &'static str,
    pub meaning: &'static str,
}

pub fn interpret_index(index: u8) -> IndexInfo {
    let (category, meaning) = match index {
        1 => ("Good", "Clean air"),
        2 => ("Fair", "Acceptable"),
        3 => ("Moderate", "Sensitive groups affected"),
        4 => ("Poor", "Health risk"),
        5 => ("Very Poor", "Emergency"),
        _ => ("Unknown", "Data not available"),
    };
    IndexInfo { category, meaning }
}
