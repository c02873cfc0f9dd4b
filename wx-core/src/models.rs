//! Response shapes returned by the weather analysis backend.
//!
//! Every field the backend may omit is an `Option`; unknown fields are
//! ignored so the dashboard keeps working when the backend grows new keys.

use serde::Deserialize;

/// A temperature reading tied to the week it was recorded in.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct TemperatureReading {
    /// Temperature in degrees Celsius
    pub temp: f64,
    /// Week label as reported by the backend (e.g., "2024-W27")
    pub week: String,
}

/// Hottest and coldest weeks for a state.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct TemperatureExtremes {
    pub hottest: TemperatureReading,
    pub coldest: TemperatureReading,
}

/// A non-temperature metric reading (humidity in %, wind in km/h).
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct MetricReading {
    pub value: f64,
    pub week: String,
}

/// Most humid and windiest weeks for a state.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct OtherExtremes {
    pub most_humid: MetricReading,
    pub windiest: MetricReading,
}

/// Summary statistics for one state, as served by `GET /analysis/{state}`.
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub temperature_extremes: Option<TemperatureExtremes>,
    #[serde(default)]
    pub other_extremes: Option<OtherExtremes>,
    #[serde(default)]
    pub record_count: Option<u64>,
    /// Set instead of the statistics when the backend has nothing to report
    #[serde(default)]
    pub error: Option<String>,
}

impl Analysis {
    /// The backend error text, if one was sent and is non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }
}

/// Base64-encoded PNG charts for one state and month, as served by
/// `GET /charts/{state}/{month}`.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct ChartBundle {
    pub temp_chart: String,
    pub humidity_chart: String,
    pub wind_chart: String,
}
