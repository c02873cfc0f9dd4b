//! Image sources for the chart panel.

use crate::models::ChartBundle;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Wrap a base64 PNG payload as a `data:` URL usable as an `img` source.
pub fn png_data_url(payload: &str) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, payload)
}

/// The three chart `src` values. Empty strings mean "show nothing".
#[derive(Debug, Default, PartialEq, Clone)]
pub struct ChartImages {
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
}

impl ChartImages {
    pub fn from_bundle(bundle: &ChartBundle) -> Self {
        Self {
            temperature: png_data_url(&bundle.temp_chart),
            humidity: png_data_url(&bundle.humidity_chart),
            wind: png_data_url(&bundle.wind_chart),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.temperature.is_empty() && self.humidity.is_empty() && self.wind.is_empty()
    }
}
