/// Core data types for the FWS gage scraper.
///
/// This module defines the shared domain model imported by all other modules:
/// the report shape written to JSON, the span keywords the site accepts,
/// and the error type. It performs no I/O.

use serde::{Deserialize, Serialize};

/// Unit string attached to every elevation and depth value.
pub const UNITS_FEET: &str = "ft";

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Lookback durations accepted by the FWS gage detail page.
///
/// The site rejects anything outside this set, so it is modeled as a closed
/// enum with a single parse function rather than free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    OneHour,
    ThreeHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
    TwoDays,
    SevenDays,
    OneMonth,
    OneYear,
}

impl Span {
    pub const ALL: [Span; 9] = [
        Span::OneHour,
        Span::ThreeHours,
        Span::SixHours,
        Span::TwelveHours,
        Span::TwentyFourHours,
        Span::TwoDays,
        Span::SevenDays,
        Span::OneMonth,
        Span::OneYear,
    ];

    /// Keyword as the site expects it in the `span=` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Span::OneHour => "1 hour",
            Span::ThreeHours => "3 hours",
            Span::SixHours => "6 hours",
            Span::TwelveHours => "12 hours",
            Span::TwentyFourHours => "24 hours",
            Span::TwoDays => "2 days",
            Span::SevenDays => "7 days",
            Span::OneMonth => "1 month",
            Span::OneYear => "1 year",
        }
    }

    /// Case-insensitive parse of a duration keyword such as `"6 Hours"`.
    pub fn parse(keyword: &str) -> Result<Span, GageError> {
        let lowered = keyword.to_lowercase();
        Span::ALL
            .iter()
            .copied()
            .find(|span| span.as_str() == lowered)
            .ok_or_else(|| GageError::InvalidDuration(keyword.to_string()))
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request against the gage detail page. Built per call, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GageQuery {
    pub gage_id: u32,
    pub reported_from: String, // "MM/DD/YYYY hh:mm:ss AM", site local time
    pub span: Span,
}

impl GageQuery {
    pub fn new(gage_id: u32, reported_from: &str, duration: &str) -> Result<Self, GageError> {
        Ok(GageQuery {
            gage_id,
            reported_from: reported_from.to_string(),
            span: Span::parse(duration)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Sensor details from the `streamDetail` table of a gage page.
///
/// Labels missing from the page leave the string fields empty and
/// `top_of_bank_ft` unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorMetadata {
    pub sensor_id: String,
    pub sensor_type: String,
    pub installed_date: String,
    pub top_of_bank_ft: Option<f64>,
}

/// A value with its unit, e.g. `{ "value": 41.2, "units": "ft" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub units: String,
}

impl Measurement {
    pub fn feet(value: f64) -> Self {
        Measurement {
            value,
            units: UNITS_FEET.to_string(),
        }
    }
}

/// One stream elevation reading with its derived bank depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub timestamp: String,
    pub elevation: Measurement,
    pub depth: Measurement,
    pub above_bank: bool,
}

impl Reading {
    /// Builds a reading and derives depth/above-bank from the top of bank.
    ///
    /// Elevation exactly at top of bank counts as above bank with depth 0.
    pub fn from_elevation(timestamp: &str, elevation_ft: f64, top_of_bank_ft: f64) -> Self {
        let (depth_ft, above_bank) = derive_depth(top_of_bank_ft, elevation_ft);
        Reading {
            timestamp: timestamp.to_string(),
            elevation: Measurement::feet(elevation_ft),
            depth: Measurement::feet(depth_ft),
            above_bank,
        }
    }
}

/// Returns `(depth_ft, above_bank)` for an elevation against top of bank.
pub fn derive_depth(top_of_bank_ft: f64, elevation_ft: f64) -> (f64, bool) {
    let depth_raw = top_of_bank_ft - elevation_ft;
    if depth_raw > 0.0 {
        (0.0, false)
    } else {
        (depth_raw.abs(), true)
    }
}

/// Full result of one gage query, as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GageReport {
    #[serde(rename = "sensorMetaData")]
    pub sensor_metadata: SensorMetadata,
    #[serde(rename = "sensorData")]
    pub sensor_data: Vec<Reading>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when querying, parsing or saving gage data.
#[derive(Debug, PartialEq)]
pub enum GageError {
    /// The duration keyword is not one of the nine the site accepts.
    InvalidDuration(String),
    /// The request could not be sent or the body could not be read.
    Transport(String),
    /// Non-2xx HTTP response from the FWS site.
    HttpStatus(u16),
    /// The page did not have the expected tables or values.
    ParseError(String),
    /// The report could not be serialized or written.
    Storage(String),
    /// The operation exists in the API but is not available.
    Unsupported(String),
    /// The configuration file could not be read or parsed.
    Config(String),
}

impl std::fmt::Display for GageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GageError::InvalidDuration(d) => write!(f, "Not a valid duration length: '{}'", d),
            GageError::Transport(msg) => write!(f, "Transport error: {}", msg),
            GageError::HttpStatus(code) => write!(f, "HTTP error: {}", code),
            GageError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GageError::Storage(msg) => write!(f, "Storage error: {}", msg),
            GageError::Unsupported(op) => write!(f, "Unsupported operation: {}", op),
            GageError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_parse_is_case_insensitive() {
        assert_eq!(Span::parse("6 Hours"), Ok(Span::SixHours));
        assert_eq!(Span::parse("1 YEAR"), Ok(Span::OneYear));
        assert_eq!(Span::parse("2 days"), Ok(Span::TwoDays));
    }

    #[test]
    fn test_span_parse_rejects_unknown_keywords() {
        for bad in ["5 hours", "", "6hours", " 6 hours", "1 week"] {
            assert!(
                matches!(Span::parse(bad), Err(GageError::InvalidDuration(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_span_keywords_are_lowercase() {
        for span in Span::ALL {
            assert_eq!(span.as_str(), span.as_str().to_lowercase());
            assert_eq!(Span::parse(span.as_str()), Ok(span));
        }
    }

    #[test]
    fn test_depth_within_bank() {
        // Elevation under top of bank: channel still holding the water
        let r = Reading::from_elevation("09/02/2017 07:31 AM", 7.5, 10.0);
        assert_eq!(r.depth.value, 0.0);
        assert!(!r.above_bank);
    }

    #[test]
    fn test_depth_at_bank_counts_as_above() {
        let r = Reading::from_elevation("09/02/2017 07:31 AM", 10.0, 10.0);
        assert_eq!(r.depth.value, 0.0);
        assert!(r.above_bank, "elevation equal to top of bank is flagged above bank");
    }

    #[test]
    fn test_depth_past_bank() {
        let r = Reading::from_elevation("09/02/2017 07:31 AM", 12.0, 10.0);
        assert!((r.depth.value - 2.0).abs() < 1e-9);
        assert!(r.above_bank);
        assert_eq!(r.depth.units, "ft");
        assert_eq!(r.elevation.units, "ft");
    }

    #[test]
    fn test_derive_depth_is_top_of_bank_minus_elevation() {
        assert_eq!(derive_depth(41.5, 40.0), (0.0, false));
        assert_eq!(derive_depth(41.5, 41.5), (0.0, true));
        let (depth, above) = derive_depth(41.5, 43.0);
        assert!((depth - 1.5).abs() < 1e-9);
        assert!(above);
    }

    #[test]
    fn test_report_json_keys() {
        let report = GageReport {
            sensor_metadata: SensorMetadata {
                sensor_id: "520".to_string(),
                sensor_type: "Radar".to_string(),
                installed_date: "1/1/2010".to_string(),
                top_of_bank_ft: Some(10.0),
            },
            sensor_data: vec![Reading::from_elevation("t", 12.0, 10.0)],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("sensorMetaData").is_some());
        assert_eq!(value["sensorMetaData"]["topOfBankFt"], 10.0);
        assert_eq!(value["sensorMetaData"]["installedDate"], "1/1/2010");
        assert_eq!(value["sensorData"][0]["aboveBank"], true);
        assert_eq!(value["sensorData"][0]["depth"]["units"], "ft");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(GageError::HttpStatus(503).to_string(), "HTTP error: 503");
        assert!(GageError::InvalidDuration("5 hours".into()).to_string().contains("5 hours"));
    }
}
