/// fws_gage: Harris County Flood Warning System gage scraper.
///
/// # Module structure
///
/// ```text
/// fws_gage
/// ├── model       — shared data types (Span, GageReport, Reading, GageError, …)
/// ├── config      — optional scraper configuration (fws_gage.toml)
/// ├── logging     — component-tagged console/file logging
/// ├── ingest
/// │   ├── query   — gage detail URL construction
/// │   ├── fws     — gage detail HTML parsing + depth derivation
/// │   └── fixtures (test only) — representative gage pages
/// └── scraper     — GageScraper: fetch, parse, write JSON
/// ```

/// Public modules
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod scraper;

pub use crate::model::{GageError, GageReport, Reading, SensorMetadata, Span};
pub use crate::scraper::GageScraper;
