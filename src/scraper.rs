/// Gage scraper: fetches a gage detail page and turns it into a report.
///
/// One blocking GET per query, no retries, no caching. Each call builds a
/// fresh `GageReport`; the scraper itself only holds the HTTP client and
/// the base endpoint.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::{DEFAULT_JSON_INDENT, HttpConfig};
use crate::ingest::fws::parse_gage_page;
use crate::ingest::query::QueryBuilder;
use crate::logging::{self, Component};
use crate::model::{GageError, GageQuery, GageReport};

pub struct GageScraper {
    client: reqwest::blocking::Client,
    queries: QueryBuilder,
}

impl GageScraper {
    /// Scraper for the public FWS site with default settings.
    pub fn new() -> Result<Self, GageError> {
        Self::from_config(&HttpConfig::default())
    }

    /// Builds the HTTP client from the `[http]` config section.
    ///
    /// Without `timeout_secs` the client has no request timeout at all.
    pub fn from_config(config: &HttpConfig) -> Result<Self, GageError> {
        let mut builder = reqwest::blocking::Client::builder().timeout(config.timeout());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| GageError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(GageScraper {
            client,
            queries: QueryBuilder::new(&config.base_url),
        })
    }

    pub fn query_builder(&self) -> &QueryBuilder {
        &self.queries
    }

    /// Fetches and parses one gage page.
    ///
    /// # Errors
    /// - `GageError::InvalidDuration` — nothing is fetched.
    /// - `GageError::Transport` / `GageError::HttpStatus` — request failed.
    /// - `GageError::ParseError` — page lacks the elevation grid or has
    ///   malformed values.
    pub fn query_gage(&self, gage_id: u32, reported_from: &str, duration: &str) -> Result<GageReport, GageError> {
        let result = self.fetch_and_parse(gage_id, reported_from, duration);
        if let Err(e) = &result {
            logging::log_gage_failure(gage_id, "query_gage", e);
        }
        result
    }

    fn fetch_and_parse(&self, gage_id: u32, reported_from: &str, duration: &str) -> Result<GageReport, GageError> {
        let query = GageQuery::new(gage_id, reported_from, duration)?;
        let url = self.queries.build_encoded_query(&query);
        logging::debug(Component::Scraper, Some(gage_id), &format!("Fetching: {}", url));

        let body = self.fetch(&url)?;
        let report = parse_gage_page(&body)?;

        logging::info(
            Component::Scraper,
            Some(gage_id),
            &format!(
                "{} readings over {} from {}",
                report.sensor_data.len(),
                query.span,
                query.reported_from
            ),
        );
        Ok(report)
    }

    fn fetch(&self, url: &str) -> Result<String, GageError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| GageError::Transport(format!("Request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(GageError::HttpStatus(response.status().as_u16()));
        }

        response
            .text()
            .map_err(|e| GageError::Transport(format!("Failed to read response body: {}", e)))
    }

    /// Queries a gage and writes the report to `path` as indented JSON,
    /// replacing any existing file. Returns the report that was written.
    pub fn download_gage(
        &self,
        path: &Path,
        gage_id: u32,
        reported_from: &str,
        duration: &str,
        indent: usize,
    ) -> Result<GageReport, GageError> {
        let report = self.query_gage(gage_id, reported_from, duration)?;
        if let Err(e) = write_report(path, &report, indent) {
            logging::log_gage_failure(gage_id, "download_gage", &e);
            return Err(e);
        }
        logging::info(
            Component::Storage,
            Some(gage_id),
            &format!("Wrote {}", path.display()),
        );
        Ok(report)
    }

    /// `download_gage` with the default 4-space indent.
    pub fn download_gage_default(
        &self,
        path: &Path,
        gage_id: u32,
        reported_from: &str,
        duration: &str,
    ) -> Result<GageReport, GageError> {
        self.download_gage(path, gage_id, reported_from, duration, DEFAULT_JSON_INDENT)
    }

    /// Street location lookup for a gage. Not available yet.
    pub fn lookup_gage(&self, gage_id: u32) -> Result<String, GageError> {
        let err = GageError::Unsupported(format!("lookup_gage({})", gage_id));
        logging::log_gage_failure(gage_id, "lookup_gage", &err);
        Err(err)
    }
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

/// Serializes a report as JSON indented with `indent` spaces.
pub fn report_to_json(report: &GageReport, indent: usize) -> Result<String, GageError> {
    let indent_str = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent_str.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report
        .serialize(&mut serializer)
        .map_err(|e| GageError::Storage(format!("Failed to serialize report: {}", e)))?;
    String::from_utf8(buf).map_err(|e| GageError::Storage(format!("Report is not UTF-8: {}", e)))
}

/// Writes a report to `path`, overwriting it.
///
/// No cleanup is attempted if the write fails partway.
pub fn write_report(path: &Path, report: &GageReport, indent: usize) -> Result<(), GageError> {
    let json = report_to_json(report, indent)?;
    fs::write(path, json).map_err(|e| GageError::Storage(format!("Failed to write {}: {}", path.display(), e)))
}
