/// FWS gage detail page parser.
///
/// Reads the two tables the site renders for a stream elevation query:
/// the `streamDetail` sensor table (label/value cells) and the DevExpress
/// elevation grid. See `fixtures.rs` for annotated page samples.
///
/// Parsing is kept separate from fetching so everything here works on a
/// plain HTML string.

use scraper::{ElementRef, Html, Selector};

use crate::logging::{self, Component};
use crate::model::{GageError, GageReport, Reading, SensorMetadata};

const STREAM_DETAIL_SELECTOR: &str = ".streamDetail";
const DATA_TABLE_SELECTOR: &str = "#StreamElevationCumulativeGridView_DXMainTable";

/// Cells past this index in the sensor table belong to the notes field.
const MAX_DETAIL_CELLS: usize = 18;

/// Feet mark the site appends to elevations, e.g. `41.5'`.
const FEET_MARK: char = '\'';

// ---------------------------------------------------------------------------
// Sensor metadata
// ---------------------------------------------------------------------------

/// Sensor fields found so far. Anything not on the page stays `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialSensorMetadata {
    pub sensor_id: Option<String>,
    pub sensor_type: Option<String>,
    pub installed_date: Option<String>,
    pub top_of_bank_ft: Option<f64>,
}

impl PartialSensorMetadata {
    /// Fills unset string fields with empty strings.
    pub fn into_metadata(self) -> SensorMetadata {
        SensorMetadata {
            sensor_id: self.sensor_id.unwrap_or_default(),
            sensor_type: self.sensor_type.unwrap_or_default(),
            installed_date: self.installed_date.unwrap_or_default(),
            top_of_bank_ft: self.top_of_bank_ft,
        }
    }
}

type LabelSetter = fn(&mut PartialSensorMetadata, &str) -> Result<(), GageError>;

/// Sensor table labels and where their value cell goes.
const METADATA_LABELS: [(&str, LabelSetter); 4] = [
    ("Sensor ID", set_sensor_id),
    ("Sensor Type", set_sensor_type),
    ("Installed", set_installed_date),
    ("Top of Bank (TOB)", set_top_of_bank),
];

fn set_sensor_id(meta: &mut PartialSensorMetadata, value: &str) -> Result<(), GageError> {
    meta.sensor_id = Some(value.to_string());
    Ok(())
}

fn set_sensor_type(meta: &mut PartialSensorMetadata, value: &str) -> Result<(), GageError> {
    meta.sensor_type = Some(value.to_string());
    Ok(())
}

fn set_installed_date(meta: &mut PartialSensorMetadata, value: &str) -> Result<(), GageError> {
    meta.installed_date = Some(value.to_string());
    Ok(())
}

fn set_top_of_bank(meta: &mut PartialSensorMetadata, value: &str) -> Result<(), GageError> {
    meta.top_of_bank_ft = Some(parse_feet(value, "Top of Bank (TOB)")?);
    Ok(())
}

/// Applies the label table to one filtered cell list.
///
/// A label's value is the next cell. Labels can appear in any order; a
/// label in the final cell has no value and is ignored.
pub fn apply_metadata_cells(meta: &mut PartialSensorMetadata, cells: &[String]) -> Result<(), GageError> {
    for (i, cell) in cells.iter().enumerate() {
        let Some(&(label, setter)) = METADATA_LABELS.iter().find(|(label, _)| *label == cell.as_str()) else {
            continue;
        };
        match cells.get(i + 1) {
            Some(value) => setter(meta, value.as_str())?,
            None => logging::debug(
                Component::Parser,
                None,
                &format!("Label '{}' has no value cell", label),
            ),
        }
    }
    Ok(())
}

/// Parses the sensor metadata table(s) of a gage page.
///
/// # Errors
/// - `GageError::ParseError` — Top of Bank is present but not a number.
///
/// Missing labels are not errors; see `PartialSensorMetadata`.
pub fn parse_sensor_metadata(html: &str) -> Result<SensorMetadata, GageError> {
    let document = Html::parse_document(html);
    Ok(extract_sensor_metadata(&document)?.into_metadata())
}

fn extract_sensor_metadata(document: &Html) -> Result<PartialSensorMetadata, GageError> {
    let detail_sel = selector(STREAM_DETAIL_SELECTOR)?;
    let td_sel = selector("td")?;

    let mut meta = PartialSensorMetadata::default();
    for detail in document.select(&detail_sel) {
        let cells: Vec<String> = detail
            .select(&td_sel)
            .skip(1)
            .map(raw_text)
            .filter(|text| !text.is_empty())
            .take(MAX_DETAIL_CELLS)
            .map(|text| text.trim().to_string())
            .collect();
        apply_metadata_cells(&mut meta, &cells)?;
    }
    Ok(meta)
}

// ---------------------------------------------------------------------------
// Stream elevation grid
// ---------------------------------------------------------------------------

/// Parses the stream elevation grid into readings, oldest first.
///
/// `top_of_bank_ft` drives the depth derivation; when the page has none,
/// readings are derived against 0.0.
///
/// # Errors
/// - `GageError::ParseError` — grid missing, a row without timestamp and
///   elevation cells, or an elevation that is not a number.
pub fn parse_stream_elevation(html: &str, top_of_bank_ft: Option<f64>) -> Result<Vec<Reading>, GageError> {
    let document = Html::parse_document(html);
    extract_stream_elevation(&document, top_of_bank_ft)
}

fn extract_stream_elevation(document: &Html, top_of_bank_ft: Option<f64>) -> Result<Vec<Reading>, GageError> {
    let table_sel = selector(DATA_TABLE_SELECTOR)?;
    let tr_sel = selector("tr")?;
    let td_sel = selector("td")?;

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| GageError::ParseError(format!("Missing data table {}", DATA_TABLE_SELECTOR)))?;

    let top_of_bank = top_of_bank_ft.unwrap_or(0.0);
    let mut readings = Vec::new();

    // Row 0 is the column header
    for (row_idx, row) in table.select(&tr_sel).enumerate().skip(1) {
        let cells: Vec<String> = row.select(&td_sel).skip(1).map(cell_text).collect();

        let (timestamp, elevation_text) = match (cells.first(), cells.get(1)) {
            (Some(t), Some(e)) => (t, e),
            _ => {
                return Err(GageError::ParseError(format!(
                    "Row {} has {} data cells, expected timestamp and elevation",
                    row_idx,
                    cells.len()
                )));
            }
        };

        let elevation = parse_feet(elevation_text, "elevation")?;
        readings.push(Reading::from_elevation(timestamp, elevation, top_of_bank));
    }

    // The site lists newest first
    readings.reverse();
    Ok(readings)
}

// ---------------------------------------------------------------------------
// Whole page
// ---------------------------------------------------------------------------

/// Parses a gage detail page into a complete report.
pub fn parse_gage_page(html: &str) -> Result<GageReport, GageError> {
    let document = Html::parse_document(html);

    let sensor_metadata = extract_sensor_metadata(&document)?.into_metadata();
    if sensor_metadata.top_of_bank_ft.is_none() {
        logging::warn(
            Component::Parser,
            None,
            "No Top of Bank (TOB) on page; depth derived against 0.0 ft",
        );
    }

    let sensor_data = extract_stream_elevation(&document, sensor_metadata.top_of_bank_ft)?;

    Ok(GageReport {
        sensor_metadata,
        sensor_data,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn selector(css: &str) -> Result<Selector, GageError> {
    Selector::parse(css).map_err(|e| GageError::ParseError(format!("Bad selector '{}': {:?}", css, e)))
}

/// Cell text as rendered, whitespace and `&nbsp;` included.
fn raw_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    raw_text(cell).trim().to_string()
}

/// Parses `"41.5'"` as 41.5.
fn parse_feet(text: &str, what: &str) -> Result<f64, GageError> {
    let number = text.trim().trim_end_matches(FEET_MARK);
    number
        .parse::<f64>()
        .map_err(|e| GageError::ParseError(format!("Failed to parse {} '{}': {}", what, text, e)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
