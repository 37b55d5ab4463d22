/// Test fixtures: representative HTML from the FWS gage detail page.
///
/// Trimmed to the two tables the parser reads. Page shape:
///
///   .streamDetail td[]   — icon cell, then label/value pairs, then notes
///                          (empty cells are ignored; &nbsp; cells still count)
///   #StreamElevationCumulativeGridView_DXMainTable tr[]
///     tr[0]              — header row
///     tr[1..]            — indent cell, timestamp, elevation with ' feet mark
///                          (newest first)
///
/// Gage 520 has a top of bank of 41.5 ft. Its three readings cover each
/// branch of the depth derivation: 43.12 (past bank), 41.50 (at bank),
/// 40.00 (within bank).

#[cfg(test)]
pub(crate) fn fixture_gage_520_html() -> &'static str {
    include_str!("../../tests/fixtures/gage_520.html")
}

/// Same gage with the label/value pairs shuffled inside the 18-cell window.
#[cfg(test)]
pub(crate) fn fixture_permuted_metadata_html() -> &'static str {
    r#"<html><body>
    <table class="streamDetail"><tr>
      <td><img src="/gage.png"></td>
      <td>Watershed</td><td>Brays Bayou</td>
      <td>Top of Bank (TOB)</td><td>41.5'</td>
      <td>Latitude</td><td>29.7057</td>
      <td></td>
      <td>Installed</td><td>9/26/2013</td>
      <td>Channel</td><td>D100-00-00</td>
      <td>Sensor Type</td><td>Radar</td>
      <td>Longitude</td><td>-95.3915</td>
      <td>Sensor ID</td><td>520</td>
      <td>Stream Bed</td><td>22.0'</td>
      <td>Notes</td><td>Installed</td><td>1/1/1990</td>
    </tr></table>
    <table id="StreamElevationCumulativeGridView_DXMainTable">
      <tr><td></td><td>Date / Time</td><td>Stream Elevation (ft)</td></tr>
    </table>
    </body></html>"#
}

/// Metadata without a Top of Bank row; readings still present.
#[cfg(test)]
pub(crate) fn fixture_missing_tob_html() -> &'static str {
    r#"<html><body>
    <table class="streamDetail"><tr>
      <td></td>
      <td>Sensor ID</td><td>1610</td>
      <td>Sensor Type</td><td>Bubbler</td>
    </tr></table>
    <table id="StreamElevationCumulativeGridView_DXMainTable">
      <tr><td></td><td>Date / Time</td><td>Stream Elevation (ft)</td></tr>
      <tr><td></td><td>08/27/2017 02:00 PM</td><td>12.25'</td></tr>
      <tr><td></td><td>08/27/2017 01:45 PM</td><td>-1.00'</td></tr>
    </table>
    </body></html>"#
}

/// Metadata present but the elevation grid was removed (markup change).
#[cfg(test)]
pub(crate) fn fixture_no_data_table_html() -> &'static str {
    r#"<html><body>
    <table class="streamDetail"><tr>
      <td></td><td>Sensor ID</td><td>520</td>
      <td>Top of Bank (TOB)</td><td>41.5'</td>
    </tr></table>
    <p>No data is available for the selected time period.</p>
    </body></html>"#
}

/// A data row whose elevation cell is not a number.
#[cfg(test)]
pub(crate) fn fixture_bad_elevation_html() -> &'static str {
    r#"<html><body>
    <table class="streamDetail"><tr>
      <td></td><td>Top of Bank (TOB)</td><td>41.5'</td>
    </tr></table>
    <table id="StreamElevationCumulativeGridView_DXMainTable">
      <tr><td></td><td>Date / Time</td><td>Stream Elevation (ft)</td></tr>
      <tr><td></td><td>09/02/2017 08:30 AM</td><td>N/A</td></tr>
    </table>
    </body></html>"#
}

/// A data row missing its elevation cell.
#[cfg(test)]
pub(crate) fn fixture_short_row_html() -> &'static str {
    r#"<html><body>
    <table id="StreamElevationCumulativeGridView_DXMainTable">
      <tr><td></td><td>Date / Time</td><td>Stream Elevation (ft)</td></tr>
      <tr><td></td><td>09/02/2017 08:30 AM</td></tr>
    </table>
    </body></html>"#
}

/// Top of bank value that cannot be read as feet.
#[cfg(test)]
pub(crate) fn fixture_bad_tob_html() -> &'static str {
    r#"<html><body>
    <table class="streamDetail"><tr>
      <td></td><td>Top of Bank (TOB)</td><td>unknown</td>
    </tr></table>
    </body></html>"#
}

/// Label in the last cell with nothing after it.
#[cfg(test)]
pub(crate) fn fixture_dangling_label_html() -> &'static str {
    r#"<html><body>
    <table class="streamDetail"><tr>
      <td></td><td>Sensor ID</td><td>88</td><td>Top of Bank (TOB)</td>
    </tr></table>
    </body></html>"#
}

/// Sensor ID with a non-breaking-space value cell, as the site renders an
/// unset field.
#[cfg(test)]
pub(crate) fn fixture_blank_value_cell_html() -> &'static str {
    r#"<html><body>
    <table class="streamDetail"><tr>
      <td></td>
      <td>Sensor ID</td><td>&nbsp;</td>
      <td>Sensor Type</td><td>Radar</td>
      <td>Installed</td><td>9/26/2013</td>
    </tr></table>
    </body></html>"#
}

/// Blank-but-nonempty cells push Top of Bank past the 18-cell window.
#[cfg(test)]
pub(crate) fn fixture_blank_cells_fill_window_html() -> &'static str {
    r#"<html><body>
    <table class="streamDetail"><tr>
      <td></td>
      <td>Sensor ID</td><td>520</td>
      <td> </td><td> </td><td> </td><td> </td>
      <td>&nbsp;</td><td>&nbsp;</td><td>&nbsp;</td><td>&nbsp;</td>
      <td> </td><td> </td><td> </td><td> </td>
      <td>&nbsp;</td><td>&nbsp;</td><td> </td><td> </td>
      <td>Top of Bank (TOB)</td><td>41.5'</td>
    </tr></table>
    </body></html>"#
}
