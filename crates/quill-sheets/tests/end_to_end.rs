//! End-to-end tests: build a workbook, serialize it, render it through a
//! stub renderer, and verify the canonical document and output bytes.

use quill_sheets::prelude::*;
use quill_sheets::{Document, GroupingEditor, GroupingRequest, Line, Marker, RenderError};

/// Stub renderer: emits the document's JSON encoding as the "binary"
struct StubRenderer;

impl Renderer for StubRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        document
            .to_json()
            .map_err(|e| RenderError::Payload(e.to_string()))
    }
}

/// Stub grouping editor: records how many requests it applied
struct StubEditor;

impl GroupingEditor for StubEditor {
    fn apply(
        &self,
        rendered: &[u8],
        requests: &[GroupingRequest],
    ) -> Result<Vec<u8>, RenderError> {
        let mut out = format!("applied:{};", requests.len()).into_bytes();
        out.extend_from_slice(rendered);
        Ok(out)
    }
}

fn addr(s: &str) -> CellAddress {
    CellAddress::parse(s).unwrap()
}

/// A small but complete workbook: one cell, one merge, one bar chart
#[test]
fn test_end_to_end_document() {
    let mut wb = Workbook::new();

    let sheet = wb.sheet_mut("Sheet1").unwrap();
    sheet.set_cell(addr("A1"), "hello");
    sheet.merge(MergeRange::parse("A2:B3").unwrap()).unwrap();
    sheet
        .add_chart(
            addr("D1"),
            &Chart::new("bar").with_series(Series::new(
                "Sheet1!$A$1",
                "Sheet1!$A$2:$A$3",
                "Sheet1!$B$2:$B$3",
            )),
        )
        .unwrap();

    let doc = wb.serialize().unwrap();
    assert_eq!(doc.content.len(), 1);

    let sheet_doc = &doc.content[0];
    assert_eq!(sheet_doc.cells.len(), 1);
    assert_eq!(sheet_doc.cells[0].address, "A1");
    assert_eq!(sheet_doc.merge_cells, vec!["A2:B3".to_string()]);
    assert_eq!(sheet_doc.charts.len(), 1);
    assert_eq!(sheet_doc.charts[0].charts[0].kind, ChartType::Bar as u8);

    let bytes = render_workbook(&mut wb, &StubRenderer, None).unwrap();
    assert!(!bytes.is_empty());
}

/// All three construction styles converge on the same cell grid
#[test]
fn test_input_styles_converge() {
    // Random access
    let mut random = Workbook::new();
    {
        let sheet = random.sheet_mut("Sheet1").unwrap();
        sheet.set_cell(addr("A1"), "x");
        sheet.set_cell(addr("B1"), 1i64);
        sheet.set_cell(addr("A2"), "y");
        sheet.set_cell(addr("B2"), 2i64);
    }

    // Streaming append
    let mut streamed = Workbook::new();
    streamed.row_append("x").unwrap();
    streamed.row_append(1i64).unwrap();
    streamed.create_row().unwrap();
    streamed.row_append("y").unwrap();
    streamed.row_append(2i64).unwrap();
    streamed.create_row().unwrap();

    // Bulk load
    let mut bulk = Workbook::new();
    let loaded = Worksheet::from_plain_data(
        "Loaded",
        vec![
            vec![CellValue::from("x"), CellValue::from(1i64)],
            vec![CellValue::from("y"), CellValue::from(2i64)],
        ],
    )
    .unwrap();
    bulk.add_worksheet(loaded).unwrap();

    let random_cells = random.serialize().unwrap().content[0].cells.clone();
    let streamed_cells = streamed.serialize().unwrap().content[0].cells.clone();
    let bulk_cells = bulk.serialize().unwrap().content[1].cells.clone();

    assert_eq!(random_cells, streamed_cells);
    assert_eq!(streamed_cells, bulk_cells);
}

/// A streaming style typo fails before any row is committed and leaves the
/// buffer usable
#[test]
fn test_streaming_style_typo_fails_fast() {
    let mut wb = Workbook::new();
    wb.add_style("green_fill_style", Style::new().fill_color(Color::GREEN))
        .unwrap();

    wb.row_append_styled("ok", "green_fill_style").unwrap();
    let err = wb.row_append_styled("bad", "green_fill_stylo");
    assert!(matches!(err, Err(Error::UnknownStyle(_))));

    // The pending buffer survives and commits cleanly
    wb.row_append_styled("also ok", "green_fill_style").unwrap();
    wb.create_row().unwrap();

    let doc = wb.serialize().unwrap();
    let refs: Vec<_> = doc.content[0]
        .cells
        .iter()
        .map(|c| c.address.as_str())
        .collect();
    assert_eq!(refs, ["A1", "B1"]);
}

/// Grouping with no auxiliary sheet forces the non-streaming render path
#[test]
fn test_grouping_forces_non_streaming_mode() {
    let mut wb = Workbook::new();
    wb.group_rows("Sheet1", 2, 5, 1, false).unwrap();

    let doc = wb.serialize().unwrap();
    assert_eq!(doc.engine, RenderMode::NonStreaming);

    // No second pass runs on this path
    let bytes = render_workbook(&mut wb, &StubRenderer, Some(&StubEditor)).unwrap();
    assert!(!bytes.starts_with(b"applied:"));
}

/// Grouping on an auxiliary-built sheet keeps streaming and runs the
/// second pass over the rendered bytes
#[test]
fn test_grouping_fallback_second_pass() {
    let mut wb = Workbook::new();
    wb.group_rows("Sheet1", 2, 5, 1, false).unwrap();
    wb.group_cols("Sheet1", 1, 2, 1, false).unwrap();
    wb.set_engine_hint("Sheet1", EngineHint::Auxiliary).unwrap();

    let bytes = render_workbook(&mut wb, &StubRenderer, Some(&StubEditor)).unwrap();
    assert!(bytes.starts_with(b"applied:2;"));

    // The base document under the marker still selected the streaming path
    let json: serde_json::Value =
        serde_json::from_slice(&bytes[b"applied:2;".len()..]).unwrap();
    assert_eq!(json["Engine"], "streamWriter");
}

/// Chart enum inputs, case-varied aliases and raw codes agree end to end,
/// and explicit unset sub-fields survive as null
#[test]
fn test_chart_normalization_through_the_wire() {
    let mut wb = Workbook::new();
    let series = Series::new("Sheet1!$A$2", "Sheet1!$B$2:$C$2", "Sheet1!$B$3:$C$3");

    let sheet = wb.sheet_mut("Sheet1").unwrap();
    sheet
        .add_charts(
            addr("C1"),
            &[
                Chart::new(ChartType::Col).with_series(series.clone()),
                Chart::new("cOL").with_series(series.clone()),
                Chart::new(21u8).with_series(
                    series
                        .clone()
                        .with_marker(Marker::default())
                        .with_line(Line::default()),
                ),
            ],
        )
        .unwrap();

    let doc = wb.serialize().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&doc.to_json().unwrap()).unwrap();
    let charts = &json["Content"][0]["Charts"][0]["Charts"];

    assert_eq!(charts[0]["Type"], 21);
    assert_eq!(charts[1]["Type"], 21);
    assert_eq!(charts[2]["Type"], 21);

    // Unset marker/line sub-fields are null, not 0 and not "none"
    assert_eq!(charts[2]["Series"][0]["Marker"]["Symbol"], serde_json::Value::Null);
    assert_eq!(charts[2]["Series"][0]["Line"]["Type"], serde_json::Value::Null);
}

/// Two workbooks in one process never share style identifiers
#[test]
fn test_style_registries_are_isolated() {
    let mut first = Workbook::new();
    first.add_style("a", Style::new().bold(true)).unwrap();
    first.add_style("b", Style::new().italic(true)).unwrap();

    let mut second = Workbook::new();
    let id = second
        .add_style("only", Style::new().font_size(20.0))
        .unwrap();

    assert_eq!(id.index(), 1);
    assert!(second.styles().lookup("a").is_none());
    assert_eq!(first.serialize().unwrap().styles.len(), 3);
    assert_eq!(second.serialize().unwrap().styles.len(), 2);
}

/// Save writes the rendered bytes verbatim to the destination path
#[test]
fn test_save_writes_rendered_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let mut wb = Workbook::new();
    wb.sheet_mut("Sheet1").unwrap().set_cell(addr("A1"), "hello");
    wb.save(&StubRenderer, &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(!written.is_empty());
    let json: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(json["Content"][0]["Cells"][0]["Value"], "hello");
}

/// File-property validation happens at the call, not at serialize time
#[test]
fn test_file_props_and_protection_end_to_end() {
    let mut wb = Workbook::new();
    wb.set_file_props("Creator", "integration-test").unwrap();
    assert!(wb.set_file_props("NotAKey", "x").is_err());
    wb.protect_workbook("SHA-512", "secret", true, false).unwrap();

    let doc = wb.serialize().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&doc.to_json().unwrap()).unwrap();
    assert_eq!(json["FileProps"]["Creator"], "integration-test");
    assert_eq!(json["Protection"]["Algorithm"], "SHA-512");
}
