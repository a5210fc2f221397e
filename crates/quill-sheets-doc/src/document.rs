//! The canonical renderer document
//!
//! [`Workbook::serialize`] walks the model top-down and produces one
//! self-contained [`Document`]: per-sheet cell data keyed by address, the
//! resolved style table, file properties, protection, and the mode flag
//! selecting the renderer's streaming or non-streaming path.

use std::collections::BTreeMap;

use crate::workbook::Workbook;
use crate::worksheet::{EngineHint, GroupSpan, Worksheet};
use quill_sheets_chart::CanonicalChart;
use quill_sheets_core::{CellValue, Result, Style};
use serde::Serialize;

/// Which rendering path the document selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderMode {
    /// The renderer's streaming writer (the default)
    #[serde(rename = "streamWriter")]
    Streaming,
    /// The renderer's non-streaming writer, required when outline grouping
    /// must be written by the primary renderer itself
    #[serde(rename = "normalWriter")]
    NonStreaming,
}

/// One cell on the wire: address, value, resolved style index
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CellDocument {
    #[serde(rename = "Ref")]
    pub address: String,
    pub value: CellValue,
    pub style: u32,
}

/// Charts anchored at one cell, in stacking order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartAnchorDocument {
    pub cell: String,
    pub charts: Vec<CanonicalChart>,
}

/// Pre-allocation hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimension {
    pub rows: u32,
    pub cols: u16,
}

/// One worksheet on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SheetDocument {
    pub name: String,
    /// Cells in (row, col) order — deterministic across runs
    pub cells: Vec<CellDocument>,
    /// Merged ranges in canonical "A1:C2" form
    pub merge_cells: Vec<String>,
    pub row_heights: BTreeMap<u32, f64>,
    pub col_widths: BTreeMap<u16, f64>,
    pub grouped_rows: Vec<GroupSpan>,
    pub grouped_cols: Vec<GroupSpan>,
    pub auto_filters: Vec<String>,
    pub charts: Vec<ChartAnchorDocument>,
    pub pre_allocate: Option<Dimension>,
}

/// The complete renderer document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    /// Sheets in insertion order
    pub content: Vec<SheetDocument>,
    pub file_props: crate::props::FileProperties,
    /// Resolved style table; a cell's style index points in here
    pub styles: Vec<Style>,
    pub protection: Option<crate::props::WorkbookProtection>,
    pub engine: RenderMode,
}

impl Document {
    /// Grouping requests across all sheets, for the auxiliary second pass
    pub fn has_grouping(&self) -> bool {
        self.content
            .iter()
            .any(|s| !s.grouped_rows.is_empty() || !s.grouped_cols.is_empty())
    }

    /// Encode as the JSON payload handed to the renderer
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| quill_sheets_core::Error::other(format!("document encoding: {}", e)))
    }
}

impl Workbook {
    /// Serialize the workbook into the canonical renderer document
    ///
    /// Walks sheets in insertion order. Each sheet's pending streaming
    /// buffer is committed first — an un-flushed row must never silently
    /// vanish. Beyond that flush the model is not mutated; serializing
    /// twice yields the same document.
    pub fn serialize(&mut self) -> Result<Document> {
        for sheet in self.sheets_mut_slice() {
            sheet.flush_pending()?;
        }

        let mut content = Vec::with_capacity(self.sheet_count());
        let mut grouping = false;
        let mut any_auxiliary = false;

        for sheet in self.sheets() {
            grouping |= sheet.has_grouping();
            any_auxiliary |= sheet.engine_hint() == EngineHint::Auxiliary;
            content.push(sheet_document(sheet));
        }

        // The streaming writer cannot express outline grouping. When
        // grouping is requested and no sheet is routed through the
        // auxiliary library, the whole document takes the non-streaming
        // path; otherwise grouping is applied in a second pass over the
        // rendered bytes.
        let engine = if grouping && !any_auxiliary {
            RenderMode::NonStreaming
        } else {
            RenderMode::Streaming
        };

        let styles: Vec<Style> = self.styles().styles().map(|(_, s)| s.clone()).collect();

        log::debug!(
            "serialized workbook: {} sheet(s), {} style(s), engine {:?}",
            content.len(),
            styles.len(),
            engine
        );

        Ok(Document {
            content,
            file_props: self.file_props().clone(),
            styles,
            protection: self.protection().cloned(),
            engine,
        })
    }
}

fn sheet_document(sheet: &Worksheet) -> SheetDocument {
    SheetDocument {
        name: sheet.name().to_string(),
        cells: sheet
            .iter_cells()
            .map(|(addr, cell)| CellDocument {
                address: addr.to_a1(),
                value: cell.value.clone(),
                style: cell.style.index(),
            })
            .collect(),
        merge_cells: sheet.merges().iter().map(|m| m.to_a1()).collect(),
        row_heights: sheet.row_heights().clone(),
        col_widths: sheet.col_widths().clone(),
        grouped_rows: sheet.grouped_rows().to_vec(),
        grouped_cols: sheet.grouped_cols().to_vec(),
        auto_filters: sheet.auto_filters().to_vec(),
        charts: sheet
            .charts()
            .iter()
            .map(|anchor| ChartAnchorDocument {
                cell: anchor.cell.to_a1(),
                charts: anchor.charts.clone(),
            })
            .collect(),
        pre_allocate: sheet
            .dimension_hint()
            .map(|(rows, cols)| Dimension { rows, cols }),
    }
}
