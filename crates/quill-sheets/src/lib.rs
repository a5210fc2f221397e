//! # quill-sheets
//!
//! Build spreadsheet workbooks in memory — sheets, cells, styles, merges,
//! grouping, charts — and serialize them into a canonical document that an
//! external native renderer turns into the final binary file.
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets::prelude::*;
//!
//! let mut wb = Workbook::new();
//! wb.add_style("header", Style::new().bold(true)).unwrap();
//!
//! // Streaming rows into the active sheet
//! wb.row_append_styled("Name", "header").unwrap();
//! wb.row_append_styled("Total", "header").unwrap();
//! wb.create_row().unwrap();
//!
//! // Random-access cells
//! let a3 = CellAddress::parse("A3").unwrap();
//! wb.sheet_mut("Sheet1").unwrap().set_cell(a3, "widgets");
//!
//! let doc = wb.serialize().unwrap();
//! assert_eq!(doc.content.len(), 1);
//! ```

pub mod prelude;

// Re-export core types
pub use quill_sheets_core::{
    Alignment, Border, BorderEdge, BorderLineStyle, CellAddress, CellEntry, CellScalar, CellValue,
    Color, Error, Fill, Font, FontVerticalAlign, HorizontalAlignment, MergeRange, NumberFormat,
    PatternType, Protection, Result, Style, StyleId, StyleRef, StyleRegistry, Underline,
    VerticalAlignment, DEFAULT_STYLE_NAME, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export chart types (the chart crate's own Font is aliased to avoid
// clashing with the style Font)
pub use quill_sheets_chart::{
    Axis, CanonicalChart, Chart, ChartError, ChartType, ChartTypeSpec, DataLabelPosition,
    Font as ChartFont, GraphicOptions, Legend, LegendPosition, Line, LineType, Marker,
    MarkerSymbol, RichTextRun, Series,
};

// Re-export document types
pub use quill_sheets_doc::{
    Cell, CellDocument, ChartAnchor, ColumnRef, Dimension, Document, EngineHint, FileProperties,
    GroupSpan, RenderMode, SheetDocument, Workbook, WorkbookProtection, Worksheet,
    PROTECTION_ALGORITHMS,
};

// Re-export the renderer boundary
pub use quill_sheets_render::{
    render_workbook, ExportFn, FreeFn, GroupDimension, GroupingEditor, GroupingRequest,
    NativeRenderer, RenderError, Renderer,
};

use std::path::Path;

/// Extension trait adding file output to [`Workbook`]
pub trait WorkbookExt {
    /// Render through `renderer` and write the bytes verbatim to `path`
    fn save<P: AsRef<Path>, R: Renderer>(&mut self, renderer: &R, path: P) -> Result<()>;

    /// Like [`WorkbookExt::save`], with the auxiliary grouping editor
    /// available for the two-pass fallback
    fn save_with_fallback<P: AsRef<Path>, R: Renderer>(
        &mut self,
        renderer: &R,
        editor: &dyn GroupingEditor,
        path: P,
    ) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn save<P: AsRef<Path>, R: Renderer>(&mut self, renderer: &R, path: P) -> Result<()> {
        let bytes = render_workbook(self, renderer, None)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn save_with_fallback<P: AsRef<Path>, R: Renderer>(
        &mut self,
        renderer: &R,
        editor: &dyn GroupingEditor,
        path: P,
    ) -> Result<()> {
        let bytes = render_workbook(self, renderer, Some(editor))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
