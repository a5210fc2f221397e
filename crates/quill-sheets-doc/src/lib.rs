//! # quill-sheets-doc
//!
//! The workbook document model: worksheets, the workbook that owns them,
//! file properties and protection, and serialization into the canonical
//! document consumed by the external renderer.
//!
//! Construction is incremental and single-threaded: cells flow into
//! worksheets (random access, streaming append, or bulk load), worksheets
//! into the workbook, and [`Workbook::serialize`] walks the whole model
//! top-down to produce one self-contained [`Document`].
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets_doc::Workbook;
//! use quill_sheets_core::CellAddress;
//!
//! let mut wb = Workbook::new();
//! wb.sheet_mut("Sheet1")
//!     .unwrap()
//!     .set_cell(CellAddress::parse("A1").unwrap(), "hello");
//!
//! let doc = wb.serialize().unwrap();
//! assert_eq!(doc.content[0].cells.len(), 1);
//! ```

pub mod document;
pub mod props;
pub mod workbook;
pub mod worksheet;

pub use document::{
    CellDocument, ChartAnchorDocument, Dimension, Document, RenderMode, SheetDocument,
};
pub use props::{FileProperties, WorkbookProtection, PROTECTION_ALGORITHMS};
pub use workbook::Workbook;
pub use worksheet::{Cell, ChartAnchor, ColumnRef, EngineHint, GroupSpan, Worksheet};
