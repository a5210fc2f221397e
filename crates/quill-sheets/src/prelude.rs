//! Convenience prelude
//!
//! ```rust
//! use quill_sheets::prelude::*;
//! ```

pub use crate::{
    render_workbook, CellAddress, CellValue, Chart, ChartType, Color, EngineHint, Error, Legend,
    MergeRange, RenderMode, Renderer, Series, Style, StyleRef, Workbook, WorkbookExt, Worksheet,
};
