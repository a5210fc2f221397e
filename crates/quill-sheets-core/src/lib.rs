//! # quill-sheets-core
//!
//! Core data structures for the quill-sheets workbook builder.
//!
//! This crate provides the fundamental types used throughout quill-sheets:
//! - [`CellAddress`] and [`MergeRange`] - Cell addressing and merge ranges
//! - [`CellScalar`] and [`CellValue`] - Cell contents
//! - [`Style`] and [`StyleRegistry`] - Cell formatting and style deduplication
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets_core::{CellAddress, StyleRegistry, StyleRef, Style};
//!
//! let addr = CellAddress::parse("AB12").unwrap();
//! assert_eq!(addr.row, 12);
//! assert_eq!(addr.col, 28);
//!
//! let mut registry = StyleRegistry::new();
//! let bold = registry.register(Style::new().bold(true));
//! assert_eq!(registry.resolve(&StyleRef::from(bold)).unwrap(), bold);
//! ```

pub mod address;
pub mod error;
pub mod style;
pub mod value;

// Re-exports for convenience
pub use address::{CellAddress, MergeRange};
pub use error::{Error, Result};
pub use value::{CellEntry, CellScalar, CellValue};

// Re-export all style types for convenience
pub use style::{
    Alignment, Border, BorderEdge, BorderLineStyle, Color, Fill, Font, FontVerticalAlign,
    HorizontalAlignment, NumberFormat, PatternType, Protection, Style, StyleId, StyleRef,
    StyleRegistry, Underline, VerticalAlignment, DEFAULT_STYLE_NAME,
};

/// Maximum number of rows in a worksheet (format hard limit, 1-indexed)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (format hard limit, 1-indexed)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
