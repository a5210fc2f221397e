//! Chart axis configuration

use crate::types::{Font, RichTextRun};
use serde::Serialize;

/// A chart axis
///
/// Axes carry no enum-like fields, so the built form is already canonical
/// and serializes directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Axis {
    /// Label font
    pub font: Option<Font>,
    /// Number format code for axis labels (e.g. "0.00%")
    pub num_fmt: Option<String>,
    /// Axis title runs
    pub title: Vec<RichTextRun>,
    pub major_grid_lines: bool,
    pub minor_grid_lines: bool,
    pub reverse_order: bool,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label font
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the number format code for axis labels
    pub fn with_num_fmt<S: Into<String>>(mut self, code: S) -> Self {
        self.num_fmt = Some(code.into());
        self
    }

    /// Add a title run
    pub fn with_title(mut self, run: RichTextRun) -> Self {
        self.title.push(run);
        self
    }

    /// Set explicit axis bounds
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.minimum = Some(min);
        self.maximum = Some(max);
        self
    }
}
