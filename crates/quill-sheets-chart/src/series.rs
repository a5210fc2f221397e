//! Data series types

use crate::types::{
    ChartError, DataLabelPositionSpec, LineTypeSpec, MarkerSymbolSpec,
};
use serde::Serialize;

/// One data series of a chart
///
/// `name`, `categories` and `values` are sheet references in the renderer's
/// formula syntax (e.g. `"Sheet1!$B$2:$C$2"`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub name: String,
    pub categories: String,
    pub values: String,
    pub line: Option<Line>,
    pub marker: Option<Marker>,
    pub data_label_position: Option<DataLabelPositionSpec>,
}

impl Series {
    /// Create a series from its three sheet references
    pub fn new<S1, S2, S3>(name: S1, categories: S2, values: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            name: name.into(),
            categories: categories.into(),
            values: values.into(),
            line: None,
            marker: None,
            data_label_position: None,
        }
    }

    /// Set the series outline
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the series marker
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Set the data label position
    pub fn with_data_label_position<P: Into<DataLabelPositionSpec>>(mut self, pos: P) -> Self {
        self.data_label_position = Some(pos.into());
        self
    }

    pub(crate) fn normalize(&self) -> Result<CanonicalSeries, ChartError> {
        Ok(CanonicalSeries {
            name: self.name.clone(),
            categories: self.categories.clone(),
            values: self.values.clone(),
            line: CanonicalLine {
                kind: self
                    .line
                    .as_ref()
                    .and_then(|l| l.kind.as_ref())
                    .map(|k| k.canonical())
                    .transpose()?,
                width: self.line.as_ref().and_then(|l| l.width),
            },
            marker: CanonicalMarker {
                symbol: self
                    .marker
                    .as_ref()
                    .and_then(|m| m.symbol.as_ref())
                    .map(|s| s.canonical().map(str::to_string))
                    .transpose()?,
                size: self.marker.as_ref().and_then(|m| m.size),
            },
            data_label_position: self
                .data_label_position
                .as_ref()
                .map(|p| p.canonical())
                .transpose()?,
        })
    }
}

/// Series outline configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Line type; `None` stays unset on the wire, distinct from code 0
    pub kind: Option<LineTypeSpec>,
    /// Width in points
    pub width: Option<f64>,
}

impl Line {
    pub fn new<K: Into<LineTypeSpec>>(kind: K) -> Self {
        Self {
            kind: Some(kind.into()),
            width: None,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

/// Series marker configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Marker {
    /// Marker symbol; `None` stays unset on the wire, distinct from "none"
    pub symbol: Option<MarkerSymbolSpec>,
    /// Size in points
    pub size: Option<u8>,
}

impl Marker {
    pub fn new<S: Into<MarkerSymbolSpec>>(symbol: S) -> Self {
        Self {
            symbol: Some(symbol.into()),
            size: None,
        }
    }

    pub fn with_size(mut self, size: u8) -> Self {
        self.size = Some(size);
        self
    }
}

/// Normalized series in renderer form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalSeries {
    pub name: String,
    pub categories: String,
    pub values: String,
    pub line: CanonicalLine,
    pub marker: CanonicalMarker,
    pub data_label_position: Option<u8>,
}

/// Normalized series outline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalLine {
    #[serde(rename = "Type")]
    pub kind: Option<u8>,
    pub width: Option<f64>,
}

/// Normalized series marker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalMarker {
    pub symbol: Option<String>,
    pub size: Option<u8>,
}
