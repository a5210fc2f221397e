//! Chart definition and normalization

use crate::axis::Axis;
use crate::legend::{CanonicalLegend, Legend};
use crate::series::{CanonicalSeries, Series};
use crate::types::{ChartError, ChartTypeSpec, RichTextRun};
use serde::Serialize;

/// A chart configuration under construction
///
/// Enum-like fields accept typed constants, case-insensitive alias strings,
/// or raw renderer codes; [`Chart::normalize`] collapses everything into the
/// canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartTypeSpec,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
    pub format: Option<GraphicOptions>,
    pub title: Vec<RichTextRun>,
}

impl Chart {
    /// Create a chart of the given type
    pub fn new<K: Into<ChartTypeSpec>>(kind: K) -> Self {
        Self {
            kind: kind.into(),
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            legend: None,
            format: None,
            title: Vec::new(),
        }
    }

    /// Add a data series
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Set the category (X) axis
    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = axis;
        self
    }

    /// Set the value (Y) axis
    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = axis;
        self
    }

    /// Set the legend
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Set graphic placement options
    pub fn with_format(mut self, format: GraphicOptions) -> Self {
        self.format = Some(format);
        self
    }

    /// Add a title run
    pub fn with_title(mut self, run: RichTextRun) -> Self {
        self.title.push(run);
        self
    }

    /// Collapse every enum-like field into the renderer's canonical form
    ///
    /// Alias resolution failures surface here; raw numeric codes pass
    /// through unvalidated.
    pub fn normalize(&self) -> Result<CanonicalChart, ChartError> {
        Ok(CanonicalChart {
            kind: self.kind.canonical()?,
            series: self
                .series
                .iter()
                .map(Series::normalize)
                .collect::<Result<_, _>>()?,
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
            legend: self.legend.as_ref().map(Legend::normalize).transpose()?,
            format: self.format.clone(),
            title: self.title.clone(),
        })
    }
}

/// Graphic placement options for an anchored chart
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GraphicOptions {
    pub alt_text: Option<String>,
    pub print_object: Option<bool>,
    pub locked: Option<bool>,
    pub lock_aspect_ratio: Option<bool>,
    pub auto_fit: Option<bool>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
}

/// Fully normalized chart in renderer form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalChart {
    #[serde(rename = "Type")]
    pub kind: u8,
    pub series: Vec<CanonicalSeries>,
    #[serde(rename = "XAxis")]
    pub x_axis: Axis,
    #[serde(rename = "YAxis")]
    pub y_axis: Axis,
    pub legend: Option<CanonicalLegend>,
    pub format: Option<GraphicOptions>,
    pub title: Vec<RichTextRun>,
}
