//! # quill-sheets-chart
//!
//! Chart configuration model for quill-sheets.
//!
//! A [`Chart`] is built from loosely-typed inputs (typed enums,
//! case-insensitive alias strings, or raw renderer codes) and normalized
//! into a [`CanonicalChart`] — the exact numeric/struct form the external
//! renderer consumes.

mod axis;
mod chart;
mod legend;
mod series;
mod types;

pub use axis::Axis;
pub use chart::{CanonicalChart, Chart, GraphicOptions};
pub use legend::{CanonicalLegend, Legend};
pub use series::{CanonicalLine, CanonicalMarker, CanonicalSeries, Line, Marker, Series};
pub use types::{
    CanonicalCode, CanonicalName, ChartError, ChartType, ChartTypeSpec, CodeSpec,
    DataLabelPosition, DataLabelPositionSpec, Font, LegendPosition, LegendPositionSpec, LineType,
    LineTypeSpec, MarkerSymbol, MarkerSymbolSpec, NameSpec, RichTextRun,
};
