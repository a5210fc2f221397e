//! Chart legend configuration

use crate::types::{ChartError, LegendPositionSpec};
use serde::Serialize;

/// Chart legend
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Legend {
    /// Placement; `None` stays unset on the wire
    pub position: Option<LegendPositionSpec>,
    /// Show the legend key next to series labels
    pub show_legend_key: bool,
}

impl Legend {
    pub fn new<P: Into<LegendPositionSpec>>(position: P) -> Self {
        Self {
            position: Some(position.into()),
            show_legend_key: false,
        }
    }

    pub fn with_legend_key(mut self, show: bool) -> Self {
        self.show_legend_key = show;
        self
    }

    pub(crate) fn normalize(&self) -> Result<CanonicalLegend, ChartError> {
        Ok(CanonicalLegend {
            position: self
                .position
                .as_ref()
                .map(|p| p.canonical().map(str::to_string))
                .transpose()?,
            show_legend_key: self.show_legend_key,
        })
    }
}

/// Normalized legend in renderer form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalLegend {
    pub position: Option<String>,
    pub show_legend_key: bool,
}
