//! Cell border settings

use super::Color;
use serde::Serialize;

/// All borders of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Border {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagonal: Option<BorderEdge>,
}

impl Border {
    /// The same edge on all four sides
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            left: Some(edge),
            right: Some(edge),
            top: Some(edge),
            bottom: Some(edge),
            diagonal: None,
        }
    }
}

/// One border edge: a line style plus a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BorderEdge {
    pub style: BorderLineStyle,
    pub color: Color,
}

impl BorderEdge {
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderLineStyle {
    Thin,
    Medium,
    Thick,
    Dotted,
    Dashed,
    DashDot,
    DashDotDot,
    Hair,
    MediumDashed,
    MediumDashDot,
    SlantDashDot,
    Double,
}
