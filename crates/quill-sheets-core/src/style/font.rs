//! Font settings

use super::Color;
use serde::Serialize;

/// Font settings for a cell style
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Font {
    /// Font family name
    pub name: String,
    /// Size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vert_align: Option<FontVerticalAlign>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: "Calibri".into(),
            size: 11.0,
            bold: false,
            italic: false,
            strike: false,
            underline: None,
            color: Color::BLACK,
            vert_align: None,
        }
    }
}

impl Eq for Font {}

impl std::hash::Hash for Font {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.strike.hash(state);
        self.underline.hash(state);
        self.color.hash(state);
        self.vert_align.hash(state);
    }
}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Underline {
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
}

/// Vertical alignment of text within the font (super/subscript)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontVerticalAlign {
    Baseline,
    Superscript,
    Subscript,
}
