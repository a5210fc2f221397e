//! Enum-like chart fields and their normalization
//!
//! Every enum-like field accepts three input shapes: the typed enum
//! constant, a case-insensitive alias string, or a raw code already in the
//! renderer's numeric space (passed through unvalidated; the renderer is
//! the authority on range). Alias tables are data-driven so adding a format
//! is a table edit, not new branching code.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use quill_sheets_core::Color;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while normalizing a chart configuration
#[derive(Debug, Error)]
pub enum ChartError {
    /// An alias string did not match any known value for the field
    #[error("Unknown {field} alias: '{alias}'")]
    UnknownAlias {
        field: &'static str,
        alias: String,
    },

    /// A chart was added without any specification
    #[error("No chart specification supplied")]
    MissingChart,
}

/// An enum-like field with a canonical numeric code
pub trait CanonicalCode: Copy {
    /// Field name used in error messages
    const FIELD: &'static str;

    /// Look up a lowercased alias
    fn from_alias(alias: &str) -> Option<Self>
    where
        Self: Sized;

    /// The renderer's numeric code
    fn code(self) -> u8;
}

/// An enum-like field whose canonical form is a renderer string
pub trait CanonicalName: Copy {
    /// Field name used in error messages
    const FIELD: &'static str;

    /// Look up a lowercased alias
    fn from_alias(alias: &str) -> Option<Self>
    where
        Self: Sized;

    /// The renderer's canonical string
    fn name(self) -> &'static str;
}

fn alias_map<E: Copy>(table: &[(&'static str, E)]) -> AHashMap<&'static str, E> {
    table.iter().copied().collect()
}

// === Chart type ===

/// Chart type, with the renderer's numeric codes as discriminants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChartType {
    Area = 0,
    Area3D = 1,
    AreaStacked = 2,
    Area3DStacked = 3,
    AreaPercentStacked = 4,
    Area3DPercentStacked = 5,
    Bar = 6,
    Bar3DClustered = 7,
    Bar3DConeClustered = 8,
    Bar3DConePercentStacked = 9,
    Bar3DConeStacked = 10,
    Bar3DCylinderClustered = 11,
    Bar3DCylinderPercentStacked = 12,
    Bar3DCylinderStacked = 13,
    Bar3DPercentStacked = 14,
    Bar3DPyramidClustered = 15,
    Bar3DPyramidPercentStacked = 16,
    Bar3DPyramidStacked = 17,
    Bar3DStacked = 18,
    BarPercentStacked = 19,
    BarStacked = 20,
    Col = 21,
    Col3D = 22,
    Col3DClustered = 23,
    Col3DCone = 24,
    Col3DConeClustered = 25,
    Col3DConePercentStacked = 26,
    Col3DConeStacked = 27,
    Col3DCylinder = 28,
    Col3DCylinderClustered = 29,
    Col3DCylinderPercentStacked = 30,
    Col3DCylinderStacked = 31,
    Col3DPercentStacked = 32,
    Col3DPyramid = 33,
    Col3DPyramidClustered = 34,
    Col3DPyramidPercentStacked = 35,
    Col3DPyramidStacked = 36,
    Col3DStacked = 37,
    ColPercentStacked = 38,
    ColStacked = 39,
    Doughnut = 40,
    Line = 41,
    Line3D = 42,
    Pie = 43,
    Pie3D = 44,
    PieOfPie = 45,
    BarOfPie = 46,
    Radar = 47,
    Scatter = 48,
    Surface3D = 49,
    WireframeContour = 50,
    WireframeSurface3D = 51,
    Bubble = 52,
    Bubble3D = 53,
}

static CHART_TYPE_ALIASES: Lazy<AHashMap<&'static str, ChartType>> = Lazy::new(|| {
    use ChartType::*;
    alias_map(&[
        ("area", Area),
        ("area3d", Area3D),
        ("areastacked", AreaStacked),
        ("area3dstacked", Area3DStacked),
        ("areapercentstacked", AreaPercentStacked),
        ("area3dpercentstacked", Area3DPercentStacked),
        ("bar", Bar),
        ("bar3dclustered", Bar3DClustered),
        ("bar3dconeclustered", Bar3DConeClustered),
        ("bar3dconepercentstacked", Bar3DConePercentStacked),
        ("bar3dconestacked", Bar3DConeStacked),
        ("bar3dcylinderclustered", Bar3DCylinderClustered),
        ("bar3dcylinderpercentstacked", Bar3DCylinderPercentStacked),
        ("bar3dcylinderstacked", Bar3DCylinderStacked),
        ("bar3dpercentstacked", Bar3DPercentStacked),
        ("bar3dpyramidclustered", Bar3DPyramidClustered),
        ("bar3dpyramidpercentstacked", Bar3DPyramidPercentStacked),
        ("bar3dpyramidstacked", Bar3DPyramidStacked),
        ("bar3dstacked", Bar3DStacked),
        ("barpercentstacked", BarPercentStacked),
        ("barstacked", BarStacked),
        ("col", Col),
        ("col3d", Col3D),
        ("col3dclustered", Col3DClustered),
        ("col3dcone", Col3DCone),
        ("col3dconeclustered", Col3DConeClustered),
        ("col3dconepercentstacked", Col3DConePercentStacked),
        ("col3dconestacked", Col3DConeStacked),
        ("col3dcylinder", Col3DCylinder),
        ("col3dcylinderclustered", Col3DCylinderClustered),
        ("col3dcylinderpercentstacked", Col3DCylinderPercentStacked),
        ("col3dcylinderstacked", Col3DCylinderStacked),
        ("col3dpercentstacked", Col3DPercentStacked),
        ("col3dpyramid", Col3DPyramid),
        ("col3dpyramidclustered", Col3DPyramidClustered),
        ("col3dpyramidpercentstacked", Col3DPyramidPercentStacked),
        ("col3dpyramidstacked", Col3DPyramidStacked),
        ("col3dstacked", Col3DStacked),
        ("colpercentstacked", ColPercentStacked),
        ("colstacked", ColStacked),
        ("doughnut", Doughnut),
        ("line", Line),
        ("line3d", Line3D),
        ("pie", Pie),
        ("pie3d", Pie3D),
        ("pieofpie", PieOfPie),
        ("barofpie", BarOfPie),
        ("radar", Radar),
        ("scatter", Scatter),
        ("surface3d", Surface3D),
        ("wireframecontour", WireframeContour),
        ("wireframesurface3d", WireframeSurface3D),
        ("bubble", Bubble),
        ("bubble3d", Bubble3D),
    ])
});

impl CanonicalCode for ChartType {
    const FIELD: &'static str = "chart type";

    fn from_alias(alias: &str) -> Option<Self> {
        CHART_TYPE_ALIASES.get(alias).copied()
    }

    fn code(self) -> u8 {
        self as u8
    }
}

// === Series line type ===

/// Line type for a series outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LineType {
    Unset = 0,
    Solid = 1,
    None = 2,
    Automatic = 3,
}

static LINE_TYPE_ALIASES: Lazy<AHashMap<&'static str, LineType>> = Lazy::new(|| {
    alias_map(&[
        ("unset", LineType::Unset),
        ("solid", LineType::Solid),
        ("none", LineType::None),
        ("automatic", LineType::Automatic),
    ])
});

impl CanonicalCode for LineType {
    const FIELD: &'static str = "line type";

    fn from_alias(alias: &str) -> Option<Self> {
        LINE_TYPE_ALIASES.get(alias).copied()
    }

    fn code(self) -> u8 {
        self as u8
    }
}

// === Data label position ===

/// Position of series data labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataLabelPosition {
    Unset = 0,
    BestFit = 1,
    Below = 2,
    Center = 3,
    InsideBase = 4,
    InsideEnd = 5,
    Left = 6,
    OutsideEnd = 7,
    Right = 8,
    Above = 9,
}

static DATA_LABEL_POSITION_ALIASES: Lazy<AHashMap<&'static str, DataLabelPosition>> =
    Lazy::new(|| {
        use DataLabelPosition::*;
        alias_map(&[
            ("unset", Unset),
            ("bestfit", BestFit),
            ("below", Below),
            ("center", Center),
            ("insidebase", InsideBase),
            ("insideend", InsideEnd),
            ("left", Left),
            ("outsideend", OutsideEnd),
            ("right", Right),
            ("above", Above),
        ])
    });

impl CanonicalCode for DataLabelPosition {
    const FIELD: &'static str = "data label position";

    fn from_alias(alias: &str) -> Option<Self> {
        DATA_LABEL_POSITION_ALIASES.get(alias).copied()
    }

    fn code(self) -> u8 {
        self as u8
    }
}

// === Marker symbol ===

/// Marker symbol for a series
///
/// The renderer takes these as lowercase strings, not numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSymbol {
    Auto,
    Circle,
    Dash,
    Diamond,
    Dot,
    None,
    Picture,
    Plus,
    Square,
    Star,
    Triangle,
    X,
}

static MARKER_SYMBOL_ALIASES: Lazy<AHashMap<&'static str, MarkerSymbol>> = Lazy::new(|| {
    use MarkerSymbol::*;
    alias_map(&[
        ("auto", Auto),
        ("circle", Circle),
        ("dash", Dash),
        ("diamond", Diamond),
        ("dot", Dot),
        ("none", None),
        ("picture", Picture),
        ("plus", Plus),
        ("square", Square),
        ("star", Star),
        ("triangle", Triangle),
        ("x", X),
    ])
});

impl CanonicalName for MarkerSymbol {
    const FIELD: &'static str = "marker symbol";

    fn from_alias(alias: &str) -> Option<Self> {
        MARKER_SYMBOL_ALIASES.get(alias).copied()
    }

    fn name(self) -> &'static str {
        use MarkerSymbol::*;
        match self {
            Auto => "auto",
            Circle => "circle",
            Dash => "dash",
            Diamond => "diamond",
            Dot => "dot",
            None => "none",
            Picture => "picture",
            Plus => "plus",
            Square => "square",
            Star => "star",
            Triangle => "triangle",
            X => "x",
        }
    }
}

// === Legend position ===

/// Legend placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegendPosition {
    None,
    Top,
    Bottom,
    Left,
    Right,
    TopRight,
}

static LEGEND_POSITION_ALIASES: Lazy<AHashMap<&'static str, LegendPosition>> = Lazy::new(|| {
    use LegendPosition::*;
    alias_map(&[
        ("none", None),
        ("top", Top),
        ("bottom", Bottom),
        ("left", Left),
        ("right", Right),
        ("top_right", TopRight),
        ("topright", TopRight),
    ])
});

impl CanonicalName for LegendPosition {
    const FIELD: &'static str = "legend position";

    fn from_alias(alias: &str) -> Option<Self> {
        LEGEND_POSITION_ALIASES.get(alias).copied()
    }

    fn name(self) -> &'static str {
        use LegendPosition::*;
        match self {
            None => "none",
            Top => "top",
            Bottom => "bottom",
            Left => "left",
            Right => "right",
            TopRight => "top_right",
        }
    }
}

// === Input unions ===

/// Input for a numeric-coded enum field: typed value, alias, or raw code
#[derive(Debug, Clone, PartialEq)]
pub enum CodeSpec<E> {
    Typed(E),
    Alias(String),
    /// Raw code in the renderer's numeric space, passed through unvalidated
    Code(u8),
}

impl<E: CanonicalCode> CodeSpec<E> {
    /// Collapse to the canonical numeric code
    pub fn canonical(&self) -> Result<u8, ChartError> {
        match self {
            CodeSpec::Typed(value) => Ok(value.code()),
            CodeSpec::Alias(alias) => E::from_alias(alias.to_lowercase().as_str())
                .map(E::code)
                .ok_or_else(|| ChartError::UnknownAlias {
                    field: E::FIELD,
                    alias: alias.clone(),
                }),
            CodeSpec::Code(code) => Ok(*code),
        }
    }
}

impl<E> From<&str> for CodeSpec<E> {
    fn from(alias: &str) -> Self {
        CodeSpec::Alias(alias.to_string())
    }
}

impl<E> From<String> for CodeSpec<E> {
    fn from(alias: String) -> Self {
        CodeSpec::Alias(alias)
    }
}

impl<E> From<u8> for CodeSpec<E> {
    fn from(code: u8) -> Self {
        CodeSpec::Code(code)
    }
}

/// Input for a string-coded enum field: typed value or alias
#[derive(Debug, Clone, PartialEq)]
pub enum NameSpec<E> {
    Typed(E),
    Alias(String),
}

impl<E: CanonicalName> NameSpec<E> {
    /// Collapse to the canonical renderer string
    pub fn canonical(&self) -> Result<&'static str, ChartError> {
        match self {
            NameSpec::Typed(value) => Ok(value.name()),
            NameSpec::Alias(alias) => E::from_alias(alias.to_lowercase().as_str())
                .map(E::name)
                .ok_or_else(|| ChartError::UnknownAlias {
                    field: E::FIELD,
                    alias: alias.clone(),
                }),
        }
    }
}

impl<E> From<&str> for NameSpec<E> {
    fn from(alias: &str) -> Self {
        NameSpec::Alias(alias.to_string())
    }
}

impl<E> From<String> for NameSpec<E> {
    fn from(alias: String) -> Self {
        NameSpec::Alias(alias)
    }
}

/// Chart type input
pub type ChartTypeSpec = CodeSpec<ChartType>;
/// Line type input
pub type LineTypeSpec = CodeSpec<LineType>;
/// Data label position input
pub type DataLabelPositionSpec = CodeSpec<DataLabelPosition>;
/// Marker symbol input
pub type MarkerSymbolSpec = NameSpec<MarkerSymbol>;
/// Legend position input
pub type LegendPositionSpec = NameSpec<LegendPosition>;

impl From<ChartType> for ChartTypeSpec {
    fn from(value: ChartType) -> Self {
        CodeSpec::Typed(value)
    }
}

impl From<LineType> for LineTypeSpec {
    fn from(value: LineType) -> Self {
        CodeSpec::Typed(value)
    }
}

impl From<DataLabelPosition> for DataLabelPositionSpec {
    fn from(value: DataLabelPosition) -> Self {
        CodeSpec::Typed(value)
    }
}

impl From<MarkerSymbol> for MarkerSymbolSpec {
    fn from(value: MarkerSymbol) -> Self {
        NameSpec::Typed(value)
    }
}

impl From<LegendPosition> for LegendPositionSpec {
    fn from(value: LegendPosition) -> Self {
        NameSpec::Typed(value)
    }
}

// === Plain chart building blocks (no enum-like fields) ===

/// Font used in chart titles, axes and rich text
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Font {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub family: Option<String>,
    pub size: Option<f64>,
    pub color: Option<Color>,
    pub underline: Option<String>,
}

/// A run of rich text with an optional font override
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RichTextRun {
    pub text: String,
    pub font: Option<Font>,
}

impl RichTextRun {
    /// A run with the default font
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    /// A run with an explicit font
    pub fn with_font<S: Into<String>>(text: S, font: Font) -> Self {
        Self {
            text: text.into(),
            font: Some(font),
        }
    }
}
