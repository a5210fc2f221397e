//! Background fill settings

use super::Color;
use serde::Serialize;

/// Cell background fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fill {
    /// Fill pattern
    pub pattern: PatternType,
    /// Foreground color of the pattern (the visible color for solid fills)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Fill {
    /// A solid fill of the given color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: PatternType::Solid,
            color: Some(color),
        }
    }
}

/// Fill pattern type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternType {
    #[default]
    None,
    Solid,
    LightGray,
    MediumGray,
    DarkGray,
}
