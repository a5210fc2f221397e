//! Number format settings

use serde::{Serialize, Serializer};

/// Cell number format
///
/// Serializes as the format code string; `General` is the empty string on
/// the wire (the renderer's default).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    #[default]
    General,
    /// A custom format code, e.g. "0.00%"
    Custom(String),
}

impl NumberFormat {
    /// The format code string ("" for General)
    pub fn code(&self) -> &str {
        match self {
            NumberFormat::General => "",
            NumberFormat::Custom(code) => code,
        }
    }
}

impl Serialize for NumberFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl From<&str> for NumberFormat {
    fn from(code: &str) -> Self {
        if code.is_empty() {
            NumberFormat::General
        } else {
            NumberFormat::Custom(code.to_string())
        }
    }
}
