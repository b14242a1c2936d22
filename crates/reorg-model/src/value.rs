//! The working value that flows through a column pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar cell value, either textual or numeric.
///
/// Input cells always start out as [`CellValue::Text`]. Numeric rules produce
/// [`CellValue::Number`] so that chained numeric rules avoid reparsing; string
/// rules render the value back to text. The final value of a pipeline may be
/// either variant depending on which rule executed last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Render the value as text.
    ///
    /// Numbers use Rust's shortest round-trip formatting, so integral values
    /// render without a trailing `.0` (`15.0` renders as `"15"`).
    pub fn render(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Interpret the value numerically, parsing text on demand.
    ///
    /// Returns `None` when the value is text that does not parse as a finite
    /// number. Leading/trailing whitespace is tolerated.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// True when the value is empty text.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
