//! Sketches report data structures
//!
//! Mirrors the JSON documents written by the sketch compilation step. Each
//! document holds one report per board, and each board report carries the
//! aggregate sizes plus a per-sketch breakdown.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::fmt;

/// Literal used both as an input sentinel and as an output cell value
pub const NOT_APPLICABLE: &str = "N/A";

/// A memory measurement that may be unavailable for one of the compared commits
#[derive(Debug, Clone, PartialEq)]
pub enum SizeValue {
    /// The board or metric is unsupported for at least one commit
    NotApplicable,
    /// A measured value, kept in its JSON form so integers and floats render as written
    Numeric(Number),
}

impl SizeValue {
    /// Numeric value as `f64`, `None` for the not-applicable sentinel
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::NotApplicable => None,
            Self::Numeric(number) => number.as_f64(),
        }
    }

    /// Whether this is the not-applicable sentinel
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }
}

impl From<i64> for SizeValue {
    fn from(value: i64) -> Self {
        Self::Numeric(Number::from(value))
    }
}

impl From<f64> for SizeValue {
    /// Non-finite values have no JSON representation and map to `NotApplicable`
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::NotApplicable, Self::Numeric)
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => f.write_str(NOT_APPLICABLE),
            Self::Numeric(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSizeValue {
    Numeric(Number),
    Text(String),
}

impl<'de> Deserialize<'de> for SizeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawSizeValue::deserialize(deserializer)? {
            RawSizeValue::Numeric(number) => Ok(Self::Numeric(number)),
            RawSizeValue::Text(text) if text == NOT_APPLICABLE => Ok(Self::NotApplicable),
            RawSizeValue::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{}\", found \"{}\"",
                NOT_APPLICABLE, text
            ))),
        }
    }
}

impl Serialize for SizeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
            Self::Numeric(number) => number.serialize(serializer),
        }
    }
}

/// Bracketed range of possible change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaRange {
    /// Lower bound of the change
    pub minimum: SizeValue,
    /// Upper bound of the change
    pub maximum: SizeValue,
}

impl DeltaRange {
    /// Range where both bounds are the not-applicable sentinel
    pub fn not_applicable() -> Self {
        Self {
            minimum: SizeValue::NotApplicable,
            maximum: SizeValue::NotApplicable,
        }
    }
}

/// Board-level change between the two commits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDelta {
    /// Change in bytes
    pub absolute: DeltaRange,
    /// Change as a percentage of the memory type's maximum
    pub relative: DeltaRange,
}

/// Sketch-level change between the two commits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchDelta {
    /// Change in bytes
    pub absolute: SizeValue,
    /// Change as a percentage of the memory type's maximum
    pub relative: SizeValue,
}

/// Board-level measurement for one memory type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSize {
    /// Memory type label, e.g. "flash"
    pub name: String,
    /// Capacity ceiling for the memory type
    pub maximum: SizeValue,
    /// Present only when both commits produced a measurement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<BoardDelta>,
}

/// Absolute and relative size of a sketch at one commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeSnapshot {
    /// Size in bytes
    pub absolute: SizeValue,
    /// Size as a percentage of the memory type's maximum
    pub relative: SizeValue,
}

/// Sketch-level measurement for one memory type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchSize {
    /// Memory type label, e.g. "flash"
    pub name: String,
    /// Capacity ceiling for the memory type
    pub maximum: SizeValue,
    /// Size at the pull request head
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<SizeSnapshot>,
    /// Size at the pull request base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<SizeSnapshot>,
    /// Present only when both commits produced a measurement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<SketchDelta>,
}

/// One example program's compiled result for one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchReport {
    /// Sketch path, e.g. "examples/Foo"
    pub name: String,
    /// Whether the sketch compiled
    pub compilation_success: bool,
    /// Per-memory-type measurements
    #[serde(default)]
    pub sizes: Vec<SketchSize>,
}

/// Memory report for one board at one commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardReport {
    /// Board identifier, e.g. "arduino:avr:uno"
    pub board: String,
    /// Aggregate sizes across all sketches
    #[serde(default)]
    pub sizes: Vec<BoardSize>,
    /// Per-sketch results
    #[serde(default)]
    pub sketches: Vec<SketchReport>,
}

impl BoardReport {
    /// Board identifier wrapped as a Markdown code span
    pub fn label(&self) -> String {
        format!("`{}`", self.board)
    }
}

/// Contents of one sketches report file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchesReport {
    /// Commit the report was generated for
    pub commit_hash: String,
    /// URL of that commit
    #[serde(default)]
    pub commit_url: String,
    /// One entry per board
    pub boards: Vec<BoardReport>,
}
