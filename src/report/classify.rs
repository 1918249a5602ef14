//! Change classification for summary table cells

use super::model::{DeltaRange, SizeValue, NOT_APPLICABLE};

/// Indicator shown for a size decrease
pub const DECREASE_INDICATOR: &str = ":green_heart:";
/// Indicator shown when the range straddles zero
pub const AMBIGUOUS_INDICATOR: &str = ":grey_question:";
/// Indicator shown for a size increase
pub const INCREASE_INDICATOR: &str = ":small_red_triangle:";

/// Direction of a memory usage change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Both bounds at or below zero, at least one below
    Decrease,
    /// Both bounds exactly zero
    Unchanged,
    /// Both bounds at or above zero, at least one above
    Increase,
    /// Bounds on opposite sides of zero
    Ambiguous,
    /// No measurement for at least one commit
    NotApplicable,
}

impl Change {
    /// Classify a `(minimum, maximum)` pair
    ///
    /// A not-applicable minimum wins regardless of the maximum. A numeric
    /// minimum with a not-applicable maximum is also not applicable, since
    /// there is no range to place.
    pub fn classify(minimum: &SizeValue, maximum: &SizeValue) -> Self {
        let (Some(min), Some(max)) = (minimum.as_f64(), maximum.as_f64()) else {
            return Self::NotApplicable;
        };

        if min < 0.0 && max <= 0.0 {
            Self::Decrease
        } else if min == 0.0 && max == 0.0 {
            Self::Unchanged
        } else if min >= 0.0 && max > 0.0 {
            Self::Increase
        } else {
            Self::Ambiguous
        }
    }

    /// Markdown emoji shortcode for this change, if it has one
    pub fn indicator(self) -> Option<&'static str> {
        match self {
            Self::Decrease => Some(DECREASE_INDICATOR),
            Self::Increase => Some(INCREASE_INDICATOR),
            Self::Ambiguous => Some(AMBIGUOUS_INDICATOR),
            Self::Unchanged | Self::NotApplicable => None,
        }
    }
}

/// Render a value with an explicit `+` on positive numbers
fn signed(value: &SizeValue) -> String {
    match value.as_f64() {
        Some(number) if number > 0.0 => format!("+{}", value),
        _ => value.to_string(),
    }
}

/// Format a delta range for a summary table cell
///
/// Produces `"<min> - <max>"`, optionally prefixed with the change indicator.
///
/// # Examples
///
/// ```
/// use size_deltas::report::classify::summary_value;
/// use size_deltas::report::model::{DeltaRange, SizeValue};
///
/// let range = DeltaRange {
///     minimum: SizeValue::from(-994_i64),
///     maximum: SizeValue::from(-994_i64),
/// };
/// assert_eq!(summary_value(true, &range), ":green_heart: -994 - -994");
/// assert_eq!(summary_value(false, &range), "-994 - -994");
/// ```
pub fn summary_value(show_indicator: bool, range: &DeltaRange) -> String {
    let change = Change::classify(&range.minimum, &range.maximum);
    if change == Change::NotApplicable {
        return NOT_APPLICABLE.to_string();
    }

    let value = format!("{} - {}", signed(&range.minimum), signed(&range.maximum));
    match change.indicator() {
        Some(indicator) if show_indicator => format!("{} {}", indicator, value),
        _ => value,
    }
}
