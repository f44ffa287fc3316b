use super::field::{NormalizedTimeField, TimeField};
use crate::utils::time::minutes_between;
use serde::{Deserialize, Serialize};

/// Full form payload: a start pair and an end pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeInput {
    #[serde(default)]
    pub start: TimeField,
    #[serde(default)]
    pub end: TimeField,
}

impl TimeRangeInput {
    pub fn new(start: TimeField, end: TimeField) -> Self {
        Self { start, end }
    }
}

/// Successful validation outcome. Both pairs are either zero-padded numeric
/// strings or empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedTimeRangeInput {
    pub start: NormalizedTimeField,
    pub end: NormalizedTimeField,
}

impl NormalizedTimeRangeInput {
    /// Minutes from start to end when both pairs are filled.
    /// May be negative: start and end carry no ordering invariant, so the
    /// span is informational only.
    pub fn span_minutes(&self) -> Option<i64> {
        let s = self.start.as_naive_time()?;
        let e = self.end.as_naive_time()?;
        Some(minutes_between(s, e))
    }

    /// Re-wrap the normalized values as raw input, e.g. to re-validate.
    pub fn as_input(&self) -> TimeRangeInput {
        TimeRangeInput {
            start: TimeField::new(&self.start.hour, &self.start.minute),
            end: TimeField::new(&self.end.hour, &self.end.minute),
        }
    }
}
