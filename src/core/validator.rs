//! Time-range validation: "both empty or both valid" per pair, numeric
//! range checks, zero-padding normalization.

use crate::models::field::{NormalizedTimeField, TimeField};
use crate::models::field_path::FieldPath;
use crate::models::range::{NormalizedTimeRangeInput, TimeRangeInput};
use crate::models::report::ValidationReport;
use crate::models::violation::Violation;

pub const HOUR_MAX: u32 = 23;
pub const MINUTE_MAX: u32 = 59;

/// Which pair a leaf belongs to, used to scope error paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    Start,
    End,
}

impl Pair {
    fn hour_path(self) -> FieldPath {
        match self {
            Pair::Start => FieldPath::StartHour,
            Pair::End => FieldPath::EndHour,
        }
    }

    fn minute_path(self) -> FieldPath {
        match self {
            Pair::Start => FieldPath::StartMinute,
            Pair::End => FieldPath::EndMinute,
        }
    }
}

/// Left-pad with zeros to a minimum width of 2. Longer input is kept as-is.
fn pad2(s: &str) -> String {
    format!("{:0>2}", s)
}

/// Non-negative integer parse with an upper bound. Rejects sign-less
/// garbage and negatives in one go.
fn in_range(s: &str, max: u32) -> bool {
    matches!(s.parse::<u32>(), Ok(v) if v <= max)
}

/// Validate a single hour/minute pair.
///
/// The strict branch is tried first: once both leaves are non-empty the
/// empty branch is off the table and range errors surface as-is. Only a
/// structural failure (at least one empty leaf) falls through.
fn validate_pair(pair: Pair, field: &TimeField, report: &mut ValidationReport) -> Option<NormalizedTimeField> {
    let hour = field.hour.trim();
    let minute = field.minute.trim();

    if !hour.is_empty() && !minute.is_empty() {
        let hour = pad2(hour);
        let minute = pad2(minute);

        // Independent checks: both may fire for the same pair.
        let mut ok = true;
        if !in_range(&hour, HOUR_MAX) {
            report.insert(pair.hour_path(), Violation::HourOutOfRange);
            ok = false;
        }
        if !in_range(&minute, MINUTE_MAX) {
            report.insert(pair.minute_path(), Violation::MinuteOutOfRange);
            ok = false;
        }

        return ok.then(|| NormalizedTimeField::new(hour, minute));
    }

    if hour.is_empty() && minute.is_empty() {
        return Some(NormalizedTimeField::empty());
    }

    // Exactly one leaf is filled: the empty side is required. The filled
    // side is not range-checked here.
    if hour.is_empty() {
        report.insert(pair.hour_path(), Violation::RequiredFieldMissing);
    } else {
        report.insert(pair.minute_path(), Violation::RequiredFieldMissing);
    }
    None
}

/// Validate a full payload. Start and end are independent; the report
/// aggregates every field error across both pairs.
pub fn validate(input: &TimeRangeInput) -> Result<NormalizedTimeRangeInput, ValidationReport> {
    let mut report = ValidationReport::new();

    let start = validate_pair(Pair::Start, &input.start, &mut report);
    let end = validate_pair(Pair::End, &input.end, &mut report);

    match (start, end) {
        (Some(start), Some(end)) => Ok(NormalizedTimeRangeInput { start, end }),
        _ => Err(report),
    }
}
