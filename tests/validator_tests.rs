use trcheck::core::validator::validate;
use trcheck::models::field::TimeField;
use trcheck::models::field_path::FieldPath;
use trcheck::models::range::TimeRangeInput;
use trcheck::models::violation::Violation;

fn input(sh: &str, sm: &str, eh: &str, em: &str) -> TimeRangeInput {
    TimeRangeInput::new(TimeField::new(sh, sm), TimeField::new(eh, em))
}

#[test]
fn empty_start_and_filled_end_succeeds() {
    let result = validate(&input("", "", "9", "5")).expect("should validate");

    assert!(result.start.is_empty());
    assert_eq!(result.start.hour, "");
    assert_eq!(result.start.minute, "");
    assert_eq!(result.end.hour, "09");
    assert_eq!(result.end.minute, "05");
}

#[test]
fn filled_hour_with_missing_minute_reports_required() {
    let report = validate(&input("9", "", "", "")).unwrap_err();

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get(FieldPath::StartMinute),
        Some(Violation::RequiredFieldMissing)
    );
}

#[test]
fn missing_hour_with_filled_minute_reports_required_on_hour() {
    let report = validate(&input("", "30", "", "")).unwrap_err();

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get(FieldPath::StartHour),
        Some(Violation::RequiredFieldMissing)
    );
}

#[test]
fn out_of_range_values_are_reported_across_both_pairs() {
    let report = validate(&input("25", "30", "10", "61")).unwrap_err();

    assert_eq!(report.len(), 2);
    assert_eq!(report.get(FieldPath::StartHour), Some(Violation::HourOutOfRange));
    assert_eq!(report.get(FieldPath::EndMinute), Some(Violation::MinuteOutOfRange));
    assert_eq!(report.get(FieldPath::StartMinute), None);
    assert_eq!(report.get(FieldPath::EndHour), None);
}

#[test]
fn already_normalized_input_passes_unchanged() {
    let result = validate(&input("00", "00", "23", "59")).expect("should validate");

    assert_eq!(result.start.hour, "00");
    assert_eq!(result.start.minute, "00");
    assert_eq!(result.end.hour, "23");
    assert_eq!(result.end.minute, "59");
}

#[test]
fn all_empty_is_valid() {
    let result = validate(&input("", "", "", "")).expect("should validate");

    assert!(result.start.is_empty());
    assert!(result.end.is_empty());
}

#[test]
fn single_digits_are_zero_padded() {
    let result = validate(&input("5", "7", "9", "3")).expect("should validate");

    assert_eq!(result.start.hour, "05");
    assert_eq!(result.start.minute, "07");
    assert_eq!(result.end.hour, "09");
    assert_eq!(result.end.minute, "03");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let result = validate(&input(" 9 ", "\t5", "17", " 30")).expect("should validate");

    assert_eq!(result.start.hour, "09");
    assert_eq!(result.start.minute, "05");
    assert_eq!(result.end.hour, "17");
    assert_eq!(result.end.minute, "30");
}

#[test]
fn whitespace_only_counts_as_empty() {
    let result = validate(&input("  ", "   ", "", "")).expect("should validate");

    assert!(result.start.is_empty());
}

#[test]
fn non_numeric_hour_reports_hour_range_error_only() {
    let report = validate(&input("ab", "10", "", "")).unwrap_err();

    assert_eq!(report.len(), 1);
    assert_eq!(report.get(FieldPath::StartHour), Some(Violation::HourOutOfRange));
}

#[test]
fn negative_hour_is_rejected() {
    let report = validate(&input("-1", "00", "", "")).unwrap_err();

    assert_eq!(report.get(FieldPath::StartHour), Some(Violation::HourOutOfRange));
}

#[test]
fn hour_and_minute_errors_fire_together_on_one_pair() {
    let report = validate(&input("24", "60", "", "")).unwrap_err();

    assert_eq!(report.len(), 2);
    assert_eq!(report.get(FieldPath::StartHour), Some(Violation::HourOutOfRange));
    assert_eq!(
        report.get(FieldPath::StartMinute),
        Some(Violation::MinuteOutOfRange)
    );
}

#[test]
fn boundary_values_are_accepted() {
    let result = validate(&input("0", "0", "23", "59")).expect("should validate");

    assert_eq!(result.start.hour, "00");
    assert_eq!(result.start.minute, "00");
    assert_eq!(result.end.hour, "23");
    assert_eq!(result.end.minute, "59");
}

#[test]
fn just_past_boundary_is_rejected() {
    let report = validate(&input("24", "00", "00", "60")).unwrap_err();

    assert_eq!(report.len(), 2);
    assert_eq!(report.get(FieldPath::StartHour), Some(Violation::HourOutOfRange));
    assert_eq!(report.get(FieldPath::EndMinute), Some(Violation::MinuteOutOfRange));
}

// When one leaf is empty, the filled leaf is not range-checked: the pair
// fails structurally and only "required" is reported.
#[test]
fn required_shadows_range_check_on_half_filled_pair() {
    let report = validate(&input("99", "", "", "")).unwrap_err();

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get(FieldPath::StartMinute),
        Some(Violation::RequiredFieldMissing)
    );
    assert_eq!(report.get(FieldPath::StartHour), None);
}

#[test]
fn validation_is_idempotent_on_normalized_values() {
    let first = validate(&input("9", "5", "", "")).expect("should validate");
    let second = validate(&first.as_input()).expect("should still validate");

    assert_eq!(first, second);
}

#[test]
fn report_iterates_in_field_order() {
    // start.hour is required, end pair carries two range errors
    let report = validate(&input("", "5", "25", "61")).unwrap_err();

    let paths: Vec<FieldPath> = report.iter().map(|(p, _)| p).collect();
    assert_eq!(
        paths,
        vec![FieldPath::StartHour, FieldPath::EndHour, FieldPath::EndMinute]
    );

    assert_eq!(
        report.to_string(),
        "start.hour: required; end.hour: 00-23; end.minute: 00-59"
    );
}

#[test]
fn field_paths_round_trip_through_dotted_strings() {
    for path in FieldPath::ALL {
        assert_eq!(FieldPath::from_path(path.as_str()), Some(path));
    }
    assert_eq!(FieldPath::from_path("start.second"), None);
}

#[test]
fn violation_messages_are_the_exact_field_literals() {
    assert_eq!(Violation::RequiredFieldMissing.message(), "required");
    assert_eq!(Violation::HourOutOfRange.message(), "00-23");
    assert_eq!(Violation::MinuteOutOfRange.message(), "00-59");

    // Display mirrors message()
    assert_eq!(Violation::HourOutOfRange.to_string(), "00-23");
}

#[test]
fn message_map_uses_dotted_paths() {
    let report = validate(&input("25", "30", "10", "61")).unwrap_err();
    let map = report.to_message_map();

    assert_eq!(map.get("start.hour").map(String::as_str), Some("00-23"));
    assert_eq!(map.get("end.minute").map(String::as_str), Some("00-59"));
    assert!(map.get("end.hour").is_none());

    for key in map.keys() {
        assert!(FieldPath::from_path(key).is_some(), "unknown path {key}");
    }
}
