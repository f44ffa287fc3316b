use thiserror::Error;

/// User-correctable input violations. The Display strings are the exact
/// messages shown next to the offending field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("required")]
    RequiredFieldMissing,

    #[error("00-23")]
    HourOutOfRange,

    #[error("00-59")]
    MinuteOutOfRange,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Violation::RequiredFieldMissing => "required",
            Violation::HourOutOfRange => "00-23",
            Violation::MinuteOutOfRange => "00-59",
        }
    }
}
