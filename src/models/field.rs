use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Raw hour/minute pair exactly as typed by the user.
///
/// Both leaves default to the empty string so an absent JSON key reads the
/// same as an untouched input field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeField {
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub minute: String,
}

impl TimeField {
    pub fn new(hour: impl Into<String>, minute: impl Into<String>) -> Self {
        Self {
            hour: hour.into(),
            minute: minute.into(),
        }
    }
}

/// Validated pair: both leaves are zero-padded numeric strings, or both are
/// empty. Never mixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedTimeField {
    pub hour: String,
    pub minute: String,
}

impl NormalizedTimeField {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(hour: impl Into<String>, minute: impl Into<String>) -> Self {
        Self {
            hour: hour.into(),
            minute: minute.into(),
        }
    }

    /// The empty pair carries no time at all (hour and minute are co-empty).
    pub fn is_empty(&self) -> bool {
        self.hour.is_empty()
    }

    /// Bridge to chrono. `None` for the empty pair or for values chrono
    /// cannot read back (e.g. an over-padded "005").
    pub fn as_naive_time(&self) -> Option<NaiveTime> {
        if self.is_empty() {
            return None;
        }
        parse_time(&format!("{}:{}", self.hour, self.minute))
    }

    /// "HH:MM", or the given placeholder for the empty pair.
    pub fn display_hhmm(&self, placeholder: &str) -> String {
        if self.is_empty() {
            placeholder.to_string()
        } else {
            format!("{}:{}", self.hour, self.minute)
        }
    }
}
