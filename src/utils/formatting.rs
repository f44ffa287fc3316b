//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Remove ANSI escape sequences, e.g. before measuring visible width.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
