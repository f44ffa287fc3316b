/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Grey out the empty-field placeholder, leave real values untouched.
pub fn colorize_optional(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() || value.trim() == placeholder {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Apply the configured color policy: strip ANSI codes when color is off.
pub fn apply_color(s: String, color: bool) -> String {
    if color {
        s
    } else {
        crate::utils::formatting::strip_ansi(&s)
    }
}
