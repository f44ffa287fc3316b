pub mod messages;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Output rendering mode for the check/batch commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Resolve the effective format: an explicit flag wins over the config value.
pub fn resolve_format(flag: Option<&str>, cfg: &Config) -> AppResult<OutputFormat> {
    let wanted = flag.unwrap_or(&cfg.output);
    OutputFormat::parse(wanted).ok_or_else(|| AppError::InvalidOutputFormat(wanted.to_string()))
}
