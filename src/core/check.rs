use crate::config::Config;
use crate::core::validator;
use crate::errors::{AppError, AppResult};
use crate::models::range::{NormalizedTimeRangeInput, TimeRangeInput};
use crate::models::report::ValidationReport;
use crate::ui::OutputFormat;
use crate::ui::messages;
use crate::utils::colors::{apply_color, colorize_optional};
use crate::utils::formatting::mins2readable;
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON shape emitted by `check`.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<&'a NormalizedTimeRangeInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

/// High-level business logic for the `check` command.
pub struct CheckLogic;

impl CheckLogic {
    /// Validate one payload and render the outcome.
    ///
    /// A failed validation is rendered field by field, then reported as
    /// `ValidationFailed` so the process exits non-zero.
    pub fn apply(input: &TimeRangeInput, format: OutputFormat, cfg: &Config) -> AppResult<()> {
        match validator::validate(input) {
            Ok(normalized) => {
                Self::print_success(&normalized, format, cfg)?;
                Ok(())
            }
            Err(report) => {
                Self::print_failure(&report, format, cfg)?;
                Err(AppError::ValidationFailed(report.len()))
            }
        }
    }

    fn print_success(
        normalized: &NormalizedTimeRangeInput,
        format: OutputFormat,
        cfg: &Config,
    ) -> AppResult<()> {
        match format {
            OutputFormat::Json => {
                let out = CheckOutput {
                    ok: true,
                    normalized: Some(normalized),
                    errors: None,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            OutputFormat::Text => {
                messages::success("Time range is valid");

                let start = normalized.start.display_hhmm(&cfg.empty_placeholder);
                let end = normalized.end.display_hhmm(&cfg.empty_placeholder);
                println!(
                    "   start : {}",
                    apply_color(colorize_optional(&start, &cfg.empty_placeholder), cfg.color)
                );
                println!(
                    "   end   : {}",
                    apply_color(colorize_optional(&end, &cfg.empty_placeholder), cfg.color)
                );

                if cfg.show_duration
                    && let Some(mins) = normalized.span_minutes()
                {
                    println!("   span  : {}", mins2readable(mins, true, false));
                }
            }
        }
        Ok(())
    }

    fn print_failure(
        report: &ValidationReport,
        format: OutputFormat,
        cfg: &Config,
    ) -> AppResult<()> {
        match format {
            OutputFormat::Json => {
                let out = CheckOutput {
                    ok: false,
                    normalized: None,
                    errors: Some(report.to_message_map()),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            OutputFormat::Text => {
                messages::error("Time range is not valid");
                for (path, violation) in report.iter() {
                    if cfg.color {
                        messages::field_error(path.as_str(), violation.message());
                    } else {
                        eprintln!("   {:<12} {}", path.as_str(), violation.message());
                    }
                }
            }
        }
        Ok(())
    }
}
