use crate::config::Config;
use crate::core::validator;
use crate::errors::{AppError, AppResult};
use crate::models::range::{NormalizedTimeRangeInput, TimeRangeInput};
use crate::ui::OutputFormat;
use crate::ui::messages;
use crate::utils::colors::apply_color;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one record in a batch run. Indexes are 1-based for display.
#[derive(Serialize)]
pub struct RecordOutcome {
    pub index: usize,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<NormalizedTimeRangeInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

/// High-level business logic for the `batch` command.
pub struct BatchLogic;

impl BatchLogic {
    /// Parse a JSON array of payloads.
    pub fn parse_payloads(raw: &str) -> AppResult<Vec<TimeRangeInput>> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validate every record independently.
    pub fn run(inputs: &[TimeRangeInput]) -> Vec<RecordOutcome> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, input)| match validator::validate(input) {
                Ok(normalized) => RecordOutcome {
                    index: i + 1,
                    ok: true,
                    normalized: Some(normalized),
                    errors: None,
                },
                Err(report) => RecordOutcome {
                    index: i + 1,
                    ok: false,
                    normalized: None,
                    errors: Some(report.to_message_map()),
                },
            })
            .collect()
    }

    /// Total number of field errors across all failed records.
    pub fn error_count(outcomes: &[RecordOutcome]) -> usize {
        outcomes
            .iter()
            .filter_map(|o| o.errors.as_ref())
            .map(|e| e.len())
            .sum()
    }

    /// Render the outcomes and convert any failure into a non-zero exit.
    pub fn report(outcomes: &[RecordOutcome], format: OutputFormat, cfg: &Config) -> AppResult<()> {
        let failed = outcomes.iter().filter(|o| !o.ok).count();

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            }
            OutputFormat::Text => {
                let mut table = Table::new(vec![
                    Column::new("#", 3),
                    Column::new("status", 6),
                    Column::new("detail", 10),
                ]);

                for outcome in outcomes {
                    let status = if outcome.ok {
                        Colour::Green.paint("OK").to_string()
                    } else {
                        Colour::Red.paint("FAIL").to_string()
                    };
                    table.add_row(vec![
                        outcome.index.to_string(),
                        status,
                        Self::detail(outcome, cfg),
                    ]);
                }

                print!("{}", apply_color(table.render(), cfg.color));

                if failed == 0 {
                    messages::success(format!("{} record(s) checked, all valid", outcomes.len()));
                } else {
                    messages::warning(format!(
                        "{} record(s) checked, {} failed",
                        outcomes.len(),
                        failed
                    ));
                }
            }
        }

        if failed > 0 {
            Err(AppError::ValidationFailed(Self::error_count(outcomes)))
        } else {
            Ok(())
        }
    }

    fn detail(outcome: &RecordOutcome, cfg: &Config) -> String {
        match (&outcome.normalized, &outcome.errors) {
            (Some(normalized), _) => format!(
                "{} .. {}",
                normalized.start.display_hhmm(&cfg.empty_placeholder),
                normalized.end.display_hhmm(&cfg.empty_placeholder)
            ),
            (None, Some(errors)) => errors
                .iter()
                .map(|(path, msg)| format!("{}: {}", path, msg))
                .collect::<Vec<_>>()
                .join("; "),
            _ => String::new(),
        }
    }
}
