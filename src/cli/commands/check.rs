use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::check::CheckLogic;
use crate::errors::AppResult;
use crate::models::field::TimeField;
use crate::models::range::TimeRangeInput;
use crate::ui;
use crate::utils::input::read_payload;

/// Validate a single time-range payload.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        start_hour,
        start_minute,
        end_hour,
        end_minute,
        json,
        format,
    } = cmd
    {
        //
        // 1. Resolve the output format (flag wins over config)
        //
        let fmt = ui::resolve_format(format.as_deref(), cfg)?;

        //
        // 2. Build the payload: JSON file/stdin, or the four field flags.
        //    A missing flag reads as an untouched, empty field.
        //
        let input: TimeRangeInput = match json {
            Some(path) => serde_json::from_str(&read_payload(path)?)?,
            None => TimeRangeInput::new(
                TimeField::new(
                    start_hour.clone().unwrap_or_default(),
                    start_minute.clone().unwrap_or_default(),
                ),
                TimeField::new(
                    end_hour.clone().unwrap_or_default(),
                    end_minute.clone().unwrap_or_default(),
                ),
            ),
        };

        //
        // 3. Validate and render
        //
        CheckLogic::apply(&input, fmt, cfg)?;
    }

    Ok(())
}
