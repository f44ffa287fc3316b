use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::BatchLogic;
use crate::errors::AppResult;
use crate::ui;
use crate::ui::messages;
use crate::utils::input::read_payload;

/// Validate a JSON array of time-range payloads.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch { file, format } = cmd {
        let fmt = ui::resolve_format(format.as_deref(), cfg)?;

        let payloads = BatchLogic::parse_payloads(&read_payload(file)?)?;
        if payloads.is_empty() {
            messages::warning("No records to check");
            return Ok(());
        }

        let outcomes = BatchLogic::run(&payloads);
        BatchLogic::report(&outcomes, fmt, cfg)?;
    }

    Ok(())
}
