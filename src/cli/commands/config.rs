use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        path,
    } = &cli.command
    {
        // Config file path: the --config override wins over the standard one
        let file = match &cli.config {
            Some(custom) => expand_tilde(custom),
            None => Config::config_file(),
        };

        // ---- PATH ----
        if *path {
            println!("{}", file.display());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- CHECK ----
        if *check {
            if !file.exists() {
                messages::warning(format!(
                    "No configuration file at {}, defaults are in use",
                    file.display()
                ));
            } else {
                let missing = Config::missing_keys(&file)?;
                if missing.is_empty() {
                    messages::success("Configuration file is complete");
                } else {
                    for key in &missing {
                        messages::warning(format!("Missing field: {}", key));
                    }
                    messages::info("Missing fields fall back to their defaults");
                }
            }
        }
    }

    Ok(())
}
