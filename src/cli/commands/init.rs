use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default values
pub fn handle(cli: &Cli) -> AppResult<()> {
    let file = Config::init_all(cli.config.clone(), cli.test)?;

    println!("⚙️  Initializing trcheck…");
    println!("📄 Config file : {}", file.display());

    if cli.test {
        println!("🧪 Test mode: nothing was written");
    } else {
        println!("🎉 trcheck initialization completed!");
    }

    Ok(())
}
