use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default config file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.config.as_deref(), cli.test)?;

    info("Initializing rMaintKPI…");
    info(format!("Config file : {}", path.display()));

    if cli.test {
        info("Test mode: configuration not written.");
    } else {
        success(format!("Default configuration written to {}", path.display()));
    }

    Ok(())
}
