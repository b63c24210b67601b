use crate::cli::commands::{output_format, to_json};
use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::on_upload;
use crate::errors::AppResult;
use crate::ingest::{parse_upload, read_upload};
use crate::utils::expand_tilde;
use crate::ui::dashboard::render_upload;

/// Handle the `scopes` command: the upload step on its own.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scopes { file, format } = cmd {
        let upload = read_upload(&expand_tilde(&file.to_string_lossy()))?;

        // a broken workbook is a command failure here, not an empty dashboard
        parse_upload(&upload)?;

        let outcome = on_upload(Some(&upload));

        match output_format(*format, cfg) {
            OutputFormat::Json => println!("{}", to_json(&outcome)?),
            OutputFormat::Text => print!("{}", render_upload(&outcome)),
        }
    }
    Ok(())
}
