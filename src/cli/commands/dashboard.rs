use crate::cli::commands::{build_selection, output_format, to_json};
use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::{build_dashboard, build_from_table};
use crate::errors::AppResult;
use crate::ingest::{parse_upload, read_upload};
use crate::utils::expand_tilde;
use crate::ui::dashboard::render_dashboard;

/// Handle the `dashboard` command.
///
/// A workbook that cannot be decoded still renders (in the empty state);
/// only an unreadable path or invalid flags are errors.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        file,
        filters,
        format,
    } = cmd
    {
        let upload = read_upload(&expand_tilde(&file.to_string_lossy()))?;

        let view = match parse_upload(&upload) {
            Ok(table) => {
                let selection = build_selection(filters, Some(&table), cfg)?;
                build_from_table(&table, &selection, cfg)
            }
            Err(_) => {
                let selection = build_selection(filters, None, cfg)?;
                build_dashboard(Some(&upload), &selection, cfg)
            }
        };

        match output_format(*format, cfg) {
            OutputFormat::Json => println!("{}", to_json(&view)?),
            OutputFormat::Text => print!("{}", render_dashboard(&view, &cfg.not_available)),
        }
    }
    Ok(())
}
