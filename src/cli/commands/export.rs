use crate::cli::commands::build_selection;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::ingest::{parse_upload, read_upload};
use crate::utils::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        out,
        format,
        filters,
        force,
    } = cmd
    {
        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_extension(out).ok_or_else(|| {
                AppError::InvalidExportFormat(format!(
                    "cannot infer a format from '{}', use --format csv|json|xlsx|pdf",
                    out.display()
                ))
            })?,
        };

        let upload = read_upload(&expand_tilde(&file.to_string_lossy()))?;
        let table = parse_upload(&upload)?;
        let selection = build_selection(filters, Some(&table), cfg)?;

        let out = expand_tilde(&out.to_string_lossy());

        ExportLogic::export(
            &table,
            &selection,
            cfg,
            format,
            &out,
            filters.period.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
