use crate::cli::context::{Context, date_or_today};
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportScope};

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        scope,
        range,
        date,
        force,
    } = cmd
    {
        let employee = ctx.employee()?;
        let records = ctx.load_records(employee).await?;

        match scope {
            ExportScope::Days => {
                ExportLogic::export_days(&records, *format, file, range, *force)?;
            }
            ExportScope::Week => {
                let week = Core::week(&records, date_or_today(date)?);
                ExportLogic::export_summary(&week, *format, file, *force)?;
            }
            ExportScope::Month => {
                let month = Core::month(&records, date_or_today(date)?);
                ExportLogic::export_summary(&month, *format, file, *force)?;
            }
        }
    }
    Ok(())
}
