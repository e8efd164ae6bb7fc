use anyhow::{Context, Result};
use shiftlog_runtime::Session;
use shiftlog_types::RecordFilter;

use crate::presentation::console;

pub fn handle(session: &Session, filter: &RecordFilter, output: &str) -> Result<()> {
    let records = session.filtered_view(filter);

    let mut writer =
        csv::Writer::from_path(output).with_context(|| format!("Failed to create {}", output))?;
    console::write_records_csv(&mut writer, &records)?;

    println!("Exported {} record(s) to {}", records.len(), output);
    Ok(())
}
