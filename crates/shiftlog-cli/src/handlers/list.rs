use anyhow::Result;
use shiftlog_runtime::Session;
use shiftlog_types::RecordFilter;

use crate::args::OutputFormat;
use crate::presentation::console;

pub fn handle(session: &Session, filter: &RecordFilter, format: OutputFormat) -> Result<()> {
    let records = session.filtered_view(filter);

    match format {
        OutputFormat::Plain => console::render_records(&records, filter),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            console::write_records_csv(&mut writer, &records)?;
        }
    }

    Ok(())
}
