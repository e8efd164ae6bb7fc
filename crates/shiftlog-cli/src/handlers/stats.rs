use anyhow::{bail, Result};
use shiftlog_runtime::{Config, Session};
use shiftlog_types::RecordFilter;

use crate::args::OutputFormat;
use crate::presentation::{chart, console};

pub fn handle(
    session: &Session,
    filter: &RecordFilter,
    format: OutputFormat,
    with_chart: bool,
    config: &Config,
) -> Result<()> {
    let Some(report) = session.analytics(filter) else {
        // Explicit no-data outcome: distinct from a report with no variance
        match format {
            OutputFormat::Json => println!("null"),
            _ => console::render_no_data(filter),
        }
        return Ok(());
    };

    match format {
        OutputFormat::Plain => {
            console::render_stats(&report);
            if with_chart {
                println!();
                chart::render_stddev_chart(&report, config.chart_width);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => bail!("csv format is not supported for stats; use plain or json"),
    }

    Ok(())
}
