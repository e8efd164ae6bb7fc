use anyhow::Result;
use shiftlog_runtime::Session;

use crate::presentation::console;

pub fn handle(
    session: &mut Session,
    employee: &str,
    product: &str,
    start: &str,
    end: &str,
) -> Result<()> {
    let record = session.submit_record(employee, product, start, end)?;
    console::render_added(&record);
    Ok(())
}
