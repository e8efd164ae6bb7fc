use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use shiftlog_engine::StatsReport;
use shiftlog_types::{Record, RecordFilter, TIMESTAMP_FORMAT};

fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

fn describe_filter(filter: &RecordFilter) -> String {
    if filter.is_unconstrained() {
        String::new()
    } else {
        format!(" (filter: {})", filter_summary(filter))
    }
}

fn filter_summary(filter: &RecordFilter) -> String {
    use shiftlog_types::FieldFilter;

    let mut parts = Vec::new();
    if let FieldFilter::Exact(employee) = &filter.employee {
        parts.push(format!("employee={}", employee));
    }
    if let FieldFilter::Exact(product) = &filter.product {
        parts.push(format!("product={}", product));
    }
    parts.join(", ")
}

pub fn render_added(record: &Record) {
    println!(
        "Recorded: {} on {} from {} to {} ({})",
        record.employee,
        record.product,
        record.start.format(TIMESTAMP_FORMAT),
        record.end.format(TIMESTAMP_FORMAT),
        format_minutes(record.duration_minutes),
    );
}

pub fn render_records(records: &[Record], filter: &RecordFilter) {
    if records.is_empty() {
        println!("No records{}.", describe_filter(filter));
        return;
    }

    println!(
        "{:<18} {:<18} {:<17} {:<17} {:>10}",
        "EMPLOYEE", "PRODUCT", "START", "END", "MINUTES"
    );
    println!("{}", "-".repeat(84));

    for record in records {
        println!(
            "{:<18} {:<18} {:<17} {:<17} {:>10.1}",
            record.employee,
            record.product,
            record.start.format(TIMESTAMP_FORMAT),
            record.end.format(TIMESTAMP_FORMAT),
            record.duration_minutes,
        );
    }

    println!("\n{} record(s){}", records.len(), describe_filter(filter));
}

pub fn write_records_csv<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[Record],
) -> anyhow::Result<()> {
    writer.write_record(["employee", "product", "start", "end", "duration_minutes"])?;
    for record in records {
        writer.write_record([
            record.employee.as_str(),
            record.product.as_str(),
            &record.start.format(TIMESTAMP_FORMAT).to_string(),
            &record.end.format(TIMESTAMP_FORMAT).to_string(),
            &record.duration_minutes.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn render_stats(report: &StatsReport) {
    println!(
        "{:<18} {:>8} {:>12} {:>12}",
        "EMPLOYEE", "RECORDS", "MEAN_MIN", "STDDEV_MIN"
    );
    println!("{}", "-".repeat(54));

    for stats in &report.employees {
        let stddev = match stats.stddev_minutes {
            Some(value) => format!("{:.1}", value),
            // n/a, not zero: one sample has no defined stddev
            None => "n/a".to_string(),
        };
        println!(
            "{:<18} {:>8} {:>12.1} {:>12}",
            stats.employee, stats.record_count, stats.mean_minutes, stddev
        );
    }

    println!();
    if color_enabled() {
        println!("Fastest employee: {}", report.fastest.green());
        println!("Slowest employee: {}", report.slowest.red());
    } else {
        println!("Fastest employee: {}", report.fastest);
        println!("Slowest employee: {}", report.slowest);
    }
}

pub fn render_no_data(filter: &RecordFilter) {
    println!("No records to analyze{}.", describe_filter(filter));
}

pub fn format_minutes(minutes: f64) -> String {
    format!("{:.1} min", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftlog_types::FieldFilter;

    #[test]
    fn test_filter_summary_lists_constrained_fields() {
        let filter = RecordFilter::new(
            FieldFilter::Exact("Ada".to_string()),
            FieldFilter::Exact("Widget".to_string()),
        );
        assert_eq!(filter_summary(&filter), "employee=Ada, product=Widget");
    }

    #[test]
    fn test_describe_filter_empty_for_unconstrained() {
        assert_eq!(describe_filter(&RecordFilter::default()), "");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45.0), "45.0 min");
        assert_eq!(format_minutes(1.5), "1.5 min");
    }
}
