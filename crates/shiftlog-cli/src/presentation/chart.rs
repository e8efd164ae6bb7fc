use shiftlog_engine::StatsReport;

/// Terminal bar chart of per-employee standard deviations.
///
/// Employees with an undefined stddev (single record) are listed with a
/// marker instead of a bar; they are never drawn as a zero-length bar.
pub fn render_stddev_chart(report: &StatsReport, max_width: usize) {
    let max_stddev = report
        .employees
        .iter()
        .filter_map(|s| s.stddev_minutes)
        .fold(0.0_f64, f64::max);

    println!("Stddev of duration per employee (minutes)");

    let label_width = report
        .employees
        .iter()
        .map(|s| s.employee.len())
        .max()
        .unwrap_or(0);

    for stats in &report.employees {
        match stats.stddev_minutes {
            Some(value) => {
                let bar = "#".repeat(bar_length(value, max_stddev, max_width));
                println!(
                    "{:<width$}  {} {:.1}",
                    stats.employee,
                    bar,
                    value,
                    width = label_width
                );
            }
            None => {
                println!(
                    "{:<width$}  n/a (single record)",
                    stats.employee,
                    width = label_width
                );
            }
        }
    }
}

fn bar_length(value: f64, max_value: f64, max_width: usize) -> usize {
    if max_value <= 0.0 {
        // All defined stddevs are zero (identical durations); show a
        // minimal bar so the row is still visible
        return 1;
    }
    ((value / max_value) * max_width as f64).round().max(1.0) as usize
}
