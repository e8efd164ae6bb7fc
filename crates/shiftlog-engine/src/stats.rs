use serde::{Deserialize, Serialize};
use shiftlog_types::{Record, RecordField};

use crate::distinct::distinct_values;

/// Duration statistics for one employee's group of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub employee: String,
    pub record_count: usize,
    /// Arithmetic mean of `duration_minutes` over the group.
    pub mean_minutes: f64,
    /// Sample standard deviation (n-1 denominator). `None` for a
    /// single-record group: a one-sample stddev is mathematically
    /// undefined, and reporting zero would conflate it with zero
    /// variance.
    pub stddev_minutes: Option<f64>,
}

/// Grouped per-employee statistics over a filtered view, plus the
/// fastest/slowest selection by mean duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Per-employee stats in first-seen employee order.
    pub employees: Vec<EmployeeStats>,
    /// Employee with the minimum mean duration (first seen wins ties).
    pub fastest: String,
    /// Employee with the maximum mean duration (first seen wins ties).
    pub slowest: String,
}

/// Group a filtered view by employee and compute mean / sample stddev
/// per group, selecting fastest and slowest by mean.
///
/// Returns `None` for an empty view, so callers can distinguish "zero
/// records" from "records with undefined variance". Tie-breaks on the
/// fastest/slowest selection are deterministic: the employee appearing
/// first in the view wins.
pub fn grouped_statistics(records: &[Record]) -> Option<StatsReport> {
    if records.is_empty() {
        return None;
    }

    let employees: Vec<EmployeeStats> = distinct_values(records, RecordField::Employee)
        .into_iter()
        .map(|employee| {
            let durations: Vec<f64> = records
                .iter()
                .filter(|r| r.employee == employee)
                .map(|r| r.duration_minutes)
                .collect();
            EmployeeStats {
                record_count: durations.len(),
                mean_minutes: mean(&durations),
                stddev_minutes: sample_stddev(&durations),
                employee,
            }
        })
        .collect();

    // First-seen order plus strict comparisons makes the selection
    // deterministic under ties.
    let mut fastest = &employees[0];
    let mut slowest = &employees[0];
    for stats in &employees[1..] {
        if stats.mean_minutes < fastest.mean_minutes {
            fastest = stats;
        }
        if stats.mean_minutes > slowest.mean_minutes {
            slowest = stats;
        }
    }

    Some(StatsReport {
        fastest: fastest.employee.clone(),
        slowest: slowest.employee.clone(),
        employees,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction; `None` when fewer
/// than two samples exist.
fn sample_stddev(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}
