/*!
 * Report Rendering
 * Tabular presentation of a finished batch
 */

use crate::scheduler::{BatchMetrics, ProcessRecord};
use std::fmt::Write;

const COLUMNS: [&str; 6] = [
    "Process ID",
    "Burst Time",
    "Arrival Time",
    "Start Time",
    "Wait Time",
    "Turnaround Time",
];

const COLUMN_WIDTH: usize = 16;

/// Render the per-process table in final (arrival-sorted) order, followed
/// by the batch averages when the batch is non-empty.
pub fn render_report(records: &[ProcessRecord], metrics: Option<BatchMetrics>) -> String {
    let mut out = String::new();

    for column in COLUMNS {
        let _ = write!(out, "{column:<COLUMN_WIDTH$}");
    }
    out.push('\n');

    for record in records {
        let _ = write!(out, "{:<COLUMN_WIDTH$}", record.pid());
        let _ = write!(out, "{:<COLUMN_WIDTH$}", record.burst_time());
        let _ = write!(out, "{:<COLUMN_WIDTH$}", record.arrival_time());
        let _ = write!(out, "{:<COLUMN_WIDTH$}", record.start_time().unwrap_or(0));
        let _ = write!(out, "{:<COLUMN_WIDTH$}", record.wait_time());
        let _ = write!(out, "{:<COLUMN_WIDTH$}", record.turnaround_time());
        out.push('\n');
    }

    if let Some(metrics) = metrics {
        let _ = write!(
            out,
            "\nAverage Wait Time: {}\nAverage Turnaround Time: {}\n",
            metrics.avg_wait, metrics.avg_turnaround
        );
    }

    out
}
