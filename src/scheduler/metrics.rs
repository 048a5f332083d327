/*!
 * Batch Metrics
 * Post-run aggregation of wait and turnaround averages
 */

use super::record::ProcessRecord;
use super::Scheduler;
use crate::core::types::Ticks;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An average scaled by 100 and truncated (not rounded) to hundredths
///
/// 12.345 reports as `12.34`. Truncation is a compatibility requirement,
/// implemented with exact integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncatedAverage {
    hundredths: u64,
}

impl TruncatedAverage {
    fn new(sum: Ticks, count: usize) -> Self {
        // Integer division truncates toward zero, exactly the policy required
        Self {
            hundredths: sum * 100 / count as u64,
        }
    }

    pub fn whole(&self) -> u64 {
        self.hundredths / 100
    }

    pub fn fraction(&self) -> u64 {
        self.hundredths % 100
    }
}

impl fmt::Display for TruncatedAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole(), self.fraction())
    }
}

/// Aggregated metrics for a completed batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchMetrics {
    pub avg_wait: TruncatedAverage,
    pub avg_turnaround: TruncatedAverage,
}

impl BatchMetrics {
    /// Reduce a completed collection to its batch averages.
    ///
    /// Returns `None` for an empty collection; configuration validation
    /// makes that unreachable through the engine.
    pub fn summarize(records: &[ProcessRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let total_wait: Ticks = records.iter().map(ProcessRecord::wait_time).sum();
        let total_turnaround: Ticks = records.iter().map(ProcessRecord::turnaround_time).sum();

        Some(Self {
            avg_wait: TruncatedAverage::new(total_wait, records.len()),
            avg_turnaround: TruncatedAverage::new(total_turnaround, records.len()),
        })
    }
}

impl Scheduler {
    /// Batch averages over the current record state
    pub fn metrics(&self) -> Option<BatchMetrics> {
        BatchMetrics::summarize(self.records())
    }
}
