/*!
 * Process Records
 * Per-process state tracked across the simulation
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// Mutable per-process simulation state
///
/// A record is *complete* once `remaining_time` reaches zero; a complete
/// record is never dispatched again and its wait/turnaround metrics are
/// frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pid: Pid,
    burst_time: Ticks,
    arrival_time: Ticks,
    remaining_time: Ticks,
    wait_time: Ticks,
    turnaround_time: Ticks,
    start_time: Option<Ticks>,
    scheduled_count: u64,
}

impl ProcessRecord {
    pub(super) fn new(pid: Pid, burst_time: Ticks, arrival_time: Ticks) -> Self {
        Self {
            pid,
            burst_time,
            arrival_time,
            remaining_time: burst_time,
            wait_time: 0,
            turnaround_time: 0,
            start_time: None,
            scheduled_count: 0,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    /// Time spent ready but not running; frozen at completion
    pub fn wait_time(&self) -> Ticks {
        self.wait_time
    }

    /// Completion instant minus arrival instant; frozen at completion
    pub fn turnaround_time(&self) -> Ticks {
        self.turnaround_time
    }

    /// Clock value of the first dispatch, `None` before it
    pub fn start_time(&self) -> Option<Ticks> {
        self.start_time
    }

    /// Number of dispatches so far
    pub fn scheduled_count(&self) -> u64 {
        self.scheduled_count
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Record a dispatch: set the start time on the first one, and count it
    pub(super) fn mark_dispatched(&mut self, clock: Ticks) {
        if self.start_time.is_none() {
            self.start_time = Some(clock);
        }
        self.scheduled_count += 1;
    }

    /// Consume executed ticks from the remaining demand
    pub(super) fn execute(&mut self, ticks: Ticks) {
        debug_assert!(
            ticks <= self.remaining_time,
            "process {} executed past its remaining demand",
            self.pid
        );
        self.remaining_time -= ticks;
    }

    /// Freeze turnaround and wait metrics at the completion instant
    pub(super) fn complete(&mut self, clock: Ticks) {
        debug_assert!(self.is_complete(), "process {} still has demand", self.pid);
        self.turnaround_time = clock - self.arrival_time;
        self.wait_time = self.turnaround_time - self.burst_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_holds_full_demand() {
        let record = ProcessRecord::new(1, 10, 3);
        assert_eq!(record.remaining_time(), 10);
        assert_eq!(record.start_time(), None);
        assert_eq!(record.scheduled_count(), 0);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_start_time_set_only_on_first_dispatch() {
        let mut record = ProcessRecord::new(1, 10, 0);
        record.mark_dispatched(4);
        record.mark_dispatched(9);
        assert_eq!(record.start_time(), Some(4));
        assert_eq!(record.scheduled_count(), 2);
    }

    #[test]
    fn test_execute_decrements_remaining() {
        let mut record = ProcessRecord::new(1, 10, 0);
        record.execute(4);
        assert_eq!(record.remaining_time(), 6);
        record.execute(6);
        assert!(record.is_complete());
    }

    #[test]
    fn test_complete_freezes_metrics() {
        let mut record = ProcessRecord::new(1, 5, 2);
        record.mark_dispatched(3);
        record.execute(5);
        record.complete(8);
        assert_eq!(record.turnaround_time(), 6);
        assert_eq!(record.wait_time(), 1);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = ProcessRecord::new(2, 7, 1);
        record.mark_dispatched(1);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ProcessRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
