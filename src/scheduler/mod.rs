/*!
 * Dynamic-Quantum Round-Robin Scheduler
 * Deterministic batch simulation with a frequency-scaled time quantum
 */

use crate::core::errors::ConfigError;
use crate::core::limits::MAX_PROCESSES;
use crate::core::types::{Pid, SimulationConfig, Ticks};
use log::info;

mod metrics;
mod operations;
mod quantum;
mod queue;
mod record;

pub use metrics::{BatchMetrics, TruncatedAverage};
pub use quantum::dynamic_quantum;
pub use record::ProcessRecord;

use queue::ReadyQueue;

/// Batch scheduler
///
/// Owns the process records and the ready queue for the duration of a run.
/// The simulation is single-threaded and fully deterministic: identical
/// configurations produce identical clock traces and metrics.
#[derive(Debug)]
pub struct Scheduler {
    records: Vec<ProcessRecord>,
    queue: ReadyQueue,
    clock: Ticks,
    total_executed: f64,
    base_quantum: Ticks,
    completed: usize,
}

impl Scheduler {
    /// Build a scheduler from a configuration, rejecting invalid input
    /// before the dispatch loop can start.
    ///
    /// Records are assigned pids in input order (1..N), then stably sorted
    /// by arrival time. The sorted order fixes both initial admission and
    /// the tie-break among simultaneous arrivals for the whole run.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        if config.base_quantum == 0 {
            return Err(ConfigError::InvalidQuantum(config.base_quantum));
        }
        if config.processes.is_empty() {
            return Err(ConfigError::EmptyBatch);
        }
        if config.processes.len() > MAX_PROCESSES {
            return Err(ConfigError::BatchTooLarge {
                requested: config.processes.len(),
                limit: MAX_PROCESSES,
            });
        }

        let mut records = Vec::with_capacity(config.processes.len());
        for (index, spec) in config.processes.iter().enumerate() {
            let pid = index as Pid + 1;
            if spec.burst_time == 0 {
                return Err(ConfigError::ZeroBurst(pid));
            }
            records.push(ProcessRecord::new(pid, spec.burst_time, spec.arrival_time));
        }

        // Stable sort: equal arrivals keep input (pid) order
        records.sort_by_key(|record| record.arrival_time());

        let queue = ReadyQueue::with_capacity(records.len());

        info!(
            "Scheduler initialized: {} processes, base quantum {}",
            records.len(),
            config.base_quantum
        );

        Ok(Self {
            records,
            queue,
            clock: 0,
            total_executed: 0.0,
            base_quantum: config.base_quantum,
            completed: 0,
        })
    }

    /// Current virtual-clock value
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    /// Process records in arrival-sorted order
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Consume the scheduler and take ownership of the records
    pub fn into_records(self) -> Vec<ProcessRecord> {
        self.records
    }
}
