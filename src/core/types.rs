/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};

/// Process ID type
pub type Pid = u32;

/// Virtual-clock tick count
///
/// The clock only advances in whole ticks: one unit per idle step, or the
/// truncated execution duration per dispatch.
pub type Ticks = u64;

/// Input descriptor for a single process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub burst_time: Ticks,
    pub arrival_time: Ticks,
}

impl ProcessSpec {
    pub fn new(burst_time: Ticks, arrival_time: Ticks) -> Self {
        Self {
            burst_time,
            arrival_time,
        }
    }
}

/// Configuration for a single simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationConfig {
    pub base_quantum: Ticks,
    pub processes: Vec<ProcessSpec>,
}

impl SimulationConfig {
    pub fn new(base_quantum: Ticks) -> Self {
        Self {
            base_quantum,
            processes: Vec::new(),
        }
    }

    pub fn with_process(mut self, burst_time: Ticks, arrival_time: Ticks) -> Self {
        self.processes.push(ProcessSpec::new(burst_time, arrival_time));
        self
    }
}
