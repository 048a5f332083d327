/*!
 * Dynamic-Quantum Round-Robin Simulator
 * Core scheduling functionality exposed as a library
 */

pub mod core;
pub mod monitoring;
pub mod report;
pub mod scheduler;
pub mod terminal;

// Re-exports
pub use crate::core::errors::{ConfigError, Result, SimulatorError};
pub use crate::core::limits::MAX_PROCESSES;
pub use crate::core::types::{Pid, ProcessSpec, SimulationConfig, Ticks};
pub use monitoring::init_tracing;
pub use report::render_report;
pub use scheduler::{dynamic_quantum, BatchMetrics, ProcessRecord, Scheduler};
pub use terminal::read_config;
