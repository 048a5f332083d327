/*!
 * Scheduler Operations
 * The dispatch loop driving the virtual clock to batch completion
 */

use super::quantum::dynamic_quantum;
use super::queue::Slot;
use super::record::ProcessRecord;
use super::Scheduler;
use crate::core::types::Ticks;
use log::{debug, info};

impl Scheduler {
    /// Run the simulation to completion and return the finished records.
    ///
    /// Each iteration admits newly eligible processes, then either
    /// dispatches the queue front or, with nobody ready, burns one idle
    /// tick and re-scans. Idle ticks do not count as execution time.
    pub fn run(&mut self) -> &[ProcessRecord] {
        while self.completed < self.records.len() {
            self.queue.admit(&self.records, self.clock);

            match self.queue.next() {
                Some(slot) => self.dispatch(slot),
                None => self.clock += 1,
            }
        }

        info!(
            "Batch complete at tick {}: {} processes finished",
            self.clock, self.completed
        );
        &self.records
    }

    /// Execute one dispatch of the given slot.
    fn dispatch(&mut self, slot: Slot) {
        let record = &mut self.records[slot];
        record.mark_dispatched(self.clock);

        let quantum = dynamic_quantum(
            self.base_quantum as f64,
            record.scheduled_count(),
            self.total_executed,
        );
        // The clock advances in whole ticks: truncate the quantum, never round
        let executed = quantum.min(record.remaining_time() as f64) as Ticks;

        debug!(
            "Dispatch {}: process {} runs {} ticks at tick {} (quantum {:.3})",
            record.scheduled_count(),
            record.pid(),
            executed,
            self.clock,
            quantum
        );

        record.execute(executed);
        self.clock += executed;
        self.total_executed += executed as f64;

        if record.is_complete() {
            record.complete(self.clock);
            self.completed += 1;
            info!(
                "Process {} completed at tick {}: turnaround {}, wait {}",
                record.pid(),
                self.clock,
                record.turnaround_time(),
                record.wait_time()
            );
        } else {
            self.queue.requeue(slot);
        }
    }
}
