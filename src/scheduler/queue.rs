/*!
 * Ready Queue
 * FIFO admission and re-queueing discipline over process slots
 */

use super::record::ProcessRecord;
use crate::core::types::Ticks;
use log::trace;
use std::collections::VecDeque;

/// Index of a record in the arrival-sorted batch
pub(super) type Slot = usize;

/// FIFO queue of ready process slots, duplicate-free at every instant
#[derive(Debug)]
pub(super) struct ReadyQueue {
    slots: VecDeque<Slot>,
}

impl ReadyQueue {
    pub fn with_capacity(processes: usize) -> Self {
        // The queue never holds duplicates, so one slot per process suffices
        Self {
            slots: VecDeque::with_capacity(processes),
        }
    }

    /// Enqueue every eligible process not already present.
    ///
    /// Scan order is record-array order (post arrival-sort), so processes
    /// becoming eligible at the same tick enter in arrival order with input
    /// order breaking ties.
    pub fn admit(&mut self, records: &[ProcessRecord], clock: Ticks) {
        for (slot, record) in records.iter().enumerate() {
            if record.arrival_time() <= clock && !record.is_complete() && !self.contains(slot) {
                trace!("process {} enters ready queue at tick {}", record.pid(), clock);
                self.slots.push_back(slot);
            }
        }
    }

    /// Pop the front slot, if any
    pub fn next(&mut self) -> Option<Slot> {
        self.slots.pop_front()
    }

    /// Append a just-executed, still-incomplete slot at the tail
    pub fn requeue(&mut self, slot: Slot) {
        debug_assert!(!self.contains(slot), "slot {slot} already queued");
        self.slots.push_back(slot);
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // Linear scan is fine at the batch sizes the limits allow; FIFO order
    // comes from insertion order, not from the membership check
    fn contains(&self, slot: Slot) -> bool {
        self.slots.iter().any(|&queued| queued == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(specs: &[(Ticks, Ticks)]) -> Vec<ProcessRecord> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(burst, arrival))| ProcessRecord::new(i as u32 + 1, burst, arrival))
            .collect()
    }

    #[test]
    fn test_admits_in_array_order() {
        let batch = records(&[(5, 0), (5, 0), (5, 0)]);
        let mut queue = ReadyQueue::with_capacity(batch.len());
        queue.admit(&batch, 0);
        assert_eq!(queue.next(), Some(0));
        assert_eq!(queue.next(), Some(1));
        assert_eq!(queue.next(), Some(2));
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn test_skips_processes_not_yet_arrived() {
        let batch = records(&[(5, 0), (5, 3)]);
        let mut queue = ReadyQueue::with_capacity(batch.len());
        queue.admit(&batch, 1);
        assert_eq!(queue.next(), Some(0));
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn test_rescan_does_not_duplicate() {
        let batch = records(&[(5, 0)]);
        let mut queue = ReadyQueue::with_capacity(batch.len());
        queue.admit(&batch, 0);
        queue.admit(&batch, 1);
        assert_eq!(queue.next(), Some(0));
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn test_skips_completed_processes() {
        let mut batch = records(&[(2, 0), (5, 0)]);
        batch[0].execute(2);
        let mut queue = ReadyQueue::with_capacity(batch.len());
        queue.admit(&batch, 4);
        assert_eq!(queue.next(), Some(1));
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn test_requeue_goes_to_tail() {
        let batch = records(&[(5, 0), (5, 0)]);
        let mut queue = ReadyQueue::with_capacity(batch.len());
        queue.admit(&batch, 0);
        let first = queue.next().unwrap();
        queue.requeue(first);
        assert_eq!(queue.next(), Some(1));
        assert_eq!(queue.next(), Some(0));
    }
}
