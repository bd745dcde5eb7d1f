//! `PriorityScheduler` — bucketed FIFO priority queue.
//!
//! Priorities are small integers that grow by a class weight each
//! generation, so many candidates share a priority.  Bucketing them in a
//! `BTreeMap` gives O(log P) push and pop where P is the number of distinct
//! pending priorities, and keeps FIFO order inside a bucket for free.  A
//! binary heap would need a sequence counter to be stable.

use std::collections::{BTreeMap, VecDeque};

use rg_core::Priority;

use crate::{ScheduleError, ScheduleResult};

/// Min-priority queue with FIFO tie-breaking.
pub struct PriorityScheduler<T> {
    buckets: BTreeMap<Priority, VecDeque<T>>,
    /// Cached total item count for O(1) `len()`.
    total:   usize,
}

impl<T> Default for PriorityScheduler<T> {
    fn default() -> Self {
        Self { buckets: BTreeMap::new(), total: 0 }
    }
}

impl<T> PriorityScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T, priority: Priority) {
        self.buckets.entry(priority).or_default().push_back(item);
        self.total += 1;
    }

    /// Remove and return the oldest item of the lowest priority.
    pub fn pop(&mut self) -> ScheduleResult<T> {
        let mut bucket = self.buckets.first_entry().ok_or(ScheduleError::EmptyQueue)?;
        let item = bucket.get_mut().pop_front().ok_or(ScheduleError::EmptyQueue)?;
        if bucket.get().is_empty() {
            bucket.remove();
        }
        self.total -= 1;
        Ok(item)
    }

    /// The item `pop` would return next.
    pub fn peek(&self) -> ScheduleResult<&T> {
        self.buckets
            .values()
            .next()
            .and_then(VecDeque::front)
            .ok_or(ScheduleError::EmptyQueue)
    }

    /// Lowest pending priority, or `None` if empty.
    pub fn next_priority(&self) -> Option<Priority> {
        self.buckets.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Drop every pending item.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.total = 0;
    }
}
