//! Unit tests for rg-schedule.

use rg_core::Priority;

use crate::{PriorityScheduler, ScheduleError};

#[cfg(test)]
mod scheduler {
    use super::*;

    #[test]
    fn ascending_priority_then_fifo() {
        let mut s = PriorityScheduler::new();
        s.push('A', Priority(3));
        s.push('B', Priority(1));
        s.push('C', Priority(1));
        s.push('D', Priority(3));

        let order: Vec<char> = std::iter::from_fn(|| s.pop().ok()).collect();
        assert_eq!(order, vec!['B', 'C', 'A', 'D']);
    }

    #[test]
    fn empty_pop_and_peek_fail() {
        let mut s: PriorityScheduler<u8> = PriorityScheduler::new();
        assert_eq!(s.pop(), Err(ScheduleError::EmptyQueue));
        assert_eq!(s.peek(), Err(ScheduleError::EmptyQueue));
        assert_eq!(s.next_priority(), None);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut s = PriorityScheduler::new();
        s.push(7u32, Priority(2));
        s.push(9u32, Priority(0));
        assert_eq!(s.peek(), Ok(&9));
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop(), Ok(9));
        assert_eq!(s.peek(), Ok(&7));
    }

    #[test]
    fn counts_track_buckets() {
        let mut s = PriorityScheduler::new();
        assert!(s.is_empty());
        s.push("x", Priority(5));
        s.push("y", Priority(5));
        s.push("z", Priority(1));
        assert_eq!(s.len(), 3);
        assert_eq!(s.next_priority(), Some(Priority(1)));

        assert_eq!(s.pop(), Ok("z"));
        assert_eq!(s.len(), 2);
        assert_eq!(s.next_priority(), Some(Priority(5)));

        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.next_priority(), None);
    }

    #[test]
    fn interleaved_push_during_drain() {
        let mut s = PriorityScheduler::new();
        s.push(0, Priority(0));
        let mut seen = Vec::new();
        while let Ok(n) = s.pop() {
            seen.push(n);
            if n < 3 {
                // Children land behind already-queued work at the same priority.
                s.push(n + 1, Priority(n as u32 + 1));
                s.push(n + 10, Priority(n as u32 + 1));
            }
        }
        assert_eq!(seen, vec![0, 1, 10, 2, 11, 3, 12]);
    }
}
