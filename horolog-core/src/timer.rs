//! Cooperative single-shot timer queue
//!
//! All display timing (info-step advance, secondary timeout, status
//! hold) runs on one host loop. Timers are plain deadline entries polled
//! from that loop; nothing fires preemptively. Handles carry a
//! generation id so cancelling a stale handle can never kill a timer
//! scheduled later into the same slot.

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Handle {
    slot: u8,
    id: u32,
}

#[derive(Debug, Clone, Copy)]
struct Entry<T> {
    id: u32,
    deadline_ms: u64,
    token: T,
}

/// Fixed-capacity queue of single-shot timers
///
/// `T` is the token handed back when a timer fires; the owner matches
/// tokens to actions at a single dispatch point.
#[derive(Debug)]
pub struct TimerQueue<T: Copy, const N: usize> {
    slots: [Option<Entry<T>>; N],
    next_id: u32,
}

impl<T: Copy, const N: usize> TimerQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            next_id: 0,
        }
    }

    /// Schedule `token` to fire `delay_ms` after `now_ms`.
    ///
    /// Returns None when all slots are occupied.
    pub fn schedule_once(&mut self, now_ms: u64, delay_ms: u64, token: T) -> Option<Handle> {
        let slot = self.slots.iter().position(Option::is_none)?;
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.slots[slot] = Some(Entry {
            id,
            deadline_ms: now_ms + delay_ms,
            token,
        });
        Some(Handle {
            slot: slot as u8,
            id,
        })
    }

    /// Cancel a pending timer. A stale or already-fired handle is a no-op.
    pub fn cancel(&mut self, handle: Handle) {
        if let Some(slot) = self.slots.get_mut(usize::from(handle.slot)) {
            if slot.map(|e| e.id) == Some(handle.id) {
                *slot = None;
            }
        }
    }

    /// Whether the timer behind `handle` is still pending.
    pub fn is_pending(&self, handle: Handle) -> bool {
        self.slots
            .get(usize::from(handle.slot))
            .and_then(|s| *s)
            .map(|e| e.id == handle.id)
            .unwrap_or(false)
    }

    /// Pop the earliest-deadline timer that is due at `now_ms`.
    ///
    /// Call in a loop each host iteration; returns None once nothing
    /// else is due.
    pub fn poll_expired(&mut self, now_ms: u64) -> Option<T> {
        let slot = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|e| (i, e.deadline_ms)))
            .filter(|&(_, deadline)| deadline <= now_ms)
            .min_by_key(|&(_, deadline)| deadline)
            .map(|(i, _)| i)?;
        let entry = self.slots[slot].take()?;
        Some(entry.token)
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.slots = [None; N];
    }
}

impl<T: Copy, const N: usize> Default for TimerQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_deadline() {
        let mut q: TimerQueue<u8, 4> = TimerQueue::new();
        q.schedule_once(0, 100, 7).unwrap();

        assert_eq!(q.poll_expired(99), None);
        assert_eq!(q.poll_expired(100), Some(7));
        // Single shot: gone after firing
        assert_eq!(q.poll_expired(1000), None);
    }

    #[test]
    fn test_earliest_first() {
        let mut q: TimerQueue<u8, 4> = TimerQueue::new();
        q.schedule_once(0, 200, 2).unwrap();
        q.schedule_once(0, 100, 1).unwrap();

        assert_eq!(q.poll_expired(500), Some(1));
        assert_eq!(q.poll_expired(500), Some(2));
        assert_eq!(q.poll_expired(500), None);
    }

    #[test]
    fn test_cancel() {
        let mut q: TimerQueue<u8, 4> = TimerQueue::new();
        let h = q.schedule_once(0, 100, 1).unwrap();
        assert!(q.is_pending(h));

        q.cancel(h);
        assert!(!q.is_pending(h));
        assert_eq!(q.poll_expired(1000), None);
    }

    #[test]
    fn test_stale_cancel_is_noop() {
        let mut q: TimerQueue<u8, 4> = TimerQueue::new();
        let old = q.schedule_once(0, 100, 1).unwrap();
        assert_eq!(q.poll_expired(100), Some(1));

        // A new timer lands in the same slot; the stale handle must not
        // be able to cancel it.
        let new = q.schedule_once(100, 100, 2).unwrap();
        q.cancel(old);
        assert!(q.is_pending(new));
        assert_eq!(q.poll_expired(200), Some(2));
    }

    #[test]
    fn test_capacity() {
        let mut q: TimerQueue<u8, 2> = TimerQueue::new();
        assert!(q.schedule_once(0, 1, 1).is_some());
        assert!(q.schedule_once(0, 1, 2).is_some());
        assert!(q.schedule_once(0, 1, 3).is_none());
    }
}
