//! Deferred work: a virtual clock, generation-tagged tasks, and the session timer.
//!
//! The engine never sleeps or spawns. Hosts move the clock forward and the
//! scheduler hands back every task that fell due, earliest first; tasks due
//! at the same instant come back in the order they were scheduled.
//!
//! Every task carries the `Generation` of the session that scheduled it, so
//! a task that outlives its session can be recognised and dropped.
//!
//! ```
//! use memory_match::core::Generation;
//! use memory_match::session::{Scheduler, TaskKind};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(1000, Generation(1), TaskKind::Evaluate);
//! scheduler.schedule(500, Generation(1), TaskKind::Tick);
//!
//! let first = scheduler.next_due(2000).unwrap();
//! assert_eq!(first.kind, TaskKind::Tick);
//! assert_eq!(scheduler.now_ms(), 500);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{CardId, Generation};

/// Identifier of a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// What a task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// One second of play time.
    Tick,
    /// Evaluate the pending pair.
    Evaluate,
    /// Turn a hinted pair back face down.
    EndHintPreview([CardId; 2]),
}

/// A task handed back by `Scheduler::next_due`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DueTask {
    pub id: TaskId,
    pub due_ms: u64,
    pub generation: Generation,
    pub kind: TaskKind,
}

#[derive(Debug)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    generation: Generation,
    kind: TaskKind,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // Reversed: BinaryHeap is a max-heap and the earliest task must be on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Virtual clock plus a queue of one-shot tasks.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Scheduled>,
}

impl Scheduler {
    /// Create a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `kind` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, generation: Generation, kind: TaskKind) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            generation,
            kind,
        });
        TaskId(seq)
    }

    /// Cancel one task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|t| t.seq != id.0);
        self.queue.len() != before
    }

    /// Cancel every task of a generation. Returns how many were removed.
    pub fn cancel_generation(&mut self, generation: Generation) -> usize {
        let before = self.queue.len();
        self.queue.retain(|t| t.generation != generation);
        before - self.queue.len()
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Number of queued tasks for one generation.
    #[must_use]
    pub fn pending_for(&self, generation: Generation) -> usize {
        self.queue.iter().filter(|t| t.generation == generation).count()
    }

    /// Is a task of `kind` queued for `generation`?
    #[must_use]
    pub fn has_pending(&self, generation: Generation, kind: TaskKind) -> bool {
        self.queue
            .iter()
            .any(|t| t.generation == generation && t.kind == kind)
    }

    /// Pop the earliest task due at or before `until_ms`.
    ///
    /// The clock moves to the task's due time before it is returned.
    pub fn next_due(&mut self, until_ms: u64) -> Option<DueTask> {
        if self.queue.peek()?.due_ms > until_ms {
            return None;
        }
        let task = self.queue.pop()?;
        self.now_ms = self.now_ms.max(task.due_ms);
        Some(DueTask {
            id: TaskId(task.seq),
            due_ms: task.due_ms,
            generation: task.generation,
            kind: task.kind,
        })
    }

    /// Move the clock forward without firing anything.
    pub fn advance_clock_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}

/// The repeating per-second tick of one session.
///
/// Repetition is a chain of one-shot `Tick` tasks: each fired tick schedules
/// the next. Stopping cancels the queued link, which ends the chain.
#[derive(Debug, Default)]
pub struct SessionTimer {
    handle: Option<(Generation, TaskId)>,
}

impl SessionTimer {
    /// Create a stopped timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking for `generation`, replacing any running chain.
    ///
    /// A zero period is raised to 1 ms so every link lands strictly in the future.
    pub fn start(&mut self, scheduler: &mut Scheduler, generation: Generation, period_ms: u64) {
        self.stop(scheduler);
        let id = scheduler.schedule(period_ms.max(1), generation, TaskKind::Tick);
        self.handle = Some((generation, id));
    }

    /// Schedule the next link after a tick for `generation` fired.
    ///
    /// Ignored if the timer was stopped or restarted for another generation.
    pub fn rearm(&mut self, scheduler: &mut Scheduler, generation: Generation, period_ms: u64) {
        match self.handle {
            Some((current, _)) if current == generation => {
                let id = scheduler.schedule(period_ms.max(1), generation, TaskKind::Tick);
                self.handle = Some((generation, id));
            }
            _ => {}
        }
    }

    /// Stop ticking. Safe to call when already stopped.
    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if let Some((_, id)) = self.handle.take() {
            scheduler.cancel(id);
        }
    }

    /// Is the timer running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Generation the timer is ticking for.
    #[must_use]
    pub fn generation(&self) -> Option<Generation> {
        self.handle.map(|(generation, _)| generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G1: Generation = Generation(1);
    const G2: Generation = Generation(2);

    #[test]
    fn test_due_order() {
        let mut s = Scheduler::new();
        s.schedule(300, G1, TaskKind::Evaluate);
        s.schedule(100, G1, TaskKind::Tick);
        s.schedule(300, G1, TaskKind::Tick);

        let order: Vec<_> = std::iter::from_fn(|| s.next_due(1000))
            .map(|t| (t.due_ms, t.kind))
            .collect();
        assert_eq!(
            order,
            vec![
                (100, TaskKind::Tick),
                (300, TaskKind::Evaluate),
                (300, TaskKind::Tick),
            ]
        );
        assert_eq!(s.now_ms(), 300);
    }

    #[test]
    fn test_not_yet_due() {
        let mut s = Scheduler::new();
        s.schedule(1000, G1, TaskKind::Evaluate);

        assert!(s.next_due(999).is_none());
        assert_eq!(s.pending_count(), 1);
        assert!(s.next_due(1000).is_some());
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut s = Scheduler::new();
        s.advance_clock_to(5000);
        s.schedule(1000, G1, TaskKind::Evaluate);

        assert!(s.next_due(5999).is_none());
        assert_eq!(s.next_due(6000).unwrap().due_ms, 6000);
    }

    #[test]
    fn test_cancel() {
        let mut s = Scheduler::new();
        let id = s.schedule(10, G1, TaskKind::Tick);

        assert!(s.cancel(id));
        assert!(!s.cancel(id));
        assert!(s.next_due(100).is_none());
    }

    #[test]
    fn test_cancel_generation() {
        let mut s = Scheduler::new();
        s.schedule(10, G1, TaskKind::Tick);
        s.schedule(20, G1, TaskKind::Evaluate);
        s.schedule(30, G2, TaskKind::Tick);

        assert_eq!(s.cancel_generation(G1), 2);
        assert_eq!(s.pending_for(G1), 0);
        assert_eq!(s.pending_for(G2), 1);
        assert!(s.has_pending(G2, TaskKind::Tick));
    }

    #[test]
    fn test_clock_never_goes_back() {
        let mut s = Scheduler::new();
        s.advance_clock_to(500);
        s.advance_clock_to(200);
        assert_eq!(s.now_ms(), 500);
    }

    #[test]
    fn test_timer_chain() {
        let mut s = Scheduler::new();
        let mut timer = SessionTimer::new();
        timer.start(&mut s, G1, 1000);

        let mut ticks = 0;
        while let Some(task) = s.next_due(3500) {
            assert_eq!(task.kind, TaskKind::Tick);
            ticks += 1;
            timer.rearm(&mut s, task.generation, 1000);
        }
        assert_eq!(ticks, 3);
        assert!(timer.is_running());
        assert_eq!(s.pending_for(G1), 1);
    }

    #[test]
    fn test_zero_period_still_advances() {
        let mut s = Scheduler::new();
        let mut timer = SessionTimer::new();
        timer.start(&mut s, G1, 0);

        let mut ticks = 0;
        while let Some(task) = s.next_due(5) {
            assert_eq!(task.due_ms, ticks + 1);
            ticks += 1;
            timer.rearm(&mut s, task.generation, 0);
        }
        assert_eq!(ticks, 5);
        assert_eq!(s.pending_for(G1), 1);
    }

    #[test]
    fn test_timer_stop_ends_chain() {
        let mut s = Scheduler::new();
        let mut timer = SessionTimer::new();
        timer.start(&mut s, G1, 1000);
        timer.stop(&mut s);

        assert!(!timer.is_running());
        assert_eq!(s.pending_count(), 0);

        timer.rearm(&mut s, G1, 1000);
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn test_timer_restart_replaces_chain() {
        let mut s = Scheduler::new();
        let mut timer = SessionTimer::new();
        timer.start(&mut s, G1, 1000);
        timer.start(&mut s, G2, 1000);

        assert_eq!(timer.generation(), Some(G2));
        assert_eq!(s.pending_for(G1), 0);

        // A stale tick from the old chain cannot re-arm it
        timer.rearm(&mut s, G1, 1000);
        assert_eq!(s.pending_for(G1), 0);
    }
}
