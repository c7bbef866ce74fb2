//! Trailing-edge rate limiter for drag updates.
//!
//! Holds at most one pending task. Scheduling a new task replaces the pending
//! one and restarts the window, so a burst of drag events collapses into the
//! last one. Nothing runs on its own: the owner polls with the current time.

use std::time::{Duration, Instant};

/// Default drag window.
pub const DEFAULT_DRAG_WINDOW: Duration = Duration::from_millis(25);

#[derive(Debug, Clone)]
struct Pending<T> {
    task: T,
    deadline: Instant,
    generation: u64,
}

/// A task released by the limiter together with its generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    /// Generation assigned when the task was scheduled.
    pub generation: u64,
    /// The task itself.
    pub task: T,
}

/// Single-slot trailing-edge rate limiter.
#[derive(Debug, Clone)]
pub struct DragRateLimiter<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    generation: u64,
}

impl<T> DragRateLimiter<T> {
    /// Limiter with the given window. A zero window releases tasks on the
    /// next poll.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            generation: 0,
        }
    }

    /// The configured window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` to fire once `delay` has passed since `now`.
    ///
    /// Returns the task it replaced, if any.
    pub fn schedule(&mut self, task: T, now: Instant) -> Option<T> {
        self.generation += 1;
        let replaced = self.pending.replace(Pending {
            task,
            deadline: now + self.delay,
            generation: self.generation,
        });
        replaced.map(|p| p.task)
    }

    /// Release the pending task if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Fired<T>> {
        match &self.pending {
            Some(p) if p.deadline <= now => self.take(),
            _ => None,
        }
    }

    /// Release the pending task regardless of its deadline.
    pub fn flush(&mut self) -> Option<Fired<T>> {
        self.take()
    }

    /// Drop the pending task without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.task)
    }

    /// Whether a task is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending task.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Generation of the most recently scheduled task.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `generation` belongs to the most recently scheduled task.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    fn take(&mut self) -> Option<Fired<T>> {
        self.pending.take().map(|p| Fired {
            generation: p.generation,
            task: p.task,
        })
    }
}

impl<T> Default for DragRateLimiter<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_WINDOW)
    }
}
