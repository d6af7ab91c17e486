//! Per-field transition queue.
//!
//! Focus transitions never run from inside an input callback. They are queued
//! here with the tick they become due on and run in FIFO order, so a deferred
//! transition holds back everything queued after it.

use std::collections::VecDeque;

use layout::Point;

/// A focus transition waiting to run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Complete a pending focus; `pointer` is the global press position.
    FinishFocus { pointer: Point },
    /// Move the caret of a focused field to the press position.
    PlaceCaret { pointer: Point },
    EndFocus,
    /// Blur the edit surface after focus already ended.
    BlurSurface,
}

#[derive(Clone, Debug, Default)]
pub struct TransitionQueue {
    pending: VecDeque<(u64, Transition)>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `transition` to run `delay` ticks after `now`, but never before
    /// anything already queued.
    pub fn push(&mut self, now: u64, delay: u64, transition: Transition) {
        let due = now.saturating_add(delay);
        let due = match self.pending.back() {
            Some(&(back, _)) => due.max(back),
            None => due,
        };
        self.pending.push_back((due, transition));
    }

    /// Next transition due at `now`, if the front of the queue is due.
    pub fn pop_due(&mut self, now: u64) -> Option<Transition> {
        match self.pending.front() {
            Some(&(due, _)) if due <= now => self.pending.pop_front().map(|(_, t)| t),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
