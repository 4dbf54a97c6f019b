//! Fixed-duration enter/exit transitions for mounted content.
//!
//! A `Transition` tracks one piece of content through
//! `Entering -> Entered -> Exiting -> Exited`. Time is always passed in by the
//! caller so the runtime ticker (or a test) decides when phases advance.
//! Content whose transition reaches `Exited` is expected to be unmounted by its
//! owner.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    Entered,
    Exiting,
    Exited,
}

/// Emitted exactly once when a phase completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    Entered,
    Exited,
}

#[derive(Debug, Clone)]
pub struct Transition {
    phase: TransitionPhase,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// Content that is visible from the start, without an enter animation.
    pub fn entered(now: Instant, duration: Duration) -> Self {
        Self {
            phase: TransitionPhase::Entered,
            started_at: now,
            duration,
        }
    }

    /// Content that starts entering at `now`.
    pub fn enter(now: Instant, duration: Duration) -> Self {
        Self {
            phase: TransitionPhase::Entering,
            started_at: now,
            duration,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != TransitionPhase::Exited
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, TransitionPhase::Entering | TransitionPhase::Exiting)
    }

    /// Starts the exit phase. An in-flight enter is abandoned and will never
    /// report `Entered`.
    pub fn exit(&mut self, now: Instant) {
        if matches!(self.phase, TransitionPhase::Exiting | TransitionPhase::Exited) {
            return;
        }
        self.phase = TransitionPhase::Exiting;
        self.started_at = now;
    }

    /// Restarts the enter phase, e.g. for content that was still exiting when
    /// it became visible again.
    pub fn reenter(&mut self, now: Instant) {
        self.phase = TransitionPhase::Entering;
        self.started_at = now;
    }

    /// Fraction of the current phase that has elapsed, in `0.0..=1.0`.
    /// Settled phases report `1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if !self.is_animating() || self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Moves to the next phase once the duration has elapsed.
    pub fn advance(&mut self, now: Instant) -> Option<TransitionEvent> {
        if !self.is_animating() || now.saturating_duration_since(self.started_at) < self.duration {
            return None;
        }
        match self.phase {
            TransitionPhase::Entering => {
                self.phase = TransitionPhase::Entered;
                Some(TransitionEvent::Entered)
            }
            TransitionPhase::Exiting => {
                self.phase = TransitionPhase::Exited;
                Some(TransitionEvent::Exited)
            }
            TransitionPhase::Entered | TransitionPhase::Exited => None,
        }
    }
}

/// Linear animation between two row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightAnimation {
    from: u16,
    to: u16,
    started_at: Instant,
    duration: Duration,
}

impl HeightAnimation {
    /// A height that is already at rest.
    pub fn settled(height: u16, now: Instant) -> Self {
        Self {
            from: height,
            to: height,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    pub fn new(from: u16, to: u16, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration,
        }
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.from == self.to || now.saturating_duration_since(self.started_at) >= self.duration
    }

    pub fn value_at(&self, now: Instant) -> u16 {
        if self.is_settled(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * t).round() as u16
    }
}
