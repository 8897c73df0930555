//! Session data model.
//!
//! A [`Session`] is the whole mutable state of one walking workout. It is an
//! owned value: the [`SessionController`](crate::SessionController) holds the
//! only instance and mutates it from `tick()` and the control operations.

use serde::{Deserialize, Serialize};

/// Number of Fast+Slow cycles in one session.
pub const TOTAL_CYCLES: u32 = 5;

/// Length of one Fast or Slow phase, in seconds.
pub const INTERVAL_SECS: u32 = 180;

/// Total session length, in seconds.
pub const SESSION_SECS: u32 = TOTAL_CYCLES * 2 * INTERVAL_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Ready,
    Fast,
    Slow,
    Complete,
}

impl Phase {
    /// Lowercase identifier, usable as a styling class.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Fast => "fast",
            Phase::Slow => "slow",
            Phase::Complete => "complete",
        }
    }

    /// Label shown to the walker.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Ready => "READY",
            Phase::Fast => "FAST",
            Phase::Slow => "SLOW",
            Phase::Complete => "COMPLETE!",
        }
    }

    /// Whether this phase is one of the two alternating walking phases.
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Fast | Phase::Slow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
    /// 1-based. May run past `TOTAL_CYCLES` internally; display clamps it.
    pub cycle_index: u32,
    /// Countdown within the current phase, in seconds.
    pub remaining_in_phase: u32,
    /// Seconds counted since the session started.
    pub total_elapsed: u32,
    pub running: bool,
}

impl Session {
    /// A fresh session in the `Ready` phase.
    pub fn new() -> Self {
        Self {
            phase: Phase::Ready,
            cycle_index: 1,
            remaining_in_phase: INTERVAL_SECS,
            total_elapsed: 0,
            running: false,
        }
    }

    /// Cycle number suitable for display, clamped to `TOTAL_CYCLES`.
    pub fn display_cycle(&self) -> u32 {
        match self.phase {
            Phase::Ready => 1,
            _ => self.cycle_index.min(TOTAL_CYCLES),
        }
    }

    /// 0.0 .. 1.0 progress across the whole session.
    pub fn progress(&self) -> f64 {
        (f64::from(self.total_elapsed) / f64::from(SESSION_SECS)).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Checks the data-model invariants. Used by tests and debug assertions.
    pub fn invariants_hold(&self) -> bool {
        let bounded = self.remaining_in_phase <= INTERVAL_SECS
            && self.total_elapsed <= SESSION_SECS
            && self.cycle_index >= 1;
        let complete_stopped = self.phase != Phase::Complete || !self.running;
        let ready_pristine =
            self.phase != Phase::Ready || (self.total_elapsed == 0 && self.cycle_index == 1);
        bounded && complete_stopped && ready_pristine
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
