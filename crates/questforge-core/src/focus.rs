//! Focus-session countdown
//!
//! A single-purpose timer, ephemeral per session and never persisted. The
//! caller drives it with one `tick()` per second; on reaching zero it emits
//! exactly one completion signal, which the caller maps to a `FinishFocus`
//! dispatch. Cancelling never fires the signal.

use serde::{Deserialize, Serialize};

/// Default session length: 25 minutes of one-second ticks
pub const SESSION_SECS: u32 = 25 * 60;

/// Timer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FocusPhase {
    /// Counting down
    Running,
    /// Holding at the current remainder
    #[default]
    Paused,
    /// Ran to zero and fired its signal
    Finished,
    /// Abandoned before zero; will never fire
    Cancelled,
}

/// Emitted once when the countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSignal {
    Completed,
}

/// The countdown itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTimer {
    remaining_secs: u32,
    phase: FocusPhase,
}

impl FocusTimer {
    /// A full-length session, initially paused
    pub fn new() -> Self {
        Self::with_duration(SESSION_SECS)
    }

    /// A session of arbitrary length, initially paused
    pub fn with_duration(secs: u32) -> Self {
        Self {
            remaining_secs: secs,
            phase: FocusPhase::Paused,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == FocusPhase::Running
    }

    /// Start or resume the countdown. Finished and cancelled timers stay put.
    pub fn resume(&mut self) {
        if self.phase == FocusPhase::Paused {
            self.phase = FocusPhase::Running;
        }
    }

    /// Hold the countdown at its current remainder
    pub fn pause(&mut self) {
        if self.phase == FocusPhase::Running {
            self.phase = FocusPhase::Paused;
        }
    }

    /// Flip between running and paused
    pub fn toggle(&mut self) {
        match self.phase {
            FocusPhase::Running => self.phase = FocusPhase::Paused,
            FocusPhase::Paused => self.phase = FocusPhase::Running,
            _ => {}
        }
    }

    /// Abandon the session without firing the completion signal
    pub fn cancel(&mut self) {
        if matches!(self.phase, FocusPhase::Running | FocusPhase::Paused) {
            self.phase = FocusPhase::Cancelled;
        }
    }

    /// Advance one second. Returns the completion signal exactly once, on
    /// the tick that reaches zero.
    pub fn tick(&mut self) -> Option<FocusSignal> {
        if self.phase != FocusPhase::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.phase = FocusPhase::Finished;
            return Some(FocusSignal::Completed);
        }
        None
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}
