//! Collaborator interfaces the controller talks to.
//!
//! Every platform facility sits behind one of these traits so the state
//! machine runs unchanged against a terminal, a test double, or nothing at
//! all. Cue, wake-lock and notification calls are best-effort: they return
//! [`CapabilityError`] and the controller logs and discards it.

use serde::{Deserialize, Serialize};

use crate::cue::Tone;
use crate::display::DisplayView;
use crate::error::CapabilityError;

/// Identifier of one registered once-per-second tick stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subscription(pub u64);

impl std::fmt::Display for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Renders the current projection. Expected to redraw on every call.
pub trait DisplaySurface {
    fn render(&mut self, view: &DisplayView);
}

/// Tone bursts and vibration.
pub trait AudioHaptics {
    fn play_tone(&mut self, tone: Tone) -> Result<(), CapabilityError>;

    /// Fixed pattern, see [`VIBRATION_PATTERN_MS`](crate::cue::VIBRATION_PATTERN_MS).
    fn vibrate(&mut self) -> Result<(), CapabilityError>;
}

/// Keeps the screen (or system) awake while a session runs.
pub trait WakeLock {
    /// May complete asynchronously on the platform side; callers do not wait.
    fn acquire(&mut self) -> Result<(), CapabilityError>;

    /// Safe to call when not held.
    fn release(&mut self) -> Result<(), CapabilityError>;
}

/// User-visible notifications.
pub trait Notifier {
    /// Whether notifications were already permitted. Never prompts.
    fn is_permission_granted(&self) -> bool;

    fn show(&mut self, title: &str, body: &str) -> Result<(), CapabilityError>;
}

/// Fires `Command::Tick(subscription)` once per second until cancelled.
pub trait TickScheduler {
    fn every_second(&mut self, subscription: Subscription);

    /// Must stop any further delivery for `subscription`.
    fn cancel(&mut self, subscription: Subscription);
}

/// No-op collaborator for disabled or unsupported capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DisplaySurface for Silent {
    fn render(&mut self, _view: &DisplayView) {}
}

impl AudioHaptics for Silent {
    fn play_tone(&mut self, _tone: Tone) -> Result<(), CapabilityError> {
        Ok(())
    }

    fn vibrate(&mut self) -> Result<(), CapabilityError> {
        Ok(())
    }
}

impl WakeLock for Silent {
    fn acquire(&mut self) -> Result<(), CapabilityError> {
        Ok(())
    }

    fn release(&mut self) -> Result<(), CapabilityError> {
        Ok(())
    }
}

impl Notifier for Silent {
    fn is_permission_granted(&self) -> bool {
        false
    }

    fn show(&mut self, _title: &str, _body: &str) -> Result<(), CapabilityError> {
        Ok(())
    }
}

/// The full set of collaborators one controller drives.
pub struct Platform {
    pub display: Box<dyn DisplaySurface>,
    pub cues: Box<dyn AudioHaptics>,
    pub wake_lock: Box<dyn WakeLock>,
    pub notifier: Box<dyn Notifier>,
    pub scheduler: Box<dyn TickScheduler>,
}

impl Platform {
    /// Everything silent except the scheduler, which the caller must supply.
    pub fn headless(scheduler: Box<dyn TickScheduler>) -> Self {
        Self {
            display: Box::new(Silent),
            cues: Box::new(Silent),
            wake_lock: Box::new(Silent),
            notifier: Box::new(Silent),
            scheduler,
        }
    }
}
