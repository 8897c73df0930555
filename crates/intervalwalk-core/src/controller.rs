//! Session controller.
//!
//! The controller is a tick-driven state machine. It does not own a timer
//! thread: it asks its [`TickScheduler`](crate::capability::TickScheduler)
//! for a once-per-second subscription on `start()` and expects
//! `Command::Tick(subscription)` back for each elapsed second.
//!
//! ## State Transitions
//!
//! ```text
//! Ready -> Fast <-> Slow -> Complete
//!   ^                          |
//!   +--------- reset ----------+
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = SessionController::new(platform);
//! controller.dispatch(Command::Toggle);          // Ready -> Fast
//! controller.dispatch(Command::Tick(sub));       // once per second
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::capability::{Platform, Subscription};
use crate::cue::Cue;
use crate::display::DisplayView;
use crate::error::CapabilityError;
use crate::events::Event;
use crate::session::{Phase, Session, INTERVAL_SECS, SESSION_SECS, TOTAL_CYCLES};

pub const NOTIFICATION_TITLE: &str = "Japanese Walking Timer";

/// User and scheduler input, decoupled from whatever invokes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start when stopped, stop when running.
    Toggle,
    Reset,
    /// One elapsed second from the given subscription.
    Tick(Subscription),
}

pub struct SessionController {
    session: Session,
    platform: Platform,
    /// The only subscription whose ticks are honoured.
    active: Option<Subscription>,
    next_subscription: u64,
}

impl SessionController {
    pub fn new(platform: Platform) -> Self {
        Self {
            session: Session::new(),
            platform,
            active: None,
            next_subscription: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn is_running(&self) -> bool {
        self.session.running
    }

    pub fn active_subscription(&self) -> Option<Subscription> {
        self.active
    }

    pub fn view(&self) -> DisplayView {
        DisplayView::project(&self.session)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.session.phase,
            cycle_index: self.session.cycle_index,
            remaining_secs: self.session.remaining_in_phase,
            elapsed_secs: self.session.total_elapsed,
            running: self.session.running,
            progress_pct: self.view().progress_pct(),
            at: Utc::now(),
        }
    }

    /// Push the current projection to the display.
    pub fn refresh(&mut self) {
        let view = self.view();
        self.platform.display.render(&view);
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn dispatch(&mut self, command: Command) -> Option<Event> {
        match command {
            Command::Toggle => {
                if self.session.running {
                    self.stop()
                } else {
                    self.start()
                }
            }
            Command::Reset => self.reset(),
            Command::Tick(subscription) => {
                if self.active != Some(subscription) {
                    debug!(%subscription, "ignoring stale tick");
                    return None;
                }
                self.tick()
            }
        }
    }

    pub fn start(&mut self) -> Option<Event> {
        if self.session.running {
            return None;
        }
        if self.session.is_complete() {
            debug!("start ignored: session complete, reset first");
            return None;
        }

        self.session.running = true;
        let fresh = self.session.phase == Phase::Ready;
        if fresh {
            self.session.phase = Phase::Fast;
            self.session.remaining_in_phase = INTERVAL_SECS;
            self.play(Cue::PhaseStart);
        }

        if let Err(err) = self.platform.wake_lock.acquire() {
            log_capability_error("wake lock acquire", &err);
        }
        self.subscribe();
        self.refresh();

        let at = Utc::now();
        if fresh {
            info!("session started");
            Some(Event::SessionStarted {
                interval_secs: INTERVAL_SECS,
                session_secs: SESSION_SECS,
                at,
            })
        } else {
            info!(phase = ?self.session.phase, remaining = self.session.remaining_in_phase, "session resumed");
            Some(Event::SessionResumed {
                phase: self.session.phase,
                remaining_secs: self.session.remaining_in_phase,
                elapsed_secs: self.session.total_elapsed,
                at,
            })
        }
    }

    /// Pause. Leaves phase, cycle and both counters untouched.
    pub fn stop(&mut self) -> Option<Event> {
        let was_running = self.session.running;
        self.halt();
        if !was_running {
            return None;
        }
        self.refresh();
        info!(elapsed = self.session.total_elapsed, "session paused");
        Some(Event::SessionPaused {
            phase: self.session.phase,
            remaining_secs: self.session.remaining_in_phase,
            elapsed_secs: self.session.total_elapsed,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.halt();
        self.session = Session::new();
        self.refresh();
        info!("session reset");
        Some(Event::SessionReset { at: Utc::now() })
    }

    /// One elapsed second. No-op unless running.
    ///
    /// Returns `PhaseSwitched` or `SessionCompleted` when the tick crosses a
    /// boundary. On the last second both happen: the final Slow phase still
    /// switches (cue and all) before completion takes over, and only
    /// `SessionCompleted` is returned.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.session.running {
            return None;
        }

        self.session.remaining_in_phase = self.session.remaining_in_phase.saturating_sub(1);
        self.session.total_elapsed = (self.session.total_elapsed + 1).min(SESSION_SECS);

        let switched = if self.session.remaining_in_phase == 0 {
            Some(self.switch_phase())
        } else {
            None
        };

        if self.session.total_elapsed >= SESSION_SECS {
            return Some(self.complete());
        }

        self.refresh();
        switched
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn subscribe(&mut self) {
        if let Some(stale) = self.active.take() {
            self.platform.scheduler.cancel(stale);
        }
        self.next_subscription += 1;
        let subscription = Subscription(self.next_subscription);
        self.platform.scheduler.every_second(subscription);
        self.active = Some(subscription);
        debug!(%subscription, "tick subscription registered");
    }

    /// Stop ticking and let go of the wake lock.
    fn halt(&mut self) {
        self.session.running = false;
        if let Some(subscription) = self.active.take() {
            self.platform.scheduler.cancel(subscription);
            debug!(%subscription, "tick subscription cancelled");
        }
        if let Err(err) = self.platform.wake_lock.release() {
            log_capability_error("wake lock release", &err);
        }
    }

    fn switch_phase(&mut self) -> Event {
        self.play(Cue::PhaseChange);

        let from = self.session.phase;
        match from {
            Phase::Fast => self.session.phase = Phase::Slow,
            Phase::Slow => {
                self.session.phase = Phase::Fast;
                self.session.cycle_index += 1;
            }
            Phase::Ready | Phase::Complete => {}
        }
        self.session.remaining_in_phase = INTERVAL_SECS;

        debug!(?from, to = ?self.session.phase, cycle = self.session.cycle_index, "phase switched");
        Event::PhaseSwitched {
            from,
            to: self.session.phase,
            cycle_index: self.session.cycle_index,
            at: Utc::now(),
        }
    }

    fn complete(&mut self) -> Event {
        self.halt();
        self.play(Cue::Completion);
        self.session.phase = Phase::Complete;
        self.refresh();

        if self.platform.notifier.is_permission_granted() {
            let body = format!(
                "Great job! You completed your {}-minute walking session!",
                SESSION_SECS / 60
            );
            if let Err(err) = self.platform.notifier.show(NOTIFICATION_TITLE, &body) {
                log_capability_error("notification", &err);
            }
        }

        info!(cycles = self.session.display_cycle(), "session complete");
        Event::SessionCompleted {
            cycles: self.session.cycle_index.min(TOTAL_CYCLES),
            elapsed_secs: self.session.total_elapsed,
            at: Utc::now(),
        }
    }

    fn play(&mut self, cue: Cue) {
        for tone in cue.tones() {
            if let Err(err) = self.platform.cues.play_tone(*tone) {
                log_capability_error("tone", &err);
            }
        }
        if let Err(err) = self.platform.cues.vibrate() {
            log_capability_error("vibration", &err);
        }
    }
}

fn log_capability_error(what: &str, err: &CapabilityError) {
    match err {
        CapabilityError::Unavailable { .. } => debug!(%err, "{what} skipped"),
        CapabilityError::Failed { .. } => warn!(%err, "{what} failed"),
    }
}
