use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Phase;

/// Every state change of a session produces an Event.
/// Front ends print or log them; the controller never consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Left `Ready` and entered the first Fast phase.
    SessionStarted {
        interval_secs: u32,
        session_secs: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        phase: Phase,
        remaining_secs: u32,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    SessionResumed {
        phase: Phase,
        remaining_secs: u32,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    PhaseSwitched {
        from: Phase,
        to: Phase,
        cycle_index: u32,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        cycles: u32,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        cycle_index: u32,
        remaining_secs: u32,
        elapsed_secs: u32,
        running: bool,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The `type` tag this event serializes with.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::SessionStarted { .. } => "SessionStarted",
            Event::SessionPaused { .. } => "SessionPaused",
            Event::SessionResumed { .. } => "SessionResumed",
            Event::PhaseSwitched { .. } => "PhaseSwitched",
            Event::SessionCompleted { .. } => "SessionCompleted",
            Event::SessionReset { .. } => "SessionReset",
            Event::StateSnapshot { .. } => "StateSnapshot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::PhaseSwitched {
            from: Phase::Fast,
            to: Phase::Slow,
            cycle_index: 1,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], event.kind());
        assert_eq!(json["from"], "fast");
        assert_eq!(json["to"], "slow");
    }
}
