//! Display projection.
//!
//! [`DisplayView`] is a pure function of [`Session`] state. The controller
//! recomputes it after every mutation and hands it to the display surface.

use serde::{Deserialize, Serialize};

use crate::session::{Phase, Session, SESSION_SECS, TOTAL_CYCLES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayView {
    pub phase: Phase,
    pub phase_label: String,
    /// Lowercase phase identifier for styling.
    pub phase_class: String,
    pub time_label: String,
    pub cycle_label: String,
    /// 0.0 .. 1.0 fraction of the session elapsed.
    pub progress: f64,
    pub elapsed_label: String,
    pub total_label: String,
    /// Label for the start/stop control.
    pub control_label: String,
    pub running: bool,
}

impl DisplayView {
    pub fn project(session: &Session) -> Self {
        Self {
            phase: session.phase,
            phase_label: session.phase.label().to_string(),
            phase_class: session.phase.as_str().to_string(),
            time_label: format_clock(session.remaining_in_phase),
            cycle_label: format!("Cycle {}/{}", session.display_cycle(), TOTAL_CYCLES),
            progress: session.progress(),
            elapsed_label: format_clock(session.total_elapsed),
            total_label: format_clock(SESSION_SECS),
            control_label: if session.running { "Stop" } else { "Start" }.to_string(),
            running: session.running,
        }
    }

    /// 0.0 .. 100.0 progress, for percentage widths.
    pub fn progress_pct(&self) -> f64 {
        self.progress * 100.0
    }

    /// Text progress bar `width` cells wide.
    pub fn progress_bar(&self, width: usize) -> String {
        let filled = ((self.progress * width as f64).round() as usize).min(width);
        format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
    }
}

/// Formats seconds as `m:ss`. Minutes are not padded and may exceed 59.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
