use serde::{Deserialize, Serialize};

use crate::session::{Phase, INTERVAL_SECS, TOTAL_CYCLES};

/// One planned phase of the walking protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub phase: Phase,
    /// 1-based cycle this step belongs to.
    pub cycle: u32,
    /// Offset from session start, in seconds.
    pub start_secs: u32,
    pub duration_secs: u32,
}

/// The fixed fast/slow plan a session walks through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Protocol {
    pub steps: Vec<Step>,
}

impl Protocol {
    /// Five cycles of three minutes fast then three minutes slow.
    pub fn walking() -> Self {
        let steps = (1..=TOTAL_CYCLES)
            .flat_map(|cycle| [(cycle, Phase::Fast), (cycle, Phase::Slow)])
            .enumerate()
            .map(|(i, (cycle, phase))| Step {
                phase,
                cycle,
                start_secs: i as u32 * INTERVAL_SECS,
                duration_secs: INTERVAL_SECS,
            })
            .collect();
        Self { steps }
    }

    pub fn total_duration_secs(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_secs).sum()
    }

    /// The step covering `elapsed_secs`, or `None` past the end.
    pub fn step_at(&self, elapsed_secs: u32) -> Option<&Step> {
        self.steps
            .iter()
            .find(|s| elapsed_secs >= s.start_secs && elapsed_secs < s.start_secs + s.duration_secs)
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::walking()
    }
}
