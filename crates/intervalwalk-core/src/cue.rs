use serde::{Deserialize, Serialize};

/// Vibration pattern in milliseconds: on, off, on.
pub const VIBRATION_PATTERN_MS: [u64; 3] = [200, 100, 200];

/// Length of one tone burst, in milliseconds.
pub const TONE_DURATION_MS: u64 = 3000;

/// One tone burst request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: u32,
    /// How many times the burst is played back to back. Adapters must honour
    /// it; the built-in cues all play each tone once.
    pub repeat: u32,
    /// Delay before the burst starts, relative to the cue.
    pub delay_ms: u64,
}

impl Tone {
    pub const fn new(frequency_hz: u32) -> Self {
        Self {
            frequency_hz,
            repeat: 1,
            delay_ms: 0,
        }
    }

    pub const fn delayed(frequency_hz: u32, delay_ms: u64) -> Self {
        Self {
            frequency_hz,
            repeat: 1,
            delay_ms,
        }
    }

    /// Same tone, played `repeat` times. Zero is raised to one.
    pub const fn repeated(self, repeat: u32) -> Self {
        Self {
            repeat: if repeat == 0 { 1 } else { repeat },
            ..self
        }
    }
}

/// Signals emitted at phase boundaries and at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Entering the first Fast phase.
    PhaseStart,
    /// Fast/Slow switch.
    PhaseChange,
    /// Session finished.
    Completion,
}

const PHASE_START_TONES: [Tone; 1] = [Tone::new(1000)];
const PHASE_CHANGE_TONES: [Tone; 1] = [Tone::new(1200)];
const COMPLETION_TONES: [Tone; 3] = [
    Tone::new(800),
    Tone::delayed(1000, 250),
    Tone::delayed(1200, 500),
];

impl Cue {
    pub fn tones(self) -> &'static [Tone] {
        match self {
            Cue::PhaseStart => &PHASE_START_TONES,
            Cue::PhaseChange => &PHASE_CHANGE_TONES,
            Cue::Completion => &COMPLETION_TONES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_is_rising_triad() {
        let freqs: Vec<u32> = Cue::Completion.tones().iter().map(|t| t.frequency_hz).collect();
        assert_eq!(freqs, vec![800, 1000, 1200]);
        let delays: Vec<u64> = Cue::Completion.tones().iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0, 250, 500]);
    }

    #[test]
    fn single_tone_cues() {
        assert_eq!(Cue::PhaseStart.tones(), &[Tone::new(1000)]);
        assert_eq!(Cue::PhaseChange.tones(), &[Tone::new(1200)]);
    }

    #[test]
    fn every_cue_tone_plays_once() {
        for cue in [Cue::PhaseStart, Cue::PhaseChange, Cue::Completion] {
            assert!(cue.tones().iter().all(|t| t.repeat == 1), "{cue:?}");
        }
    }

    #[test]
    fn repeated_keeps_pitch_and_delay() {
        let tone = Tone::delayed(1000, 250).repeated(3);
        assert_eq!(tone.frequency_hz, 1000);
        assert_eq!(tone.delay_ms, 250);
        assert_eq!(tone.repeat, 3);
        assert_eq!(Tone::new(800).repeated(0).repeat, 1);
    }
}
