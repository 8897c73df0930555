use std::io::{IsTerminal, Write};
use std::time::Duration;

use intervalwalk_core::{AudioHaptics, CapabilityError, Tone};
use tracing::{debug, warn};

/// Tone cues as terminal bells on stderr.
///
/// A terminal cannot pick a pitch, so each burst rings the bell `repeat`
/// times regardless of frequency. Terminals cannot vibrate either; vibration
/// requests are accepted and dropped.
pub struct TerminalBell {
    sound: bool,
}

impl TerminalBell {
    /// Check once; unsupported capabilities turn into silent no-ops.
    pub fn detect(sound: bool, vibration: bool) -> Self {
        let tty = std::io::stderr().is_terminal();
        if sound && !tty {
            debug!("stderr is not a terminal, tone cues disabled");
        }
        if vibration {
            debug!("vibration is not available in a terminal");
        }
        Self { sound: sound && tty }
    }
}

fn ring(out: &mut impl Write, repeat: u32) -> std::io::Result<()> {
    for _ in 0..repeat {
        out.write_all(b"\x07")?;
    }
    out.flush()
}

impl AudioHaptics for TerminalBell {
    fn play_tone(&mut self, tone: Tone) -> Result<(), CapabilityError> {
        if !self.sound {
            return Ok(());
        }
        debug!(frequency_hz = tone.frequency_hz, repeat = tone.repeat, "bell");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) if tone.delay_ms > 0 => {
                handle.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(tone.delay_ms)).await;
                    if let Err(err) = ring(&mut std::io::stderr().lock(), tone.repeat) {
                        warn!(%err, "delayed bell failed");
                    }
                });
                Ok(())
            }
            _ => ring(&mut std::io::stderr().lock(), tone.repeat)
                .map_err(|e| CapabilityError::failed("terminal bell", e)),
        }
    }

    fn vibrate(&mut self) -> Result<(), CapabilityError> {
        Ok(())
    }
}
