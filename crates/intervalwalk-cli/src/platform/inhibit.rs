use std::io::ErrorKind;
use std::process::{Child, Command, Stdio};

use intervalwalk_core::{CapabilityError, WakeLock};
use tracing::debug;

const CAPABILITY: &str = "wake lock";

/// Holds a `systemd-inhibit` idle/sleep lock for as long as the child lives.
///
/// The inhibitor runs `cat` on a pipe we own, so the helper also exits if
/// this process dies without releasing.
pub struct InhibitWakeLock {
    available: bool,
    child: Option<Child>,
}

impl InhibitWakeLock {
    pub fn new() -> Self {
        Self {
            available: true,
            child: None,
        }
    }
}

impl WakeLock for InhibitWakeLock {
    fn acquire(&mut self) -> Result<(), CapabilityError> {
        if !self.available || self.child.is_some() {
            return Ok(());
        }

        let spawned = Command::new("systemd-inhibit")
            .args([
                "--what=idle:sleep",
                "--who=intervalwalk",
                "--why=Walking session in progress",
                "--mode=block",
                "cat",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(pid = child.id(), "wake lock acquired");
                self.child = Some(child);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.available = false;
                Err(CapabilityError::Unavailable {
                    capability: CAPABILITY,
                })
            }
            Err(err) => Err(CapabilityError::failed(CAPABILITY, err)),
        }
    }

    fn release(&mut self) -> Result<(), CapabilityError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        drop(child.stdin.take());
        let killed = child.kill();
        // Reap regardless; the helper exits once its stdin closes.
        if let Err(err) = child.wait() {
            debug!(%err, "wake lock helper not reaped");
        }
        match killed {
            Ok(()) => {
                debug!("wake lock released");
                Ok(())
            }
            // Already exited, e.g. no session bus.
            Err(err) if err.kind() == ErrorKind::InvalidInput => Ok(()),
            Err(err) => Err(CapabilityError::failed(CAPABILITY, err)),
        }
    }
}

impl Drop for InhibitWakeLock {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
