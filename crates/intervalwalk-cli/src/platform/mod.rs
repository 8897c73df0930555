//! Terminal implementations of the controller's collaborators.

mod bell;
mod display;
mod inhibit;
mod notify;
mod ticker;

use std::time::Duration;

use intervalwalk_core::{Command, Config, Platform, Silent};
use tokio::sync::mpsc::UnboundedSender;

pub use bell::TerminalBell;
pub use display::{JsonDisplay, TerminalDisplay};
pub use inhibit::InhibitWakeLock;
pub use notify::DesktopNotifier;
pub use ticker::TokioTicker;

pub struct PlatformOptions {
    pub json: bool,
    pub no_cues: bool,
    pub tick_period: Duration,
}

/// Wire collaborators according to config and command-line flags.
///
/// Must be called from inside a tokio runtime.
pub fn build(config: &Config, options: &PlatformOptions, ticks: UnboundedSender<Command>) -> Platform {
    let mut platform = Platform::headless(Box::new(TokioTicker::new(ticks, options.tick_period)));

    platform.display = if options.json {
        Box::new(JsonDisplay::new())
    } else {
        Box::new(TerminalDisplay::new(config.display.progress_width as usize))
    };

    if options.no_cues {
        return platform;
    }

    platform.cues = Box::new(TerminalBell::detect(config.cues.sound, config.cues.vibration));
    platform.notifier = Box::new(DesktopNotifier::new(config.notifications.enabled));
    platform.wake_lock = if config.wake_lock.enabled {
        Box::new(InhibitWakeLock::new())
    } else {
        Box::new(Silent)
    };
    platform
}
