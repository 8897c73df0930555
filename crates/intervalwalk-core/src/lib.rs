//! # Interval Walk Core Library
//!
//! This library provides the core logic for the Interval Walk timer, which
//! guides a walker through alternating fast and slow phases: five cycles of
//! three minutes fast, three minutes slow.
//!
//! ## Architecture
//!
//! - **Session Controller**: A tick-driven state machine. It owns the
//!   [`Session`] and asks a scheduler for one tick per second while running
//! - **Capabilities**: Display, tones/vibration, wake lock, notifications and
//!   the tick scheduler sit behind small traits so the state machine has no
//!   platform dependencies
//! - **Display projection**: A pure view of the session for any front end
//! - **Configuration**: TOML-based cue and platform preferences
//!
//! ## Key Components
//!
//! - [`SessionController`]: Core state machine
//! - [`DisplayView`]: Projection rendered after every mutation
//! - [`Platform`]: The collaborators a controller drives
//! - [`Config`]: Application configuration management

pub mod capability;
pub mod config;
pub mod controller;
pub mod cue;
pub mod display;
pub mod error;
pub mod events;
pub mod protocol;
pub mod session;

pub use capability::{
    AudioHaptics, DisplaySurface, Notifier, Platform, Silent, Subscription, TickScheduler,
    WakeLock,
};
pub use config::Config;
pub use controller::{Command, SessionController};
pub use cue::{Cue, Tone};
pub use display::{format_clock, DisplayView};
pub use error::{CapabilityError, ConfigError, CoreError};
pub use events::Event;
pub use protocol::{Protocol, Step};
pub use session::{Phase, Session, INTERVAL_SECS, SESSION_SECS, TOTAL_CYCLES};
