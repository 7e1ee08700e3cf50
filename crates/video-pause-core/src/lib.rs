//! # Video-Pause-Core - Automatic video pause/resume for in-call UIs
//!
//! This crate decides when a video call application should pause or resume
//! its outgoing video, and when it should pull the in-call UI back to the
//! foreground. It watches three things:
//!
//! - which call is **primary** (the one in front of the user)
//! - that call's lifecycle state and video state
//! - whether the in-call UI is **visible**
//!
//! Call lists, telecom integration, rendering and the session-modification
//! transport all belong to the host application and are reached through the
//! traits in [`traits`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rvoip_video_pause_core::{InCallHost, VideoPauseConfig, VideoPauseController};
//! use std::sync::Arc;
//!
//! fn start_session(host: Arc<dyn InCallHost>) -> rvoip_video_pause_core::Result<()> {
//!     let controller = Arc::new(VideoPauseController::new(VideoPauseConfig::default()));
//!
//!     // Registers for phase, incoming-call and UI-visibility notifications.
//!     // Dropping the guard unregisters and clears all state.
//!     let session = controller.attach(host)?;
//!
//!     // ... call session runs, the host drives the observers ...
//!
//!     drop(session);
//!     Ok(())
//! }
//! ```
//!
//! ## Behaviour
//!
//! | Event | Condition | Command |
//! |-------|-----------|---------|
//! | UI hidden | primary is an active video call, host in `InCall` | pause primary |
//! | UI shown | primary is an active video call, host in `InCall` | resume primary |
//! | new call ringing | previous primary is an active video call | pause previous |
//! | incoming/dialing call replaced | new primary is an active video call, UI visible | resume new primary |
//! | primary becomes active video | primary was dialing or voice only, UI hidden | bring UI forward |
//!
//! Pause and resume requests are only sent to calls advertising
//! [`CallCapability::CanPauseVideo`].

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod logging;
pub mod profile;
pub mod snapshot;
pub mod traits;
pub mod types;

pub use config::VideoPauseConfig;
pub use controller::{AttachedController, PauseResumeState, VideoPauseCommand, VideoPauseController};
pub use error::{Result, VideoPauseError};
pub use events::{spawn_event_pump, VideoPauseEvent, VideoPauseEventSender};
pub use profile::{DefaultVideoProfileBuilder, VideoProfile, VideoProfileBuilder};
pub use snapshot::CallSnapshot;
pub use traits::{
    CallHandle, CallPhaseObserver, CallSource, InCallHost, IncomingCallObserver, UiHost,
    UiVisibilityObserver, VideoCallTransport,
};
pub use types::{CallCapability, CallId, CallState, InCallPhase, VideoState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
