//! Core types for video-pause-core
//!
//! Identifiers, call lifecycle states, the video state bitmask and the
//! in-call phases reported by the host application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Call identifier
///
/// Opaque to the controller; two handles refer to the same call iff their
/// ids are equal.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CallId(pub String);

impl CallId {
    pub fn new() -> Self {
        Self(format!("call-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CallId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CallId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a call as seen by the in-call UI
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum CallState {
    /// State not yet known
    Invalid,
    /// Call object created, nothing sent yet
    New,
    /// Call exists but is not doing anything
    Idle,
    /// Media is flowing
    Active,
    /// Ringing, no other call present
    Incoming,
    /// Ringing while another call is in progress
    CallWaiting,
    /// Outgoing call placed, waiting for the remote side
    Dialing,
    /// Outgoing call being retried
    Redialing,
    /// Held locally
    OnHold,
    /// Hangup in progress
    Disconnecting,
    /// Call has ended
    Disconnected,
    /// Part of a conference
    Conferenced,
    /// Waiting for the user to pick an account to place the call with
    SelectPhoneAccount,
    /// Outgoing call being set up by the telecom stack
    Connecting,
    /// Call was blocked or failed before connecting
    BlockedOrFailed,
}

impl CallState {
    /// States in which an outgoing call is still being placed
    pub fn is_dialing(&self) -> bool {
        matches!(self, CallState::Dialing | CallState::Redialing | CallState::Connecting)
    }

    /// States in which a call is ringing on this device
    pub fn is_incoming(&self) -> bool {
        matches!(self, CallState::Incoming | CallState::CallWaiting)
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Video state bitmask of a call
///
/// Bit layout: `0x1` transmit enabled, `0x2` receive enabled, `0x4` paused.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoState(pub u8);

impl VideoState {
    pub const AUDIO_ONLY: VideoState = VideoState(0x0);
    pub const TX_ENABLED: VideoState = VideoState(0x1);
    pub const RX_ENABLED: VideoState = VideoState(0x2);
    pub const BIDIRECTIONAL: VideoState = VideoState(0x3);
    pub const PAUSED: VideoState = VideoState(0x4);

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: VideoState) -> bool {
        self.0 & other.0 == other.0
    }

    /// A call is a video call when video flows in at least one direction
    pub fn is_video(&self) -> bool {
        self.0 & Self::BIDIRECTIONAL.0 != 0
    }

    pub fn is_paused(&self) -> bool {
        self.contains(Self::PAUSED)
    }

    pub fn with_paused(self) -> Self {
        VideoState(self.0 | Self::PAUSED.0)
    }

    pub fn without_paused(self) -> Self {
        VideoState(self.0 & !Self::PAUSED.0)
    }
}

impl std::ops::BitOr for VideoState {
    type Output = VideoState;

    fn bitor(self, rhs: Self) -> Self::Output {
        VideoState(self.0 | rhs.0)
    }
}

impl fmt::Display for VideoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capabilities a call may advertise
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum CallCapability {
    /// The call can be put on hold
    Hold,
    /// The call supports pausing and resuming its outgoing video
    CanPauseVideo,
    /// The call can be upgraded to bidirectional video
    SupportsVideo,
}

/// Overall phase of the in-call experience as tracked by the host
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum InCallPhase {
    /// No calls present
    NoCalls,
    /// A call is ringing
    Incoming,
    /// At least one call is connected
    InCall,
    /// An outgoing call is waiting for account selection
    WaitingForAccount,
    /// An outgoing call is queued but not yet handed to the telecom stack
    PendingOutgoing,
    /// An outgoing call is being placed
    Outgoing,
}

impl fmt::Display for InCallPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
