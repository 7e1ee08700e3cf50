//! Controller configuration
//!
//! Every switch defaults to `true`, which gives the standard behaviour: pause
//! outgoing video when the UI is hidden or a second call rings, resume it when
//! the user comes back, and pull the UI forward when a call turns into an
//! active video call behind the user's back.
//!
//! Turning a switch off only suppresses the matching command. The controller
//! still tracks the primary call and UI visibility.
//!
//! ```rust
//! use rvoip_video_pause_core::VideoPauseConfig;
//!
//! let config = VideoPauseConfig::new()
//!     .with_pause_on_background(false)
//!     .with_bring_to_foreground_on_activation(false);
//!
//! assert!(!config.pause_on_background);
//! assert!(config.resume_on_foreground);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, VideoPauseError};

/// Policy switches for [`crate::VideoPauseController`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPauseConfig {
    /// Pause the primary call's video when the UI goes to the background
    pub pause_on_background: bool,
    /// Resume the primary call's video when the UI comes back
    pub resume_on_foreground: bool,
    /// Pause the current video call when a new call starts ringing
    pub pause_on_incoming: bool,
    /// Resume the video call that becomes primary after an incoming or
    /// dialing call goes away
    pub resume_after_interruption: bool,
    /// Bring the UI forward when the primary call becomes a pausable video
    /// call while the UI is hidden
    pub bring_to_foreground_on_activation: bool,
}

impl Default for VideoPauseConfig {
    fn default() -> Self {
        Self {
            pause_on_background: true,
            resume_on_foreground: true,
            pause_on_incoming: true,
            resume_after_interruption: true,
            bring_to_foreground_on_activation: true,
        }
    }
}

impl VideoPauseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject combinations that would pause video with no way to get it back
    pub fn validate(&self) -> Result<()> {
        if self.pause_on_background && !self.resume_on_foreground {
            return Err(VideoPauseError::config(
                "pause_on_background requires resume_on_foreground",
            ));
        }
        if self.pause_on_incoming && !self.resume_after_interruption {
            return Err(VideoPauseError::config(
                "pause_on_incoming requires resume_after_interruption",
            ));
        }
        Ok(())
    }

    pub fn with_pause_on_background(mut self, enabled: bool) -> Self {
        self.pause_on_background = enabled;
        self
    }

    pub fn with_resume_on_foreground(mut self, enabled: bool) -> Self {
        self.resume_on_foreground = enabled;
        self
    }

    pub fn with_pause_on_incoming(mut self, enabled: bool) -> Self {
        self.pause_on_incoming = enabled;
        self
    }

    pub fn with_resume_after_interruption(mut self, enabled: bool) -> Self {
        self.resume_after_interruption = enabled;
        self
    }

    pub fn with_bring_to_foreground_on_activation(mut self, enabled: bool) -> Self {
        self.bring_to_foreground_on_activation = enabled;
        self
    }
}
