//! Video profiles carried by session-modification requests

use serde::{Deserialize, Serialize};

use crate::traits::CallHandle;
use crate::types::VideoState;

/// Requested video configuration for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoProfile {
    pub video_state: VideoState,
}

impl VideoProfile {
    pub fn new(video_state: VideoState) -> Self {
        Self { video_state }
    }
}

/// Builds the profiles sent to pause or resume a call's outgoing video
pub trait VideoProfileBuilder: Send + Sync {
    fn pause_profile(&self, call: &dyn CallHandle) -> VideoProfile;

    fn unpause_profile(&self, call: &dyn CallHandle) -> VideoProfile;
}

/// Toggles the paused bit on the call's current video state
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVideoProfileBuilder;

impl VideoProfileBuilder for DefaultVideoProfileBuilder {
    fn pause_profile(&self, call: &dyn CallHandle) -> VideoProfile {
        VideoProfile::new(call.video_state().with_paused())
    }

    fn unpause_profile(&self, call: &dyn CallHandle) -> VideoProfile {
        VideoProfile::new(call.video_state().without_paused())
    }
}
