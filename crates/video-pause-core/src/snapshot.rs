//! Cached view of the primary call
//!
//! A [`CallSnapshot`] copies a call's state and video state at capture time.
//! The predicates below work on `Option<&CallSnapshot>` so that "no primary
//! call" simply answers `false`.

use std::fmt;
use std::sync::Arc;

use crate::traits::CallHandle;
use crate::types::{CallId, CallState, VideoState};

/// Point-in-time copy of a call's state, plus the handle it was taken from
#[derive(Clone)]
pub struct CallSnapshot {
    call: Arc<dyn CallHandle>,
    call_id: CallId,
    state: CallState,
    video_state: VideoState,
}

impl CallSnapshot {
    /// Capture the current state of `call`
    pub fn capture(call: Arc<dyn CallHandle>) -> Self {
        let call_id = call.id();
        let state = call.state();
        let video_state = call.video_state();
        Self {
            call,
            call_id,
            state,
            video_state,
        }
    }

    pub fn call(&self) -> &Arc<dyn CallHandle> {
        &self.call
    }

    pub fn call_id(&self) -> &CallId {
        &self.call_id
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn video_state(&self) -> VideoState {
        self.video_state
    }

    pub fn is_video_call(&self) -> bool {
        self.video_state.is_video()
    }

    /// Only an active video call can have its video paused
    pub fn can_pause(&self) -> bool {
        self.is_video_call() && self.state == CallState::Active
    }

    pub fn is_incoming(&self) -> bool {
        self.state.is_incoming()
    }

    pub fn is_dialing(&self) -> bool {
        self.state.is_dialing()
    }

    pub fn is_on_hold(&self) -> bool {
        self.state == CallState::OnHold
    }

    pub fn refers_to(&self, call: &dyn CallHandle) -> bool {
        self.call_id == call.id()
    }
}

impl fmt::Debug for CallSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallSnapshot")
            .field("call_id", &self.call_id)
            .field("state", &self.state)
            .field("video_state", &self.video_state)
            .finish()
    }
}

impl fmt::Display for CallSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CallSnapshot {{call_id={}, state={}, video_state={}}}",
            self.call_id, self.state, self.video_state
        )
    }
}

pub fn is_video_call(snapshot: Option<&CallSnapshot>) -> bool {
    snapshot.map_or(false, CallSnapshot::is_video_call)
}

pub fn can_pause(snapshot: Option<&CallSnapshot>) -> bool {
    snapshot.map_or(false, CallSnapshot::can_pause)
}

pub fn is_incoming(snapshot: Option<&CallSnapshot>) -> bool {
    snapshot.map_or(false, CallSnapshot::is_incoming)
}

pub fn is_dialing(snapshot: Option<&CallSnapshot>) -> bool {
    snapshot.map_or(false, CallSnapshot::is_dialing)
}

/// True when both are absent, or both present and naming the same call
pub fn same_call(candidate: Option<&CallSnapshot>, snapshot: Option<&CallSnapshot>) -> bool {
    match (candidate, snapshot) {
        (None, None) => true,
        (Some(candidate), Some(snapshot)) => candidate.call_id == snapshot.call_id,
        _ => false,
    }
}
