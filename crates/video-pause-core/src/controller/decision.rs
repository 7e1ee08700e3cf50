//! Pause/resume decision state machine
//!
//! [`PauseResumeState`] holds the primary call snapshot and the UI background
//! flag. Each handler updates that state and returns at most one
//! [`VideoPauseCommand`]; it never talks to collaborators itself, so the
//! controller can run the command after releasing its lock.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::VideoPauseConfig;
use crate::snapshot::{self, CallSnapshot};
use crate::traits::{CallHandle, CallSource};
use crate::types::InCallPhase;

/// Side effect requested by the state machine
#[derive(Clone)]
pub enum VideoPauseCommand {
    /// Send a pause request for the call's outgoing video
    Pause(Arc<dyn CallHandle>),
    /// Send a resume request for the call's outgoing video
    Resume(Arc<dyn CallHandle>),
    /// Bring the in-call UI to the foreground
    BringToForeground,
}

impl fmt::Debug for VideoPauseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoPauseCommand::Pause(call) => write!(f, "Pause({})", call.id()),
            VideoPauseCommand::Resume(call) => write!(f, "Resume({})", call.id()),
            VideoPauseCommand::BringToForeground => write!(f, "BringToForeground"),
        }
    }
}

/// Pick the call that should be primary for the given phase
pub fn select_primary_candidate(
    new_phase: InCallPhase,
    calls: &dyn CallSource,
) -> Option<Arc<dyn CallHandle>> {
    match new_phase {
        InCallPhase::Incoming => calls.incoming_call(),
        InCallPhase::WaitingForAccount => calls.waiting_for_account_call(),
        InCallPhase::PendingOutgoing => calls.pending_outgoing_call(),
        InCallPhase::Outgoing => calls.outgoing_call(),
        _ => calls.active_call(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct PauseResumeState {
    primary: Option<CallSnapshot>,
    ui_in_background: bool,
    config: VideoPauseConfig,
}

impl PauseResumeState {
    pub fn new(config: VideoPauseConfig) -> Self {
        Self {
            primary: None,
            ui_in_background: false,
            config,
        }
    }

    pub fn primary(&self) -> Option<&CallSnapshot> {
        self.primary.as_ref()
    }

    pub fn is_ui_in_background(&self) -> bool {
        self.ui_in_background
    }

    pub fn config(&self) -> &VideoPauseConfig {
        &self.config
    }

    /// Forget the primary call and assume the UI is visible
    pub fn reset(&mut self) {
        self.primary = None;
        self.ui_in_background = false;
    }

    /// The host moved to `new_phase`; `candidate` is the call that phase puts
    /// in front of the user
    pub fn on_call_phase_changed(
        &mut self,
        candidate: Option<Arc<dyn CallHandle>>,
    ) -> Option<VideoPauseCommand> {
        let candidate = candidate.map(CallSnapshot::capture);
        let has_primary_changed = !snapshot::same_call(candidate.as_ref(), self.primary.as_ref());
        let candidate_can_pause = snapshot::can_pause(candidate.as_ref());

        debug!(
            "on_call_phase_changed, has_primary_changed={}, can_pause={}, in_background={}",
            has_primary_changed, candidate_can_pause, self.ui_in_background
        );

        if has_primary_changed {
            return self.on_primary_call_changed(candidate);
        }

        let primary = self.primary.as_ref();
        // Outgoing call became active, or a voice call turned into a video call,
        // while the UI was hidden.
        let became_active = snapshot::is_dialing(primary) || !snapshot::is_video_call(primary);
        let command = if became_active && candidate_can_pause && self.ui_in_background {
            if self.config.bring_to_foreground_on_activation {
                Some(VideoPauseCommand::BringToForeground)
            } else {
                debug!("bring to foreground disabled by configuration");
                None
            }
        } else {
            None
        };

        self.primary = candidate;
        command
    }

    /// A new call started ringing
    pub fn on_incoming_call(&mut self, call: Arc<dyn CallHandle>) -> Option<VideoPauseCommand> {
        let candidate = CallSnapshot::capture(call);
        if snapshot::same_call(Some(&candidate), self.primary.as_ref()) {
            debug!("on_incoming_call, {} is already primary", candidate.call_id());
            return None;
        }
        self.on_primary_call_changed(Some(candidate))
    }

    /// The primary call is being replaced by `candidate`.
    ///
    /// # Panics
    ///
    /// Panics if `candidate` is the current primary call.
    fn on_primary_call_changed(
        &mut self,
        candidate: Option<CallSnapshot>,
    ) -> Option<VideoPauseCommand> {
        assert!(
            !snapshot::same_call(candidate.as_ref(), self.primary.as_ref()),
            "primary call change requested for the call that is already primary"
        );

        debug!(
            "on_primary_call_changed, new={:?}, old={:?}, in_background={}",
            candidate, self.primary, self.ui_in_background
        );

        let previous = self.primary.take();
        let candidate_can_pause = snapshot::can_pause(candidate.as_ref());
        let interrupted = snapshot::is_incoming(previous.as_ref()) || snapshot::is_dialing(previous.as_ref());

        let command = if interrupted && candidate_can_pause && !self.ui_in_background {
            // Incoming call rejected or dialing call ended while the UI is visible.
            match &candidate {
                Some(candidate) if self.config.resume_after_interruption => {
                    Some(VideoPauseCommand::Resume(candidate.call().clone()))
                }
                _ => None,
            }
        } else if snapshot::is_incoming(candidate.as_ref()) && snapshot::can_pause(previous.as_ref()) {
            // A new call is ringing over an active video call.
            match &previous {
                Some(previous) if self.config.pause_on_incoming => {
                    Some(VideoPauseCommand::Pause(previous.call().clone()))
                }
                _ => None,
            }
        } else {
            None
        };

        self.primary = candidate;
        command
    }

    /// The UI was shown or hidden. `in_call` is whether the host is in the
    /// `InCall` phase right now.
    pub fn on_ui_showing(&mut self, showing: bool, in_call: bool) -> Option<VideoPauseCommand> {
        if showing {
            self.on_resume(in_call)
        } else {
            self.on_pause(in_call)
        }
    }

    fn on_resume(&mut self, in_call: bool) -> Option<VideoPauseCommand> {
        if !self.ui_in_background {
            debug!("on_resume, ignoring, already resumed");
            return None;
        }

        self.ui_in_background = false;
        match &self.primary {
            Some(primary) if primary.can_pause() && in_call && self.config.resume_on_foreground => {
                Some(VideoPauseCommand::Resume(primary.call().clone()))
            }
            _ => {
                debug!("on_resume, ignoring");
                None
            }
        }
    }

    fn on_pause(&mut self, in_call: bool) -> Option<VideoPauseCommand> {
        if self.ui_in_background {
            debug!("on_pause, ignoring, already paused");
            return None;
        }

        self.ui_in_background = true;
        match &self.primary {
            Some(primary) if primary.can_pause() && in_call && self.config.pause_on_background => {
                Some(VideoPauseCommand::Pause(primary.call().clone()))
            }
            _ => {
                debug!("on_pause, ignoring");
                None
            }
        }
    }
}
