//! Video pause controller
//!
//! [`VideoPauseController`] generates video pause/resume requests when the
//! in-call UI goes to the background and comes back, and when the primary
//! call changes underneath it (call waiting, rejected incoming call, ended
//! dialing call).
//!
//! The controller is created by the composition root and attached to an
//! [`InCallHost`] for the duration of a call session:
//!
//! ```text
//!  InCallHost ──phase changed──▶ ┌──────────────────────┐
//!             ──incoming call──▶ │ VideoPauseController │──pause/resume──▶ VideoCallTransport
//!  UI        ──showing/hidden──▶ │  (PauseResumeState)  │──foreground────▶ UiHost
//!                                └──────────────────────┘
//! ```
//!
//! All state sits behind one mutex. Decisions are made under the lock and the
//! resulting command runs after it is released, so collaborators may call
//! back into the controller from inside a command.

pub mod decision;

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::VideoPauseConfig;
use crate::error::{Result, VideoPauseError};
use crate::profile::{DefaultVideoProfileBuilder, VideoProfileBuilder};
use crate::snapshot::CallSnapshot;
use crate::traits::{
    CallHandle, CallPhaseObserver, CallSource, InCallHost, IncomingCallObserver,
    UiVisibilityObserver,
};
use crate::types::{CallCapability, InCallPhase};

pub use decision::{select_primary_candidate, PauseResumeState, VideoPauseCommand};

struct ControllerInner {
    state: PauseResumeState,
    /// Present while attached
    host: Option<Arc<dyn InCallHost>>,
}

/// Decides when to pause or resume outgoing video and when to bring the
/// in-call UI back to the foreground
pub struct VideoPauseController {
    inner: Mutex<ControllerInner>,
    profile_builder: Arc<dyn VideoProfileBuilder>,
}

impl VideoPauseController {
    pub fn new(config: VideoPauseConfig) -> Self {
        Self::with_profile_builder(config, Arc::new(DefaultVideoProfileBuilder))
    }

    pub fn with_profile_builder(
        config: VideoPauseConfig,
        profile_builder: Arc<dyn VideoProfileBuilder>,
    ) -> Self {
        Self {
            inner: Mutex::new(ControllerInner {
                state: PauseResumeState::new(config),
                host: None,
            }),
            profile_builder,
        }
    }

    /// Register with the host's three notification sources.
    ///
    /// Fails with [`VideoPauseError::AlreadyAttached`] if already set up.
    pub fn set_up(self: &Arc<Self>, host: Arc<dyn InCallHost>) -> Result<()> {
        info!("setUp");
        {
            let mut inner = self.inner.lock();
            if inner.host.is_some() {
                return Err(VideoPauseError::AlreadyAttached);
            }
            inner.host = Some(host.clone());
        }

        host.add_call_phase_observer(self.clone());
        host.add_incoming_call_observer(self.clone());
        host.add_ui_visibility_observer(self.clone());
        Ok(())
    }

    /// Unregister from the host and clear all state. No-op when detached.
    pub fn tear_down(self: &Arc<Self>) {
        info!("tearDown...");
        let host = {
            let mut inner = self.inner.lock();
            inner.state.reset();
            inner.host.take()
        };

        let Some(host) = host else {
            warn!("tearDown called on a controller that is not attached");
            return;
        };

        let ui_observer: Arc<dyn UiVisibilityObserver> = self.clone();
        let phase_observer: Arc<dyn CallPhaseObserver> = self.clone();
        let incoming_observer: Arc<dyn IncomingCallObserver> = self.clone();
        host.remove_ui_visibility_observer(&ui_observer);
        host.remove_call_phase_observer(&phase_observer);
        host.remove_incoming_call_observer(&incoming_observer);
    }

    /// Set up and return a guard that tears down when dropped
    pub fn attach(self: &Arc<Self>, host: Arc<dyn InCallHost>) -> Result<AttachedController> {
        self.set_up(host)?;
        Ok(AttachedController {
            controller: self.clone(),
        })
    }

    pub fn is_attached(&self) -> bool {
        self.inner.lock().host.is_some()
    }

    pub fn primary_snapshot(&self) -> Option<CallSnapshot> {
        self.inner.lock().state.primary().cloned()
    }

    pub fn is_ui_in_background(&self) -> bool {
        self.inner.lock().state.is_ui_in_background()
    }

    pub fn config(&self) -> VideoPauseConfig {
        self.inner.lock().state.config().clone()
    }

    fn attached_host(&self) -> Option<Arc<dyn InCallHost>> {
        self.inner.lock().host.clone()
    }

    /// Apply `decide` to the state if attached, returning the command and the
    /// host it should run against
    fn decide<F>(&self, decide: F) -> Option<(VideoPauseCommand, Arc<dyn InCallHost>)>
    where
        F: FnOnce(&mut PauseResumeState) -> Option<VideoPauseCommand>,
    {
        let mut inner = self.inner.lock();
        let host = inner.host.clone()?;
        decide(&mut inner.state).map(|command| (command, host))
    }

    fn execute(&self, command: VideoPauseCommand, host: &Arc<dyn InCallHost>) {
        match command {
            VideoPauseCommand::Pause(call) => self.send_request(call.as_ref(), false),
            VideoPauseCommand::Resume(call) => self.send_request(call.as_ref(), true),
            VideoPauseCommand::BringToForeground => {
                info!("Bringing UI to foreground");
                host.bring_to_foreground(false);
            }
        }
    }

    fn send_request(&self, call: &dyn CallHandle, resume: bool) {
        if !call.can(CallCapability::CanPauseVideo) {
            debug!("call {} does not support pausing video", call.id());
            return;
        }

        let Some(video_call) = call.video_call() else {
            warn!("call {} has no video transport, dropping request", call.id());
            return;
        };

        let profile = if resume {
            info!("sending resume request, call={}", call.id());
            self.profile_builder.unpause_profile(call)
        } else {
            info!("sending pause request, call={}", call.id());
            self.profile_builder.pause_profile(call)
        };
        video_call.send_session_modify_request(profile);
    }
}

impl Default for VideoPauseController {
    fn default() -> Self {
        Self::new(VideoPauseConfig::default())
    }
}

impl CallPhaseObserver for VideoPauseController {
    fn on_call_phase_changed(
        &self,
        old_phase: InCallPhase,
        new_phase: InCallPhase,
        calls: &dyn CallSource,
    ) {
        debug!("on_call_phase_changed, old_phase={} new_phase={}", old_phase, new_phase);
        if !self.is_attached() {
            debug!("on_call_phase_changed, not attached");
            return;
        }

        let candidate = select_primary_candidate(new_phase, calls);
        if let Some((command, host)) = self.decide(|state| state.on_call_phase_changed(candidate)) {
            self.execute(command, &host);
        }
    }
}

impl IncomingCallObserver for VideoPauseController {
    fn on_incoming_call(
        &self,
        old_phase: InCallPhase,
        new_phase: InCallPhase,
        call: Arc<dyn CallHandle>,
    ) {
        debug!(
            "on_incoming_call, old_phase={} new_phase={} call={}",
            old_phase,
            new_phase,
            call.id()
        );
        if let Some((command, host)) = self.decide(|state| state.on_incoming_call(call)) {
            self.execute(command, &host);
        }
    }
}

impl UiVisibilityObserver for VideoPauseController {
    fn on_ui_showing(&self, showing: bool) {
        debug!("on_ui_showing, showing={}", showing);
        // Only pause/resume while in the InCall phase.
        let Some(host) = self.attached_host() else {
            return;
        };
        let in_call = host.current_phase() == InCallPhase::InCall;

        if let Some((command, host)) = self.decide(|state| state.on_ui_showing(showing, in_call)) {
            self.execute(command, &host);
        }
    }
}

/// Attachment of a controller to a host; tears down on drop
pub struct AttachedController {
    controller: Arc<VideoPauseController>,
}

impl AttachedController {
    pub fn controller(&self) -> &Arc<VideoPauseController> {
        &self.controller
    }

    /// Tear down now instead of waiting for drop
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for AttachedController {
    fn drop(&mut self) {
        if self.controller.is_attached() {
            self.controller.tear_down();
        }
    }
}

impl std::fmt::Debug for VideoPauseController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("VideoPauseController")
            .field("attached", &inner.host.is_some())
            .field("state", &inner.state)
            .finish()
    }
}
