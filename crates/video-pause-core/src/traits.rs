//! Collaborator contracts
//!
//! The controller never owns calls, transports or UI. It talks to the host
//! application through these traits, and the host delivers notifications to it
//! through the three observer traits.

use std::sync::Arc;

use crate::profile::VideoProfile;
use crate::types::{CallCapability, CallId, CallState, InCallPhase, VideoState};

/// A live call owned by the host application
pub trait CallHandle: Send + Sync {
    fn id(&self) -> CallId;

    /// Current lifecycle state (live, not cached)
    fn state(&self) -> CallState;

    /// Current video state bitmask (live, not cached)
    fn video_state(&self) -> VideoState;

    /// Whether the call advertises the given capability
    fn can(&self, capability: CallCapability) -> bool;

    /// Video transport of the call, if one has been set up
    fn video_call(&self) -> Option<Arc<dyn VideoCallTransport>>;
}

/// Video transport associated with a call
pub trait VideoCallTransport: Send + Sync {
    /// Ask the remote side to switch to the given video profile
    fn send_session_modify_request(&self, profile: VideoProfile);
}

/// Read access to the host's call list
pub trait CallSource: Send + Sync {
    fn incoming_call(&self) -> Option<Arc<dyn CallHandle>>;

    fn waiting_for_account_call(&self) -> Option<Arc<dyn CallHandle>>;

    fn pending_outgoing_call(&self) -> Option<Arc<dyn CallHandle>>;

    fn outgoing_call(&self) -> Option<Arc<dyn CallHandle>>;

    fn active_call(&self) -> Option<Arc<dyn CallHandle>>;

    /// Phase the host is currently in
    fn current_phase(&self) -> InCallPhase;
}

/// The visible in-call surface
pub trait UiHost: Send + Sync {
    /// Bring the in-call UI to the foreground, optionally with the dialpad shown
    fn bring_to_foreground(&self, show_dialpad: bool);
}

/// Notified when the host moves between in-call phases
pub trait CallPhaseObserver: Send + Sync {
    fn on_call_phase_changed(
        &self,
        old_phase: InCallPhase,
        new_phase: InCallPhase,
        calls: &dyn CallSource,
    );
}

/// Notified when a new call starts ringing
pub trait IncomingCallObserver: Send + Sync {
    fn on_incoming_call(
        &self,
        old_phase: InCallPhase,
        new_phase: InCallPhase,
        call: Arc<dyn CallHandle>,
    );
}

/// Notified when the in-call UI is shown or hidden
pub trait UiVisibilityObserver: Send + Sync {
    fn on_ui_showing(&self, showing: bool);
}

/// Everything the controller needs from the host application
///
/// Observers are removed by pointer identity, so hosts must pass back the same
/// `Arc` they were given.
pub trait InCallHost: CallSource + UiHost {
    fn add_call_phase_observer(&self, observer: Arc<dyn CallPhaseObserver>);

    fn remove_call_phase_observer(&self, observer: &Arc<dyn CallPhaseObserver>);

    fn add_incoming_call_observer(&self, observer: Arc<dyn IncomingCallObserver>);

    fn remove_incoming_call_observer(&self, observer: &Arc<dyn IncomingCallObserver>);

    fn add_ui_visibility_observer(&self, observer: Arc<dyn UiVisibilityObserver>);

    fn remove_ui_visibility_observer(&self, observer: &Arc<dyn UiVisibilityObserver>);
}

/// Compare two trait objects by the address of the value they point at
pub fn same_observer<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}
