//! Fakes shared by the integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rvoip_video_pause_core::traits::same_observer;
use rvoip_video_pause_core::{
    CallCapability, CallHandle, CallId, CallPhaseObserver, CallSource, CallState, InCallHost,
    InCallPhase, IncomingCallObserver, UiHost, UiVisibilityObserver, VideoCallTransport,
    VideoProfile, VideoState,
};

/// Records every session-modification request it receives
#[derive(Default)]
pub struct FakeVideoTransport {
    requests: Mutex<Vec<VideoProfile>>,
}

impl FakeVideoTransport {
    pub fn requests(&self) -> Vec<VideoProfile> {
        self.requests.lock().clone()
    }
}

impl VideoCallTransport for FakeVideoTransport {
    fn send_session_modify_request(&self, profile: VideoProfile) {
        self.requests.lock().push(profile);
    }
}

pub struct FakeCall {
    id: CallId,
    state: Mutex<CallState>,
    video_state: Mutex<VideoState>,
    can_pause_video: bool,
    transport: Option<Arc<FakeVideoTransport>>,
}

impl FakeCall {
    /// Call that supports video pausing and has a transport
    pub fn new(id: &str, state: CallState, video_state: VideoState) -> Arc<Self> {
        Arc::new(Self {
            id: CallId::from(id),
            state: Mutex::new(state),
            video_state: Mutex::new(video_state),
            can_pause_video: true,
            transport: Some(Arc::new(FakeVideoTransport::default())),
        })
    }

    pub fn active_video(id: &str) -> Arc<Self> {
        Self::new(id, CallState::Active, VideoState::BIDIRECTIONAL)
    }

    pub fn without_pause_capability(id: &str, state: CallState, video_state: VideoState) -> Arc<Self> {
        Arc::new(Self {
            id: CallId::from(id),
            state: Mutex::new(state),
            video_state: Mutex::new(video_state),
            can_pause_video: false,
            transport: Some(Arc::new(FakeVideoTransport::default())),
        })
    }

    pub fn without_transport(id: &str, state: CallState, video_state: VideoState) -> Arc<Self> {
        Arc::new(Self {
            id: CallId::from(id),
            state: Mutex::new(state),
            video_state: Mutex::new(video_state),
            can_pause_video: true,
            transport: None,
        })
    }

    pub fn set_state(&self, state: CallState) {
        *self.state.lock() = state;
    }

    pub fn set_video_state(&self, video_state: VideoState) {
        *self.video_state.lock() = video_state;
    }

    pub fn requests(&self) -> Vec<VideoProfile> {
        self.transport.as_ref().map(|t| t.requests()).unwrap_or_default()
    }
}

impl CallHandle for FakeCall {
    fn id(&self) -> CallId {
        self.id.clone()
    }

    fn state(&self) -> CallState {
        *self.state.lock()
    }

    fn video_state(&self) -> VideoState {
        *self.video_state.lock()
    }

    fn can(&self, capability: CallCapability) -> bool {
        match capability {
            CallCapability::CanPauseVideo => self.can_pause_video,
            _ => false,
        }
    }

    fn video_call(&self) -> Option<Arc<dyn VideoCallTransport>> {
        self.transport
            .clone()
            .map(|t| t as Arc<dyn VideoCallTransport>)
    }
}

#[derive(Default)]
struct CallSlots {
    incoming: Option<Arc<FakeCall>>,
    waiting_for_account: Option<Arc<FakeCall>>,
    pending_outgoing: Option<Arc<FakeCall>>,
    outgoing: Option<Arc<FakeCall>>,
    active: Option<Arc<FakeCall>>,
}

/// In-memory host: call list, phase, UI and observer registries
pub struct FakeHost {
    slots: Mutex<CallSlots>,
    phase: Mutex<InCallPhase>,
    foreground_requests: Mutex<Vec<bool>>,
    /// When set, bringing the UI forward immediately reports it as showing
    show_ui_on_foreground: AtomicBool,
    phase_observers: Mutex<Vec<Arc<dyn CallPhaseObserver>>>,
    incoming_observers: Mutex<Vec<Arc<dyn IncomingCallObserver>>>,
    ui_observers: Mutex<Vec<Arc<dyn UiVisibilityObserver>>>,
}

fn as_handle(call: &Option<Arc<FakeCall>>) -> Option<Arc<dyn CallHandle>> {
    call.clone().map(|c| c as Arc<dyn CallHandle>)
}

impl FakeHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            slots: Mutex::new(CallSlots::default()),
            phase: Mutex::new(InCallPhase::NoCalls),
            foreground_requests: Mutex::new(Vec::new()),
            show_ui_on_foreground: AtomicBool::new(false),
            phase_observers: Mutex::new(Vec::new()),
            incoming_observers: Mutex::new(Vec::new()),
            ui_observers: Mutex::new(Vec::new()),
        })
    }

    pub fn set_active(&self, call: Option<Arc<FakeCall>>) {
        self.slots.lock().active = call;
    }

    pub fn set_incoming(&self, call: Option<Arc<FakeCall>>) {
        self.slots.lock().incoming = call;
    }

    pub fn set_outgoing(&self, call: Option<Arc<FakeCall>>) {
        self.slots.lock().outgoing = call;
    }

    pub fn set_pending_outgoing(&self, call: Option<Arc<FakeCall>>) {
        self.slots.lock().pending_outgoing = call;
    }

    pub fn set_waiting_for_account(&self, call: Option<Arc<FakeCall>>) {
        self.slots.lock().waiting_for_account = call;
    }

    pub fn set_show_ui_on_foreground(&self, enabled: bool) {
        self.show_ui_on_foreground.store(enabled, Ordering::SeqCst);
    }

    pub fn foreground_requests(&self) -> Vec<bool> {
        self.foreground_requests.lock().clone()
    }

    pub fn observer_counts(&self) -> (usize, usize, usize) {
        (
            self.phase_observers.lock().len(),
            self.incoming_observers.lock().len(),
            self.ui_observers.lock().len(),
        )
    }

    /// Move to `new_phase` and notify phase observers
    pub fn change_phase(&self, new_phase: InCallPhase) {
        let old_phase = std::mem::replace(&mut *self.phase.lock(), new_phase);
        let observers = self.phase_observers.lock().clone();
        for observer in observers {
            observer.on_call_phase_changed(old_phase, new_phase, self);
        }
    }

    /// A new call starts ringing: incoming observers first, then the phase change
    pub fn ring(&self, call: Arc<FakeCall>) {
        self.set_incoming(Some(call.clone()));
        let old_phase = *self.phase.lock();
        let observers = self.incoming_observers.lock().clone();
        for observer in observers {
            observer.on_incoming_call(old_phase, InCallPhase::Incoming, call.clone());
        }
        self.change_phase(InCallPhase::Incoming);
    }

    pub fn notify_ui_showing(&self, showing: bool) {
        let observers = self.ui_observers.lock().clone();
        for observer in observers {
            observer.on_ui_showing(showing);
        }
    }
}

impl CallSource for FakeHost {
    fn incoming_call(&self) -> Option<Arc<dyn CallHandle>> {
        as_handle(&self.slots.lock().incoming)
    }

    fn waiting_for_account_call(&self) -> Option<Arc<dyn CallHandle>> {
        as_handle(&self.slots.lock().waiting_for_account)
    }

    fn pending_outgoing_call(&self) -> Option<Arc<dyn CallHandle>> {
        as_handle(&self.slots.lock().pending_outgoing)
    }

    fn outgoing_call(&self) -> Option<Arc<dyn CallHandle>> {
        as_handle(&self.slots.lock().outgoing)
    }

    fn active_call(&self) -> Option<Arc<dyn CallHandle>> {
        as_handle(&self.slots.lock().active)
    }

    fn current_phase(&self) -> InCallPhase {
        *self.phase.lock()
    }
}

impl UiHost for FakeHost {
    fn bring_to_foreground(&self, show_dialpad: bool) {
        self.foreground_requests.lock().push(show_dialpad);
        if self.show_ui_on_foreground.load(Ordering::SeqCst) {
            self.notify_ui_showing(true);
        }
    }
}

impl InCallHost for FakeHost {
    fn add_call_phase_observer(&self, observer: Arc<dyn CallPhaseObserver>) {
        self.phase_observers.lock().push(observer);
    }

    fn remove_call_phase_observer(&self, observer: &Arc<dyn CallPhaseObserver>) {
        self.phase_observers.lock().retain(|o| !same_observer(o, observer));
    }

    fn add_incoming_call_observer(&self, observer: Arc<dyn IncomingCallObserver>) {
        self.incoming_observers.lock().push(observer);
    }

    fn remove_incoming_call_observer(&self, observer: &Arc<dyn IncomingCallObserver>) {
        self.incoming_observers.lock().retain(|o| !same_observer(o, observer));
    }

    fn add_ui_visibility_observer(&self, observer: Arc<dyn UiVisibilityObserver>) {
        self.ui_observers.lock().push(observer);
    }

    fn remove_ui_visibility_observer(&self, observer: &Arc<dyn UiVisibilityObserver>) {
        self.ui_observers.lock().retain(|o| !same_observer(o, observer));
    }
}
