//! Event pump for hosts that notify from several threads
//!
//! The controller is already safe to call from any thread, but notifications
//! racing each other can reach it in a different order than they happened.
//! Hosts that care push events through a [`VideoPauseEventSender`] instead;
//! a single tokio task applies them to the controller one at a time, in the
//! order they were sent.
//!
//! ```rust,no_run
//! use rvoip_video_pause_core::{events, VideoPauseController};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = Arc::new(VideoPauseController::default());
//! let (sender, pump) = events::spawn_event_pump(controller);
//!
//! sender.ui_showing(false)?;
//! drop(sender);
//! pump.await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::controller::VideoPauseController;
use crate::error::{Result, VideoPauseError};
use crate::traits::{CallHandle, CallPhaseObserver, CallSource, IncomingCallObserver, UiVisibilityObserver};
use crate::types::InCallPhase;

/// Notification queued for the controller
#[derive(Clone)]
pub enum VideoPauseEvent {
    CallPhaseChanged {
        old_phase: InCallPhase,
        new_phase: InCallPhase,
        calls: Arc<dyn CallSource>,
    },
    IncomingCall {
        old_phase: InCallPhase,
        new_phase: InCallPhase,
        call: Arc<dyn CallHandle>,
    },
    UiShowing(bool),
}

impl fmt::Debug for VideoPauseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoPauseEvent::CallPhaseChanged { old_phase, new_phase, .. } => f
                .debug_struct("CallPhaseChanged")
                .field("old_phase", old_phase)
                .field("new_phase", new_phase)
                .finish(),
            VideoPauseEvent::IncomingCall { old_phase, new_phase, call } => f
                .debug_struct("IncomingCall")
                .field("old_phase", old_phase)
                .field("new_phase", new_phase)
                .field("call_id", &call.id())
                .finish(),
            VideoPauseEvent::UiShowing(showing) => f.debug_tuple("UiShowing").field(showing).finish(),
        }
    }
}

impl VideoPauseEvent {
    /// Deliver the event to the controller
    pub fn dispatch(self, controller: &VideoPauseController) {
        match self {
            VideoPauseEvent::CallPhaseChanged { old_phase, new_phase, calls } => {
                controller.on_call_phase_changed(old_phase, new_phase, calls.as_ref())
            }
            VideoPauseEvent::IncomingCall { old_phase, new_phase, call } => {
                controller.on_incoming_call(old_phase, new_phase, call)
            }
            VideoPauseEvent::UiShowing(showing) => controller.on_ui_showing(showing),
        }
    }
}

/// Cloneable handle for queueing events to the pump
#[derive(Debug, Clone)]
pub struct VideoPauseEventSender {
    tx: mpsc::UnboundedSender<VideoPauseEvent>,
}

impl VideoPauseEventSender {
    pub fn send(&self, event: VideoPauseEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| VideoPauseError::EventPumpClosed)
    }

    pub fn call_phase_changed(
        &self,
        old_phase: InCallPhase,
        new_phase: InCallPhase,
        calls: Arc<dyn CallSource>,
    ) -> Result<()> {
        self.send(VideoPauseEvent::CallPhaseChanged { old_phase, new_phase, calls })
    }

    pub fn incoming_call(
        &self,
        old_phase: InCallPhase,
        new_phase: InCallPhase,
        call: Arc<dyn CallHandle>,
    ) -> Result<()> {
        self.send(VideoPauseEvent::IncomingCall { old_phase, new_phase, call })
    }

    pub fn ui_showing(&self, showing: bool) -> Result<()> {
        self.send(VideoPauseEvent::UiShowing(showing))
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Spawn a task that feeds queued events to `controller` in order.
///
/// The task ends once every sender has been dropped. Must be called from
/// within a tokio runtime.
pub fn spawn_event_pump(
    controller: Arc<VideoPauseController>,
) -> (VideoPauseEventSender, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<VideoPauseEvent>();

    let handle = tokio::spawn(async move {
        info!("video pause event pump started");
        while let Some(event) = rx.recv().await {
            debug!("dispatching {:?}", event);
            event.dispatch(&controller);
        }
        info!("video pause event pump stopped");
    });

    (VideoPauseEventSender { tx }, handle)
}
