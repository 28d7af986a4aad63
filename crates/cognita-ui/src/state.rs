//! UI-level state that drives rendering.
//! This is a read-only projection of the session controller,
//! refreshed each frame from its view and the EventBus.

use cognita_core::{RequestState, SessionView};
use cognita_types::event::SessionEvent;
use cognita_types::message::Message;

/// State visible to UI panels
pub struct UiState {
    /// Transcript as of the last sync
    pub messages: Vec<Message>,
    /// Request state as of the last sync
    pub request_state: RequestState,
    /// Input field content; owned by the UI, never by the controller
    pub input_text: String,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            request_state: RequestState::Idle,
            input_text: String::new(),
            status_text: "Online".to_string(),
        }
    }

    /// Replace the projection with a fresh view of the session.
    pub fn sync(&mut self, view: SessionView) {
        self.messages = view.messages;
        self.request_state = view.state;
    }

    /// Update the status line from session events
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::TurnStarted { .. } => {
                    self.status_text = "Thinking...".to_string();
                }
                SessionEvent::TurnCompleted { .. } => {
                    self.status_text = "Online".to_string();
                }
                SessionEvent::TurnFailed { turn_id, error } => {
                    log::warn!("Turn {} failed: {}", turn_id, error);
                    self.status_text = "Online".to_string();
                }
            }
        }
    }

    /// The controller accepted the input; clear the field.
    pub fn on_submit_accepted(&mut self) {
        self.input_text.clear();
    }

    pub fn is_busy(&self) -> bool {
        self.request_state == RequestState::Pending
    }

    /// Whether the Send button is enabled
    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_busy()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
