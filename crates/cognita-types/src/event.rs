use serde::{Deserialize, Serialize};

/// Events emitted by the session controller.
/// The UI drains these to know when to re-read the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A submission was accepted and the user message appended
    TurnStarted { turn_id: u64 },

    /// The service replied and the assistant message was appended
    TurnCompleted { turn_id: u64 },

    /// The service call failed; the fallback message was appended.
    /// `error` is diagnostic detail and never reaches the transcript.
    TurnFailed { turn_id: u64, error: String },
}
