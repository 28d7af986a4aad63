//! Session controller — owns the transcript and the request gate.
//!
//! A turn is split at its single suspension point:
//! 1. `submit` validates, takes the gate, and appends the user message
//!    synchronously, returning a `PendingTurn`
//! 2. `PendingTurn::resolve` awaits the chat service and appends exactly one
//!    assistant message (the reply, or the fallback on any failure)
//! 3. The gate reopens only after that second append

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use futures::FutureExt;
use cognita_types::{
    ChatError,
    event::SessionEvent,
    message::{Message, MAX_CONTENT_CHARS},
};
use crate::event_bus::EventBus;
use crate::gate::{GatePermit, RequestGate, RequestState};
use crate::ports::{ChatPort, ChatRequest};
use crate::transcript::TranscriptStore;

/// Assistant text substituted for any failed service call.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

/// Why a submission was dropped. None of these touch the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Blank after trimming
    Empty,
    /// Longer than `MAX_CONTENT_CHARS` after trimming
    TooLong { chars: usize },
    /// A request is already in flight
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied,
    Failed(ChatError),
}

/// Transcript and request state read together, for rendering.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub messages: Vec<Message>,
    pub state: RequestState,
}

/// Clone-cheap handle; clones drive the same conversation.
#[derive(Clone)]
pub struct SessionController {
    conversation_id: Rc<str>,
    transcript: TranscriptStore,
    gate: Rc<RequestGate>,
    chat: Rc<dyn ChatPort>,
    event_bus: EventBus,
    turn_counter: Rc<Cell<u64>>,
}

impl SessionController {
    pub fn new(chat: Rc<dyn ChatPort>, event_bus: EventBus) -> Self {
        let conversation_id: Rc<str> = uuid::Uuid::new_v4().to_string().into();
        log::info!(
            "Conversation {} started (chat endpoint: {})",
            conversation_id,
            chat.endpoint()
        );

        Self {
            conversation_id,
            transcript: TranscriptStore::new(),
            gate: Rc::new(RequestGate::new()),
            chat,
            event_bus,
            turn_counter: Rc::new(Cell::new(0)),
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn state(&self) -> RequestState {
        self.gate.state()
    }

    pub fn is_pending(&self) -> bool {
        self.state() == RequestState::Pending
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.transcript.snapshot()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            messages: self.transcript.snapshot(),
            state: self.gate.state(),
        }
    }

    /// Start a turn with `text`.
    ///
    /// On `Ok` the user message is already in the transcript and the state is
    /// `Pending`; the caller must drive the returned turn to completion.
    /// On `Err` nothing changed.
    pub fn submit(&self, text: &str) -> Result<PendingTurn, Rejection> {
        let message = text.trim();
        if message.is_empty() {
            log::debug!("Ignoring blank submission");
            return Err(Rejection::Empty);
        }

        let chars = message.chars().count();
        if chars > MAX_CONTENT_CHARS {
            log::debug!("Ignoring submission of {} chars (limit {})", chars, MAX_CONTENT_CHARS);
            return Err(Rejection::TooLong { chars });
        }

        let Some(permit) = self.gate.try_acquire() else {
            log::debug!("Ignoring submission while a request is pending");
            return Err(Rejection::Busy);
        };

        let turn_id = self.turn_counter.get() + 1;
        self.turn_counter.set(turn_id);

        self.transcript.append(Message::user(message));
        self.event_bus.emit(SessionEvent::TurnStarted { turn_id });
        log::info!("Conversation {} turn {}: request sent", self.conversation_id, turn_id);

        Ok(PendingTurn {
            turn_id,
            message: message.to_string(),
            conversation_id: self.conversation_id.clone(),
            transcript: self.transcript.clone(),
            chat: self.chat.clone(),
            event_bus: self.event_bus.clone(),
            permit: Some(permit),
        })
    }
}

/// An accepted submission awaiting the chat service.
///
/// Dropping it unresolved commits the fallback reply and reopens the gate.
#[must_use = "an unresolved turn commits the fallback reply when dropped"]
pub struct PendingTurn {
    turn_id: u64,
    message: String,
    conversation_id: Rc<str>,
    transcript: TranscriptStore,
    chat: Rc<dyn ChatPort>,
    event_bus: EventBus,
    permit: Option<GatePermit>,
}

impl PendingTurn {
    pub fn turn_id(&self) -> u64 {
        self.turn_id
    }

    /// The trimmed text that was appended and is being sent
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Await the chat service and commit its reply.
    ///
    /// Spawn this via `wasm_bindgen_futures::spawn_local`; it never blocks.
    pub async fn resolve(mut self) -> TurnOutcome {
        let chat = self.chat.clone();
        let request = ChatRequest {
            message: self.message.clone(),
        };

        let result = AssertUnwindSafe(chat.send(request))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(ChatError::Panicked(panic_message(payload.as_ref()))));

        match result {
            Ok(reply) => {
                log::info!(
                    "Conversation {} turn {}: reply received ({} chars)",
                    self.conversation_id,
                    self.turn_id,
                    reply.text.chars().count()
                );
                let turn_id = self.turn_id;
                self.commit(Message::assistant(reply.text), SessionEvent::TurnCompleted { turn_id });
                TurnOutcome::Replied
            }
            Err(e) => {
                self.fail(&e);
                TurnOutcome::Failed(e)
            }
        }
    }

    fn fail(&mut self, error: &ChatError) {
        log::error!(
            "Conversation {} turn {}: {}",
            self.conversation_id,
            self.turn_id,
            error
        );
        let event = SessionEvent::TurnFailed {
            turn_id: self.turn_id,
            error: error.to_string(),
        };
        self.commit(Message::assistant(FALLBACK_REPLY), event);
    }

    fn commit(&mut self, reply: Message, event: SessionEvent) {
        let Some(permit) = self.permit.take() else {
            return;
        };
        self.transcript.append(reply);
        // Pair is complete; only now may the next submission start.
        drop(permit);
        self.event_bus.emit(event);
    }
}

impl fmt::Debug for PendingTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTurn")
            .field("turn_id", &self.turn_id)
            .field("message", &self.message)
            .field("resolved", &self.permit.is_none())
            .finish()
    }
}

impl Drop for PendingTurn {
    fn drop(&mut self) {
        if self.permit.is_some() {
            self.fail(&ChatError::Abandoned);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
