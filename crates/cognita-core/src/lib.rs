pub mod event_bus;
pub mod gate;
pub mod ports;
pub mod session;
pub mod transcript;


pub use event_bus::EventBus;
pub use gate::RequestState;
pub use session::{PendingTurn, Rejection, SessionController, SessionView, TurnOutcome, FALLBACK_REPLY};
pub use transcript::TranscriptStore;
