//! Port traits — the hexagonal architecture boundary.
//!
//! The chat service is defined here in `cognita-core` (pure Rust).
//! The HTTP implementation lives in `cognita-platform`.

use async_trait::async_trait;
use cognita_types::Result;

/// Request sent to the chat service: the trimmed user text, nothing else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Successful reply from the chat service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
}

#[async_trait(?Send)]
pub trait ChatPort {
    /// One request, one reply. Every failure cause maps to `Err`.
    async fn send(&self, req: ChatRequest) -> Result<ChatReply>;

    /// Where requests go (for logging/debug)
    fn endpoint(&self) -> &str;
}
