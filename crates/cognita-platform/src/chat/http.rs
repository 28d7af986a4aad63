//! Chat service adapter over HTTP.
//!
//! POSTs `{"message": ...}` to `{api_base}/api/chat` and reads the
//! `response` field of the JSON reply.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use std::future::Future;
use async_trait::async_trait;
use futures::future::{self, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use cognita_core::ports::*;
use cognita_types::{
    ChatError, Result,
    config::ClientConfig,
    wire::{parse_chat_response, status_error, ChatRequestBody},
};

pub struct HttpChatService {
    url: String,
    timeout_ms: Option<u64>,
}

impl HttpChatService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            url: config.chat_url(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    async fn post(&self, message: &str) -> Result<String> {
        let body = ChatRequestBody {
            message: message.to_string(),
        };

        let response = Request::post(&self.url)
            .json(&body)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response.status(), &text));
        }

        parse_chat_response(&text)
    }
}

#[async_trait(?Send)]
impl ChatPort for HttpChatService {
    async fn send(&self, req: ChatRequest) -> Result<ChatReply> {
        log::debug!("POST {} ({} chars)", self.url, req.message.chars().count());

        let request = self.post(&req.message);
        let text = match self.timeout_ms {
            None => request.await?,
            Some(ms) => {
                let millis = u32::try_from(ms).unwrap_or(u32::MAX);
                race_timeout(request, TimeoutFuture::new(millis), ms).await?
            }
        };

        Ok(ChatReply { text })
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

/// Resolve `request`, or fail with `Timeout(ms)` if `timer` fires first.
pub(crate) async fn race_timeout<F, T>(request: F, timer: T, ms: u64) -> Result<String>
where
    F: Future<Output = Result<String>>,
    T: Future<Output = ()>,
{
    pin_mut!(request, timer);
    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ChatError::Timeout(ms)),
    }
}
