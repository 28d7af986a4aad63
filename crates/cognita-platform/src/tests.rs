#[cfg(test)]
mod tests {
    use crate::chat::http::{race_timeout, HttpChatService};
    use cognita_core::ports::ChatPort;
    use cognita_types::config::ClientConfig;
    use cognita_types::ChatError;
    use futures::executor::block_on;
    use futures::future;

    // ─── HttpChatService Tests ───────────────────────────────

    #[test]
    fn test_http_service_endpoint_from_default_config() {
        let service = HttpChatService::new(&ClientConfig::default());
        assert_eq!(service.endpoint(), "http://localhost:5000/api/chat");
    }

    #[test]
    fn test_http_service_endpoint_from_custom_config() {
        let config = ClientConfig {
            api_base: "https://cognita.example.org".to_string(),
            request_timeout_ms: None,
        };
        let service = HttpChatService::new(&config);
        assert_eq!(service.endpoint(), "https://cognita.example.org/api/chat");
    }

    // ─── race_timeout Tests ──────────────────────────────────

    #[test]
    fn test_race_timeout_reply_wins() {
        let reply = future::ready(Ok("4".to_string()));
        let result = block_on(race_timeout(reply, future::pending::<()>(), 1000));
        assert_eq!(result.unwrap(), "4");
    }

    #[test]
    fn test_race_timeout_error_passes_through() {
        let reply = future::ready(Err(ChatError::Network("Failed to fetch".to_string())));
        let result = block_on(race_timeout(reply, future::pending::<()>(), 1000));
        assert_eq!(result.unwrap_err(), ChatError::Network("Failed to fetch".to_string()));
    }

    #[test]
    fn test_race_timeout_timer_wins() {
        let never = future::pending::<cognita_types::Result<String>>();
        let result = block_on(race_timeout(never, future::ready(()), 250));
        assert_eq!(result.unwrap_err(), ChatError::Timeout(250));
    }
}
