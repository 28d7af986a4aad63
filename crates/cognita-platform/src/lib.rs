pub mod chat;

#[cfg(test)]
mod tests;

pub use chat::HttpChatService;
