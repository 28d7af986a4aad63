pub mod message;
pub mod event;
pub mod config;
pub mod error;
pub mod wire;


pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
