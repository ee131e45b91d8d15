//! Ports (interfaces) for the application layer

pub mod conversation_logger;
pub mod llm_gateway;
