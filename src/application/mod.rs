//! Application layer orchestrating the domain core against the ports.

mod session_service;

pub use session_service::{SessionError, VoiceSessionService};
