//! Adapters implementing the outbound ports.
//!
//! `console` provides stdout-backed implementations for the demo binary;
//! `recording` provides in-memory test doubles that capture every call.

pub mod console;
pub mod recording;
